//! Catalog persistence, merging and liveness validation.

use crate::catalog::format::{self, CatalogHeader};
use crate::error::{Result, SweeperError};
use crate::project::ProjectPath;
use chrono::Local;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default catalog file name.
pub const CATALOG_FILE_NAME: &str = "laravel_projects.txt";

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Paths that still exist as directories, in input order.
    pub valid: Vec<ProjectPath>,
    /// Number of paths dropped.
    pub removed_count: usize,
}

/// Keep only the paths that currently exist as directories.
pub fn validate(paths: Vec<ProjectPath>) -> Validation {
    let total = paths.len();
    let valid: Vec<ProjectPath> = paths.into_iter().filter(ProjectPath::is_live).collect();
    let removed_count = total - valid.len();

    Validation {
        valid,
        removed_count,
    }
}

/// Set union of both collections, deduplicated and sorted ascending.
pub fn merge(existing: &[ProjectPath], incoming: &[ProjectPath]) -> Vec<ProjectPath> {
    existing
        .iter()
        .chain(incoming)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Owner of the catalog file. The only component that writes it.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, or `None` if the catalog does not exist yet.
    fn read_contents(&self) -> Result<Option<String>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SweeperError::CatalogRead {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Paths currently recorded in the catalog. A missing file reads as empty.
    pub fn read(&self) -> Result<Vec<ProjectPath>> {
        Ok(self
            .read_contents()?
            .map(|contents| format::parse(&contents))
            .unwrap_or_default())
    }

    /// Header metadata of the catalog file, if it exists.
    pub fn header(&self) -> Result<Option<CatalogHeader>> {
        Ok(self
            .read_contents()?
            .map(|contents| format::parse_header(&contents)))
    }

    /// Rewrite the catalog in full with `paths`, sorted and deduplicated.
    ///
    /// The new contents go to a temporary sibling that is then renamed over
    /// the catalog, so readers never observe a half-written file.
    pub fn save(&self, paths: &[ProjectPath], scanned_root: Option<&Path>) -> Result<()> {
        let paths = merge(paths, &[]);
        let contents = format::serialize(&paths, Local::now().naive_local(), scanned_root);

        let write_err = |source| SweeperError::CatalogWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, contents).map_err(write_err)?;
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_err(source));
        }

        tracing::info!(path = %self.path.display(), count = paths.len(), "Catalog saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| CATALOG_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Load the catalog, deduplicate it and drop entries whose directories
    /// are gone.
    ///
    /// The file is rewritten when duplicates or dead entries were dropped, or
    /// created when it did not exist yet. The previously scanned root is kept
    /// in the header.
    pub fn load_and_validate(&self) -> Result<Validation> {
        let contents = self.read_contents()?;
        let exists = contents.is_some();
        let (parsed, header) = match contents {
            Some(contents) => (format::parse(&contents), format::parse_header(&contents)),
            None => (Vec::new(), CatalogHeader::default()),
        };

        let paths = merge(&parsed, &[]);
        let duplicates = parsed.len() - paths.len();
        if duplicates > 0 {
            tracing::info!(duplicates, "Dropping duplicate catalog entries");
        }

        let validation = validate(paths);
        if validation.removed_count > 0 {
            tracing::info!(
                removed = validation.removed_count,
                "Pruning catalog entries that no longer exist"
            );
        }

        if validation.removed_count > 0 || duplicates > 0 || !exists {
            self.save(&validation.valid, header.scanned_root.as_deref())?;
        }

        Ok(validation)
    }

    /// Merge freshly scanned paths into the catalog and persist the result.
    ///
    /// Returns the number of projects in the catalog afterwards.
    pub fn merge_and_save(
        &self,
        new_paths: &[ProjectPath],
        scanned_root: Option<&Path>,
    ) -> Result<usize> {
        let existing = self.read()?;
        let merged = merge(&existing, new_paths);
        tracing::debug!(
            existing = existing.len(),
            incoming = new_paths.len(),
            merged = merged.len(),
            "Merged scan results"
        );

        self.save(&merged, scanned_root)?;
        Ok(merged.len())
    }
}
