//! Executor for removing a project's dependency directory.

use crate::project::ProjectPath;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the dependency directory composer installs into.
pub const DEPENDENCY_DIR: &str = "vendor";

/// Result of cleaning one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The dependency directory was deleted.
    Removed { freed_bytes: u64 },
    /// There was no dependency directory; nothing was touched.
    NotPresent,
    /// Deletion failed.
    Failed { error: String },
}

/// A project paired with what happened to it.
#[derive(Debug, Clone)]
pub struct RemovalResult {
    pub project: ProjectPath,
    pub outcome: RemovalOutcome,
}

/// Options for the clean executor.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// If true, don't actually delete anything.
    pub dry_run: bool,
}

/// Whether `project` currently has a dependency directory.
pub fn has_dependency_dir(project: &Path) -> bool {
    project.join(DEPENDENCY_DIR).is_dir()
}

/// Whether anything named like the dependency directory exists in `project`,
/// including a broken symlink or a stray file. Such entries are still
/// removal targets.
pub fn has_dependency_entry(project: &Path) -> bool {
    fs::symlink_metadata(project.join(DEPENDENCY_DIR)).is_ok()
}

/// Executor for removing dependency directories.
pub struct DependencyCleaner {
    dir_name: &'static str,
    options: CleanOptions,
}

impl DependencyCleaner {
    /// Create a cleaner for the `vendor` directory.
    pub fn new(options: CleanOptions) -> Self {
        Self::with_dir_name(DEPENDENCY_DIR, options)
    }

    /// Create a cleaner for a differently named dependency directory.
    pub fn with_dir_name(dir_name: &'static str, options: CleanOptions) -> Self {
        Self { dir_name, options }
    }

    pub fn dir_name(&self) -> &'static str {
        self.dir_name
    }

    /// Remove the dependency directory of a single project.
    pub fn clean(&self, project: &ProjectPath) -> RemovalOutcome {
        let target = project.as_path().join(self.dir_name);

        let metadata = match fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return RemovalOutcome::NotPresent,
            Err(e) => {
                return RemovalOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        // Only the link goes away, not what it points to
        let size = if metadata.file_type().is_symlink() {
            0
        } else {
            Self::dir_size(&target)
        };

        if self.options.dry_run {
            return RemovalOutcome::Removed { freed_bytes: size };
        }

        match fs::remove_dir_all(&target) {
            Ok(()) => RemovalOutcome::Removed { freed_bytes: size },
            Err(e) => RemovalOutcome::Failed {
                error: e.to_string(),
            },
        }
    }

    fn dir_size(path: &Path) -> u64 {
        WalkDir::new(path)
            .into_iter()
            .flatten()
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.metadata().ok())
            .map(|m| m.len())
            .sum()
    }
}
