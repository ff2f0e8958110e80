//! The remembered "last scanned directory".

use crate::error::{Result, SweeperError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default file name for the last scanned directory.
pub const LAST_DIR_FILE_NAME: &str = "scanned_folder.txt";

/// Single-line file holding the directory most recently chosen for scanning.
#[derive(Debug, Clone)]
pub struct LastDirectory {
    path: PathBuf,
}

impl LastDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The remembered directory, if any. Unreadable or empty files count as none.
    pub fn load(&self) -> Option<PathBuf> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(path = %self.path.display(), error = %e, "Ignoring last directory file");
                }
                return None;
            }
        };

        content
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
    }

    /// Remember `dir` as the last scanned directory.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let io_err = |source| SweeperError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, format!("{}\n", dir.display())).map_err(io_err)
    }
}
