use crate::catalog::CATALOG_FILE_NAME;
use crate::error::ConfigError;
use crate::finder::ScanOptions;
use crate::state::LAST_DIR_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "laravel-sweeper";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub scanner: ScannerConfig,
    pub launcher: LauncherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the catalog and the last-directory file
    pub data_dir: PathBuf,
    /// Catalog file name inside `data_dir`
    pub catalog_file: String,
    /// Last scanned directory file name inside `data_dir`
    pub last_dir_file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Follow symbolic links while walking
    pub follow_symlinks: bool,
    /// Maximum walk depth (unset = unlimited)
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Editor program used by `open --editor`
    pub editor: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            data_dir,
            catalog_file: CATALOG_FILE_NAME.to_string(),
            last_dir_file: LAST_DIR_FILE_NAME.to_string(),
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            editor: "code".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn last_dir_path(&self) -> PathBuf {
        self.data_dir.join(&self.last_dir_file)
    }
}

impl ScannerConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.max_depth,
            follow_symlinks: self.follow_symlinks,
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/laravel-sweeper/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::ReadError { path, source }),
        };

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, name) in [
            ("catalog.catalog_file", &self.catalog.catalog_file),
            ("catalog.last_dir_file", &self.catalog.last_dir_file),
        ] {
            if !is_plain_file_name(name) {
                return Err(ConfigError::Invalid(format!(
                    "{key} must be a plain file name, got '{name}'"
                )));
            }
        }

        if self.scanner.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "scanner.max_depth must be at least 1".to_string(),
            ));
        }

        if self.launcher.editor.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "launcher.editor must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}
