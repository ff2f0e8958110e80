//! Core trait and types for project detection.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Trait for project type detectors.
///
/// A detector answers one question about a directory: is it the root of a
/// project of this type? Detection never fails. Anything unreadable or
/// malformed simply means "not a project".
pub trait ProjectDetector: Send + Sync {
    /// Unique identifier for this project type (e.g., "laravel").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "Laravel").
    fn display_name(&self) -> &'static str;

    /// Regular files that must all be present at the project root.
    fn marker_files(&self) -> &'static [&'static str];

    /// Name of the directory holding installed third-party packages.
    fn dependency_dir(&self) -> &'static str;

    /// Check if the given directory is a project root.
    ///
    /// Default implementation requires every marker file to be a regular file.
    fn detect(&self, path: &Path) -> bool {
        self.marker_files().iter().all(|f| path.join(f).is_file())
    }
}

/// Detector for Laravel applications.
///
/// A directory is a Laravel root when it holds an `artisan` script and a
/// `composer.json` whose `require` table lists `laravel/framework`.
pub struct LaravelDetector;

/// Framework package a composer manifest must require.
pub const LARAVEL_PACKAGE: &str = "laravel/framework";

/// The part of `composer.json` detection cares about.
#[derive(Debug, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    require: BTreeMap<String, serde_json::Value>,
}

impl LaravelDetector {
    fn requires_framework(composer_path: &Path) -> bool {
        let content = match fs::read(composer_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %composer_path.display(), error = %e, "Unreadable composer.json");
                return false;
            }
        };

        match serde_json::from_slice::<ComposerManifest>(&content) {
            Ok(manifest) => manifest.require.contains_key(LARAVEL_PACKAGE),
            Err(e) => {
                tracing::debug!(path = %composer_path.display(), error = %e, "Malformed composer.json");
                false
            }
        }
    }
}

impl ProjectDetector for LaravelDetector {
    fn id(&self) -> &'static str {
        "laravel"
    }

    fn display_name(&self) -> &'static str {
        "Laravel"
    }

    fn marker_files(&self) -> &'static [&'static str] {
        &["artisan", "composer.json"]
    }

    fn dependency_dir(&self) -> &'static str {
        "vendor"
    }

    fn detect(&self, path: &Path) -> bool {
        if !self.marker_files().iter().all(|f| path.join(f).is_file()) {
            return false;
        }
        Self::requires_framework(&path.join("composer.json"))
    }
}
