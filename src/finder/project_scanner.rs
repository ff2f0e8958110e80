//! Project scanner for discovering projects in a directory tree.

use crate::error::{Result, SweeperError};
use crate::finder::detector::{LaravelDetector, ProjectDetector};
use crate::project::ProjectPath;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Options for scanning.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Maximum directory depth to scan (`None` = unlimited).
    pub max_depth: Option<usize>,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

/// Scanner for discovering project roots in a directory tree.
///
/// Once a directory is recognized as a project it is reported and its
/// subtree is never entered, so packages installed under `vendor/` that ship
/// their own `artisan` are not mistaken for separate projects.
pub struct ProjectScanner<D: ProjectDetector = LaravelDetector> {
    detector: D,
    options: ScanOptions,
}

impl ProjectScanner<LaravelDetector> {
    /// Create a scanner that looks for Laravel applications.
    pub fn laravel(options: ScanOptions) -> Self {
        Self::new(LaravelDetector, options)
    }
}

impl<D: ProjectDetector> ProjectScanner<D> {
    /// Create a new scanner with the given detector and options.
    pub fn new(detector: D, options: ScanOptions) -> Self {
        Self { detector, options }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Scan a directory tree for projects.
    ///
    /// Fails only when `root` is missing or not a directory. Subdirectories
    /// that cannot be read are skipped.
    pub fn scan(&self, root: &Path) -> Result<Vec<ProjectPath>> {
        self.scan_with_progress(root, |_| {})
    }

    /// Like [`scan`](Self::scan), calling `on_found` for each project as soon
    /// as it is recognized.
    pub fn scan_with_progress<F>(&self, root: &Path, mut on_found: F) -> Result<Vec<ProjectPath>>
    where
        F: FnMut(&ProjectPath),
    {
        let root = Self::resolve_root(root)?;
        tracing::info!(root = %root.display(), detector = self.detector.id(), "Scanning for projects");

        let mut walker = WalkDir::new(&root)
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name();
        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut projects = Vec::new();
        let mut entries = walker.into_iter();

        while let Some(result) = entries.next() {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(
                        path = ?err.path(),
                        error = %err,
                        "Skipping unreadable directory"
                    );
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if self.detector.detect(entry.path()) {
                let project = ProjectPath::from(entry.path());
                tracing::debug!(path = %project, "Found project");
                on_found(&project);
                projects.push(project);

                // Don't recurse into this project
                entries.skip_current_dir();
            }
        }

        tracing::info!(count = projects.len(), "Scan complete");
        Ok(projects)
    }

    fn resolve_root(root: &Path) -> Result<std::path::PathBuf> {
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(SweeperError::InvalidRoot(root.to_path_buf())),
        }

        root.canonicalize()
            .map_err(|_| SweeperError::InvalidRoot(root.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const LARAVEL_COMPOSER: &str = r#"{"require": {"laravel/framework": "^11.0"}}"#;

    fn make_laravel(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("artisan"), "#!/usr/bin/env php").unwrap();
        fs::write(dir.join("composer.json"), LARAVEL_COMPOSER).unwrap();
    }

    fn scanner() -> ProjectScanner {
        ProjectScanner::laravel(ScanOptions::default())
    }

    fn as_set(paths: Vec<ProjectPath>) -> HashSet<PathBuf> {
        paths.into_iter().map(ProjectPath::into_path_buf).collect()
    }

    #[test]
    fn test_scan_finds_projects() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        make_laravel(&root.join("shop"));
        make_laravel(&root.join("clients/blog"));
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/readme.txt"), "hello").unwrap();

        let projects = scanner().scan(&root).unwrap();

        let expected: HashSet<PathBuf> =
            [root.join("shop"), root.join("clients/blog")].into_iter().collect();
        assert_eq!(as_set(projects), expected);
    }

    #[test]
    fn test_scan_does_not_descend_into_projects() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let app = root.join("app1");
        make_laravel(&app);
        make_laravel(&app.join("vendor/pkg"));

        let projects = scanner().scan(&root).unwrap();

        assert_eq!(projects, vec![ProjectPath::from(app)]);
    }

    #[test]
    fn test_scan_root_is_project() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        make_laravel(&root);
        make_laravel(&root.join("nested"));

        let projects = scanner().scan(&root).unwrap();
        assert_eq!(projects, vec![ProjectPath::from(root)]);
    }

    #[test]
    fn test_scan_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let err = scanner().scan(&missing).unwrap_err();
        assert!(matches!(err, SweeperError::InvalidRoot(p) if p == missing));
    }

    #[test]
    fn test_scan_root_is_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            scanner().scan(&file),
            Err(SweeperError::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_scan_respects_max_depth() {
        let tmp = TempDir::new().unwrap();
        make_laravel(&tmp.path().join("a/b/c/d/project"));

        let options = ScanOptions {
            max_depth: Some(3),
            ..Default::default()
        };
        let projects = ProjectScanner::laravel(options).scan(tmp.path()).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_scan_reports_progress() {
        let tmp = TempDir::new().unwrap();
        make_laravel(&tmp.path().join("one"));
        make_laravel(&tmp.path().join("two"));

        let mut seen = Vec::new();
        let projects = scanner()
            .scan_with_progress(tmp.path(), |p| seen.push(p.clone()))
            .unwrap();

        assert_eq!(seen, projects);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_scan_order_is_by_name() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        make_laravel(&root.join("zeta"));
        make_laravel(&root.join("alpha"));

        let projects = scanner().scan(&root).unwrap();
        assert_eq!(
            projects,
            vec![
                ProjectPath::from(root.join("alpha")),
                ProjectPath::from(root.join("zeta")),
            ]
        );
    }

    #[test]
    fn test_scan_ignores_symlinked_projects_by_default() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let real = root.join("real");
        make_laravel(&real.join("app"));
        let scan_root = root.join("scan");
        fs::create_dir(&scan_root).unwrap();
        std::os::unix::fs::symlink(&real, scan_root.join("link")).unwrap();

        assert!(scanner().scan(&scan_root).unwrap().is_empty());

        let options = ScanOptions {
            follow_symlinks: true,
            ..Default::default()
        };
        let projects = ProjectScanner::laravel(options).scan(&scan_root).unwrap();
        assert_eq!(projects, vec![ProjectPath::from(scan_root.join("link/app"))]);
    }
}
