//! Batch removal of dependency directories.

use crate::cleaner::executor::{CleanOptions, DependencyCleaner, RemovalOutcome, RemovalResult};
use crate::project::ProjectPath;

/// Summary of a removal batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Number of dependency directories removed.
    pub removed_count: usize,
    /// Number of projects that had nothing to remove.
    pub skipped_count: usize,
    /// Projects whose removal failed, with the error message.
    pub failed: Vec<(ProjectPath, String)>,
    /// Total bytes freed.
    pub total_freed: u64,
}

impl RemovalSummary {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// Orchestrator for cleaning a batch of projects.
///
/// Projects are processed one after another. A failure on one project is
/// recorded and the batch moves on; every project is always attempted.
pub struct CleanOrchestrator {
    cleaner: DependencyCleaner,
}

impl CleanOrchestrator {
    /// Create a new orchestrator.
    pub fn new(options: CleanOptions) -> Self {
        Self::with_cleaner(DependencyCleaner::new(options))
    }

    pub fn with_cleaner(cleaner: DependencyCleaner) -> Self {
        Self { cleaner }
    }

    /// Clean every project, reporting each one before it is processed.
    pub fn clean_all<F>(&self, projects: &[ProjectPath], mut on_progress: F) -> Vec<RemovalResult>
    where
        F: FnMut(usize, &ProjectPath),
    {
        projects
            .iter()
            .enumerate()
            .map(|(index, project)| {
                on_progress(index, project);

                let outcome = self.cleaner.clean(project);
                match &outcome {
                    RemovalOutcome::Removed { freed_bytes } => {
                        tracing::info!(path = %project, freed_bytes, "Removed dependencies");
                    }
                    RemovalOutcome::NotPresent => {
                        tracing::debug!(path = %project, "No dependency directory");
                    }
                    RemovalOutcome::Failed { error } => {
                        tracing::warn!(path = %project, %error, "Failed to remove dependencies");
                    }
                }

                RemovalResult {
                    project: project.clone(),
                    outcome,
                }
            })
            .collect()
    }

    /// Clean every project and summarize.
    pub fn remove_dependencies(&self, projects: &[ProjectPath]) -> RemovalSummary {
        Self::summarize(&self.clean_all(projects, |_, _| {}))
    }

    /// Get summary statistics from results.
    pub fn summarize(results: &[RemovalResult]) -> RemovalSummary {
        let mut summary = RemovalSummary::default();

        for result in results {
            match &result.outcome {
                RemovalOutcome::Removed { freed_bytes } => {
                    summary.removed_count += 1;
                    summary.total_freed += freed_bytes;
                }
                RemovalOutcome::NotPresent => {
                    summary.skipped_count += 1;
                }
                RemovalOutcome::Failed { error } => {
                    summary.failed.push((result.project.clone(), error.clone()));
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_projects(count: usize) -> (TempDir, Vec<ProjectPath>) {
        let tmp = TempDir::new().unwrap();
        let mut projects = Vec::new();

        for i in 0..count {
            let proj_dir = tmp.path().join(format!("project-{}", i));
            let vendor = proj_dir.join("vendor");
            fs::create_dir_all(&vendor).unwrap();
            fs::write(vendor.join("autoload.php"), "x".repeat(100)).unwrap();

            projects.push(ProjectPath::from(proj_dir));
        }

        (tmp, projects)
    }

    #[test]
    fn test_clean_all() {
        let (_tmp, projects) = create_test_projects(5);

        let orchestrator = CleanOrchestrator::new(CleanOptions::default());
        let results = orchestrator.clean_all(&projects, |_, _| {});

        assert_eq!(results.len(), 5);
        assert!(results
            .iter()
            .all(|r| r.outcome == RemovalOutcome::Removed { freed_bytes: 100 }));
        assert!(projects.iter().all(|p| !p.as_path().join("vendor").exists()));
    }

    #[test]
    fn test_clean_all_reports_progress_in_order() {
        let (_tmp, projects) = create_test_projects(3);

        let mut seen = Vec::new();
        CleanOrchestrator::new(CleanOptions { dry_run: true })
            .clean_all(&projects, |i, p| seen.push((i, p.clone())));

        let expected: Vec<_> = projects.iter().cloned().enumerate().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let (tmp, mut projects) = create_test_projects(2);

        let broken = tmp.path().join("broken");
        fs::create_dir(&broken).unwrap();
        fs::write(broken.join("vendor"), "not a directory").unwrap();
        projects.insert(1, ProjectPath::from(broken.clone()));

        let without_vendor = tmp.path().join("fresh");
        fs::create_dir(&without_vendor).unwrap();
        projects.push(ProjectPath::from(without_vendor));

        let summary =
            CleanOrchestrator::new(CleanOptions::default()).remove_dependencies(&projects);

        assert_eq!(summary.removed_count, 2);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(summary.failed[0].0, ProjectPath::from(broken));
        assert_eq!(summary.total_freed, 200);
        assert!(!projects[0].as_path().join("vendor").exists());
        assert!(!projects[2].as_path().join("vendor").exists());
    }

    #[test]
    fn test_summarize() {
        let results = vec![
            RemovalResult {
                project: ProjectPath::from("/a"),
                outcome: RemovalOutcome::Removed { freed_bytes: 100 },
            },
            RemovalResult {
                project: ProjectPath::from("/b"),
                outcome: RemovalOutcome::Removed { freed_bytes: 200 },
            },
            RemovalResult {
                project: ProjectPath::from("/c"),
                outcome: RemovalOutcome::Failed {
                    error: "oops".into(),
                },
            },
            RemovalResult {
                project: ProjectPath::from("/d"),
                outcome: RemovalOutcome::NotPresent,
            },
        ];

        let summary = CleanOrchestrator::summarize(&results);

        assert_eq!(summary.removed_count, 2);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.failed, vec![(ProjectPath::from("/c"), "oops".to_string())]);
        assert_eq!(summary.total_freed, 300);
    }

    #[test]
    fn test_empty_projects_list() {
        let summary = CleanOrchestrator::new(CleanOptions::default()).remove_dependencies(&[]);
        assert_eq!(summary, RemovalSummary::default());
    }
}
