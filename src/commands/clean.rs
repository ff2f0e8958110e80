//! Clean command implementation.

use super::{plural, Context, TICK};
use crate::cleaner::{
    has_dependency_entry, CleanOptions, CleanOrchestrator, RemovalOutcome, RemovalResult,
    DEPENDENCY_DIR,
};
use crate::cli::CleanArgs;
use crate::finder::{LaravelDetector, ProjectDetector};
use crate::project::ProjectPath;
use crate::task::BackgroundTask;
use anyhow::Result;
use humansize::{format_size, BINARY};
use std::io::{self, Write};
use std::path::PathBuf;

/// Exit code when some projects could not be cleaned.
const PARTIAL_FAILURE_EXIT: i32 = 5;

/// Run the clean command.
pub fn run(args: CleanArgs, ctx: &Context) -> Result<()> {
    let projects: Vec<ProjectPath> = if args.all {
        ctx.store.load_and_validate()?.valid
    } else {
        laravel_targets(&args.paths)
    };

    let pending = projects
        .iter()
        .filter(|p| has_dependency_entry(p.as_path()))
        .count();

    if pending == 0 {
        println!("No {DEPENDENCY_DIR} directories to remove.");
        return Ok(());
    }

    // Confirmation
    if !args.force && !args.dry_run {
        print!(
            "Remove {DEPENDENCY_DIR}/ from {} project{}? [y/N] ",
            pending,
            plural(pending)
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if args.dry_run {
        println!("[DRY RUN] Would remove:");
    }

    let orchestrator = CleanOrchestrator::new(CleanOptions {
        dry_run: args.dry_run,
    });
    let bar = ctx.progress_bar(projects.len())?;

    let batch = projects.clone();
    let task = BackgroundTask::<ProjectPath, _>::spawn("clean", move |report| {
        orchestrator.clean_all(&batch, |_, project| report(project.clone()))
    })?;

    let mut started = 0usize;
    let results = task.wait_with(
        TICK,
        |project: ProjectPath| {
            if started > 0 {
                bar.inc(1);
            }
            started += 1;
            bar.set_message(project.to_string());
        },
        || bar.tick(),
    )?;
    bar.finish_and_clear();

    if args.dry_run {
        print_dry_run(&results);
    }

    let summary = CleanOrchestrator::summarize(&results);

    // Print results
    println!("\nResults:");
    println!(
        "  {}: {} project{}",
        if args.dry_run { "Would clean" } else { "Cleaned" },
        summary.removed_count,
        plural(summary.removed_count)
    );
    if summary.skipped_count > 0 {
        println!(
            "  Skipped: {} project{} without {DEPENDENCY_DIR}/",
            summary.skipped_count,
            plural(summary.skipped_count)
        );
    }
    if summary.failed_count() > 0 {
        println!(
            "  Failed:  {} project{}",
            summary.failed_count(),
            plural(summary.failed_count())
        );
    }
    println!("  Freed:   {}", format_size(summary.total_freed, BINARY));

    // Print failures
    for (project, error) in &summary.failed {
        eprintln!("  Error cleaning {}: {}", project, error);
    }

    if summary.failed_count() > 0 {
        std::process::exit(PARTIAL_FAILURE_EXIT);
    }

    Ok(())
}

/// Resolve explicit paths, keeping only those that are Laravel projects.
fn laravel_targets(paths: &[PathBuf]) -> Vec<ProjectPath> {
    let detector = LaravelDetector;

    paths
        .iter()
        .map(|p| p.canonicalize().unwrap_or_else(|_| p.clone()))
        .filter(|path| {
            let is_project = detector.detect(path);
            if !is_project {
                tracing::debug!(path = %path.display(), "Not a Laravel project");
                eprintln!("Skipping {}: not a Laravel project", path.display());
            }
            is_project
        })
        .map(ProjectPath::from)
        .collect()
}

fn print_dry_run(results: &[RemovalResult]) {
    for result in results {
        if let RemovalOutcome::Removed { freed_bytes } = result.outcome {
            println!(
                "  {:<60} {:>10}",
                result.project.as_path().join(DEPENDENCY_DIR).display(),
                format_size(freed_bytes, BINARY)
            );
        }
    }
}
