//! Scan command implementation.

use super::{plural, Context, TICK};
use crate::cli::ScanArgs;
use crate::error::SweeperError;
use crate::finder::ProjectScanner;
use crate::project::ProjectPath;
use crate::task::BackgroundTask;
use anyhow::{anyhow, Result};

/// Run the scan command.
pub fn run(args: ScanArgs, ctx: &Context) -> Result<()> {
    let requested = match args.path {
        Some(path) => path,
        None => ctx.last_dir.load().ok_or_else(|| {
            anyhow!("No directory given and no previously scanned directory to reuse")
        })?,
    };

    let root = requested
        .canonicalize()
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| SweeperError::InvalidRoot(requested.clone()))?;

    if let Err(e) = ctx.last_dir.save(&root) {
        tracing::warn!(error = %e, "Could not remember scanned directory");
    }

    let mut options = ctx.config.scanner.scan_options();
    if args.max_depth.is_some() {
        options.max_depth = args.max_depth;
    }
    options.follow_symlinks |= args.follow_links;

    let scanner = ProjectScanner::laravel(options);
    let spinner = ctx.spinner(&format!("Scanning {}...", root.display()))?;

    let scan_root = root.clone();
    let task = BackgroundTask::<ProjectPath, _>::spawn("scan", move |report| {
        scanner.scan_with_progress(&scan_root, |project| report(project.clone()))
    })?;

    let mut found = 0usize;
    let projects = task.wait_with(
        TICK,
        |project: ProjectPath| {
            found += 1;
            spinner.set_message(format!("{found} found, latest {project}"));
        },
        || spinner.tick(),
    )??;
    spinner.finish_and_clear();

    for project in &projects {
        println!("{project}");
    }

    let total = ctx.store.merge_and_save(&projects, Some(root.as_path()))?;

    if !ctx.quiet {
        println!(
            "\nFound {} Laravel project{} in {}",
            projects.len(),
            plural(projects.len()),
            root.display()
        );
        println!(
            "Catalog now holds {} project{} ({})",
            total,
            plural(total),
            ctx.store.path().display()
        );
    }

    Ok(())
}
