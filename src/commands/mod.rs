//! Subcommand implementations.

pub mod clean;
pub mod list;
pub mod open;
pub mod scan;

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::state::LastDirectory;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// How often a waiting command redraws its progress indicator.
pub(crate) const TICK: Duration = Duration::from_millis(80);

/// Shared state handed to every subcommand.
pub struct Context {
    pub config: Config,
    pub store: CatalogStore,
    pub last_dir: LastDirectory,
    pub quiet: bool,
}

impl Context {
    /// Resolve file locations from `config`, with `data_dir` taking precedence.
    pub fn new(mut config: Config, data_dir: Option<PathBuf>, quiet: bool) -> Self {
        if let Some(dir) = data_dir {
            config.catalog.data_dir = dir;
        }

        Self {
            store: CatalogStore::new(config.catalog.catalog_path()),
            last_dir: LastDirectory::new(config.catalog.last_dir_path()),
            config,
            quiet,
        }
    }

    /// A spinner on stderr, or a hidden one in quiet mode.
    pub(crate) fn spinner(&self, message: &str) -> anyhow::Result<ProgressBar> {
        if self.quiet {
            return Ok(ProgressBar::hidden());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        spinner.set_message(message.to_string());
        Ok(spinner)
    }

    /// A bar with `len` steps on stderr, or a hidden one in quiet mode.
    pub(crate) fn progress_bar(&self, len: usize) -> anyhow::Result<ProgressBar> {
        if self.quiet {
            return Ok(ProgressBar::hidden());
        }

        let bar = ProgressBar::new(len as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("##-"),
        );
        Ok(bar)
    }
}

/// Plural suffix for `count`.
pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
