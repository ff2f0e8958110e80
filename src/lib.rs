//! Laravel Sweeper - find Laravel projects and reclaim their vendor directories
//!
//! This crate provides functionality for:
//! - Discovering Laravel project roots under a directory tree
//! - Keeping a durable, deduplicated catalog of discovered projects
//! - Removing `vendor/` directories from selected projects in one batch

pub mod catalog;
pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod finder;
pub mod launcher;
pub mod project;
pub mod state;
pub mod task;

// Re-export commonly used types
pub use catalog::{CatalogStore, Validation};
pub use cleaner::{has_dependency_dir, CleanOrchestrator, RemovalSummary};
pub use config::Config;
pub use error::{Result, SweeperError};
pub use finder::{LaravelDetector, ProjectDetector, ProjectScanner, ScanOptions};
pub use project::ProjectPath;
