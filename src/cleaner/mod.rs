//! Dependency directory removal.
//!
//! This module provides:
//! - Removal of one project's `vendor/` directory (`DependencyCleaner`)
//! - Batch removal with per-project failure isolation (`CleanOrchestrator`)

mod executor;
mod orchestrator;

pub use executor::{
    has_dependency_dir, has_dependency_entry, CleanOptions, DependencyCleaner, RemovalOutcome,
    RemovalResult, DEPENDENCY_DIR,
};
pub use orchestrator::{CleanOrchestrator, RemovalSummary};
