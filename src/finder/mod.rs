//! Project discovery.
//!
//! This module provides:
//! - The project recognition predicate (`ProjectDetector`, `LaravelDetector`)
//! - A pruning tree walk that reports each project root once

mod detector;
mod project_scanner;

pub use detector::{LaravelDetector, ProjectDetector, LARAVEL_PACKAGE};
pub use project_scanner::{ProjectScanner, ScanOptions};
