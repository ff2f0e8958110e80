//! The durable catalog of discovered projects.

pub mod format;
mod store;

pub use format::{parse, parse_header, serialize, CatalogHeader, MIN_SEPARATOR_LEN};
pub use store::{merge, validate, CatalogStore, Validation, CATALOG_FILE_NAME};
