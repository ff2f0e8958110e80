//! Text format of the catalog file.
//!
//! ```text
//! catalog   := header* separator path_line*
//! header    := any line that is not a separator
//! separator := '=' repeated at least MIN_SEPARATOR_LEN times
//! path_line := blank | separator | path
//! ```
//!
//! Header lines are informational. After the first separator every line that
//! is neither blank nor another separator is one path, taken verbatim.

use crate::project::ProjectPath;
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Shortest run of `=` recognized as the separator line.
pub const MIN_SEPARATOR_LEN: usize = 10;

/// Separator length used when writing.
const WRITTEN_SEPARATOR_LEN: usize = 50;

const TITLE: &str = "Laravel Projects Catalog";
const SCANNED_PREFIX: &str = "Scanned: ";
const DIRECTORY_PREFIX: &str = "Directory: ";
const TOTAL_PREFIX: &str = "Total projects: ";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metadata recovered from the header block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogHeader {
    pub scanned_at: Option<NaiveDateTime>,
    pub scanned_root: Option<PathBuf>,
    pub total: Option<usize>,
}

/// Whether `line` is a separator line.
pub fn is_separator(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= MIN_SEPARATOR_LEN && line.bytes().all(|b| b == b'=')
}

/// Extract the path list. Malformed input yields fewer (or no) paths, never an error.
pub fn parse(contents: &str) -> Vec<ProjectPath> {
    contents
        .lines()
        .skip_while(|line| !is_separator(line))
        .skip(1)
        .filter(|line| !line.trim().is_empty() && !is_separator(line))
        .map(ProjectPath::from)
        .collect()
}

/// Read the known header lines that precede the separator.
pub fn parse_header(contents: &str) -> CatalogHeader {
    let mut header = CatalogHeader::default();

    for line in contents.lines().take_while(|line| !is_separator(line)) {
        if let Some(value) = line.strip_prefix(SCANNED_PREFIX) {
            header.scanned_at = NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok();
        } else if let Some(value) = line.strip_prefix(DIRECTORY_PREFIX) {
            header.scanned_root = Some(PathBuf::from(value));
        } else if let Some(value) = line.strip_prefix(TOTAL_PREFIX) {
            header.total = value.trim().parse().ok();
        }
    }

    header
}

/// Render a complete catalog file. `paths` are written in the order given.
pub fn serialize(
    paths: &[ProjectPath],
    scanned_at: NaiveDateTime,
    scanned_root: Option<&Path>,
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SCANNED_PREFIX}{}", scanned_at.format(TIMESTAMP_FORMAT));
    if let Some(root) = scanned_root {
        let _ = writeln!(out, "{DIRECTORY_PREFIX}{}", root.display());
    }
    let _ = writeln!(out, "{TOTAL_PREFIX}{}", paths.len());
    let _ = writeln!(out, "{}", "=".repeat(WRITTEN_SEPARATOR_LEN));

    for path in paths {
        let _ = writeln!(out, "{path}");
    }

    out
}
