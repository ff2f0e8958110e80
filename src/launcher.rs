//! Best-effort hand-off of paths and URLs to desktop applications.
//!
//! Nothing here reports failure to the caller. Launch errors are logged and
//! otherwise ignored; the spawned process is not waited on.

use std::path::Path;
use std::process::{Command, Stdio};

/// Program used to open paths and URLs with the desktop default handler.
fn system_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

fn spawn_detached(program: &str, arg: &std::ffi::OsStr) -> bool {
    let result = Command::new(program)
        .arg(arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Ok(child) => {
            tracing::debug!(program, pid = child.id(), "Launched");
            true
        }
        Err(e) => {
            tracing::warn!(program, error = %e, "Failed to launch");
            false
        }
    }
}

/// Show `path` in the platform file manager.
pub fn open_in_file_manager(path: &Path) {
    spawn_detached(system_opener(), path.as_os_str());
}

/// Open `path` in `editor` (a program name or path), falling back to the
/// file manager when the editor cannot be started.
pub fn open_in_editor(path: &Path, editor: &str) {
    if !spawn_detached(editor, path.as_os_str()) {
        open_in_file_manager(path);
    }
}

/// Open `url` with the default handler.
pub fn open_url(url: &str) {
    spawn_detached(system_opener(), std::ffi::OsStr::new(url));
}
