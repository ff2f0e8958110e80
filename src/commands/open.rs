//! Open command implementation.

use super::Context;
use crate::cli::OpenArgs;
use crate::error::SweeperError;
use crate::launcher;
use anyhow::Result;
use std::path::PathBuf;

/// Whether `target` should be handed to the URL handler rather than treated as a path.
fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Run the open command.
pub fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    if is_url(&args.target) {
        launcher::open_url(&args.target);
        return Ok(());
    }

    let path = PathBuf::from(&args.target);
    if !path.is_dir() {
        return Err(SweeperError::InvalidRoot(path).into());
    }

    if args.editor {
        launcher::open_in_editor(&path, &ctx.config.launcher.editor);
    } else {
        launcher::open_in_file_manager(&path);
    }

    Ok(())
}
