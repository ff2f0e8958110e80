//! List command implementation.

use super::{plural, Context};
use crate::cleaner::has_dependency_dir;
use crate::cli::ListArgs;
use crate::project::ProjectPath;
use anyhow::Result;
use serde::Serialize;

/// One catalogued project as shown by `list`.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub path: ProjectPath,
    pub has_vendor: bool,
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let validation = ctx.store.load_and_validate()?;

    if args.json {
        let entries: Vec<ListEntry> = validation
            .valid
            .into_iter()
            .map(|path| ListEntry {
                has_vendor: has_dependency_dir(path.as_path()),
                path,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if !ctx.quiet {
        if let Some(header) = ctx.store.header()? {
            match (header.scanned_at, header.scanned_root) {
                (Some(at), Some(root)) => {
                    println!("Last scan: {} of {}\n", at.format("%Y-%m-%d %H:%M"), root.display())
                }
                (Some(at), None) => println!("Last scan: {}\n", at.format("%Y-%m-%d %H:%M")),
                _ => {}
            }
        }
    }

    for path in &validation.valid {
        if args.vendor {
            let marker = if has_dependency_dir(path.as_path()) {
                "vendor"
            } else {
                "-"
            };
            println!("  {:<8} {}", marker, path);
        } else {
            println!("{path}");
        }
    }

    if !ctx.quiet {
        if validation.removed_count > 0 {
            println!(
                "\nPruned {} missing project{} from the catalog",
                validation.removed_count,
                plural(validation.removed_count)
            );
        }
        println!(
            "\nTotal: {} project{}",
            validation.valid.len(),
            plural(validation.valid.len())
        );
    }

    Ok(())
}
