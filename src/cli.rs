use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Laravel Sweeper - find Laravel projects and reclaim their vendor directories
#[derive(Parser, Debug)]
#[command(name = "laravel-sweeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the project catalog
    #[arg(long, global = true, value_name = "DIR", env = "LARAVEL_SWEEPER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a directory tree for Laravel projects and add them to the catalog
    Scan(ScanArgs),

    /// List catalogued projects, pruning ones that no longer exist
    List(ListArgs),

    /// Remove vendor directories from catalogued projects
    Clean(CleanArgs),

    /// Open a project in the file manager or an editor, or open a URL
    Open(OpenArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory to scan (defaults to the last scanned directory)
    pub path: Option<PathBuf>,

    /// Maximum recursion depth
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Follow symbolic links
    #[arg(short = 'L', long)]
    pub follow_links: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show whether each project has a vendor directory
    #[arg(long)]
    pub vendor: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Projects to clean
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub paths: Vec<PathBuf>,

    /// Clean every catalogued project
    #[arg(short, long)]
    pub all: bool,

    /// Show what would be removed without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Project path or http(s) URL
    pub target: String,

    /// Open in the configured editor instead of the file manager
    #[arg(short, long)]
    pub editor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_scan_command() {
        let cli = Cli::parse_from(["laravel-sweeper", "scan", "/home"]);
        match cli.command {
            Command::Scan(args) => {
                assert_eq!(args.path, Some(PathBuf::from("/home")));
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn parse_scan_without_path() {
        let cli = Cli::parse_from(["laravel-sweeper", "scan"]);
        assert!(matches!(cli.command, Command::Scan(ScanArgs { path: None, .. })));
    }

    #[test]
    fn parse_clean_with_options() {
        let cli = Cli::parse_from([
            "laravel-sweeper",
            "clean",
            "--dry-run",
            "/srv/shop",
            "/srv/blog",
        ]);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.dry_run);
                assert!(!args.all);
                assert_eq!(
                    args.paths,
                    vec![PathBuf::from("/srv/shop"), PathBuf::from("/srv/blog")]
                );
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn clean_requires_paths_or_all() {
        assert!(Cli::try_parse_from(["laravel-sweeper", "clean"]).is_err());
        assert!(Cli::try_parse_from(["laravel-sweeper", "clean", "--all", "/x"]).is_err());
        assert!(Cli::try_parse_from(["laravel-sweeper", "clean", "--all"]).is_ok());
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["laravel-sweeper", "-vvv", "list"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn global_data_dir_flag() {
        let cli = Cli::parse_from(["laravel-sweeper", "list", "--data-dir", "/tmp/catalog"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/catalog")));
    }
}
