use std::path::PathBuf;

use clap::Parser;

/// Arguments for the disable command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Remove the watchtower service:\n    towerup disable\n\n\
                   Preview without touching anything:\n    towerup disable --dry-run")]
pub struct DisableArgs {
    /// Compose file to edit (skips discovery)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Scan this directory tree for the compose file instead of walking upward
    #[arg(long, value_name = "DIR", conflicts_with = "file")]
    pub search_root: Option<PathBuf>,

    /// Print the stripped document to stdout without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Skip the root requirement (rootless Docker)
    #[arg(long)]
    pub allow_non_root: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::super::{Cli, Commands};

    #[test]
    fn test_disable_defaults() {
        let cli = Cli::try_parse_from(["towerup", "disable"]).unwrap();
        match cli.command {
            Commands::Disable(args) => {
                assert!(args.file.is_none());
                assert!(!args.dry_run);
                assert!(!args.yes);
            }
            _ => panic!("Expected Disable command"),
        }
    }

    #[test]
    fn test_disable_with_file() {
        let cli =
            Cli::try_parse_from(["towerup", "disable", "-f", "/opt/n8n/docker-compose.yml", "-y"])
                .unwrap();
        match cli.command {
            Commands::Disable(args) => {
                assert!(args.file.is_some());
                assert!(args.yes);
            }
            _ => panic!("Expected Disable command"),
        }
    }
}
