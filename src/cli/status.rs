use std::path::PathBuf;

use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Compose file to inspect (skips discovery)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Scan this directory tree for the compose file instead of walking upward
    #[arg(long, value_name = "DIR", conflicts_with = "file")]
    pub search_root: Option<PathBuf>,

    /// Substring matched against running container names and images
    #[arg(
        long = "target",
        value_name = "NAME",
        env = "TOWERUP_TARGET",
        default_value = "n8n"
    )]
    pub target: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::super::{Cli, Commands};

    #[test]
    fn test_status_defaults() {
        let cli = Cli::try_parse_from(["towerup", "status"]).unwrap();
        match cli.command {
            Commands::Status(args) => {
                assert!(args.file.is_none());
                assert_eq!(args.target, "n8n");
            }
            _ => panic!("Expected Status command"),
        }
    }
}
