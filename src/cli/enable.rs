use std::path::PathBuf;

use clap::Parser;

/// Arguments for the enable command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Nightly updates at 04:00 UTC:\n    towerup enable\n\n\
                   Custom schedule:\n    towerup enable --hour 2 --timezone Europe/Helsinki\n\n\
                   Explicit compose file:\n    towerup enable --file /opt/n8n/docker-compose.yml\n\n\
                   Preview without touching anything:\n    towerup enable --dry-run")]
pub struct EnableArgs {
    /// Hour of day (0-23) the daily update check runs at
    #[arg(
        long,
        value_name = "HOUR",
        env = "TOWERUP_HOUR",
        default_value_t = 4,
        value_parser = clap::value_parser!(u8).range(0..=23)
    )]
    pub hour: u8,

    /// IANA timezone the schedule is evaluated in
    #[arg(long, value_name = "TZ", env = "TOWERUP_TZ", default_value = "UTC")]
    pub timezone: String,

    /// Substring matched against running container names and images
    #[arg(
        long = "target",
        value_name = "NAME",
        env = "TOWERUP_TARGET",
        default_value = "n8n"
    )]
    pub target: String,

    /// Compose file to edit (skips discovery)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Scan this directory tree for the compose file instead of walking upward
    #[arg(long, value_name = "DIR", conflicts_with = "file")]
    pub search_root: Option<PathBuf>,

    /// Print the merged document to stdout without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Proceed even when no matching container is running
    #[arg(long)]
    pub force: bool,

    /// Skip the root requirement (rootless Docker)
    #[arg(long)]
    pub allow_non_root: bool,
}
