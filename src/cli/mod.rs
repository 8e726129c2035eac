//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - enable: Enable command arguments
//! - disable: Disable command arguments
//! - status: Status command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod disable;
pub mod enable;
pub mod status;

pub use completions::CompletionsArgs;
pub use disable::DisableArgs;
pub use enable::EnableArgs;
pub use status::StatusArgs;

/// towerup - scheduled container updates for Compose stacks
///
/// Wires a Watchtower service into an existing docker-compose.yml, validates
/// the result with the container runtime, and restarts the stack.
#[derive(Parser, Debug)]
#[command(
    name = "towerup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Wire Watchtower auto-updates into an existing Docker Compose stack",
    long_about = "Towerup adds (or refreshes) a Watchtower service block in an existing \
                  docker-compose.yml, preserving every other byte of the file, then \
                  validates the result and restarts the stack. Re-running is safe: the \
                  previous block is replaced in place.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  towerup enable                        \x1b[90m# Nightly updates at 04:00 UTC\x1b[0m\n   \
                  towerup enable --hour 2 --timezone Europe/Helsinki\n   \
                  towerup enable --dry-run              \x1b[90m# Print the merged file only\x1b[0m\n   \
                  towerup disable                       \x1b[90m# Remove the watchtower service\x1b[0m\n   \
                  towerup status                        \x1b[90m# Report the current state\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add or refresh the Watchtower service in the stack
    Enable(EnableArgs),

    /// Remove the Watchtower service from the stack
    Disable(DisableArgs),

    /// Report the stack's auto-update state
    Status(StatusArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
