//! towerup - scheduled container updates for Compose stacks
//!
//! A command line tool that wires a Watchtower service into an existing
//! docker-compose.yml, preserving the file's formatting, then validates the
//! result with the container runtime and restarts the stack.

use clap::Parser;

mod cli;
mod commands;
mod compose;
mod discovery;
mod docker;
mod error;
mod persist;
mod preflight;
mod ui;
mod watchtower;

use cli::{Cli, Commands};
use error::TowerupError;

/// Whether a command needs the container runtime before it starts.
///
/// Dry runs never touch the runtime, and status degrades gracefully on its
/// own, so only mutating invocations are gated here.
fn needs_runtime(command: &Commands) -> bool {
    match command {
        Commands::Enable(args) => !args.dry_run,
        Commands::Disable(args) => !args.dry_run,
        Commands::Status(_) | Commands::Version | Commands::Completions(_) => false,
    }
}

fn main() {
    let cli = Cli::parse();

    if needs_runtime(&cli.command) && !docker::docker_available() {
        eprintln!("Error: {}", TowerupError::DockerMissing);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Enable(args) => commands::enable::run(args, cli.verbose),
        Commands::Disable(args) => commands::disable::run(args),
        Commands::Status(args) => commands::status::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
