//! Error types and handling for towerup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every failure is terminal for the current invocation; nothing is retried.
//! Only `ValidationFailed` has a recovery action attached to it (the caller
//! restores the compose file from its backup before exiting).

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for towerup operations
#[derive(Error, Diagnostic, Debug)]
pub enum TowerupError {
    // Pre-flight errors
    #[error("This command must be run as root")]
    #[diagnostic(
        code(towerup::preflight::root_required),
        help(
            "Managing containers usually needs root. Re-run with sudo, or pass --allow-non-root for rootless Docker setups."
        )
    )]
    RootRequired,

    #[error("Docker CLI not found")]
    #[diagnostic(
        code(towerup::preflight::docker_missing),
        help("Install Docker and make sure the 'docker' binary is on PATH")
    )]
    DockerMissing,

    #[error("No usable Compose command found")]
    #[diagnostic(
        code(towerup::preflight::compose_missing),
        help(
            "Neither 'docker compose' (plugin) nor the legacy 'docker-compose' binary is available"
        )
    )]
    ComposeMissing,

    #[error("Invalid timezone '{timezone}'")]
    #[diagnostic(
        code(towerup::preflight::invalid_timezone),
        help("Use a single IANA zone token such as Europe/Helsinki or UTC")
    )]
    InvalidTimezone { timezone: String },

    // Discovery errors
    #[error("No Compose file found")]
    #[diagnostic(
        code(towerup::discover::compose_file_not_found),
        help(
            "Searched for docker-compose.yml, docker-compose.yaml, compose.yml and compose.yaml. Point at the file with --file, or scan a directory with --search-root."
        )
    )]
    ComposeFileNotFound,

    #[error("Found {count} Compose files under '{root}': {candidates}")]
    #[diagnostic(
        code(towerup::discover::ambiguous_compose_file),
        help("Pick one explicitly with --file")
    )]
    AmbiguousComposeFile {
        root: String,
        count: usize,
        candidates: String,
    },

    #[error("No running container matches '{filter}'")]
    #[diagnostic(
        code(towerup::discover::target_not_found),
        help(
            "The stack must be up so the restart applies to it. Start it first, adjust --target, or pass --force to write the configuration anyway."
        )
    )]
    TargetContainerNotFound { filter: String },

    // Document errors
    #[error("Malformed document at line {line}: {content:?}")]
    #[diagnostic(
        code(towerup::compose::malformed),
        help(
            "Block boundaries are resolved by indentation; tabs in leading whitespace make them ambiguous. Re-indent the file with spaces."
        )
    )]
    MalformedDocument { line: usize, content: String },

    // Validation errors
    #[error("Compose validation failed: {reason}")]
    #[diagnostic(
        code(towerup::docker::validation_failed),
        help("The original file has been restored from its backup")
    )]
    ValidationFailed { reason: String },

    #[error("Docker command failed: {message}")]
    #[diagnostic(code(towerup::docker::command_failed))]
    DockerCommandFailed { message: String },

    // File system errors
    #[error("Failed to read '{path}': {reason}")]
    #[diagnostic(code(towerup::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write '{path}': {reason}")]
    #[diagnostic(code(towerup::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to back up '{path}': {reason}")]
    #[diagnostic(
        code(towerup::fs::backup_failed),
        help("The compose file has not been touched")
    )]
    BackupFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(towerup::io_error))]
    IoError { message: String },
}

impl From<inquire::InquireError> for TowerupError {
    fn from(err: inquire::InquireError) -> Self {
        TowerupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TowerupError {
    fn from(err: serde_json::Error) -> Self {
        TowerupError::DockerCommandFailed {
            message: format!("unparseable container listing: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TowerupError>;
