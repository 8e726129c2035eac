//! Pre-flight checks run before anything is mutated

use crate::docker::{self, ComposeCommand};
use crate::error::{Result, TowerupError};

/// Mutating commands need root on Unix unless explicitly waived.
///
/// The waiver exists for rootless Docker; the daemon itself is the final
/// arbiter of permissions either way.
pub fn require_root(allow_non_root: bool) -> Result<()> {
    if allow_non_root {
        return Ok(());
    }
    #[cfg(unix)]
    if !nix::unistd::Uid::effective().is_root() {
        return Err(TowerupError::RootRequired);
    }
    Ok(())
}

/// Probe for the Docker CLI and a usable Compose frontend.
pub fn require_compose() -> Result<ComposeCommand> {
    if !docker::docker_available() {
        return Err(TowerupError::DockerMissing);
    }
    ComposeCommand::detect()
}
