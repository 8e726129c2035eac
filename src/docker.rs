//! Container runtime CLI wrappers
//!
//! Everything the tool needs from Docker goes through the CLI, synchronously:
//! listing containers, validating a compose file, bringing the stack up and
//! tearing single containers down. Compose verbs prefer the `docker compose`
//! plugin and fall back to the legacy `docker-compose` binary.

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use crate::error::{Result, TowerupError};

/// One row of `docker ps --format '{{json .}}'` output.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerInfo {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Names", default)]
    pub names: String,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "State", default)]
    pub state: String,
}

impl ContainerInfo {
    /// Match by substring against container names and image.
    pub fn matches(&self, filter: &str) -> bool {
        self.names.contains(filter) || self.image.contains(filter)
    }

    /// First name; `Names` is comma-separated when a container has aliases.
    pub fn primary_name(&self) -> &str {
        self.names.split(',').next().unwrap_or(&self.names).trim()
    }
}

/// Whether the `docker` binary answers at all.
pub fn docker_available() -> bool {
    probe("docker", &["--version"])
}

fn probe(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Which Compose frontend to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeCommand {
    /// `docker compose` plugin
    Plugin,
    /// Standalone `docker-compose` binary
    Legacy,
}

impl ComposeCommand {
    /// Probe for a usable Compose frontend, preferring the plugin.
    pub fn detect() -> Result<Self> {
        if probe("docker", &["compose", "version"]) {
            return Ok(Self::Plugin);
        }
        if probe("docker-compose", &["--version"]) {
            return Ok(Self::Legacy);
        }
        Err(TowerupError::ComposeMissing)
    }

    fn base(self) -> Command {
        match self {
            Self::Plugin => {
                let mut cmd = Command::new("docker");
                cmd.arg("compose");
                cmd
            }
            Self::Legacy => Command::new("docker-compose"),
        }
    }

    /// Ask the runtime to parse the compose file without doing anything.
    pub fn validate(self, file: &Path) -> Result<()> {
        let output = self
            .base()
            .arg("-f")
            .arg(file)
            .args(["config", "-q"])
            .output()
            .map_err(|e| TowerupError::DockerCommandFailed {
                message: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(TowerupError::ValidationFailed {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    /// `up -d` against the compose file.
    pub fn up(self, file: &Path) -> Result<()> {
        let output = self
            .base()
            .arg("-f")
            .arg(file)
            .args(["up", "-d"])
            .output()
            .map_err(|e| TowerupError::DockerCommandFailed {
                message: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(TowerupError::DockerCommandFailed {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// All running containers, one JSON document per line.
pub fn running_containers() -> Result<Vec<ContainerInfo>> {
    let output = Command::new("docker")
        .args(["ps", "--format", "{{json .}}"])
        .output()
        .map_err(|e| TowerupError::DockerCommandFailed {
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(TowerupError::DockerCommandFailed {
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut containers = Vec::new();
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        containers.push(serde_json::from_str(line)?);
    }
    Ok(containers)
}

/// Best-effort stop and remove of a single container.
///
/// Non-zero exits are ignored; the container may already be gone, and
/// `compose up` recreates whatever the file declares either way.
pub fn stop_and_remove(name: &str) -> Result<()> {
    for verb in ["stop", "rm"] {
        Command::new("docker")
            .args([verb, name])
            .output()
            .map_err(|e| TowerupError::DockerCommandFailed {
                message: e.to_string(),
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContainerInfo {
        serde_json::from_str(
            r#"{"ID":"f2a91c0b41d2","Names":"n8n","Image":"n8nio/n8n:latest","State":"running","Status":"Up 3 days"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_container_info_from_ps_json() {
        let info = sample();
        assert_eq!(info.id, "f2a91c0b41d2");
        assert_eq!(info.names, "n8n");
        assert_eq!(info.image, "n8nio/n8n:latest");
        assert_eq!(info.state, "running");
    }

    #[test]
    fn test_container_info_ignores_unknown_fields_and_defaults_missing() {
        let info: ContainerInfo =
            serde_json::from_str(r#"{"Names":"watchtower","Ports":"whatever"}"#).unwrap();
        assert_eq!(info.names, "watchtower");
        assert!(info.image.is_empty());
    }

    #[test]
    fn test_matches_by_name_or_image() {
        let info = sample();
        assert!(info.matches("n8n"));
        assert!(info.matches("n8nio"));
        assert!(!info.matches("postgres"));
    }

    #[test]
    fn test_primary_name_splits_aliases() {
        let info: ContainerInfo =
            serde_json::from_str(r#"{"Names":"n8n-main, n8n-alias"}"#).unwrap();
        assert_eq!(info.primary_name(), "n8n-main");
    }
}
