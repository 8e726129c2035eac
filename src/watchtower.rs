//! Watchtower service block rendering
//!
//! Renders the literal block that gets merged into the compose file. The
//! output is a top-level `watchtower:` key with two-space indented content,
//! matching hand-written compose files.

use crate::error::{Result, TowerupError};

/// Top-level key of the managed service block.
pub const SERVICE_NAME: &str = "watchtower";

/// Top-level key the block is inserted before, when present.
pub const ANCHOR_KEY: &str = "volumes";

/// Default container name given to the Watchtower service.
pub const CONTAINER_NAME: &str = "watchtower";

/// Inputs for one enablement run.
#[derive(Debug, Clone)]
pub struct UpdatePlan {
    /// Hour of day (0-23) the update check runs at
    pub hour: u8,
    /// IANA timezone the schedule is evaluated in
    pub timezone: String,
    /// Name of the container Watchtower is scoped to
    pub target: String,
}

impl UpdatePlan {
    /// Six-field cron expression (seconds first), daily at `hour`:00:00.
    pub fn schedule(&self) -> String {
        format!("0 0 {} * * *", self.hour)
    }

    /// The full service block, including its own top-level key line.
    pub fn service_block(&self) -> String {
        format!(
            "\
{SERVICE_NAME}:
  image: containrrr/watchtower:latest
  container_name: {CONTAINER_NAME}
  restart: unless-stopped
  environment:
    - TZ={tz}
    - WATCHTOWER_CLEANUP=true
    - WATCHTOWER_INCLUDE_STOPPED=false
    - WATCHTOWER_SCHEDULE={schedule}
  volumes:
    - /var/run/docker.sock:/var/run/docker.sock
  command: {target}",
            tz = self.timezone,
            schedule = self.schedule(),
            target = self.target,
        )
    }
}

/// Reject timezone values that would break out of the generated line.
///
/// The value is substituted verbatim into the block, so it must be a single
/// token: IANA zone names are letters, digits, `_`, `+`, `-` and `/`.
pub fn validate_timezone(timezone: &str) -> Result<()> {
    let valid = !timezone.is_empty()
        && timezone
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '/'));
    if valid {
        Ok(())
    } else {
        Err(TowerupError::InvalidTimezone {
            timezone: timezone.to_string(),
        })
    }
}
