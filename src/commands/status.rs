//! Status command implementation
//!
//! Read-only report; a missing or unreachable container runtime degrades to
//! a warning instead of failing the command.

use std::env;

use crate::cli::StatusArgs;
use crate::compose::Document;
use crate::discovery;
use crate::docker;
use crate::error::{Result, TowerupError};
use crate::persist;
use crate::ui;
use crate::watchtower;

pub fn run(args: StatusArgs) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| TowerupError::IoError {
        message: e.to_string(),
    })?;
    let compose_path =
        discovery::find_compose_file(args.file.as_deref(), args.search_root.as_deref(), &cwd)?;

    let text = persist::read_file(&compose_path)?;
    let document = Document::parse(&text);
    let enabled = document.contains_key(watchtower::SERVICE_NAME)?;

    ui::heading("Auto-update status");
    ui::detail("File:", &compose_path.display().to_string());
    ui::detail(
        "Watchtower block:",
        if enabled { "present" } else { "absent" },
    );

    if !docker::docker_available() {
        ui::warn("Docker CLI not found; container state unknown");
        return Ok(());
    }

    match docker::running_containers() {
        Ok(containers) => {
            match containers.iter().find(|c| c.matches(&args.target)) {
                Some(c) => ui::detail(
                    "Target container:",
                    &format!("{} ({})", c.primary_name(), c.state),
                ),
                None => ui::detail("Target container:", "not running"),
            }
            match containers
                .iter()
                .find(|c| c.primary_name() == watchtower::CONTAINER_NAME)
            {
                Some(c) => ui::detail("Watchtower container:", &c.state),
                None => ui::detail("Watchtower container:", "not running"),
            }
        }
        Err(e) => ui::warn(&format!("Could not list containers: {e}")),
    }

    Ok(())
}
