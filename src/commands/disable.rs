//! Disable command implementation
//!
//! Removes the watchtower service block with the same
//! backup/validate/restore pipeline as enable, then tears the watchtower
//! container down and restarts the stack.

use std::env;

use inquire::Confirm;

use crate::cli::DisableArgs;
use crate::compose::{Document, remove};
use crate::discovery;
use crate::docker;
use crate::error::{Result, TowerupError};
use crate::persist;
use crate::preflight;
use crate::ui;
use crate::watchtower;

pub fn run(args: DisableArgs) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| TowerupError::IoError {
        message: e.to_string(),
    })?;
    let compose_path =
        discovery::find_compose_file(args.file.as_deref(), args.search_root.as_deref(), &cwd)?;

    let original = persist::read_file(&compose_path)?;
    let document = Document::parse(&original);
    let (stripped, removed_block) = remove(&document, watchtower::SERVICE_NAME)?;

    if args.dry_run {
        print!("{}", stripped.to_text());
        return Ok(());
    }

    preflight::require_root(args.allow_non_root)?;
    let compose = preflight::require_compose()?;
    let leftover = discovery::find_container_by_name(watchtower::CONTAINER_NAME)?;

    if !removed_block && leftover.is_none() {
        ui::success("Watchtower is not enabled, nothing to do");
        return Ok(());
    }

    ui::heading("Disabling scheduled updates");
    ui::detail("File:", &compose_path.display().to_string());
    if let Some(ref container) = leftover {
        ui::detail("Container:", &format!("{} (will be removed)", container.primary_name()));
    }

    if !args.yes {
        println!();
        let confirmed = Confirm::new("Remove the watchtower service?")
            .with_default(true)
            .with_help_message("Press Enter to confirm, or 'n' to cancel")
            .prompt()?;
        if !confirmed {
            println!("Aborted, nothing changed.");
            return Ok(());
        }
    }

    if removed_block {
        let backup = persist::create_backup(&compose_path)?;
        persist::write_atomic(&compose_path, &stripped.to_text())?;

        let pb = ui::spinner("Validating compose file");
        let validation = compose.validate(&compose_path);
        pb.finish_and_clear();

        if let Err(e) = validation {
            persist::restore_backup(&backup, &compose_path)?;
            return Err(e);
        }

        ui::detail("Backup:", &backup.display().to_string());
    }

    if leftover.is_some() {
        docker::stop_and_remove(watchtower::CONTAINER_NAME)?;
    }

    if removed_block {
        let pb = ui::spinner("Restarting stack");
        let restart = compose.up(&compose_path);
        pb.finish_and_clear();
        restart?;
    }

    ui::success("Watchtower disabled");
    Ok(())
}
