//! Enable command implementation
//!
//! The pipeline:
//! 1. Validate schedule inputs
//! 2. Locate and read the compose file
//! 3. Resolve the target container
//! 4. Merge the watchtower block in memory
//! 5. Short-circuit when nothing would change
//! 6. Confirm, back up, write atomically
//! 7. Validate with the runtime; restore the backup on failure
//! 8. Restart the stack

use std::env;

use inquire::Confirm;

use crate::cli::EnableArgs;
use crate::compose::{Document, merge};
use crate::discovery;
use crate::docker;
use crate::error::{Result, TowerupError};
use crate::persist;
use crate::preflight;
use crate::ui;
use crate::watchtower::{self, UpdatePlan};

pub fn run(args: EnableArgs, verbose: bool) -> Result<()> {
    watchtower::validate_timezone(&args.timezone)?;

    let cwd = env::current_dir().map_err(|e| TowerupError::IoError {
        message: e.to_string(),
    })?;
    let compose_path =
        discovery::find_compose_file(args.file.as_deref(), args.search_root.as_deref(), &cwd)?;

    let original = persist::read_file(&compose_path)?;
    let document = Document::parse(&original);

    if args.dry_run {
        let plan = plan_for(&args, args.target.clone());
        let merged = merge(
            &document,
            watchtower::SERVICE_NAME,
            &plan.service_block(),
            Some(watchtower::ANCHOR_KEY),
        )?;
        print!("{}", merged.to_text());
        return Ok(());
    }

    preflight::require_root(args.allow_non_root)?;
    let compose = preflight::require_compose()?;

    // Scope the update to the container actually running; --force falls back
    // to the filter string so a stack can be provisioned before first start.
    let target = match discovery::find_target_container(&args.target) {
        Ok(container) => container.primary_name().to_string(),
        Err(TowerupError::TargetContainerNotFound { .. }) if args.force => args.target.clone(),
        Err(e) => return Err(e),
    };

    let plan = plan_for(&args, target);
    let merged = merge(
        &document,
        watchtower::SERVICE_NAME,
        &plan.service_block(),
        Some(watchtower::ANCHOR_KEY),
    )?;
    let updated = merged.to_text();

    if blake3::hash(updated.as_bytes()) == blake3::hash(original.as_bytes()) {
        ui::success(&format!(
            "{} is already up to date",
            compose_path.display()
        ));
        return Ok(());
    }

    ui::heading("Enabling scheduled updates");
    ui::detail("File:", &compose_path.display().to_string());
    ui::detail(
        "Schedule:",
        &format!("{} ({})", plan.schedule(), plan.timezone),
    );
    ui::detail("Target:", &plan.target);
    if verbose {
        println!();
        println!("{}", plan.service_block());
    }

    if !args.yes {
        println!();
        let confirmed = Confirm::new("Apply these changes?")
            .with_default(true)
            .with_help_message("Press Enter to confirm, or 'n' to cancel")
            .prompt()?;
        if !confirmed {
            println!("Aborted, nothing changed.");
            return Ok(());
        }
    }

    let backup = persist::create_backup(&compose_path)?;
    persist::write_atomic(&compose_path, &updated)?;

    let pb = ui::spinner("Validating compose file");
    let validation = serde_yaml::from_str::<serde_yaml::Value>(&updated)
        .map_err(|e| TowerupError::ValidationFailed {
            reason: format!("not parseable as YAML: {e}"),
        })
        .and_then(|_| compose.validate(&compose_path));
    pb.finish_and_clear();

    if let Err(e) = validation {
        persist::restore_backup(&backup, &compose_path)?;
        return Err(e);
    }

    // A watchtower container from a previous run would collide on the fixed
    // container_name when the stack comes up.
    if discovery::find_container_by_name(watchtower::CONTAINER_NAME)?.is_some() {
        docker::stop_and_remove(watchtower::CONTAINER_NAME)?;
    }

    let pb = ui::spinner("Restarting stack");
    let restart = compose.up(&compose_path);
    pb.finish_and_clear();
    restart?;

    ui::success(&format!(
        "Watchtower enabled, next check at {:02}:00 ({})",
        plan.hour, plan.timezone
    ));
    ui::detail("Backup:", &backup.display().to_string());

    Ok(())
}

fn plan_for(args: &EnableArgs, target: String) -> UpdatePlan {
    UpdatePlan {
        hour: args.hour,
        timezone: args.timezone.clone(),
        target,
    }
}
