//! Console output helpers

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn heading(text: &str) {
    println!("{}", Style::new().bold().apply_to(text));
}

pub fn success(text: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("✓"), text);
}

pub fn warn(text: &str) {
    eprintln!("{} {}", Style::new().yellow().bold().apply_to("!"), text);
}

pub fn detail(label: &str, value: &str) {
    println!("  {} {}", Style::new().bold().apply_to(label), value);
}

/// Spinner shown around container runtime calls.
#[allow(clippy::unwrap_used)] // static template
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
