//! Shared CLI plumbing
//!
//! Logging initialization, console message helpers, output writers and
//! common arguments used by the `complexity-analyzer` binary.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

pub use args::{ConfigArgs, OutputArgs};
pub use output::OutputWriter;

/// Initializes logging; `verbose` lowers the level to DEBUG
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Prints the tool header
pub fn print_header(name: &str, version: &str, description: &str) {
    eprintln!("{} {} - {}", "🔧".blue(), name.bold().blue(), version.dimmed());
    eprintln!("{}\n", description.dimmed());
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "✅".green(), message.green());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red());
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ️".blue(), message);
}

/// Checks that a file or directory exists
pub fn validate_path(path: &Path, description: &str) -> Result<()> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "{} does not exist: {}",
            description,
            path.display()
        ));
    }
    Ok(())
}

/// Creates the parent directory of an output file if needed
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))
        }
        _ => Ok(()),
    }
}

/// Human-readable duration
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{:03}s", secs, millis)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
