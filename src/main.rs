//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout.

use anyhow::Result;
use assistant_bot::{run_session, AddressBook, Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep the console dialogue on stdout clean)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Birthday window: {} days{}",
        config.birthday_window_days,
        if config.today_override.is_some() {
            " (fixed date)"
        } else {
            ""
        }
    );

    let mut assistant = Assistant::new(
        AddressBook::new(),
        config.clock(),
        config.birthday_window_days,
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut assistant, stdin.lock(), stdout.lock())?;

    Ok(())
}
