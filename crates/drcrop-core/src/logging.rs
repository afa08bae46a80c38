//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Application directory name used under the platform data/config dirs
pub const APP_DIR_NAME: &str = "dr-crop";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/dr-crop/logs/` because the terminal
/// itself is owned by the TUI.
/// Log level is controlled by `DRCROP_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DRCROP_LOG=debug cargo run
/// DRCROP_LOG=drcrop_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "drcrop.log");

    // Default to info, allow override via DRCROP_LOG
    let env_filter = EnvFilter::try_from_env("DRCROP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("dr_crop=info,drcrop_app=info,drcrop_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Dr. Crop starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join(APP_DIR_NAME).join("logs"))
}
