//! Logging Infrastructure
//!
//! Console output always; JSON lines in production, human-readable otherwise.
//! When a log directory is configured, application logs are also written to
//! daily rotating files (`fittings-server.YYYY-MM-DD`).

use crate::core::Config;
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Filter used when `RUST_LOG` is not set
///
/// sqlx logs every statement at info, which drowns request logs.
fn default_directives(level: &str) -> String {
    format!("{level},sqlx=warn")
}

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - default level (e.g. "info", "debug")
/// * `json_format` - JSON console output (production)
/// * `log_dir` - optional directory for daily rotating files
///
/// # Examples
/// ```no_run
/// fittings_server::init_logger_with_file("debug", false, None)?;
/// fittings_server::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "fittings-server");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::sync::Mutex::new(appender)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging from the server configuration
///
/// JSON console output in production; file output when `log_dir` is set.
pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )
}
