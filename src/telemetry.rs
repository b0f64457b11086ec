//! Tracing initialization.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;
use crate::error::{MonitorError, Result};

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Installs the global subscriber: stdout formatting filtered by `RUST_LOG`,
/// falling back to the configured level. Can only succeed once per process.
pub fn init(config: &TelemetryConfig) -> Result<()> {
    let level = config.log_level.to_lowercase();
    if !VALID_LEVELS.contains(&level.as_str()) {
        return Err(MonitorError::invalid_input(
            "log_level",
            format!(
                "invalid log level '{}', must be one of: {}",
                config.log_level,
                VALID_LEVELS.join(", ")
            ),
        ));
    }

    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(MonitorError::internal("tracing has already been initialized"));
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| MonitorError::internal(format!("failed to initialize tracing: {}", e)))
}
