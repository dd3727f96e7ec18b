//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the GrandPrix booking core.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{GrandPrixError, Result};

/// Initialize logging based on configuration.
///
/// When a log directory is configured, records are also written to a daily
/// rolling file. The returned guard flushes that writer on drop and must be
/// held for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| GrandPrixError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| GrandPrixError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log booking workflow steps with structured data
pub fn log_booking_action(booking_id: i64, action: &str, user_id: i64, details: Option<&str>) {
    info!(
        booking_id = booking_id,
        action = action,
        user_id = user_id,
        details = details,
        "Booking action performed"
    );
}

/// Log rejected booking attempts
pub fn log_booking_rejected(event_id: i64, user_id: i64, reason: &str) {
    warn!(
        event_id = event_id,
        user_id = user_id,
        reason = reason,
        "Booking rejected"
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, target: &str, id: i64, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        id = id,
        details = details,
        "Admin action performed"
    );
}

/// Log snapshot reads and writes
pub fn log_storage_operation(operation: &str, collection: &str, records: usize, success: bool) {
    if success {
        debug!(
            operation = operation,
            collection = collection,
            records = records,
            "Storage operation completed"
        );
    } else {
        error!(
            operation = operation,
            collection = collection,
            records = records,
            "Storage operation failed"
        );
    }
}
