//! Process-wide logger
//!
//! The first touch of [`logger()`] builds a [`Logger`] and configures it with
//! `configure("", "")`, i.e. standard-output mode. After that the instance
//! is reconfigured, refreshed and shut down through the functions below.

use crate::core::{LogLevel, Logger, LoggerConfig, Result};
use std::path::Path;
use std::sync::LazyLock;

static GLOBAL: LazyLock<Logger> = LazyLock::new(|| {
    let logger = Logger::new();
    // A failure here leaves the logger unconfigured; the error is already on stderr.
    let _ = logger.configure("", "");
    logger
});

/// The process-wide logger
pub fn logger() -> &'static Logger {
    &GLOBAL
}

/// Reconfigure the process-wide logger.
///
/// Startup code should treat an error as unrecoverable: no log target exists.
pub fn configure(directory: impl AsRef<Path>, base_name: impl Into<String>) -> Result<()> {
    logger().configure(directory, base_name)
}

pub fn apply_config(config: &LoggerConfig) -> Result<()> {
    logger().apply_config(config)
}

/// Close the log file; later emits are silently dropped
pub fn shutdown() {
    logger().shutdown();
}

pub fn set_min_level(level: impl Into<LogLevel>) {
    logger().set_min_level(level);
}

pub fn refresh_output_target() {
    logger().refresh_output_target();
}
