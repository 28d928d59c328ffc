//! Logging macros for ergonomic log message formatting.
//!
//! Each severity macro has two forms: without a logger argument it writes
//! through the process-wide logger, with one it writes through that logger.
//! Arguments are only formatted when the level passes the threshold.
//!
//! # Examples
//!
//! ```
//! use rust_daily_logger::prelude::*;
//! use rust_daily_logger::info;
//!
//! // Process-wide logger (standard output until configured)
//! info!("Server started");
//!
//! // A specific logger
//! let logger = Logger::new();
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level through a specific logger.
///
/// # Examples
///
/// ```
/// # use rust_daily_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_daily_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_daily_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_daily_logger::debug;
/// debug!("Counter value: {}", 10);
/// debug!(logger, "Debug information");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().debug(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_daily_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_daily_logger::info;
/// info!("Processing {} items", 100);
/// info!(logger, "Application started");
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().info(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_daily_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_daily_logger::warn;
/// warn!("Retry attempt {} of {}", 3, 5);
/// warn!(logger, "Low disk space");
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().warn(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_daily_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_daily_logger::error;
/// error!("Failed to connect to {}", "db.internal");
/// error!(logger, "Request failed");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().error(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Log a fatal message, write a crash dump and exit the process.
///
/// Evaluates to `!`: code after it never runs.
///
/// # Examples
///
/// ```no_run
/// use rust_daily_logger::fatal;
///
/// fn load_settings() -> Result<String, std::io::Error> {
///     std::fs::read_to_string("/etc/gateway.json")
/// }
///
/// let settings = match load_settings() {
///     Ok(settings) => settings,
///     Err(e) => fatal!("cannot read settings: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::logger().fatal(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}
