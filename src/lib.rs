//! # Rust Daily Logger
//!
//! A process-wide leveled logger that writes day-stamped log files, or
//! standard output when no file name is configured, and leaves a crash
//! dump behind on fatal errors before ending the process.
//!
//! ## Features
//!
//! - **Level Filtering**: below-threshold calls return before any formatting
//! - **Daily Files**: `{dir}/{name}{YYYYMMDD}.log`, rotated on day change
//! - **Crash Dumps**: fatal entries write `core-{name}.{MMDD}-{HHMMSS}.panic`
//!   next to the executable and exit with status 1
//! - **Thread Safe**: every line is written whole under a single lock
//!
//! ```no_run
//! use rust_daily_logger::{fatal, info, warn};
//!
//! rust_daily_logger::configure("/var/log/gateway", "gateway").unwrap();
//! rust_daily_logger::set_min_level(rust_daily_logger::LogLevel::Info);
//!
//! info!("listening on port {}", 8080);
//! warn!("cache miss ratio {:.2}", 0.42);
//! fatal!("cannot bind socket");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ColorEcho, ConsoleAppender, DailyFileAppender, NoEcho};
    pub use crate::core::{
        Appender, Clock, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        ManualClock, Result, SystemClock,
    };
}

pub use appenders::{ColorEcho, ConsoleAppender, DailyFileAppender, NoEcho};
pub use core::{
    Appender, Clock, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    ManualClock, Result, SystemClock,
};
pub use global::{apply_config, configure, logger, refresh_output_target, set_min_level, shutdown};
