//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod fatal;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use appender::{Appender, OutputTarget};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use timestamp::{Clock, ManualClock, SystemClock};
