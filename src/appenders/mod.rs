//! Appender implementations

pub mod console;
pub mod file;

#[cfg(feature = "console")]
pub use console::TerminalEcho;
pub use console::{echo_strategy, ColorEcho, ConsoleAppender, NoEcho};
pub use file::{daily_log_path, DailyFileAppender};

// Re-export trait for convenience
pub use crate::core::Appender;
