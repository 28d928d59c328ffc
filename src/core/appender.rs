//! Appender trait and the logger's active output target

use super::{error::Result, log_entry::LogEntry};
use crate::appenders::{ConsoleAppender, DailyFileAppender};
use chrono::NaiveDate;
use std::path::Path;

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    /// Write raw text (already newline-terminated) to the destination
    fn append_raw(&mut self, text: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Where output currently goes; a file and stdout are never active together.
pub enum OutputTarget {
    Stdout(ConsoleAppender),
    File(DailyFileAppender),
}

impl OutputTarget {
    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout(_))
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            OutputTarget::File(file) => Some(file.path()),
            OutputTarget::Stdout(_) => None,
        }
    }

    /// Date the open file was named for, if any
    pub fn file_date(&self) -> Option<NaiveDate> {
        match self {
            OutputTarget::File(file) => Some(file.date()),
            OutputTarget::Stdout(_) => None,
        }
    }

    pub fn appender_mut(&mut self) -> &mut dyn Appender {
        match self {
            OutputTarget::Stdout(console) => console,
            OutputTarget::File(file) => file,
        }
    }
}
