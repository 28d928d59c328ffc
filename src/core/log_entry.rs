//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp::line_stamp;
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use std::panic::Location;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String, timestamp: DateTime<Local>) -> Self {
        Self {
            level,
            message,
            timestamp,
            file: None,
            line: None,
        }
    }

    /// Build an entry from caller-supplied format arguments.
    ///
    /// Formatting is best-effort: if a `Display` implementation reports an
    /// error, the text produced up to that point is kept.
    pub fn from_args(level: LogLevel, args: fmt::Arguments<'_>, timestamp: DateTime<Local>) -> Self {
        let mut message = String::new();
        let _ = message.write_fmt(args);
        Self::new(level, message, timestamp)
    }

    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.file = Some(location.file());
        self.line = Some(location.line());
        self
    }

    /// `<LEVEL> message`
    pub fn tagged_message(&self) -> String {
        let mut out = String::with_capacity(self.level.prefix().len() + self.message.len());
        out.push_str(self.level.prefix());
        out.push_str(&self.message);
        out
    }

    /// `YYYY/MM/DD HH:MM:SS file.rs:LINE: ` (location part omitted when unknown)
    pub fn header(&self) -> String {
        let mut out = line_stamp(&self.timestamp);
        out.push(' ');
        if let (Some(file), Some(line)) = (self.file, self.line) {
            let short = Path::new(file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(file);
            let _ = write!(out, "{}:{}: ", short, line);
        }
        out
    }

    /// Full output line without the trailing newline
    pub fn render(&self) -> String {
        let mut out = self.header();
        out.push_str(self.level.prefix());
        out.push_str(&self.message);
        out
    }
}
