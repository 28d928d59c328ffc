//! Console appender and colorized echo strategies

use crate::core::{Appender, LogEntry, Result};
use std::io::Write;

/// Writes log lines to standard output
#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = entry.render();
        output.push('\n');
        // One write under the stdout lock keeps the line whole
        std::io::stdout().lock().write_all(output.as_bytes())?;
        Ok(())
    }

    fn append_raw(&mut self, text: &str) -> Result<()> {
        std::io::stdout().lock().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Optional second copy of a line written to a file target.
///
/// Purely cosmetic; the logger calls it only when the active target is a
/// file, after the file write succeeded.
pub trait ColorEcho: Send + Sync {
    fn echo(&self, entry: &LogEntry);
    fn name(&self) -> &str;
}

/// Never echoes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEcho;

impl ColorEcho for NoEcho {
    fn echo(&self, _entry: &LogEntry) {}

    fn name(&self) -> &str {
        "none"
    }
}

/// Echoes a colorized copy to stdout when stdout is an interactive terminal
#[cfg(feature = "console")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEcho;

#[cfg(feature = "console")]
impl TerminalEcho {
    pub fn format(entry: &LogEntry) -> String {
        use colored::Colorize;

        format!(
            "{}{}{}",
            entry.header(),
            entry.level.prefix().color(entry.level.color_code()),
            entry.message
        )
    }
}

#[cfg(feature = "console")]
impl ColorEcho for TerminalEcho {
    fn echo(&self, entry: &LogEntry) {
        use std::io::IsTerminal;

        let stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return;
        }
        let mut output = Self::format(entry);
        output.push('\n');
        let _ = stdout.lock().write_all(output.as_bytes());
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

/// Echo strategy selected by the `color_echo` configuration flag
pub fn echo_strategy(enabled: bool) -> Box<dyn ColorEcho> {
    #[cfg(feature = "console")]
    {
        if enabled {
            return Box::new(TerminalEcho);
        }
    }
    #[cfg(not(feature = "console"))]
    let _ = enabled;

    Box::new(NoEcho)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::Local;

    #[test]
    fn test_console_appender_accepts_entries() {
        let mut appender = ConsoleAppender::new();
        let entry = LogEntry::new(LogLevel::Info, "to stdout".into(), Local::now());
        appender.append(&entry).unwrap();
        appender.flush().unwrap();
        assert_eq!(appender.name(), "console");
    }

    #[test]
    fn test_echo_strategy_selection() {
        assert_eq!(echo_strategy(false).name(), "none");
        #[cfg(feature = "console")]
        assert_eq!(echo_strategy(true).name(), "terminal");
        #[cfg(not(feature = "console"))]
        assert_eq!(echo_strategy(true).name(), "none");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_terminal_echo_never_fails() {
        // Writes only when stdout is a terminal; either way it must not panic
        let entry = LogEntry::new(LogLevel::Warn, "echo me".into(), Local::now());
        TerminalEcho.echo(&entry);
        NoEcho.echo(&entry);
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_terminal_echo_keeps_message() {
        colored::control::set_override(true);
        let entry = LogEntry::new(LogLevel::Error, "boom".into(), Local::now());
        let echoed = TerminalEcho::format(&entry);
        assert!(echoed.contains("<ERROR> "));
        assert!(echoed.ends_with("boom"));
        assert!(echoed.contains("\u{1b}["));
    }
}
