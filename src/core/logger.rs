//! Main logger implementation

use super::{
    appender::{Appender, OutputTarget},
    config::{executable_dir, prepare_directory, LoggerConfig},
    error::Result,
    fatal,
    log_entry::LogEntry,
    log_level::LogLevel,
    timestamp::{Clock, SystemClock},
};
use crate::appenders::{echo_strategy, ColorEcho, ConsoleAppender, DailyFileAppender, NoEcho};
use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration and output target of a configured logger
struct LoggerState {
    directory: PathBuf,
    base_name: String,
    target: Option<OutputTarget>,
}

impl LoggerState {
    /// Re-resolve the output target for `today`.
    ///
    /// A new file is opened before the old one is dropped. On open failure
    /// a previously open file stays in use; without one, output becomes
    /// unavailable until the next successful refresh.
    fn refresh(&mut self, today: NaiveDate) {
        if self.base_name.is_empty() {
            // Replacing the target closes any file we were writing to.
            self.target = Some(OutputTarget::Stdout(ConsoleAppender::new()));
            return;
        }

        match DailyFileAppender::open(&self.directory, &self.base_name, today) {
            Ok(appender) => {
                let previous = self.target.replace(OutputTarget::File(appender));
                drop(previous);
            }
            Err(e) => {
                let has_file = matches!(self.target, Some(OutputTarget::File(_)));
                if has_file {
                    eprintln!("[LOGGER ERROR] {}. Keeping previous log file.", e);
                } else {
                    eprintln!("[LOGGER ERROR] {}", e);
                    self.target = None;
                }
            }
        }
    }

    /// Rotate when the open file was named for another day
    fn rotate_if_stale(&mut self, today: NaiveDate) {
        let stale = matches!(
            self.target.as_ref().and_then(OutputTarget::file_date),
            Some(date) if date != today
        );
        if stale {
            self.refresh(today);
        }
    }
}

pub struct Logger {
    min_level: RwLock<LogLevel>,
    state: Mutex<Option<LoggerState>>,
    clock: Arc<dyn Clock>,
    echo: RwLock<Box<dyn ColorEcho>>,
    refresh_on_write: bool,
}

impl Logger {
    /// Create an unconfigured logger; every emit is a no-op until
    /// [`Logger::configure`] succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a logger builder
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_daily_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Info)
    ///     .build();
    /// logger.configure("/var/log/gateway", "gateway").unwrap();
    /// logger.info(format_args!("listening on {}", 8080));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Point the logger at `directory` (empty: the executable's directory)
    /// and `base_name` (empty: standard output).
    ///
    /// The directory is created if missing. If that fails the logger is
    /// left unconfigured and the error is returned.
    pub fn configure(&self, directory: impl AsRef<Path>, base_name: impl Into<String>) -> Result<()> {
        let mut guard = self.state.lock();

        let directory = match prepare_directory(directory.as_ref()) {
            Ok(directory) => directory,
            Err(e) => {
                eprintln!("[LOGGER ERROR] logger setup error! {}", e);
                *guard = None;
                return Err(e);
            }
        };

        let previous = guard.take().and_then(|state| state.target);
        let mut state = LoggerState {
            directory,
            base_name: base_name.into(),
            target: previous,
        };
        state.refresh(self.clock.today());
        *guard = Some(state);
        Ok(())
    }

    /// Apply a whole [`LoggerConfig`]: threshold, echo strategy, then target
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<()> {
        self.set_min_level(config.min_level);
        self.set_color_echo(echo_strategy(config.color_echo));
        self.configure(&config.directory, config.base_name.clone())
    }

    /// Close any open file and forget the configuration
    pub fn shutdown(&self) {
        let mut guard = self.state.lock();
        if let Some(mut state) = guard.take() {
            if let Some(target) = state.target.as_mut() {
                if let Err(e) = target.appender_mut().flush() {
                    eprintln!("[LOGGER ERROR] flush on shutdown failed: {}", e);
                }
            }
        }
    }

    /// Re-resolve the output target for the current day
    pub fn refresh_output_target(&self) {
        let today = self.clock.today();
        if let Some(state) = self.state.lock().as_mut() {
            state.refresh(today);
        }
    }

    /// Set the minimum emitted level. Raw integers outside 1..=5 clamp to Debug.
    pub fn set_min_level(&self, level: impl Into<LogLevel>) {
        *self.min_level.write() = level.into();
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_color_echo(&self, echo: Box<dyn ColorEcho>) {
        *self.echo.write() = echo;
    }

    /// Name of the installed echo strategy
    pub fn color_echo_name(&self) -> String {
        self.echo.read().name().to_string()
    }

    /// Whether the logger holds a configuration (not shut down, setup succeeded)
    pub fn is_configured(&self) -> bool {
        self.state.lock().is_some()
    }

    /// Whether output currently goes to standard output
    pub fn is_stdout(&self) -> bool {
        self.state
            .lock()
            .as_ref()
            .and_then(|state| state.target.as_ref())
            .is_some_and(OutputTarget::is_stdout)
    }

    /// Path of the log file currently open, if any
    pub fn current_file(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .as_ref()
            .and_then(|state| state.target.as_ref())
            .and_then(|target| target.file_path().map(Path::to_path_buf))
    }

    /// Resolved log directory
    pub fn directory(&self) -> Option<PathBuf> {
        self.state.lock().as_ref().map(|state| state.directory.clone())
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        if level == LogLevel::Fatal {
            self.fatal_at(args, location);
        }
        self.log_at(level, args, location);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log_at(LogLevel::Debug, args, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log_at(LogLevel::Info, args, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log_at(LogLevel::Warn, args, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log_at(LogLevel::Error, args, Location::caller());
    }

    /// Write a fatal entry, dump the stack next to the executable and exit
    /// the process with status 1.
    ///
    /// On an unconfigured logger nothing is written but the process still exits.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_at(args, Location::caller())
    }

    fn log_at(&self, level: LogLevel, args: fmt::Arguments<'_>, location: &'static Location<'static>) {
        if level < *self.min_level.read() {
            return;
        }

        // Formatting may call back into this logger, so it happens unlocked.
        let entry = LogEntry::from_args(level, args, self.clock.now()).with_location(location);

        let mut guard = self.state.lock();
        let Some(state) = guard.as_mut() else {
            return;
        };
        self.write_locked(state, &entry);
    }

    fn fatal_at(&self, args: fmt::Arguments<'_>, location: &'static Location<'static>) -> ! {
        let now = self.clock.now();
        let entry = LogEntry::from_args(LogLevel::Fatal, args, now).with_location(location);

        // The guard is held until exit so nothing lands after the fatal line.
        let mut guard = self.state.lock();
        if let Some(state) = guard.as_mut() {
            let line = entry.render();
            self.write_locked(state, &entry);

            let stack = fatal::capture_stack();
            if let Some(target) = state.target.as_mut() {
                write_stack(target.appender_mut(), &stack);
            }

            match executable_dir() {
                Ok(dir) => {
                    let path = fatal::dump_path(&dir, &state.base_name, &now);
                    if let Err(e) = fatal::write_dump(&path, &line, &stack) {
                        eprintln!("[LOGGER ERROR] {}", e);
                    }
                }
                Err(e) => eprintln!("[LOGGER ERROR] cannot locate crash dump directory: {}", e),
            }
        }
        fatal::terminate()
    }

    fn write_locked(&self, state: &mut LoggerState, entry: &LogEntry) {
        if self.refresh_on_write {
            state.rotate_if_stale(entry.timestamp.date_naive());
        }

        let Some(target) = state.target.as_mut() else {
            return;
        };

        let appender = target.appender_mut();
        if let Err(e) = appender.append(entry).and_then(|()| appender.flush()) {
            eprintln!("[LOGGER ERROR] {} write failed: {}", appender.name(), e);
            return;
        }

        if !target.is_stdout() {
            self.echo.read().echo(entry);
        }
    }
}

/// Append the fatal stack to `appender`; failures are reported, not returned.
fn write_stack(appender: &mut dyn Appender, stack: &str) -> bool {
    match appender.append_raw(stack).and_then(|()| appender.flush()) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("[LOGGER ERROR] {} stack write failed: {}", appender.name(), e);
            false
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("current_file", &self.current_file())
            .field("clock", &self.clock)
            .field("refresh_on_write", &self.refresh_on_write)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use rust_daily_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .clock(Arc::new(SystemClock))
///     .refresh_on_write(false)
///     .build();
/// assert_eq!(logger.min_level(), LogLevel::Warn);
/// assert!(!logger.is_configured());
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    clock: Arc<dyn Clock>,
    echo: Box<dyn ColorEcho>,
    refresh_on_write: bool,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
            clock: Arc::new(SystemClock),
            echo: Box::new(NoEcho),
            refresh_on_write: true,
        }
    }

    #[must_use]
    pub fn min_level(mut self, level: impl Into<LogLevel>) -> Self {
        self.min_level = level.into();
        self
    }

    /// Time source for line stamps, file names and dump names
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn color_echo(mut self, echo: Box<dyn ColorEcho>) -> Self {
        self.echo = echo;
        self
    }

    /// Check for a day change before every write (default: on).
    ///
    /// When off, files only rotate through [`Logger::refresh_output_target`].
    #[must_use]
    pub fn refresh_on_write(mut self, enabled: bool) -> Self {
        self.refresh_on_write = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            min_level: RwLock::new(self.min_level),
            state: Mutex::new(None),
            clock: self.clock,
            echo: RwLock::new(self.echo),
            refresh_on_write: self.refresh_on_write,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
