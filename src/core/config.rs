//! Logger configuration and directory resolution

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Declarative logger settings
///
/// # Examples
///
/// ```
/// use rust_daily_logger::core::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{
///     "directory": "/var/log/gateway",
///     "base_name": "gateway",
///     "min_level": "Warn"
/// }"#).unwrap();
///
/// assert_eq!(config.base_name, "gateway");
/// assert_eq!(config.min_level, LogLevel::Warn);
/// assert!(!config.color_echo);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log directory; empty means the executable's directory
    pub directory: PathBuf,
    /// Base file name; empty means standard output
    pub base_name: String,
    pub min_level: LogLevel,
    /// Echo colorized lines to an interactive stdout while writing to a file
    pub color_echo: bool,
}

impl LoggerConfig {
    pub fn new(directory: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_color_echo(mut self, enabled: bool) -> Self {
        self.color_echo = enabled;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Directory holding the running executable
pub fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })
}

/// Resolve the configured directory (empty ⇒ executable directory) and make
/// sure it exists.
pub fn prepare_directory(directory: &Path) -> Result<PathBuf> {
    let directory = if directory.as_os_str().is_empty() {
        executable_dir().map_err(|e| LoggerError::configuration(directory, e))?
    } else {
        directory.to_path_buf()
    };

    match create_dir_all(&directory) {
        Ok(()) => Ok(directory),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(directory),
        Err(e) => Err(LoggerError::configuration(&directory, e)),
    }
}

fn create_dir_all(directory: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(directory)
}
