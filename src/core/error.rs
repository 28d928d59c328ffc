//! Error types for the logger system

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log directory could not be resolved or created
    #[error("Logger setup failed for '{}': {source}", .path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Daily log file could not be opened
    #[error("Log output unavailable at '{}': {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Crash dump could not be written
    #[error("Failed to write crash dump '{}': {source}", .path.display())]
    DumpWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a configuration error for a directory
    pub fn configuration(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::Configuration {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an output-unavailable error for a log file
    pub fn output_unavailable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::OutputUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn dump_write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::DumpWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
