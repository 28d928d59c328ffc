//! Log level definitions

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Bracketed tag written in front of every message, e.g. `<WARN> `
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "<DEBUG> ",
            LogLevel::Info => "<INFO> ",
            LogLevel::Warn => "<WARN> ",
            LogLevel::Error => "<ERROR> ",
            LogLevel::Fatal => "<FATAL> ",
        }
    }

    /// Convert a raw level number (1 = Debug .. 5 = Fatal).
    ///
    /// Anything outside that range clamps to [`LogLevel::Debug`].
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            _ => LogLevel::Debug,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug | LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error | LogLevel::Fatal => Red,
        }
    }
}

impl From<i32> for LogLevel {
    fn from(raw: i32) -> Self {
        LogLevel::from_raw(raw)
    }
}

/// Accepts a level name (`"Warn"`, `"error"`) or a raw number; numbers go
/// through [`LogLevel::from_raw`], so out-of-range values clamp to Debug.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LevelVisitor;

        impl Visitor<'_> for LevelVisitor {
            type Value = LogLevel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a log level name or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LogLevel, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LogLevel, E> {
                Ok(i32::try_from(v).map_or(LogLevel::Debug, LogLevel::from_raw))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LogLevel, E> {
                Ok(i32::try_from(v).map_or(LogLevel::Debug, LogLevel::from_raw))
            }
        }

        deserializer.deserialize_any(LevelVisitor)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
