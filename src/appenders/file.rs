//! Day-stamped file appender

use crate::core::timestamp::day_stamp;
use crate::core::{Appender, LogEntry, LoggerError, Result};
use chrono::NaiveDate;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Mode requested for newly created log and dump files (subject to umask)
#[cfg(unix)]
pub(crate) const FILE_MODE: u32 = 0o666;

/// `{directory}/{base_name}{YYYYMMDD}.log`
///
/// # Examples
///
/// ```
/// use rust_daily_logger::appenders::daily_log_path;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let path = daily_log_path(Path::new("/var/log/svc"), "foo", date);
/// assert_eq!(path, Path::new("/var/log/svc/foo20240305.log"));
/// ```
#[must_use]
pub fn daily_log_path(directory: &Path, base_name: &str, date: NaiveDate) -> PathBuf {
    directory.join(format!("{}{}.log", base_name, day_stamp(date)))
}

/// Open `path` for appending, creating it if absent
pub(crate) fn open_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}

pub struct DailyFileAppender {
    path: PathBuf,
    date: NaiveDate,
    writer: BufWriter<File>,
}

impl DailyFileAppender {
    /// Open (or create) the log file for `date`. Existing content is kept.
    pub fn open(directory: &Path, base_name: &str, date: NaiveDate) -> Result<Self> {
        let path = daily_log_path(directory, base_name, date);
        let file = open_append(&path).map_err(|e| LoggerError::output_unavailable(&path, e))?;

        Ok(Self {
            path,
            date,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Appender for DailyFileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = entry.render();
        output.push('\n');
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn append_raw(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for DailyFileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
