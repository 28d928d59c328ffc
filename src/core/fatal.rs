//! Crash dump and process termination for fatal log entries

use super::error::{LoggerError, Result};
use super::timestamp::dump_stamp;
use chrono::{DateTime, Local};
use std::backtrace::Backtrace;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Upper bound on captured stack text, in bytes
pub const STACK_CAPTURE_LIMIT: usize = 16 * 1024;

/// Exit status used after a fatal entry
pub const FATAL_EXIT_CODE: i32 = 1;

/// Capture the calling thread's stack as text, truncated to
/// [`STACK_CAPTURE_LIMIT`] bytes on a character boundary.
pub fn capture_stack() -> String {
    let mut text = Backtrace::force_capture().to_string();
    if text.len() > STACK_CAPTURE_LIMIT {
        let mut end = STACK_CAPTURE_LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

/// `{directory}/core-{base_name}.{MMDD}-{HHMMSS}.panic`
#[must_use]
pub fn dump_path(directory: &Path, base_name: &str, now: &DateTime<Local>) -> PathBuf {
    directory.join(format!("core-{}.{}.panic", base_name, dump_stamp(now)))
}

/// Write the fatal line followed by the stack text
pub fn write_dump(path: &Path, line: &str, stack: &str) -> Result<()> {
    let mut file = crate::appenders::file::open_append(path)
        .map_err(|e| LoggerError::dump_write(path, e))?;

    let mut contents = String::with_capacity(line.len() + stack.len() + 1);
    contents.push_str(line);
    contents.push('\n');
    contents.push_str(stack);

    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| LoggerError::dump_write(path, e))
}

/// End the process. Nothing after a fatal entry runs.
pub fn terminate() -> ! {
    std::process::exit(FATAL_EXIT_CODE)
}
