//! Reading a written log back into events

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::event::LogEvent;
use super::format::parse_line;
use crate::error::{self, Result};

/// Parse every line from `reader`, in order. Blank lines are skipped.
///
/// # Errors
///
/// - `Error::Io` if reading fails
/// - `Error::LogParse` with the 1-based line number of the first bad line
pub fn load_log<R: BufRead>(reader: R) -> Result<Vec<LogEvent>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| error::io("read log", e))?;
        if line.trim().is_empty() {
            continue;
        }
        let event = parse_line(&line).map_err(|reason| error::log_parse(index + 1, reason))?;
        events.push(event);
    }
    Ok(events)
}

/// [`load_log`] over an in-memory string
///
/// # Errors
///
/// Returns `Error::LogParse` for the first malformed line.
pub fn parse_log(text: &str) -> Result<Vec<LogEvent>> {
    load_log(text.as_bytes())
}

/// [`load_log`] over a file
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened or read, and
/// `Error::LogParse` for the first malformed line.
pub fn load_log_file(path: impl AsRef<Path>) -> Result<Vec<LogEvent>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| error::io_at(path, "open log file", e))?;
    load_log(BufReader::new(file))
}
