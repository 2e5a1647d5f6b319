//! Core utilities and shared types
//!
//! Line-oriented record parsing shared by the index file and tree manifests.

use crate::config::ParseMode;
use crate::errors::{Error, Result};
use std::path::Path;

/// Parse newline-separated records, honoring the configured [`ParseMode`]
///
/// Blank lines are skipped silently. A line for which `parse_line` returns
/// `None` is malformed: lenient mode logs and drops it, strict mode fails with
/// [`Error::MalformedRecord`] carrying the 1-based line number.
pub fn parse_records<T>(
    content: &str,
    origin: &Path,
    mode: ParseMode,
    parse_line: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (line_number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(record) => records.push(record),
            None if mode == ParseMode::Lenient => {
                log::warn!(
                    "skipping malformed record in {} at line {}: {:?}",
                    origin.display(),
                    line_number + 1,
                    line
                );
            }
            None => {
                return Err(Error::MalformedRecord {
                    file: origin.to_path_buf(),
                    line: line_number + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(records)
}
