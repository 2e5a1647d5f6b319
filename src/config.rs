//! Repository configuration
//!
//! A [`Config`] value is passed into every [`Repository`](crate::areas::repository::Repository)
//! instead of relying on process-wide path constants, so several repositories can
//! live in one process and tests stay hermetic.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

pub const METADATA_DIR: &str = ".twig";
pub const IGNORE_FILE: &str = ".twigignore";
pub const DEFAULT_BRANCH: &str = "main";

const AUTHOR_NAME_ENV: &str = "TWIG_AUTHOR_NAME";
const AUTHOR_DATE_ENV: &str = "TWIG_AUTHOR_DATE";
const STRICT_ENV: &str = "TWIG_STRICT";
const FALLBACK_AUTHOR: &str = "twig";

/// How index and tree records that fail to parse are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Abort the read with `Error::MalformedRecord`
    Strict,
    /// Log a warning and skip the offending line
    #[default]
    Lenient,
}

impl ParseMode {
    pub fn from_env() -> Self {
        match std::env::var(STRICT_ENV) {
            Ok(value) if matches!(value.as_str(), "1" | "true" | "yes") => ParseMode::Strict,
            _ => ParseMode::Lenient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub metadata_dir: String,
    pub ignore_file: String,
    pub default_branch: String,
    pub parse_mode: ParseMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            metadata_dir: METADATA_DIR.to_string(),
            ignore_file: IGNORE_FILE.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            parse_mode: ParseMode::default(),
        }
    }
}

impl Config {
    pub fn with_parse_mode(self, parse_mode: ParseMode) -> Self {
        Config { parse_mode, ..self }
    }
}

/// Commit author identity and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

impl Author {
    pub fn new(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Author {
            name: name.into(),
            timestamp: truncate_to_seconds(timestamp),
        }
    }

    /// Load the author from the environment
    ///
    /// Reads `TWIG_AUTHOR_NAME` (falling back to the OS user) and optionally
    /// `TWIG_AUTHOR_DATE`. Dates are accepted in RFC 3339 or
    /// `%Y-%m-%d %H:%M:%S %z` and converted to UTC. An unparsable date falls
    /// back to the current time.
    pub fn load_from_env() -> Self {
        let name = std::env::var(AUTHOR_NAME_ENV)
            .or_else(|_| std::env::var("USER"))
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());

        let timestamp = std::env::var(AUTHOR_DATE_ENV)
            .ok()
            .and_then(|date| parse_author_date(&date))
            .unwrap_or_else(Utc::now);

        Author::new(name, timestamp)
    }
}

fn parse_author_date(date: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(date)
        .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
        .map(|date| date.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").map(|naive| naive.and_utc())
        });

    match parsed {
        Ok(date) => Some(date),
        Err(_) => {
            log::warn!("ignoring unparsable {AUTHOR_DATE_ENV}: {date:?}");
            None
        }
    }
}

fn truncate_to_seconds(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
