//! Ignore-file pattern matching
//!
//! Patterns follow the familiar gitignore subset:
//!
//! - blank lines and lines starting with `#` are skipped
//! - a leading `!` negates the pattern (re-includes a previously ignored path)
//! - a trailing `/` restricts the pattern to directories
//! - a pattern containing `/` is matched against the whole root-relative path
//!   (a leading `/` only anchors it); otherwise only the final component is
//!   matched
//!
//! Every pattern is evaluated in file order and each match sets or clears the
//! ignored flag, so the last matching pattern wins. The metadata directory is
//! excluded unconditionally before any pattern is looked at.

use crate::errors::{IoContext, Result};
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
struct IgnorePattern {
    glob: Pattern,
    negated: bool,
    directory_only: bool,
    /// Matched against the full relative path rather than the file name
    full_path: bool,
}

impl IgnorePattern {
    fn parse(line: &str) -> Option<Self> {
        let mut pattern = line.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return None;
        }

        let negated = match pattern.strip_prefix('!') {
            Some(rest) => {
                pattern = rest.trim();
                true
            }
            None => false,
        };

        let directory_only = match pattern.strip_suffix('/') {
            Some(rest) => {
                pattern = rest;
                true
            }
            None => false,
        };

        let full_path = pattern.contains('/');
        let pattern = pattern.trim_start_matches('/');

        if pattern.is_empty() {
            log::warn!("skipping empty ignore pattern {line:?}");
            return None;
        }

        match Pattern::new(pattern) {
            Ok(glob) => Some(IgnorePattern {
                glob,
                negated,
                directory_only,
                full_path,
            }),
            Err(err) => {
                log::warn!("skipping invalid ignore pattern {line:?}: {err}");
                None
            }
        }
    }

    fn matches(&self, relative_path: &str, is_dir: bool) -> bool {
        if self.directory_only && !is_dir {
            return false;
        }

        let candidate = if self.full_path {
            relative_path
        } else {
            relative_path.rsplit('/').next().unwrap_or(relative_path)
        };

        self.glob.matches_with(candidate, MATCH_OPTIONS)
    }
}

/// Ordered ignore rules for one working tree
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    metadata_dir: String,
    patterns: Vec<IgnorePattern>,
}

impl IgnoreRules {
    pub fn parse(content: &str, metadata_dir: impl Into<String>) -> Self {
        IgnoreRules {
            metadata_dir: metadata_dir.into(),
            patterns: content.lines().filter_map(IgnorePattern::parse).collect(),
        }
    }

    /// Read the ignore file; a missing file means nothing is ignored
    pub fn load(ignore_file: &Path, metadata_dir: impl Into<String>) -> Result<Self> {
        let content = match std::fs::read_to_string(ignore_file) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err).at_path(ignore_file),
        };

        Ok(Self::parse(&content, metadata_dir))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True for the metadata directory itself and anything below it
    pub fn is_metadata(&self, relative_path: &str) -> bool {
        relative_path
            .split('/')
            .next()
            .is_some_and(|first| first == self.metadata_dir)
    }

    /// Decide whether a root-relative, forward-slash path is ignored
    pub fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool {
        if self.is_metadata(relative_path) {
            return true;
        }

        self.patterns
            .iter()
            .filter(|pattern| pattern.matches(relative_path, is_dir))
            .fold(false, |_, pattern| !pattern.negated)
    }

    /// Like [`is_ignored`](Self::is_ignored) for a file, but also true when any
    /// parent directory is ignored, since the scanner never descends into it
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        let parent_ignored = relative_path
            .match_indices('/')
            .any(|(offset, _)| self.is_ignored(&relative_path[..offset], true));

        parent_ignored || self.is_ignored(relative_path, false)
    }
}
