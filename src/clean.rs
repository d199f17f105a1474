//! Line cleaning for tab-separated token/tag files.
//!
//! Every raw line becomes one of:
//!
//! - a token/tag pair, when it splits on a tab into exactly two non-empty fields
//! - a sentence separator, when it is blank or does not split into two fields
//! - nothing, when it splits into two fields but one is empty after removing
//!   byte-order marks
//!
//! Malformed input never fails; it degrades to a separator.

use crate::scheme::{TagPolicy, TagVocabulary};

/// Byte-order mark left on token text by BOM-prefixed files.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// One cleaned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanLine {
    /// A token with its tag.
    Token {
        /// Token text, BOM removed.
        text: String,
        /// Tag as written (or coerced).
        tag: String,
    },
    /// Sentence boundary.
    Separator,
}

impl CleanLine {
    /// Build a token line.
    pub fn token(text: impl Into<String>, tag: impl Into<String>) -> Self {
        CleanLine::Token {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Check if this line is a separator.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        matches!(self, CleanLine::Separator)
    }
}

/// Normalizes raw token/tag lines.
#[derive(Debug, Clone)]
pub struct LineCleaner {
    policy: TagPolicy,
    vocabulary: TagVocabulary,
}

impl Default for LineCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCleaner {
    /// Cleaner that keeps every tag as written.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: TagPolicy::Passthrough,
            vocabulary: TagVocabulary::iob(),
        }
    }

    /// Set the unknown-tag policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TagPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the vocabulary used by [`TagPolicy::CoerceUnknown`].
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: TagVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Clean a single line. `None` means the line is dropped.
    #[must_use]
    pub fn clean_line(&self, line: &str) -> Option<CleanLine> {
        let line = line.trim_matches(is_strip_char);
        if line.is_empty() {
            return Some(CleanLine::Separator);
        }

        let mut fields = line.split('\t');
        let (text, tag) = match (fields.next(), fields.next(), fields.next()) {
            (Some(text), Some(tag), None) => (text, tag),
            _ => return Some(CleanLine::Separator),
        };

        let text = text.replace(BYTE_ORDER_MARK, "");
        if text.is_empty() || tag.is_empty() {
            return None;
        }

        let tag = self.policy.apply(tag.to_string(), &self.vocabulary);
        Some(CleanLine::Token { text, tag })
    }

    /// Clean a sequence of lines.
    pub fn clean<I, S>(&self, lines: I) -> Vec<CleanLine>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.clean_line(line.as_ref()))
            .collect()
    }
}

/// Whitespace as Python's `str.strip()` sees it: Unicode whitespace plus the
/// file, group, record and unit separators.
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}
