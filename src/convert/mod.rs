//! Converters from source annotation formats to sentence records.
//!
//! - [`IobConverter`]: tab-separated IOB token/tag files
//! - [`JsonlConverter`]: JSONL `[text, labels]` pairs
//!
//! Both return a [`Conversion`]: the entity-filtered records plus counters
//! for what was skipped on the way.

mod iob;
mod jsonl;

pub use iob::IobConverter;
pub use jsonl::{JsonlConverter, PERSON_LABEL, PER_LABEL};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::record::SentenceRecord;
use crate::Result;

/// Counters collected during one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Sentences built before entity filtering.
    pub sentences: usize,
    /// Sentences that survived entity filtering.
    pub kept: usize,
    /// JSONL lines skipped because token and label counts differ.
    pub mismatched: usize,
    /// IOB lines dropped because a field was empty after cleaning.
    pub dropped_lines: usize,
}

impl ConversionStats {
    /// Sentences removed by entity filtering.
    #[must_use]
    pub fn filtered_out(&self) -> usize {
        self.sentences - self.kept
    }
}

/// Result of converting one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Entity-bearing sentences, ids `0..n`.
    pub records: Vec<SentenceRecord>,
    /// Counters.
    pub stats: ConversionStats,
}

impl Conversion {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no record survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read all lines of a UTF-8 file, naming the file in any IO error.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    let with_path = |e: std::io::Error| std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e));

    let file = File::open(path).map_err(with_path)?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| with_path(e).into())
}
