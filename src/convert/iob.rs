//! IOB token/tag files → BILUO sentence records.

use std::path::Path;

use super::{read_lines, Conversion, ConversionStats};
use crate::clean::{CleanLine, LineCleaner};
use crate::filter::retain_entity_sentences;
use crate::record::{SentenceRecord, TokenRecord};
use crate::scheme::{IobToBiluo, Relabel, TagPolicy};
use crate::{Error, Result};

/// Converts tab-separated IOB files into BILUO sentence records.
///
/// Sentences are closed by separator lines only: tokens after the last
/// separator of a file are discarded.
///
/// ```rust
/// use biluo::IobConverter;
///
/// let lines = ["John\tB-PER", "Smith\tI-PER", "", "cat\tO", ""];
/// let conversion = IobConverter::new().convert_lines(lines).unwrap();
///
/// assert_eq!(conversion.records.len(), 1);
/// let tags: Vec<&str> = conversion.records[0].tags().collect();
/// assert_eq!(tags, ["B-PER", "L-PER"]);
/// ```
pub struct IobConverter {
    cleaner: LineCleaner,
    relabeler: Box<dyn Relabel>,
}

impl Default for IobConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IobConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IobConverter")
            .field("cleaner", &self.cleaner)
            .finish_non_exhaustive()
    }
}

impl IobConverter {
    /// Converter with the default cleaner and IOB → BILUO relabeling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cleaner: LineCleaner::new(),
            relabeler: Box::new(IobToBiluo),
        }
    }

    /// Set the unknown-tag policy of the line cleaner.
    #[must_use]
    pub fn with_policy(mut self, policy: TagPolicy) -> Self {
        self.cleaner = self.cleaner.with_policy(policy);
        self
    }

    /// Replace the line cleaner.
    #[must_use]
    pub fn with_cleaner(mut self, cleaner: LineCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Replace the tag relabeler.
    #[must_use]
    pub fn with_relabeler(mut self, relabeler: impl Relabel + 'static) -> Self {
        self.relabeler = Box::new(relabeler);
        self
    }

    /// Convert the file at `path`.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Conversion> {
        let path = path.as_ref();
        let lines = read_lines(path)?;
        let conversion = self.convert_lines(lines)?;

        log::info!(
            "{}: {} sentences, {} with entity tags, {} only 'O'",
            path.display(),
            conversion.stats.sentences,
            conversion.stats.kept,
            conversion.stats.filtered_out()
        );
        Ok(conversion)
    }

    /// Convert raw lines.
    pub fn convert_lines<I, S>(&self, lines: I) -> Result<Conversion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut buffer: Vec<TokenRecord> = Vec::new();
        let mut dropped_lines = 0;

        for (idx, line) in lines.into_iter().enumerate() {
            match self.cleaner.clean_line(line.as_ref()) {
                Some(CleanLine::Token { text, tag }) => buffer.push(TokenRecord::new(text, tag)),
                Some(CleanLine::Separator) => {
                    if !buffer.is_empty() {
                        let tokens = self.relabel(std::mem::take(&mut buffer))?;
                        records.push(SentenceRecord::new(records.len(), tokens));
                    }
                }
                None => {
                    dropped_lines += 1;
                    log::debug!("line {}: empty token after cleaning, dropped", idx + 1);
                }
            }
        }

        if !buffer.is_empty() {
            log::warn!(
                "{} trailing tokens without a closing blank line were discarded",
                buffer.len()
            );
        }

        let sentences = records.len();
        let records = retain_entity_sentences(records);
        Ok(Conversion {
            stats: ConversionStats {
                sentences,
                kept: records.len(),
                mismatched: 0,
                dropped_lines,
            },
            records,
        })
    }

    /// Relabel the tags of one sentence in place.
    fn relabel(&self, mut tokens: Vec<TokenRecord>) -> Result<Vec<TokenRecord>> {
        let tags: Vec<String> = tokens.iter().map(|t| t.ner.clone()).collect();
        let relabeled = self.relabeler.relabel(&tags)?;

        if relabeled.len() != tokens.len() {
            return Err(Error::invalid_input(format!(
                "Relabeler returned {} tags for {} tokens",
                relabeled.len(),
                tokens.len()
            )));
        }

        for (token, tag) in tokens.iter_mut().zip(relabeled) {
            token.ner = tag;
        }
        Ok(tokens)
    }
}
