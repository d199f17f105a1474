//! Sentence records: the nested JSON unit of a training corpus.
//!
//! A corpus is a JSON array of records shaped like this:
//!
//! ```json
//! {
//!   "id": 0,
//!   "paragraphs": [{
//!     "sentences": [{
//!       "tokens": [
//!         { "orth": "John", "tag": "-", "ner": "B-PER" },
//!         { "orth": "Smith", "tag": "-", "ner": "L-PER" }
//!       ]
//!     }]
//!   }]
//! }
//! ```
//!
//! The paragraph and sentence lists are always singletons; the nesting is
//! structural only.

use serde::{Deserialize, Serialize};

/// Filler value for the part-of-speech slot of every token.
pub const POS_PLACEHOLDER: &str = "-";

/// A single token with its entity tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Surface form of the token.
    #[serde(rename = "orth")]
    pub text: String,
    /// Part-of-speech slot, always [`POS_PLACEHOLDER`].
    #[serde(rename = "tag")]
    pub pos: String,
    /// Entity tag.
    #[serde(rename = "ner")]
    pub ner: String,
}

impl TokenRecord {
    /// Create a token with the placeholder part-of-speech.
    #[must_use]
    pub fn new(text: impl Into<String>, ner: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: POS_PLACEHOLDER.to_string(),
            ner: ner.into(),
        }
    }
}

/// Token list of one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Tokens in document order.
    pub tokens: Vec<TokenRecord>,
}

/// A paragraph wrapping exactly one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Sentences of the paragraph (always one).
    pub sentences: Vec<Sentence>,
}

/// One output unit of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Position of the record in its corpus.
    pub id: usize,
    /// Paragraphs of the record (always one).
    pub paragraphs: Vec<Paragraph>,
}

impl SentenceRecord {
    /// Wrap a token list into a record.
    #[must_use]
    pub fn new(id: usize, tokens: Vec<TokenRecord>) -> Self {
        Self {
            id,
            paragraphs: vec![Paragraph {
                sentences: vec![Sentence { tokens }],
            }],
        }
    }

    /// Tokens of the record, across all paragraphs and sentences.
    pub fn tokens(&self) -> impl Iterator<Item = &TokenRecord> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .flat_map(|s| s.tokens.iter())
    }

    /// Entity tags of the record in document order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tokens().map(|t| t.ner.as_str())
    }

    /// Number of tokens in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens().count()
    }

    /// Check if the record has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }
}

/// Reassign ids `0..n` in order.
pub fn renumber(records: &mut [SentenceRecord]) {
    for (id, record) in records.iter_mut().enumerate() {
        record.id = id;
    }
}
