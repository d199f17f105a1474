//! # biluo
//!
//! NER training data conversion for Rust.
//!
//! - **IOB files**: tab-separated `token\ttag` lines, blank-line separated
//!   sentences, relabeled from IOB to BILUO
//! - **JSONL files**: `[text, labels]` pairs, re-tokenized and aligned to
//!   their labels, with `PERSON` rewritten to `PER`
//! - **Merging**: two IOB files and one JSONL file concatenated into one
//!   JSON corpus, keeping only sentences with an entity tag
//!
//! ## Quick Start
//!
//! ```rust
//! use biluo::{IobConverter, JsonlConverter, concat_corpora, corpus_to_string};
//!
//! let iob = IobConverter::new()
//!     .convert_lines(["John\tB-PER", "Smith\tI-PER", "", "cat\tO", ""])
//!     .unwrap();
//! let jsonl = JsonlConverter::new()
//!     .convert_lines([r#"["a b", ["O", "B-PERSON"]]"#])
//!     .unwrap();
//!
//! let corpus = concat_corpora([iob.records, jsonl.records]);
//! assert_eq!(corpus.len(), 2);
//! assert_eq!(corpus[1].id, 1);
//!
//! let json = corpus_to_string(&corpus).unwrap();
//! assert!(json.contains("\"ner\": \"L-PER\""));
//! ```
//!
//! ## Record Format
//!
//! Every sentence becomes one record with a single paragraph holding a single
//! sentence; each token carries `orth` (text), `tag` (always `-`) and `ner`.
//! Record ids always equal the record's position in its list.
//!
//! ## Pluggable Pieces
//!
//! Tag relabeling ([`Relabel`]) and tokenization ([`Tokenizer`]) are traits,
//! so converters can run against deterministic stand-ins.

#![warn(missing_docs)]

pub mod clean;
pub mod config;
pub mod convert;
mod error;
pub mod filter;
pub mod merge;
pub mod record;
pub mod scheme;
pub mod tokenize;

#[cfg(feature = "cli")]
pub mod cli;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    pub use crate::config::ConvertConfig;
    pub use crate::convert::{Conversion, ConversionStats, IobConverter, JsonlConverter};
    pub use crate::error::{Error, Result};
    pub use crate::merge::{concat_corpora, write_corpus, CorpusMerger, MergeSummary};
    pub use crate::record::{SentenceRecord, TokenRecord};
    pub use crate::scheme::{IobToBiluo, Relabel, TagPolicy};
    pub use crate::tokenize::{BasicTokenizer, Tokenizer};
}

// Re-exports
pub use clean::{CleanLine, LineCleaner};
pub use config::{ConvertConfig, DEFAULT_OUTPUT};
pub use convert::{Conversion, ConversionStats, IobConverter, JsonlConverter};
pub use error::{Error, Result};
pub use filter::{is_outside_only, retain_entity_sentences};
pub use merge::{concat_corpora, corpus_to_string, write_corpus, CorpusMerger, MergeSummary};
pub use record::{renumber, Paragraph, Sentence, SentenceRecord, TokenRecord};
pub use scheme::{IobToBiluo, Relabel, TagPolicy, TagVocabulary, OUTSIDE};
pub use tokenize::{BasicTokenizer, Tokenizer, WhitespaceTokenizer};
