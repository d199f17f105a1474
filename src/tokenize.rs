//! Tokenizers used to re-split raw JSONL text.
//!
//! [`BasicTokenizer`] is the BERT "basic" pre-tokenization built from the
//! `tokenizers` crate: [`BertNormalizer`] (text cleanup, CJK isolation,
//! optional lowercasing with nonspacing-mark stripping) followed by
//! [`BertPreTokenizer`] (whitespace and Unicode punctuation splitting).

use tokenizers::normalizers::bert::BertNormalizer;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{
    NormalizedString, Normalizer, OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer,
};

use crate::error::{Error, Result};

/// Splits text into an ordered sequence of tokens.
pub trait Tokenizer {
    /// Tokenize `text`.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Splits on Unicode whitespace only.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

/// Whitespace and punctuation tokenizer.
///
/// ```rust
/// use biluo::tokenize::{BasicTokenizer, Tokenizer};
///
/// let tokens = BasicTokenizer::new().tokenize("Hello, Café!").unwrap();
/// assert_eq!(tokens, ["hello", ",", "cafe", "!"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BasicTokenizer {
    lowercase: bool,
}

impl Default for BasicTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicTokenizer {
    /// Create a lowercasing tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    /// Toggle lowercasing (and accent stripping, which goes with it).
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    fn normalizer(&self) -> BertNormalizer {
        BertNormalizer::new(true, true, Some(self.lowercase), self.lowercase)
    }
}

impl Tokenizer for BasicTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut normalized = NormalizedString::from(text);
        self.normalizer()
            .normalize(&mut normalized)
            .map_err(|e| Error::tokenize(e.to_string()))?;

        let mut pretokenized = PreTokenizedString::from(normalized);
        BertPreTokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| Error::tokenize(e.to_string()))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Char)
            .into_iter()
            .map(|(token, _, _)| token.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(text: &str) -> Vec<String> {
        BasicTokenizer::new().tokenize(text).unwrap()
    }

    #[test]
    fn test_whitespace_split() {
        assert_eq!(basic("a b"), ["a", "b"]);
        assert_eq!(basic("  a \t\n b  "), ["a", "b"]);
    }

    #[test]
    fn test_punctuation_split() {
        assert_eq!(
            basic("Hi, John's here."),
            ["hi", ",", "john", "'", "s", "here", "."]
        );
    }

    #[test]
    fn test_lowercase_and_accents() {
        assert_eq!(basic("Émile NAÏVE"), ["emile", "naive"]);
    }

    #[test]
    fn test_keep_case() {
        let tok = BasicTokenizer::new().with_lowercase(false);
        assert_eq!(tok.tokenize("Émile, Zola").unwrap(), ["Émile", ",", "Zola"]);
    }

    #[test]
    fn test_cjk_isolated() {
        assert_eq!(basic("ab中文"), ["ab", "中", "文"]);
    }

    #[test]
    fn test_control_chars_dropped() {
        assert_eq!(basic("a\u{0}b\u{FFFD}c \u{200B}d"), ["abc", "d"]);
    }

    #[test]
    fn test_format_chars_dropped() {
        // Arabic letter mark and soft hyphen are Cf.
        assert_eq!(basic("a\u{061C}b c\u{00AD}d"), ["ab", "cd"]);
    }

    #[test]
    fn test_bangla_vowel_signs_kept_when_lowercasing() {
        // ি া ে are spacing marks (Mc) and survive accent stripping.
        assert_eq!(basic("রহিম সাহেব"), ["রহিম", "সাহেব"]);
        assert_eq!(basic("করিম সাহেব।"), ["করিম", "সাহেব", "।"]);
    }

    #[test]
    fn test_bangla_nonspacing_sign_stripped() {
        // Candrabindu (U+0981) is Mn.
        assert_eq!(basic("চাঁদ"), ["চাদ"]);
        let tok = BasicTokenizer::new().with_lowercase(false);
        assert_eq!(tok.tokenize("চাঁদ").unwrap(), ["চাঁদ"]);
    }

    #[test]
    fn test_non_latin_scripts_kept_whole() {
        let tok = BasicTokenizer::new().with_lowercase(false);
        assert_eq!(
            tok.tokenize("রহিম সাহেব।").unwrap(),
            ["রহিম", "সাহেব", "।"]
        );
    }

    #[test]
    fn test_unicode_punctuation_splits() {
        // Armenian hyphen, Myanmar section, Ethiopic wordspace.
        assert_eq!(basic("a\u{058A}b"), ["a", "\u{058A}", "b"]);
        assert_eq!(basic("x\u{104A}y").len(), 3);
        assert_eq!(basic("p\u{1361}q").len(), 3);
    }

    #[test]
    fn test_empty() {
        assert!(basic("").is_empty());
        assert!(basic("   ").is_empty());
    }

    #[test]
    fn test_whitespace_tokenizer_keeps_punctuation() {
        assert_eq!(
            WhitespaceTokenizer.tokenize("Hi, there").unwrap(),
            ["Hi,", "there"]
        );
    }
}
