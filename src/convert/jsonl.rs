//! JSONL `[text, labels]` pairs → sentence records.
//!
//! Each line holds a JSON array whose first element is the raw sentence text
//! and whose second element is its label list, already in the target tag
//! scheme:
//!
//! ```text
//! ["Karim Ahmed went home", ["B-PERSON", "L-PERSON", "O", "O"]]
//! ```
//!
//! The text is re-tokenized; lines whose token count differs from the label
//! count are skipped.

use std::path::Path;

use serde_json::Value;

use super::{read_lines, Conversion, ConversionStats};
use crate::filter::retain_entity_sentences;
use crate::record::{SentenceRecord, TokenRecord};
use crate::scheme::{TagPolicy, TagVocabulary};
use crate::tokenize::{BasicTokenizer, Tokenizer};
use crate::{Error, Result};

/// Label written by the source annotations for persons.
pub const PERSON_LABEL: &str = "PERSON";
/// Label expected downstream for persons.
pub const PER_LABEL: &str = "PER";

/// Converts JSONL `[text, labels]` files into sentence records.
///
/// ```rust
/// use biluo::JsonlConverter;
///
/// let lines = [r#"["a b", ["O", "B-PERSON"]]"#];
/// let conversion = JsonlConverter::new().convert_lines(lines).unwrap();
///
/// let tags: Vec<&str> = conversion.records[0].tags().collect();
/// assert_eq!(tags, ["O", "B-PER"]);
/// ```
pub struct JsonlConverter {
    tokenizer: Box<dyn Tokenizer>,
    policy: TagPolicy,
    vocabulary: TagVocabulary,
    person_label: String,
    person_replacement: String,
}

impl Default for JsonlConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JsonlConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonlConverter")
            .field("policy", &self.policy)
            .field("person_label", &self.person_label)
            .field("person_replacement", &self.person_replacement)
            .finish_non_exhaustive()
    }
}

impl JsonlConverter {
    /// Converter with the lowercasing [`BasicTokenizer`] and `PERSON` → `PER`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(BasicTokenizer::new()),
            policy: TagPolicy::Passthrough,
            vocabulary: TagVocabulary::biluo(),
            person_label: PERSON_LABEL.to_string(),
            person_replacement: PER_LABEL.to_string(),
        }
    }

    /// Replace the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Set the unknown-tag policy (checked against the BILUO vocabulary).
    #[must_use]
    pub fn with_policy(mut self, policy: TagPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the label substring to rewrite and its replacement.
    #[must_use]
    pub fn with_person_mapping(
        mut self,
        label: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.person_label = label.into();
        self.person_replacement = replacement.into();
        self
    }

    /// Convert the file at `path`.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Conversion> {
        let path = path.as_ref();
        let lines = read_lines(path)?;
        let conversion = self.convert_source(lines, &path.display().to_string())?;

        log::info!(
            "{}: {} sentences, {} with entity tags, {} only 'O', {} skipped for token/label mismatch",
            path.display(),
            conversion.stats.sentences,
            conversion.stats.kept,
            conversion.stats.filtered_out(),
            conversion.stats.mismatched
        );
        Ok(conversion)
    }

    /// Convert raw JSONL lines.
    pub fn convert_lines<I, S>(&self, lines: I) -> Result<Conversion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.convert_source(lines, "<input>")
    }

    fn convert_source<I, S>(&self, lines: I, source: &str) -> Result<Conversion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut mismatched = 0;

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let (text, labels) = parse_example(line)
                .map_err(|e| Error::parse(format!("{}:{}: {}", source, idx + 1, e)))?;

            match self.convert_example(&text, labels)? {
                Some(tokens) => records.push(SentenceRecord::new(records.len(), tokens)),
                None => {
                    mismatched += 1;
                    log::debug!("{}:{}: token/label count mismatch, skipped", source, idx + 1);
                }
            }
        }

        let sentences = records.len();
        let records = retain_entity_sentences(records);
        Ok(Conversion {
            stats: ConversionStats {
                sentences,
                kept: records.len(),
                mismatched,
                dropped_lines: 0,
            },
            records,
        })
    }

    /// Tokenize `text` and pair it with `labels`.
    ///
    /// Returns `Ok(None)` when the token count differs from the label count.
    pub fn convert_example(
        &self,
        text: &str,
        labels: Vec<String>,
    ) -> Result<Option<Vec<TokenRecord>>> {
        let tokens = self.tokenizer.tokenize(text)?;
        if tokens.len() != labels.len() {
            return Ok(None);
        }

        Ok(Some(
            tokens
                .into_iter()
                .zip(labels)
                .map(|(token, label)| TokenRecord::new(token, self.map_label(label)))
                .collect(),
        ))
    }

    /// Rewrite the person label and apply the unknown-tag policy.
    #[must_use]
    pub fn map_label(&self, label: String) -> String {
        let label = if !self.person_label.is_empty() && label.contains(&self.person_label) {
            label.replace(&self.person_label, &self.person_replacement)
        } else {
            label
        };
        self.policy.apply(label, &self.vocabulary)
    }
}

/// Parse one `[text, [label, ...]]` line.
fn parse_example(line: &str) -> std::result::Result<(String, Vec<String>), String> {
    let value: Value = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {}", e))?;

    let items = value
        .as_array()
        .ok_or_else(|| "expected a JSON array [text, labels]".to_string())?;
    if items.len() < 2 {
        return Err(format!("expected [text, labels], found {} element(s)", items.len()));
    }

    let text = items[0]
        .as_str()
        .ok_or_else(|| "first element must be a string".to_string())?
        .to_string();

    let labels = items[1]
        .as_array()
        .ok_or_else(|| "second element must be an array of labels".to_string())?
        .iter()
        .map(|l| {
            l.as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("label {} is not a string", l))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((text, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::WhitespaceTokenizer;

    fn labels(s: &[&str]) -> Vec<String> {
        s.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_person_remap_keeps_record() {
        let conversion = JsonlConverter::new()
            .convert_lines([r#"["a b", ["O", "B-PERSON"]]"#])
            .unwrap();
        assert_eq!(conversion.len(), 1);
        assert_eq!(conversion.stats.mismatched, 0);
        let orth: Vec<&str> = conversion.records[0].tokens().map(|t| t.text.as_str()).collect();
        assert_eq!(orth, ["a", "b"]);
    }

    #[test]
    fn test_length_mismatch_skips_line() {
        let conversion = JsonlConverter::new()
            .convert_lines([
                r#"["a b c", ["O", "U-PERSON"]]"#,
                r#"["d", ["U-PERSON"]]"#,
            ])
            .unwrap();
        assert_eq!(conversion.stats.mismatched, 1);
        assert_eq!(conversion.stats.sentences, 1);
        assert_eq!(conversion.records[0].id, 0);
        assert_eq!(conversion.records[0].tags().collect::<Vec<_>>(), ["U-PER"]);
    }

    #[test]
    fn test_remap_is_substring_replacement() {
        let converter = JsonlConverter::new();
        assert_eq!(converter.map_label("B-PERSON".into()), "B-PER");
        assert_eq!(converter.map_label("PERSONPERSON".into()), "PERPER");
        assert_eq!(converter.map_label("U-ORG".into()), "U-ORG");
        assert_eq!(converter.map_label("O".into()), "O");
    }

    #[test]
    fn test_coercion_uses_biluo_vocabulary() {
        let converter = JsonlConverter::new().with_policy(TagPolicy::CoerceUnknown);
        assert_eq!(converter.map_label("L-PERSON".into()), "L-PER");
        assert_eq!(converter.map_label("U-ORG".into()), "O");
    }

    #[test]
    fn test_no_scheme_conversion_applied() {
        let conversion = JsonlConverter::new()
            .convert_lines([r#"["x y", ["B-PERSON", "I-PERSON"]]"#])
            .unwrap();
        assert_eq!(
            conversion.records[0].tags().collect::<Vec<_>>(),
            ["B-PER", "I-PER"]
        );
    }

    #[test]
    fn test_outside_only_lines_filtered() {
        let conversion = JsonlConverter::new()
            .convert_lines([r#"["a b", ["O", "O"]]"#, r#"["c", ["U-PERSON"]]"#])
            .unwrap();
        assert_eq!(conversion.stats.sentences, 2);
        assert_eq!(conversion.stats.kept, 1);
        assert_eq!(conversion.records[0].id, 0);
    }

    #[test]
    fn test_tokenizer_lowercases_and_splits_punctuation() {
        let conversion = JsonlConverter::new()
            .convert_lines([r#"["Karim, hi", ["U-PERSON", "O", "O"]]"#])
            .unwrap();
        let orth: Vec<&str> = conversion.records[0].tokens().map(|t| t.text.as_str()).collect();
        assert_eq!(orth, ["karim", ",", "hi"]);
    }

    #[test]
    fn test_bangla_orth_keeps_vowel_signs() {
        let conversion = JsonlConverter::new()
            .convert_lines([r#"["করিম সাহেব", ["U-PERSON", "O"]]"#])
            .unwrap();
        let orth: Vec<&str> = conversion.records[0].tokens().map(|t| t.text.as_str()).collect();
        assert_eq!(orth, ["করিম", "সাহেব"]);
    }

    #[test]
    fn test_unicode_punctuation_counts_as_token() {
        // U+058A splits, so three labels line up and two do not.
        let conversion = JsonlConverter::new()
            .convert_lines([
                "[\"a\u{058A}b\", [\"U-PERSON\", \"O\", \"O\"]]",
                "[\"a\u{058A}b\", [\"U-PERSON\", \"O\"]]",
            ])
            .unwrap();
        assert_eq!(conversion.len(), 1);
        assert_eq!(conversion.stats.mismatched, 1);
    }

    #[test]
    fn test_tokenizer_error_propagates() {
        struct Failing;
        impl Tokenizer for Failing {
            fn tokenize(&self, _text: &str) -> Result<Vec<String>> {
                Err(Error::tokenize("boom"))
            }
        }

        let err = JsonlConverter::new()
            .with_tokenizer(Failing)
            .convert_lines([r#"["a", ["U-PERSON"]]"#])
            .unwrap_err();
        assert!(matches!(err, Error::Tokenize(_)));
    }

    #[test]
    fn test_injected_tokenizer() {
        let converter = JsonlConverter::new().with_tokenizer(WhitespaceTokenizer);
        let tokens = converter
            .convert_example("Karim, hi", labels(&["U-PERSON", "O"]))
            .unwrap()
            .unwrap();
        assert_eq!(tokens[0].text, "Karim,");
        assert_eq!(tokens[0].ner, "U-PER");
    }

    #[test]
    fn test_custom_person_mapping() {
        let converter = JsonlConverter::new().with_person_mapping("PER", "PERSON");
        assert_eq!(converter.map_label("U-PER".into()), "U-PERSON");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let conversion = JsonlConverter::new()
            .convert_lines(["", r#"["c", ["U-PERSON"]]"#, "   "])
            .unwrap();
        assert_eq!(conversion.len(), 1);
    }

    #[test]
    fn test_extra_elements_ignored() {
        let conversion = JsonlConverter::new()
            .convert_lines([r#"["c", ["U-PERSON"], {"source": "web"}]"#])
            .unwrap();
        assert_eq!(conversion.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = JsonlConverter::new()
            .convert_lines([r#"["c", ["U-PERSON"]]"#, "not json"])
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("<input>:2"));
    }

    #[test]
    fn test_wrong_shape_is_error() {
        for line in [r#"{"text": "a"}"#, r#"["a"]"#, r#"[1, ["O"]]"#, r#"["a", "O"]"#, r#"["a", [1]]"#] {
            let err = JsonlConverter::new().convert_lines([line]).unwrap_err();
            assert!(matches!(err, Error::Parse(_)), "line {} should fail", line);
        }
    }
}
