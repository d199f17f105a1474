//! Conversion settings, loadable from a TOML file.
//!
//! ```toml
//! coerce_unknown_tags = false
//! lowercase = true
//! person_label = "PERSON"
//! person_replacement = "PER"
//! output = "data/all_entity_merged_THREE_data.json"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::{IobConverter, JsonlConverter};
use crate::scheme::TagPolicy;
use crate::tokenize::BasicTokenizer;
use crate::{Error, Result};

/// Default path of the merged corpus.
pub const DEFAULT_OUTPUT: &str = "data/all_entity_merged_THREE_data.json";

/// Settings shared by the converters and the merger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Replace tags outside the expected vocabulary with `O`.
    pub coerce_unknown_tags: bool,
    /// Lowercase and strip accents when tokenizing JSONL text.
    pub lowercase: bool,
    /// Label substring rewritten in JSONL labels.
    pub person_label: String,
    /// Replacement for `person_label`.
    pub person_replacement: String,
    /// Output path of the merged corpus.
    pub output: Option<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            coerce_unknown_tags: false,
            lowercase: true,
            person_label: crate::convert::PERSON_LABEL.to_string(),
            person_replacement: crate::convert::PER_LABEL.to_string(),
            output: None,
        }
    }
}

impl ConvertConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Check the settings for values the converters cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.person_label.is_empty() {
            return Err(Error::config("person_label must not be empty"));
        }
        Ok(())
    }

    /// Unknown-tag policy.
    #[must_use]
    pub fn tag_policy(&self) -> TagPolicy {
        TagPolicy::from_coerce(self.coerce_unknown_tags)
    }

    /// Output path, falling back to [`DEFAULT_OUTPUT`].
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// IOB converter for these settings.
    #[must_use]
    pub fn iob_converter(&self) -> IobConverter {
        IobConverter::new().with_policy(self.tag_policy())
    }

    /// JSONL converter for these settings.
    #[must_use]
    pub fn jsonl_converter(&self) -> JsonlConverter {
        JsonlConverter::new()
            .with_tokenizer(BasicTokenizer::new().with_lowercase(self.lowercase))
            .with_policy(self.tag_policy())
            .with_person_mapping(&self.person_label, &self.person_replacement)
    }
}
