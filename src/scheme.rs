//! Tag schemes and IOB → BILUO relabeling.
//!
//! # Schemes
//!
//! - IOB: Inside-Outside-Begin (`B-PER I-PER O`)
//! - BILUO: Begin-Inside-Last-Unit-Outside (`B-PER L-PER O`, `U-PER` for
//!   single-token spans)
//!
//! # Example
//!
//! ```rust
//! use biluo::scheme::{IobToBiluo, Relabel};
//!
//! let tags: Vec<String> = ["B-PER", "I-PER", "O", "B-PER"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let biluo = IobToBiluo.relabel(&tags).unwrap();
//! assert_eq!(biluo, ["B-PER", "L-PER", "O", "U-PER"]);
//! ```

use std::collections::HashSet;

use crate::{Error, Result};

/// The outside tag.
pub const OUTSIDE: &str = "O";

/// Relabels a tag sequence from one scheme into another.
///
/// Implementations must return exactly one tag per input tag.
pub trait Relabel {
    /// Relabel `tags`, preserving length and order.
    fn relabel(&self, tags: &[String]) -> Result<Vec<String>>;
}

/// IOB → BILUO relabeler.
///
/// Runs of `O` are copied verbatim. Any other tag opens a span that absorbs
/// the following tags equal to `I<rest>` or `L<rest>`, where `<rest>` is the
/// opening tag without its first character. A one-token span becomes
/// `U-<label>`; longer spans become `B-<label>`, `I-<label>`…, `L-<label>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IobToBiluo;

impl Relabel for IobToBiluo {
    fn relabel(&self, tags: &[String]) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(tags.len());
        let mut i = 0;

        while i < tags.len() {
            let tag = tags[i].as_str();
            if tag == OUTSIDE {
                out.push(OUTSIDE.to_string());
                i += 1;
                continue;
            }

            let rest = skip_chars(tag, 1);
            let target_in = format!("I{}", rest);
            let target_last = format!("L{}", rest);

            let mut end = i + 1;
            while end < tags.len() && (tags[end] == target_in || tags[end] == target_last) {
                end += 1;
            }

            let label = skip_chars(tag, 2);
            let len = end - i;
            if len == 1 {
                if label.is_empty() {
                    return Err(Error::invalid_tag(format!(
                        "'{}' at position {} has no entity label",
                        tag, i
                    )));
                }
                out.push(format!("U-{}", label));
            } else {
                out.push(format!("B-{}", label));
                for _ in 1..len - 1 {
                    out.push(format!("I-{}", label));
                }
                out.push(format!("L-{}", label));
            }
            i = end;
        }

        Ok(out)
    }
}

/// Slice off the first `n` characters.
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(idx, _)| &s[idx..])
}

/// A closed set of recognized tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: HashSet<String>,
}

impl TagVocabulary {
    /// Build a vocabulary from tag strings.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// IOB person vocabulary: `O`, `B-PER`, `I-PER`.
    #[must_use]
    pub fn iob() -> Self {
        Self::new([OUTSIDE, "B-PER", "I-PER"])
    }

    /// BILUO person vocabulary: `O`, `B-PER`, `I-PER`, `L-PER`, `U-PER`.
    #[must_use]
    pub fn biluo() -> Self {
        Self::new([OUTSIDE, "B-PER", "I-PER", "L-PER", "U-PER"])
    }

    /// Check whether `tag` is in the vocabulary.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// What to do with tags outside the expected vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Keep every tag as written.
    #[default]
    Passthrough,
    /// Replace unknown tags with [`OUTSIDE`].
    CoerceUnknown,
}

impl TagPolicy {
    /// Policy from the `coerce_unknown_tags` switch.
    #[must_use]
    pub fn from_coerce(coerce: bool) -> Self {
        if coerce {
            TagPolicy::CoerceUnknown
        } else {
            TagPolicy::Passthrough
        }
    }

    /// Apply the policy to one tag.
    #[must_use]
    pub fn apply(self, tag: String, vocabulary: &TagVocabulary) -> String {
        match self {
            TagPolicy::CoerceUnknown if !vocabulary.contains(&tag) => OUTSIDE.to_string(),
            _ => tag,
        }
    }
}
