//! Entity filtering: drop sentences that carry no entity tag.

use std::collections::HashSet;

use crate::record::{renumber, SentenceRecord};
use crate::scheme::OUTSIDE;

/// Check whether every tag of `record` is the outside tag.
///
/// The record's distinct tag set must equal exactly `{"O"}`; an empty record
/// does not qualify.
#[must_use]
pub fn is_outside_only(record: &SentenceRecord) -> bool {
    let tags: HashSet<&str> = record.tags().collect();
    tags.len() == 1 && tags.contains(OUTSIDE)
}

/// Keep the sentences that contain at least one entity tag.
///
/// Relative order is preserved and survivors are renumbered from zero.
#[must_use]
pub fn retain_entity_sentences(records: Vec<SentenceRecord>) -> Vec<SentenceRecord> {
    let total = records.len();
    let mut kept: Vec<SentenceRecord> = records
        .into_iter()
        .filter(|r| !is_outside_only(r))
        .collect();
    renumber(&mut kept);

    log::debug!(
        "entity filter: {} sentences only contain 'O' tags, {} contain an entity tag",
        total - kept.len(),
        kept.len()
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TokenRecord;

    fn record(id: usize, tags: &[&str]) -> SentenceRecord {
        SentenceRecord::new(
            id,
            tags.iter()
                .enumerate()
                .map(|(i, t)| TokenRecord::new(format!("w{}", i), *t))
                .collect(),
        )
    }

    #[test]
    fn test_outside_only() {
        assert!(is_outside_only(&record(0, &["O"])));
        assert!(is_outside_only(&record(0, &["O", "O", "O"])));
        assert!(!is_outside_only(&record(0, &["O", "U-PER"])));
        assert!(!is_outside_only(&record(0, &["B-PER", "L-PER"])));
        assert!(!is_outside_only(&record(0, &[])));
    }

    #[test]
    fn test_multichar_outside_like_tags_are_entities() {
        assert!(!is_outside_only(&record(0, &["OO"])));
        assert!(!is_outside_only(&record(0, &["o"])));
    }

    #[test]
    fn test_retain_renumbers_in_order() {
        let records = vec![
            record(10, &["O"]),
            record(11, &["U-PER"]),
            record(12, &["O", "O"]),
            record(13, &["B-PER", "L-PER", "O"]),
        ];
        let kept = retain_entity_sentences(records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, 0);
        assert_eq!(kept[0].tags().collect::<Vec<_>>(), vec!["U-PER"]);
        assert_eq!(kept[1].id, 1);
        assert_eq!(kept[1].len(), 3);
    }

    #[test]
    fn test_retain_is_idempotent() {
        let records = vec![record(4, &["O"]), record(5, &["U-PER"]), record(6, &["I-PER"])];
        let once = retain_entity_sentences(records);
        let twice = retain_entity_sentences(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_retain_empty() {
        assert!(retain_entity_sentences(Vec::new()).is_empty());
    }
}
