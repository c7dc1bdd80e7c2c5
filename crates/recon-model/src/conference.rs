use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical metadata for one conference instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceInfo {
    pub date: String,
    pub location: String,
}

/// Lookup table from conference id to canonical metadata.
///
/// Built once per run from the override table and treated as read-only
/// afterwards. Exactly one entry per conference id; later inserts for the
/// same id replace the earlier one.
#[derive(Debug, Clone, Default)]
pub struct ConferenceIndex {
    entries: BTreeMap<u32, ConferenceInfo>,
}

impl ConferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, conference_id: u32, info: ConferenceInfo) {
        self.entries.insert(conference_id, info);
    }

    pub fn lookup(&self, conference_id: u32) -> Option<&ConferenceInfo> {
        self.entries.get(&conference_id)
    }

    pub fn contains(&self, conference_id: u32) -> bool {
        self.entries.contains_key(&conference_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, ConferenceInfo)> for ConferenceIndex {
    fn from_iter<I: IntoIterator<Item = (u32, ConferenceInfo)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_canonical_metadata() {
        let index: ConferenceIndex = [(
            1,
            ConferenceInfo {
                date: "2020-01-01".to_string(),
                location: "City A".to_string(),
            },
        )]
        .into_iter()
        .collect();

        let info = index.lookup(1).expect("conference 1 present");
        assert_eq!(info.date, "2020-01-01");
        assert_eq!(info.location, "City A");
        assert!(index.lookup(2).is_none());
    }

    #[test]
    fn later_insert_replaces_earlier_entry() {
        let mut index = ConferenceIndex::new();
        index.insert(3, ConferenceInfo {
            date: "old".to_string(),
            location: "old".to_string(),
        });
        index.insert(3, ConferenceInfo {
            date: "2021-06-01".to_string(),
            location: "City B".to_string(),
        });
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(3).unwrap().date, "2021-06-01");
    }
}
