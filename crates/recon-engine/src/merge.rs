//! Field-precedence merging of a matched record pair.

use recon_model::{ConferenceIndex, TalkRecord};

use crate::error::{ReconError, Result};

/// Merge a matched pair under the field-precedence policy.
///
/// The result starts from the target (authoritative) record, then every
/// non-empty field of the search (harvested) record overlays it: the
/// harvested source is usually more current for dynamic fields like video
/// and presentation links. Finally `date` and `location` are forced to the
/// canonical table's values, overriding both sources.
///
/// Pure: neither input is touched and each call allocates a fresh result
/// from an empty template. An earlier generation of this tool reused one
/// mutable blank template across merges and leaked fields between rows.
pub fn merge(
    search: &TalkRecord,
    target: &TalkRecord,
    index: &ConferenceIndex,
) -> Result<TalkRecord> {
    let mut merged = TalkRecord::default();
    overlay(&mut merged, target);
    overlay(&mut merged, search);
    apply_canonical(&mut merged, search, index)?;
    Ok(merged)
}

/// Merge a record that stands alone (one-sided or unmatched) against the
/// empty template, so its output shape matches pair-merged records.
pub fn merge_single(record: &TalkRecord, index: &ConferenceIndex) -> Result<TalkRecord> {
    let mut merged = TalkRecord::default();
    overlay(&mut merged, record);
    apply_canonical(&mut merged, record, index)?;
    Ok(merged)
}

fn apply_canonical(
    merged: &mut TalkRecord,
    source: &TalkRecord,
    index: &ConferenceIndex,
) -> Result<()> {
    let info = index.lookup(source.conference_id).ok_or_else(|| {
        ReconError::UnknownConference {
            conference_id: source.conference_id,
            speaker: source.speaker.clone(),
            title: source.title.clone(),
        }
    })?;
    merged.date = info.date.clone();
    merged.location = info.location.clone();
    Ok(())
}

/// Copy every provided field of `src` onto `dst`, leaving absent (empty)
/// fields of `src` alone.
fn overlay(dst: &mut TalkRecord, src: &TalkRecord) {
    if src.conference_id != 0 {
        dst.conference_id = src.conference_id;
    }
    overlay_field(&mut dst.date, &src.date);
    overlay_field(&mut dst.location, &src.location);
    overlay_field(&mut dst.talk_order, &src.talk_order);
    overlay_field(&mut dst.speaker, &src.speaker);
    overlay_field(&mut dst.affiliation, &src.affiliation);
    overlay_field(&mut dst.title, &src.title);
    overlay_field(&mut dst.talk_type, &src.talk_type);
    overlay_field(&mut dst.video_url, &src.video_url);
    overlay_field(&mut dst.presentation_files, &src.presentation_files);
    overlay_field(&mut dst.duration_minutes, &src.duration_minutes);
    overlay_field(&mut dst.tags, &src.tags);
    overlay_field(&mut dst.keywords, &src.keywords);
    overlay_field(&mut dst.origin, &src.origin);
}

fn overlay_field(dst: &mut String, src: &str) {
    if !src.is_empty() {
        dst.clear();
        dst.push_str(src);
    }
}

#[cfg(test)]
mod tests {
    use recon_model::ConferenceInfo;

    use super::*;

    fn index_with(conference_id: u32, date: &str, location: &str) -> ConferenceIndex {
        let mut index = ConferenceIndex::new();
        index.insert(conference_id, ConferenceInfo {
            date: date.to_string(),
            location: location.to_string(),
        });
        index
    }

    #[test]
    fn harvested_values_win_on_conflict() {
        let target = TalkRecord {
            conference_id: 1,
            speaker: "Jane Doe".to_string(),
            title: "BGP Hijacking 101".to_string(),
            tags: "old-tags".to_string(),
            affiliation: "ExampleCorp".to_string(),
            ..TalkRecord::default()
        };
        let search = TalkRecord {
            conference_id: 1,
            speaker: "jane doe".to_string(),
            title: "bgp hijacking 101".to_string(),
            tags: "bgp,routing".to_string(),
            video_url: "http://x/1".to_string(),
            ..TalkRecord::default()
        };
        let index = index_with(1, "2020-01-01", "City A");

        let merged = merge(&search, &target, &index).unwrap();

        // search wins where both provide a value
        assert_eq!(merged.speaker, "jane doe");
        assert_eq!(merged.tags, "bgp,routing");
        // target fills fields the search side left empty
        assert_eq!(merged.affiliation, "ExampleCorp");
        assert_eq!(merged.video_url, "http://x/1");
    }

    #[test]
    fn canonical_override_beats_both_sources() {
        let target = TalkRecord {
            conference_id: 1,
            speaker: "A".to_string(),
            title: "T".to_string(),
            date: "1999-01-01".to_string(),
            location: "Wrong".to_string(),
            ..TalkRecord::default()
        };
        let search = TalkRecord {
            conference_id: 1,
            speaker: "A".to_string(),
            title: "T".to_string(),
            date: "1998-01-01".to_string(),
            location: "Also wrong".to_string(),
            ..TalkRecord::default()
        };
        let index = index_with(1, "2020-01-01", "City A");

        let merged = merge(&search, &target, &index).unwrap();
        assert_eq!(merged.date, "2020-01-01");
        assert_eq!(merged.location, "City A");
    }

    #[test]
    fn missing_conference_is_a_fatal_lookup_error() {
        let record = TalkRecord {
            conference_id: 9,
            speaker: "A".to_string(),
            title: "T".to_string(),
            ..TalkRecord::default()
        };
        let index = index_with(1, "2020-01-01", "City A");

        let error = merge_single(&record, &index).unwrap_err();
        assert_eq!(error, ReconError::UnknownConference {
            conference_id: 9,
            speaker: "A".to_string(),
            title: "T".to_string(),
        });
    }

    #[test]
    fn sequential_merges_do_not_leak_fields() {
        // Regression for the shared-template aliasing bug: the first merge's
        // fields must not show up in a later merge of an unrelated record.
        let index = {
            let mut index = index_with(1, "2020-01-01", "City A");
            index.insert(2, ConferenceInfo {
                date: "2021-01-01".to_string(),
                location: "City B".to_string(),
            });
            index
        };
        let first = TalkRecord {
            conference_id: 1,
            speaker: "A".to_string(),
            title: "T".to_string(),
            tags: "leaky".to_string(),
            video_url: "http://x/1".to_string(),
            ..TalkRecord::default()
        };
        let second = TalkRecord {
            conference_id: 2,
            speaker: "B".to_string(),
            title: "U".to_string(),
            ..TalkRecord::default()
        };

        let _ = merge_single(&first, &index).unwrap();
        let merged = merge_single(&second, &index).unwrap();

        assert!(merged.tags.is_empty());
        assert!(merged.video_url.is_empty());
        assert_eq!(merged.speaker, "B");
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let target = TalkRecord {
            conference_id: 1,
            speaker: "A".to_string(),
            title: "T".to_string(),
            ..TalkRecord::default()
        };
        let search = TalkRecord {
            conference_id: 1,
            speaker: "a".to_string(),
            title: "t".to_string(),
            ..TalkRecord::default()
        };
        let index = index_with(1, "2020-01-01", "City A");

        let target_before = target.clone();
        let search_before = search.clone();
        let _ = merge(&search, &target, &index).unwrap();

        assert_eq!(target, target_before);
        assert_eq!(search, search_before);
    }
}
