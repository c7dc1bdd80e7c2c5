//! Set-algebra partitioning of the two input collections by conference id.

use std::collections::{BTreeMap, BTreeSet};

use recon_model::TalkRecord;
use tracing::debug;

/// The three disjoint record groups plus the per-conference candidate index.
///
/// For conferences present in both sources, only the harvested side goes
/// through matching (the search side); the authoritative records for those
/// conferences are grouped by id in `candidates` so the matcher never
/// rescans the full authoritative collection per record.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Authoritative records whose conference appears only in that source.
    pub authoritative_only: Vec<TalkRecord>,
    /// Harvested records whose conference appears only in that source.
    pub harvested_only: Vec<TalkRecord>,
    /// Harvested records for conferences present in both sources.
    pub shared_harvested: Vec<TalkRecord>,
    /// Authoritative records for shared conferences, grouped by id.
    pub candidates: BTreeMap<u32, Vec<TalkRecord>>,
}

/// Split both collections into authoritative-only, harvested-only and shared
/// groups by conference id membership.
pub fn partition(authoritative: &[TalkRecord], harvested: &[TalkRecord]) -> Partition {
    let authoritative_ids = conference_ids(authoritative);
    let harvested_ids = conference_ids(harvested);

    let shared: BTreeSet<u32> = authoritative_ids
        .intersection(&harvested_ids)
        .copied()
        .collect();

    let mut result = Partition::default();

    for record in authoritative {
        if shared.contains(&record.conference_id) {
            result
                .candidates
                .entry(record.conference_id)
                .or_default()
                .push(record.clone());
        } else {
            result.authoritative_only.push(record.clone());
        }
    }

    for record in harvested {
        if shared.contains(&record.conference_id) {
            result.shared_harvested.push(record.clone());
        } else {
            result.harvested_only.push(record.clone());
        }
    }

    debug!(
        authoritative_only = result.authoritative_only.len(),
        harvested_only = result.harvested_only.len(),
        shared_harvested = result.shared_harvested.len(),
        shared_conferences = result.candidates.len(),
        "partitioned input collections"
    );

    result
}

fn conference_ids(records: &[TalkRecord]) -> BTreeSet<u32> {
    records.iter().map(|record| record.conference_id).collect()
}
