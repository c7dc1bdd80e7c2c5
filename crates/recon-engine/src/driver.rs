//! Orchestration of one reconciliation run.

use recon_match::{MatchOutcome, match_record};
use recon_model::{ConferenceIndex, TalkRecord};
use tracing::{debug, info};

use crate::error::Result;
use crate::merge::{merge, merge_single};
use crate::normalize::scrub;
use crate::partition::{Partition, partition};

/// Behavior switches for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconOptions {
    /// Append unmatched harvested records to the merged collection instead
    /// of the separate unmatched collection.
    pub fold_unmatched: bool,
}

/// The two output collections of a run, already sorted for export.
#[derive(Debug, Clone, Default)]
pub struct ReconOutput {
    pub merged: Vec<TalkRecord>,
    pub unmatched: Vec<TalkRecord>,
    /// Shared harvested records that were confidently paired.
    pub matched_count: usize,
    /// Shared harvested records left for manual review.
    pub unmatched_count: usize,
}

/// Reconcile the harvested collection against the authoritative one.
///
/// Partitions both inputs by conference id, matches each shared harvested
/// record against its conference's authoritative candidates, merges under
/// the field-precedence policy, scrubs and sorts the outputs. Fails only on
/// a canonical-table lookup miss; match ambiguity routes records to the
/// unmatched collection instead.
pub fn reconcile(
    authoritative: &[TalkRecord],
    harvested: &[TalkRecord],
    index: &ConferenceIndex,
    options: ReconOptions,
) -> Result<ReconOutput> {
    let groups = partition(authoritative, harvested);
    reconcile_groups(&groups, index, options)
}

/// Reconcile pre-partitioned groups.
///
/// Split out from [`reconcile`] so callers that already hold a [`Partition`]
/// can drive the match/merge stage directly.
pub fn reconcile_groups(
    groups: &Partition,
    index: &ConferenceIndex,
    options: ReconOptions,
) -> Result<ReconOutput> {
    let mut output = ReconOutput::default();

    // One-sided conferences pass straight through, canonical override applied.
    for record in &groups.authoritative_only {
        output.merged.push(merge_single(record, index)?);
    }
    for record in &groups.harvested_only {
        output.merged.push(merge_single(record, index)?);
    }

    for record in &groups.shared_harvested {
        // A missing candidate list would mean the partition invariants were
        // violated upstream; treat it as unmatched rather than failing.
        let candidates = groups
            .candidates
            .get(&record.conference_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        match match_record(record, candidates) {
            MatchOutcome::Matched(candidate) => {
                output.matched_count += 1;
                output.merged.push(merge(record, candidate, index)?);
            }
            MatchOutcome::Unmatched => {
                debug!(
                    conference_id = record.conference_id,
                    speaker = %record.speaker,
                    title = %record.title,
                    "no confident match, routing to unmatched"
                );
                output.unmatched_count += 1;
                let standalone = merge_single(record, index)?;
                if options.fold_unmatched {
                    output.merged.push(standalone);
                } else {
                    output.unmatched.push(standalone);
                }
            }
        }
    }

    for record in output.merged.iter_mut().chain(output.unmatched.iter_mut()) {
        scrub(record);
    }

    output.merged.sort_by(|a, b| {
        (a.conference_id, &a.talk_order, &a.speaker).cmp(&(
            b.conference_id,
            &b.talk_order,
            &b.speaker,
        ))
    });
    output
        .unmatched
        .sort_by(|a, b| (a.conference_id, &a.speaker).cmp(&(b.conference_id, &b.speaker)));

    info!(
        merged = output.merged.len(),
        unmatched = output.unmatched.len(),
        matched_shared = output.matched_count,
        unmatched_shared = output.unmatched_count,
        "reconciliation complete"
    );

    Ok(output)
}
