//! Two-phase matching of one harvested record against the authoritative
//! candidates for its conference.
//!
//! Phase one is deterministic: case-insensitive substring containment on
//! speaker and title. Phase two runs only when phase one finds nothing, and
//! rescues near-misses with a fuzzy similarity ratio. Any phase that leaves
//! more than one candidate standing yields [`MatchOutcome::Unmatched`]: a
//! wrong auto-merge silently corrupts the authoritative record, so ambiguity
//! always loses to manual review.

use rapidfuzz::fuzz;
use recon_model::TalkRecord;
use tracing::debug;

/// Result of matching one harvested record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// Exactly one authoritative candidate was identified.
    Matched(&'a TalkRecord),
    /// No candidate, or more than one, satisfied the criteria.
    Unmatched,
}

impl<'a> MatchOutcome<'a> {
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Match `record` against the authoritative `candidates` sharing its
/// conference id.
///
/// Never fails: every path resolves to `Matched` or `Unmatched`.
pub fn match_record<'a>(record: &TalkRecord, candidates: &'a [TalkRecord]) -> MatchOutcome<'a> {
    if candidates.is_empty() {
        return MatchOutcome::Unmatched;
    }

    let exact: Vec<&TalkRecord> = candidates
        .iter()
        .filter(|candidate| {
            contains_ci(&candidate.speaker, &record.speaker)
                && contains_ci(&candidate.title, &record.title)
        })
        .collect();

    match exact.len() {
        1 => return MatchOutcome::Matched(exact[0]),
        0 => {}
        n => {
            debug!(
                conference_id = record.conference_id,
                speaker = %record.speaker,
                survivors = n,
                "exact phase ambiguous, leaving unmatched"
            );
            return MatchOutcome::Unmatched;
        }
    }

    fuzzy_match(record, candidates)
}

/// Fuzzy rescue: pick the best-scoring candidate title and speaker
/// independently, then require a single candidate to contain both winners.
fn fuzzy_match<'a>(record: &TalkRecord, candidates: &'a [TalkRecord]) -> MatchOutcome<'a> {
    let Some(best_title) = best_scoring(&record.title, candidates.iter().map(|c| c.title.as_str()))
    else {
        return MatchOutcome::Unmatched;
    };
    let Some(best_speaker) =
        best_scoring(&record.speaker, candidates.iter().map(|c| c.speaker.as_str()))
    else {
        return MatchOutcome::Unmatched;
    };

    let survivors: Vec<&TalkRecord> = candidates
        .iter()
        .filter(|candidate| {
            contains_ci(&candidate.title, best_title)
                && contains_ci(&candidate.speaker, best_speaker)
        })
        .collect();

    if survivors.len() == 1 {
        debug!(
            conference_id = record.conference_id,
            speaker = %record.speaker,
            matched_speaker = %survivors[0].speaker,
            "fuzzy phase matched"
        );
        MatchOutcome::Matched(survivors[0])
    } else {
        MatchOutcome::Unmatched
    }
}

/// The choice with the highest similarity ratio against `query`.
///
/// Returns `None` only for an empty choice set. Ties keep the first choice,
/// which makes the scan deterministic for identical strings.
fn best_scoring<'a>(query: &str, choices: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let query = query.to_lowercase();
    let mut best: Option<(&'a str, f64)> = None;
    for choice in choices {
        let score = fuzz::ratio(query.chars(), choice.to_lowercase().chars());
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((choice, score)),
        }
    }
    best.map(|(choice, _)| choice)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
