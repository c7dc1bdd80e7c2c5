use thiserror::Error;

/// Fatal reconciliation errors.
///
/// Match ambiguity is deliberately absent here: a multi-candidate outcome is
/// a normal branch that routes the record to the unmatched collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconError {
    /// A record references a conference id the canonical override table does
    /// not know. Carries enough context to locate the offending row.
    #[error(
        "conference {conference_id} missing from canonical table \
         (speaker: {speaker:?}, title: {title:?})"
    )]
    UnknownConference {
        conference_id: u32,
        speaker: String,
        title: String,
    },
}

pub type Result<T> = std::result::Result<T, ReconError>;
