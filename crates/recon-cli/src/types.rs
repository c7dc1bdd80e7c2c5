use std::path::PathBuf;

/// Outcome of one merge run, for the post-run summary.
#[derive(Debug)]
pub struct MergeReport {
    pub authoritative_count: usize,
    pub harvested_count: usize,
    pub conference_count: usize,
    pub merged_count: usize,
    pub unmatched_count: usize,
    pub matched_shared: usize,
    pub unmatched_shared: usize,
    pub out: PathBuf,
    pub unmatched_out: Option<PathBuf>,
}
