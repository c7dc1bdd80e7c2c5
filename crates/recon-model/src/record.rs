use serde::{Deserialize, Serialize};

/// Output column order for exported collections.
///
/// Both the merged and the unmatched exports use this layout, so downstream
/// consumers see one uniform schema regardless of which side a record came
/// from. The writer prepends a 1-based `index` column.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "conference_id",
    "date",
    "location",
    "talk_order",
    "speaker",
    "affiliation",
    "title",
    "talk_type",
    "video_url",
    "presentation_files",
    "duration_minutes",
    "tags",
    "keywords",
    "origin",
];

/// One talk at one conference instance.
///
/// Every textual field uses the empty string for "not provided"; only
/// `conference_id`, `speaker` and `title` are required to be present, which
/// ingestion enforces before any record reaches the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkRecord {
    pub conference_id: u32,
    pub date: String,
    pub location: String,
    pub talk_order: String,
    pub speaker: String,
    pub affiliation: String,
    pub title: String,
    pub talk_type: String,
    pub video_url: String,
    pub presentation_files: String,
    pub duration_minutes: String,
    pub tags: String,
    pub keywords: String,
    pub origin: String,
}

impl TalkRecord {
    /// Field values in [`OUTPUT_COLUMNS`] order, for CSV export.
    pub fn csv_fields(&self) -> Vec<String> {
        vec![
            self.conference_id.to_string(),
            self.date.clone(),
            self.location.clone(),
            self.talk_order.clone(),
            self.speaker.clone(),
            self.affiliation.clone(),
            self.title.clone(),
            self.talk_type.clone(),
            self.video_url.clone(),
            self.presentation_files.clone(),
            self.duration_minutes.clone(),
            self.tags.clone(),
            self.keywords.clone(),
            self.origin.clone(),
        ]
    }
}
