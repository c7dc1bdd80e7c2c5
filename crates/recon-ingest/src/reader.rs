//! CSV loading with header-driven field lookup.
//!
//! Column presence varies slightly between the two source systems, so every
//! field except the required three is resolved by header name and defaults
//! to the empty string when the column is absent.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use recon_model::{ConferenceIndex, ConferenceInfo, TalkRecord};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Header positions resolved once per file, case-insensitively.
struct ColumnMap {
    indices: Vec<(String, usize)>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let indices = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim().to_ascii_lowercase(), idx))
            .collect();
        Self { indices }
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.indices
            .iter()
            .find(|(name, _)| name == column)
            .map(|&(_, idx)| idx)
    }

    fn require(&self, column: &'static str) -> Result<usize> {
        self.position(column)
            .ok_or(IngestError::MissingColumn { column })
    }

    /// Field value for an optional column; absent columns and cells read as
    /// the empty string.
    fn get<'a>(&self, record: &'a csv::StringRecord, column: &str) -> &'a str {
        self.position(column)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .unwrap_or("")
    }
}

fn parse_conference_id(raw: &str, row: u64) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IngestError::MissingField {
            row,
            field: "conference_id",
        });
    }
    trimmed
        .parse()
        .map_err(|_| IngestError::InvalidConferenceId {
            row,
            value: trimmed.to_string(),
        })
}

fn required<'a>(value: &'a str, field: &'static str, row: u64) -> Result<&'a str> {
    if value.is_empty() {
        Err(IngestError::MissingField { row, field })
    } else {
        Ok(value)
    }
}

/// Load one talk collection from CSV.
///
/// Validates the schema invariant up front: `conference_id`, `speaker` and
/// `title` must be present on every row, and the conference id must parse as
/// an integer.
pub fn read_records<R: Read>(input: R) -> Result<Vec<TalkRecord>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let columns = ColumnMap::from_headers(reader.headers()?);
    columns.require("conference_id")?;
    columns.require("speaker")?;
    columns.require("title")?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let row_number = (idx as u64) + 1;

        let conference_id = parse_conference_id(columns.get(&row, "conference_id"), row_number)?;
        let speaker = required(columns.get(&row, "speaker"), "speaker", row_number)?;
        let title = required(columns.get(&row, "title"), "title", row_number)?;

        records.push(TalkRecord {
            conference_id,
            date: columns.get(&row, "date").to_string(),
            location: columns.get(&row, "location").to_string(),
            talk_order: columns.get(&row, "talk_order").to_string(),
            speaker: speaker.to_string(),
            affiliation: columns.get(&row, "affiliation").to_string(),
            title: title.to_string(),
            talk_type: columns.get(&row, "talk_type").to_string(),
            video_url: columns.get(&row, "video_url").to_string(),
            presentation_files: columns.get(&row, "presentation_files").to_string(),
            duration_minutes: columns.get(&row, "duration_minutes").to_string(),
            tags: columns.get(&row, "tags").to_string(),
            keywords: columns.get(&row, "keywords").to_string(),
            origin: columns.get(&row, "origin").to_string(),
        });
    }

    debug!(records = records.len(), "loaded talk collection");
    Ok(records)
}

/// Load a talk collection from a file path.
pub fn read_records_from_path(path: &Path) -> Result<Vec<TalkRecord>> {
    read_records(File::open(path)?)
}

/// Load the canonical conference override table.
///
/// One row per conference id; a repeated id keeps the last row, matching the
/// single-entry invariant of the index.
pub fn read_conference_index<R: Read>(input: R) -> Result<ConferenceIndex> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let columns = ColumnMap::from_headers(reader.headers()?);
    columns.require("conference_id")?;

    let mut index = ConferenceIndex::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let row_number = (idx as u64) + 1;
        let conference_id = parse_conference_id(columns.get(&row, "conference_id"), row_number)?;
        index.insert(conference_id, ConferenceInfo {
            date: columns.get(&row, "date").to_string(),
            location: columns.get(&row, "location").to_string(),
        });
    }

    debug!(conferences = index.len(), "loaded conference index");
    Ok(index)
}

/// Load the conference override table from a file path.
pub fn read_conference_index_from_path(path: &Path) -> Result<ConferenceIndex> {
    read_conference_index(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_full_schema() {
        let csv = "conference_id,date,location,talk_order,speaker,affiliation,title,talk_type,\
                   video_url,presentation_files,duration_minutes,tags,keywords,origin\n\
                   1,2020-01-01,City A,2,Jane Doe,ExampleCorp,BGP Hijacking 101,keynote,\
                   http://x/1,deck.pdf,45,bgp,routing,harvest\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.conference_id, 1);
        assert_eq!(record.speaker, "Jane Doe");
        assert_eq!(record.talk_type, "keynote");
        assert_eq!(record.origin, "harvest");
    }

    #[test]
    fn absent_columns_default_to_empty() {
        let csv = "conference_id,speaker,title\n3,Jane Doe,BGP Hijacking 101\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].conference_id, 3);
        assert!(records[0].video_url.is_empty());
        assert!(records[0].tags.is_empty());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let csv = "CONFERENCE_ID,SPEAKER,TITLE,TAGS\n3,Jane Doe,BGP Hijacking 101,bgp\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].tags, "bgp");
    }

    #[test]
    fn missing_required_column_is_a_schema_error() {
        let csv = "conference_id,title\n1,BGP Hijacking 101\n";
        let error = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(error, IngestError::MissingColumn { column: "speaker" }));
    }

    #[test]
    fn non_integer_conference_id_is_a_schema_error_with_row_context() {
        let csv = "conference_id,speaker,title\n1,Jane Doe,T1\nnope,John Roe,T2\n";
        let error = read_records(csv.as_bytes()).unwrap_err();
        match error {
            IngestError::InvalidConferenceId { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_required_field_is_a_schema_error() {
        let csv = "conference_id,speaker,title\n1,,BGP Hijacking 101\n";
        let error = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(error, IngestError::MissingField {
            row: 1,
            field: "speaker"
        }));
    }

    #[test]
    fn conference_index_keeps_last_entry_per_id() {
        let csv = "conference_id,date,location\n1,2019-01-01,Old City\n1,2020-01-01,City A\n";
        let index = read_conference_index(csv.as_bytes()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(1).unwrap().location, "City A");
    }
}
