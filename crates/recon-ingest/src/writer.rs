//! CSV export in the fixed output column order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use recon_model::{OUTPUT_COLUMNS, TalkRecord};
use tracing::debug;

use crate::error::Result;

/// Write a collection in output order, prefixed with a 1-based `index`
/// column so exported rows are uniquely addressable.
pub fn write_records<W: Write>(output: W, records: &[TalkRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);

    let mut header = Vec::with_capacity(OUTPUT_COLUMNS.len() + 1);
    header.push("index");
    header.extend(OUTPUT_COLUMNS);
    writer.write_record(&header)?;

    for (idx, record) in records.iter().enumerate() {
        let mut row = vec![(idx + 1).to_string()];
        row.extend(record.csv_fields());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    debug!(records = records.len(), "wrote talk collection");
    Ok(())
}

/// Write a collection to a file path.
pub fn write_records_to_path(path: &Path, records: &[TalkRecord]) -> Result<()> {
    write_records(File::create(path)?, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_records;

    fn sample(conference_id: u32, speaker: &str) -> TalkRecord {
        TalkRecord {
            conference_id,
            speaker: speaker.to_string(),
            title: format!("talk by {speaker}"),
            tags: "bgp".to_string(),
            ..TalkRecord::default()
        }
    }

    #[test]
    fn writes_header_and_index_column() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &[sample(1, "Jane Doe"), sample(2, "John Roe")]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("index,conference_id,date,location"));
        assert!(lines.next().unwrap().starts_with("1,1,"));
        assert!(lines.next().unwrap().starts_with("2,2,"));
    }

    #[test]
    fn written_records_read_back() {
        let records = vec![sample(1, "Jane Doe"), sample(5, "John Roe")];
        let mut buffer = Vec::new();
        write_records(&mut buffer, &records).unwrap();

        let reloaded = read_records(buffer.as_slice()).unwrap();
        assert_eq!(reloaded, records);
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.csv");
        let records = vec![sample(3, "Jane Doe")];

        write_records_to_path(&path, &records).unwrap();
        let reloaded = crate::reader::read_records_from_path(&path).unwrap();
        assert_eq!(reloaded, records);
    }
}
