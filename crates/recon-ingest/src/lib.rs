#![deny(unsafe_code)]

//! `recon-ingest` — CSV ingestion and export for talk collections.
//!
//! Reading validates the schema invariant (required fields present,
//! conference id coercible to an integer) so the engine never sees a
//! malformed record; writing emits the fixed output column order.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::IngestError;
pub use reader::{
    read_conference_index, read_conference_index_from_path, read_records, read_records_from_path,
};
pub use writer::{write_records, write_records_to_path};
