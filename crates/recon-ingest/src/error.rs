use thiserror::Error;

/// Ingestion and export failures.
///
/// Schema errors abort the run before any matching begins; the row number is
/// 1-based over data rows (the header is row 0).
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column {column:?} is missing from the header")]
    MissingColumn { column: &'static str },
    #[error("row {row}: required field {field:?} is empty")]
    MissingField { row: u64, field: &'static str },
    #[error("row {row}: conference id {value:?} is not an integer")]
    InvalidConferenceId { row: u64, value: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
