//! Error types for the timesheet ecosystem.

use thiserror::Error;

/// Errors that can occur in timesheet operations.
///
/// Remote failures are deliberately coarse: the UI surfaces one static
/// message per concern (auth, file lookup, upload), never structured detail.
#[derive(Error, Debug)]
pub enum TimesheetError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid month token '{0}'. Expected e.g. 'August2025'")]
    Month(String),

    #[error("Authorization error: {0}")]
    Auth(String),

    #[error("Drive lookup failed: {0}")]
    FileLookup(String),

    #[error("Spreadsheet creation failed: {0}")]
    FileCreate(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for timesheet operations.
pub type TimesheetResult<T> = Result<T, TimesheetError>;
