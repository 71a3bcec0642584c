//! Errors raised while converting an edge dump into CSV.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input dump could not be read
    #[error("Failed to read input '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output CSV could not be created or truncated
    #[error("Failed to create output '{}': {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a row (or the header) failed part way through
    #[error("Failed to write output '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An indexed-label line without the index field at position 3
    #[error(
        "Malformed record on line {line_number}: indexed label needs at least 4 fields, found {field_count} in '{line}'"
    )]
    MalformedRecord {
        line_number: usize,
        field_count: usize,
        line: String,
    },
}

impl ConvertError {
    /// True when the input data itself is at fault rather than the filesystem
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ConvertError::MalformedRecord { .. })
    }

    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            ConvertError::ReadInput { .. }
                | ConvertError::CreateOutput { .. }
                | ConvertError::WriteOutput { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::ReadInput { .. } => "READ_INPUT_FAILED",
            ConvertError::CreateOutput { .. } => "CREATE_OUTPUT_FAILED",
            ConvertError::WriteOutput { .. } => "WRITE_OUTPUT_FAILED",
            ConvertError::MalformedRecord { .. } => "MALFORMED_RECORD",
        }
    }
}
