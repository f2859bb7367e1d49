//! Error taxonomy for the birthday book
//!
//! - `ValidationError`: bad input when creating or editing a record
//! - `ParseError`: a single rejected CSV row (the rest of the import continues)
//! - `StoreError`: id lookups against the book
//! - `TransferError`: terminal failures that abort a whole import/export

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid month {0}. Expected a value from 1 to 12")]
    InvalidMonth(u32),

    #[error("Invalid day {day} for month {month}")]
    InvalidDay { month: u32, day: u32 },

    #[error("Birth year {0} is out of range. Expected a year from 0000 to 9999")]
    YearOutOfRange(i32),

    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid birthday '{0}'. Use YYYY-MM-DD, or MM-DD when the year is unknown")]
    Unparseable(String),
}

/// A CSV row that was rejected during import. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid data format on line {line}. Expected {expected} columns, but found {actual}.")]
    ColumnCount {
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid date format '{value}' on line {line}. Please use YYYY-MM-DD format.")]
    InvalidDate { line: u64, value: String },

    #[error("Invalid yearIsKnown value '{value}' on line {line}. Expected true or false.")]
    InvalidYearFlag { line: u64, value: String },

    #[error("Invalid id '{value}' on line {line}. Expected a UUID.")]
    InvalidId { line: u64, value: String },

    #[error("Missing name on line {line}.")]
    EmptyName { line: u64 },
}

impl ParseError {
    pub fn line(&self) -> u64 {
        match self {
            ParseError::ColumnCount { line, .. }
            | ParseError::InvalidDate { line, .. }
            | ParseError::InvalidYearFlag { line, .. }
            | ParseError::InvalidId { line, .. }
            | ParseError::EmptyName { line } => *line,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Birthday '{0}' not found")]
    NotFound(Uuid),

    #[error("Birthday '{0}' already exists")]
    DuplicateId(Uuid),
}

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Could not access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV header is missing the required '{0}' column")]
    MissingColumn(&'static str),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}
