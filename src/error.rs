//! Typed errors for the roster core.
//!
//! Everything below the I/O layer reports failures as a [`GraderError`] value.
//! The binary and the pipeline driver wrap these in `anyhow` with file and
//! line context.

use thiserror::Error;

/// Errors produced while parsing, grading, or summarizing a roster.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraderError {
    /// The line has no usable structure (blank or absent).
    #[error("malformed line: {reason}")]
    Parse { reason: String },

    /// The first field of a line was empty after trimming.
    #[error("parsed name is empty")]
    EmptyName,

    /// A score field was not an integer or fell outside the score range.
    #[error("parsed score '{value}' is not within score range of '{min}' to '{max}'")]
    InvalidScore { value: String, min: u8, max: u8 },

    /// A record has the wrong number of scores for the grading scheme.
    #[error("student {name} has {actual} scores, {required} scores are required to calculate the grade")]
    ScoreCountMismatch {
        name: String,
        actual: usize,
        required: usize,
    },

    /// Statistics were requested for a roster with no records.
    #[error("statistics requested for an empty roster")]
    EmptyRoster,

    /// A roster operation was handed no record.
    #[error("student record for roster operation is empty")]
    NullRecord,

    /// A record has no score at the requested component index.
    #[error("student {name} has no score for component {index}")]
    MissingScore { name: String, index: usize },

    /// A grading scheme failed validation.
    #[error("invalid grading scheme: {0}")]
    InvalidScheme(String),

    /// A grade sheet was requested for a record that was never graded.
    #[error("student {name} has not been graded")]
    Ungraded { name: String },
}

pub type Result<T> = std::result::Result<T, GraderError>;
