//! Line parser for roster records.

use crate::error::{GraderError, Result};
use crate::record::{MAX_SCORE, MIN_SCORE, Record};
use crate::tokenizer::{DEFAULT_DELIMITER, Tokenizer};

/// Parses a comma-delimited `name,score,score,...` line into an ungraded [`Record`].
///
/// # Errors
///
/// See [`parse_record_with`].
pub fn parse_record(line: &str) -> Result<Record> {
    parse_record_with(line, DEFAULT_DELIMITER)
}

/// Parses a `name<d>score<d>score...` line split on `delimiter`.
///
/// # Errors
///
/// - [`GraderError::Parse`] if the line is blank.
/// - [`GraderError::EmptyName`] if the first field is empty.
/// - [`GraderError::InvalidScore`] for a score field that is empty, not an
///   integer, or outside `MIN_SCORE..=MAX_SCORE`.
pub fn parse_record_with(line: &str, delimiter: char) -> Result<Record> {
    let tokenizer = Tokenizer::new(line, delimiter)?;
    let mut cursor = tokenizer.cursor();

    let name = match cursor.next_field() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(GraderError::EmptyName),
    };

    let mut scores = Vec::with_capacity(tokenizer.field_count() - 1);
    for field in cursor {
        scores.push(parse_score(field)?);
    }

    Ok(Record::new(name, scores))
}

fn parse_score(field: &str) -> Result<u8> {
    let invalid = || GraderError::InvalidScore {
        value: field.to_string(),
        min: MIN_SCORE,
        max: MAX_SCORE,
    };

    let value: i64 = field.parse().map_err(|_| invalid())?;
    if !(i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
        return Err(invalid());
    }
    u8::try_from(value).map_err(|_| invalid())
}
