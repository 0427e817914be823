//! Delimited line tokenizer.
//!
//! A [`Tokenizer`] borrows one line and hands out independent [`Cursor`]s over
//! its fields. Every delimiter is a field boundary, so `"a,,b"` has three
//! fields and a trailing delimiter yields a trailing empty field.

use std::iter::FusedIterator;

use crate::error::{GraderError, Result};

/// Delimiter used by roster files unless configured otherwise.
pub const DEFAULT_DELIMITER: char = ',';

/// A borrowed view of one delimited line.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    line: &'a str,
    delimiter: char,
}

impl<'a> Tokenizer<'a> {
    /// Wraps `line` for tokenizing on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::Parse`] if the line is empty or whitespace-only.
    pub fn new(line: &'a str, delimiter: char) -> Result<Self> {
        if line.trim().is_empty() {
            return Err(GraderError::Parse {
                reason: "line is blank".to_string(),
            });
        }
        Ok(Self { line, delimiter })
    }

    /// Number of fields, counting empty ones between adjacent delimiters.
    pub fn field_count(&self) -> usize {
        self.line.matches(self.delimiter).count() + 1
    }

    /// Returns a fresh cursor positioned before the first field.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            remaining: Some(self.line),
            delimiter: self.delimiter,
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl<'a> IntoIterator for &Tokenizer<'a> {
    type Item = &'a str;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// Caller-owned position within a tokenized line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    remaining: Option<&'a str>,
    delimiter: char,
}

impl<'a> Cursor<'a> {
    /// Returns the next trimmed field, or `None` once the line is exhausted.
    pub fn next_field(&mut self) -> Option<&'a str> {
        let rest = self.remaining.take()?;
        match rest.split_once(self.delimiter) {
            Some((field, tail)) => {
                self.remaining = Some(tail);
                Some(field.trim())
            }
            None => Some(rest.trim()),
        }
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_field()
    }
}

impl FusedIterator for Cursor<'_> {}
