use serde::Serialize;

/// Lowest score a component can hold.
pub const MIN_SCORE: u8 = 0;
/// Highest score a component can hold.
pub const MAX_SCORE: u8 = 100;

/// One student: name, raw component scores, and the derived letter grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    scores: Vec<u8>,
    grade: Option<char>,
}

impl Record {
    /// Creates an ungraded record.
    pub fn new(name: impl Into<String>, scores: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            scores,
            grade: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    /// The letter grade, or `None` until the record has been graded.
    pub fn grade(&self) -> Option<char> {
        self.grade
    }

    pub(crate) fn set_grade(&mut self, letter: char) {
        self.grade = Some(letter);
    }
}
