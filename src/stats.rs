use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{GraderError, Result};
use crate::grading::GradingScheme;
use crate::record::{MAX_SCORE, MIN_SCORE, Record};
use crate::roster::Roster;

/// Average, minimum and maximum for one graded component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentStats {
    pub name: String,
    pub average: f64,
    pub minimum: u8,
    pub maximum: u8,
}

/// Class-wide statistics for every component of a scheme.
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub generated_at: DateTime<Utc>,
    pub students: usize,
    pub components: Vec<ComponentStats>,
}

impl ClassReport {
    /// Computes per-component statistics over the whole roster.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::EmptyRoster`] for an empty roster and
    /// [`GraderError::MissingScore`] if any record is short a component.
    pub fn from_roster(roster: &Roster, scheme: &GradingScheme) -> Result<Self> {
        let components = scheme
            .components()
            .iter()
            .enumerate()
            .map(|(index, component)| -> Result<ComponentStats> {
                Ok(ComponentStats {
                    name: component.name.clone(),
                    average: average(roster, index)?,
                    minimum: minimum(roster, index)?,
                    maximum: maximum(roster, index)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassReport {
            generated_at: Utc::now(),
            students: roster.count(),
            components,
        })
    }
}

/// Arithmetic mean of component `index` across the roster.
pub fn average(roster: &Roster, index: usize) -> Result<f64> {
    if roster.is_empty() {
        return Err(GraderError::EmptyRoster);
    }
    let mut total = 0u64;
    for record in roster {
        total += u64::from(score_at(record, index)?);
    }
    Ok(total as f64 / roster.count() as f64)
}

/// Lowest score for component `index`.
///
/// An empty roster returns [`MAX_SCORE`], the seed value, which carries no meaning.
pub fn minimum(roster: &Roster, index: usize) -> Result<u8> {
    roster
        .iter()
        .try_fold(MAX_SCORE, |min, record| -> Result<u8> {
            Ok(min.min(score_at(record, index)?))
        })
}

/// Highest score for component `index`.
///
/// An empty roster returns [`MIN_SCORE`], the seed value, which carries no meaning.
pub fn maximum(roster: &Roster, index: usize) -> Result<u8> {
    roster
        .iter()
        .try_fold(MIN_SCORE, |max, record| -> Result<u8> {
            Ok(max.max(score_at(record, index)?))
        })
}

fn score_at(record: &Record, index: usize) -> Result<u8> {
    record
        .scores()
        .get(index)
        .copied()
        .ok_or_else(|| GraderError::MissingScore {
            name: record.name().to_string(),
            index,
        })
}
