//! The weights and thresholds that define how scores become letters.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{GraderError, Result};

/// Tolerance when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Slack applied to a weighted sum before comparing it with a threshold, so that
/// rounding in the weighted sum cannot drop an exact boundary score a letter.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// One graded item and its share of the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub weight: f64,
}

/// Lowest weighted sum that still earns `letter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub min: f64,
    pub letter: char,
}

/// An immutable, validated grading scheme.
///
/// Stored on disk as JSON:
/// ```json
/// {
///   "components": [{ "name": "Quiz 1", "weight": 0.1 }],
///   "thresholds": [{ "min": 90.0, "letter": "A" }, { "min": 0.0, "letter": "F" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScheme")]
pub struct GradingScheme {
    components: Vec<Component>,
    thresholds: Vec<Threshold>,
}

#[derive(Deserialize)]
struct RawScheme {
    components: Vec<Component>,
    thresholds: Vec<Threshold>,
}

impl TryFrom<RawScheme> for GradingScheme {
    type Error = GraderError;

    fn try_from(raw: RawScheme) -> Result<Self> {
        GradingScheme::new(raw.components, raw.thresholds)
    }
}

impl GradingScheme {
    /// Builds a scheme after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::InvalidScheme`] if there are no components, a
    /// weight is negative or non-finite, the weights do not sum to 1.0, the
    /// thresholds are not strictly descending, or the last threshold is not 0.
    pub fn new(components: Vec<Component>, thresholds: Vec<Threshold>) -> Result<Self> {
        let invalid = |reason: String| Err(GraderError::InvalidScheme(reason));

        if components.is_empty() {
            return invalid("at least one component is required".to_string());
        }
        if let Some(c) = components
            .iter()
            .find(|c| !c.weight.is_finite() || c.weight < 0.0)
        {
            return invalid(format!("component '{}' has invalid weight {}", c.name, c.weight));
        }
        let total: f64 = components.iter().map(|c| c.weight).sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return invalid(format!("weights sum to {total}, expected 1.0"));
        }

        if let Some(t) = thresholds.iter().find(|t| !t.min.is_finite()) {
            return invalid(format!("threshold for '{}' has invalid minimum {}", t.letter, t.min));
        }
        let Some(last) = thresholds.last() else {
            return invalid("at least one threshold is required".to_string());
        };
        if last.min != 0.0 {
            return invalid(format!(
                "last threshold must be 0 so every score is graded, found {}",
                last.min
            ));
        }
        if thresholds.windows(2).any(|w| w[0].min <= w[1].min) {
            return invalid("thresholds must be strictly descending".to_string());
        }

        Ok(Self {
            components,
            thresholds,
        })
    }

    /// The seven-component quiz/midterm/final scheme.
    ///
    /// | Component | Weight |   | Threshold | Letter |
    /// |-----------|--------|---|-----------|--------|
    /// | Quiz 1-4  | 0.10   |   | >= 90     | A      |
    /// | Mid 1     | 0.20   |   | >= 80     | B      |
    /// | Mid 2     | 0.15   |   | >= 70     | C      |
    /// | Final     | 0.25   |   | >= 60     | D      |
    /// |           |        |   | >= 0      | F      |
    pub fn standard() -> Self {
        let components = [
            ("Quiz 1", 0.1),
            ("Quiz 2", 0.1),
            ("Quiz 3", 0.1),
            ("Quiz 4", 0.1),
            ("Mid 1", 0.2),
            ("Mid 2", 0.15),
            ("Final", 0.25),
        ]
        .into_iter()
        .map(|(name, weight)| Component {
            name: name.to_string(),
            weight,
        })
        .collect();

        let thresholds = [(90.0, 'A'), (80.0, 'B'), (70.0, 'C'), (60.0, 'D'), (0.0, 'F')]
            .into_iter()
            .map(|(min, letter)| Threshold { min, letter })
            .collect();

        Self {
            components,
            thresholds,
        }
    }

    /// Loads and validates a scheme from a JSON file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grading scheme '{}'", path.display()))?;
        let scheme: GradingScheme = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse grading scheme '{}'", path.display()))?;
        Ok(scheme)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    /// Number of scores a record must carry to be graded.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Letter for a weighted sum: the first threshold at or below `sum`, within
    /// [`THRESHOLD_TOLERANCE`].
    ///
    /// Sums below every threshold (only possible for negative input) fall to
    /// the last letter.
    pub fn letter_for(&self, sum: f64) -> char {
        let sum = sum + THRESHOLD_TOLERANCE;
        let index = self
            .thresholds
            .iter()
            .position(|t| t.min <= sum)
            .unwrap_or(self.thresholds.len() - 1);
        self.thresholds[index].letter
    }
}

impl Default for GradingScheme {
    fn default() -> Self {
        Self::standard()
    }
}
