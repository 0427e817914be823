//! Output formatting and persistence for graded rosters.
//!
//! Renders the grade sheet and the statistics table as text, serializes the
//! class report as JSON, and exports per-student scores as CSV.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::error::GraderError;
use crate::grading::{GradingScheme, weighted_sum};
use crate::roster::Roster;
use crate::stats::ClassReport;

/// Column width for student names in the grade sheet.
pub const NAME_WIDTH: usize = 20;
/// Column width for the letter grade in the grade sheet.
pub const GRADE_WIDTH: usize = 5;
/// Column width for every cell of the statistics table.
pub const STATS_COLUMN_WIDTH: usize = 8;
/// Decimal places for statistics values.
pub const STATS_PRECISION: usize = 2;

/// Renders the grade sheet: a header naming the student count and input file,
/// a blank line, then one `name grade` line per record in roster order.
///
/// # Errors
///
/// Returns [`GraderError::Ungraded`] if any record has no grade yet.
pub fn format_grade_sheet(
    roster: &Roster,
    input_path: &str,
) -> std::result::Result<String, GraderError> {
    let mut sheet = format!(
        "Letter grade for {} students given in {} is:\n\n",
        roster.count(),
        input_path
    );

    for record in roster {
        let grade = record.grade().ok_or_else(|| GraderError::Ungraded {
            name: record.name().to_string(),
        })?;
        let _ = writeln!(
            sheet,
            "{:<name_w$}{:>grade_w$}",
            record.name(),
            grade,
            name_w = NAME_WIDTH,
            grade_w = GRADE_WIDTH
        );
    }

    Ok(sheet)
}

/// Renders the statistics table as rows: a component-name header, then the
/// `Average`, `Minimum` and `Maximum` rows.
pub fn format_class_report(report: &ClassReport) -> Vec<String> {
    let w = STATS_COLUMN_WIDTH;
    let p = STATS_PRECISION;

    let mut header = format!("{:w$}", "");
    for component in &report.components {
        let _ = write!(header, "{:<w$}", component.name);
    }

    let row = |label: &str, value: &dyn Fn(usize) -> f64| {
        let mut line = format!("{label:<w$}");
        for index in 0..report.components.len() {
            let _ = write!(line, "{:<w$.p$}", value(index));
        }
        line
    };

    vec![
        header,
        row("Average", &|i| report.components[i].average),
        row("Minimum", &|i| f64::from(report.components[i].minimum)),
        row("Maximum", &|i| f64::from(report.components[i].maximum)),
    ]
}

/// Serializes the class report as pretty-printed JSON.
pub fn render_json(report: &ClassReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the rendered grade sheet to `path`, replacing any existing file.
pub fn write_grade_sheet(path: &Path, sheet: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = sheet.len(), "Writing grade sheet");
    std::fs::write(path, sheet)
        .with_context(|| format!("Failed to open '{}' file for write operation", path.display()))
}

#[derive(Debug, Serialize)]
struct GradeRow<'a> {
    name: &'a str,
    weighted_score: f64,
    grade: Option<char>,
}

/// Writes one `name,weighted_score,grade` CSV row per record, with headers.
pub fn export_csv(path: &Path, roster: &Roster, scheme: &GradingScheme) -> Result<()> {
    debug!(path = %path.display(), rows = roster.count(), "Exporting CSV");

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open '{}' file for write operation", path.display()))?;

    for record in roster {
        writer.serialize(GradeRow {
            name: record.name(),
            weighted_score: weighted_sum(record.scores(), scheme),
            grade: record.grade(),
        })?;
    }
    writer.flush()?;

    Ok(())
}
