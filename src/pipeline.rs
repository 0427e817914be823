//! Single-run driver: read, parse, grade, sort, write, summarize.
//!
//! Any bad line or record aborts the run before the grade sheet is written.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::grading::{GradingScheme, grade_all};
use crate::input::read_lines;
use crate::output::{export_csv, format_grade_sheet, write_grade_sheet};
use crate::parser::parse_record_with;
use crate::roster::Roster;
use crate::stats::ClassReport;
use crate::tokenizer::DEFAULT_DELIMITER;

/// Default roster path when none is given on the command line.
pub const DEFAULT_INPUT_FILE: &str = "input.txt";
/// Default grade sheet path when none is given on the command line.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: char,
    pub scheme: GradingScheme,
    /// Optional CSV export path.
    pub csv: Option<PathBuf>,
}

impl PipelineConfig {
    /// Config with the standard scheme, comma delimiter and no CSV export.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            delimiter: DEFAULT_DELIMITER,
            scheme: GradingScheme::standard(),
            csv: None,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE)
    }
}

/// Result of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    /// The graded roster, sorted by name.
    pub roster: Roster,
    pub report: ClassReport,
}

/// Parses every line into a record and appends it, in order.
///
/// Errors carry the 1-based line number.
#[tracing::instrument(skip(lines))]
pub fn build_roster<I, S>(lines: I, delimiter: char) -> Result<Roster>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roster = Roster::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let record = parse_record_with(line.as_ref(), delimiter)
            .with_context(|| format!("Invalid student data on line {line_number}"))?;
        debug!(
            line = line_number,
            name = record.name(),
            scores = record.scores().len(),
            "Record parsed"
        );
        roster.append(record)?;
    }
    Ok(roster)
}

/// Runs the whole pipeline for `config`.
#[tracing::instrument(
    skip(config),
    fields(input = %config.input.display(), output = %config.output.display())
)]
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let lines = read_lines(&config.input)?;
    let mut roster = build_roster(&lines, config.delimiter)?;
    info!(students = roster.count(), "Student data read from input file");

    grade_all(&mut roster, &config.scheme).context("Failed to calculate letter grades")?;
    info!("Letter grade has been calculated for all students");

    roster.sort_by_name();

    let input_name = config.input.display().to_string();
    let sheet = format_grade_sheet(&roster, &input_name)?;
    write_grade_sheet(&config.output, &sheet)?;
    info!("Student letter grades written to output file");

    if let Some(csv_path) = &config.csv {
        export_csv(csv_path, &roster, &config.scheme)?;
        info!(path = %csv_path.display(), "Grade CSV exported");
    }

    let report = ClassReport::from_roster(&roster, &config.scheme)?;
    Ok(RunSummary { roster, report })
}
