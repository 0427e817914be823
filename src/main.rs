//! CLI entry point for the letter grader.
//!
//! Reads a roster, writes the alphabetical grade sheet, and prints class
//! statistics per graded component.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use letter_grader::{
    grading::GradingScheme,
    output::{format_class_report, render_json},
    pipeline::{self, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, PipelineConfig},
    tokenizer::DEFAULT_DELIMITER,
};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "letter_grader")]
#[command(about = "Compute weighted letter grades and class statistics for a roster", long_about = None)]
struct Cli {
    /// Input roster followed by the output grade sheet path
    #[arg(value_name = "INPUT OUTPUT", num_args = 0..)]
    paths: Vec<PathBuf>,

    /// Field delimiter used in the roster
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// JSON grading scheme to use instead of the built-in weights
    #[arg(short, long, env = "LETTER_GRADER_SCHEME")]
    scheme: Option<PathBuf>,

    /// Also write name, weighted score and grade to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print class statistics as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/letter_grader.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("letter_grader.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "info"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    info!("Welcome to the Letter Grader application");

    let (input, output) = resolve_paths(cli.paths);
    info!(input = %input.display(), output = %output.display(), "Using roster files");

    let scheme = match &cli.scheme {
        Some(path) => {
            info!(path = %path.display(), "Loading grading scheme");
            GradingScheme::load(path)?
        }
        None => GradingScheme::standard(),
    };

    let config = PipelineConfig {
        input,
        output,
        delimiter: cli.delimiter,
        scheme,
        csv: cli.csv,
    };

    let summary = pipeline::run(&config)?;

    if cli.json {
        println!("{}", render_json(&summary.report)?);
    } else {
        println!("Here is the class averages:");
        for row in format_class_report(&summary.report) {
            println!("{row}");
        }
    }

    Ok(())
}

/// Filter from the directives in `var`, or `default` when it is unset or invalid.
fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Returns `(input, output)`; anything other than exactly two positional
/// paths falls back to the default file names.
fn resolve_paths(paths: Vec<PathBuf>) -> (PathBuf, PathBuf) {
    match <[PathBuf; 2]>::try_from(paths) {
        Ok([input, output]) => (input, output),
        Err(paths) => {
            warn!(
                given = paths.len(),
                input = DEFAULT_INPUT_FILE,
                output = DEFAULT_OUTPUT_FILE,
                "Expected input and output paths, using default file names"
            );
            (
                PathBuf::from(DEFAULT_INPUT_FILE),
                PathBuf::from(DEFAULT_OUTPUT_FILE),
            )
        }
    }
}
