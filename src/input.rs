//! Roster file loading.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Reads the roster file at `path` into lines.
///
/// Accepts `\n` and `\r\n` endings, strips a leading UTF-8 byte order mark,
/// and drops blank lines at the end of the
/// file. Blank lines elsewhere are kept so the parser can reject them with
/// their line number.
///
/// # Errors
///
/// Fails if the file cannot be read or is empty.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open '{}' file for read operation", path.display()))?;

    if content.is_empty() {
        bail!("File '{}' is empty", path.display());
    }

    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        bail!("File '{}' has no student data", path.display());
    }

    debug!(path = %path.display(), lines = lines.len(), "Roster file read");
    Ok(lines)
}
