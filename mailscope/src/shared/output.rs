use crate::analyze::HeaderAnalysis;
use crate::prelude::AnalyzeError;
use chrono::{DateTime, Local};
use normpath::PathExt;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Builds `<prefix>_YYYYMMDD_HHMMSS.json`.
pub fn output_file_name(prefix: &str, timestamp: &DateTime<Local>) -> String {
    format!("{}_{}.json", prefix, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Renders an analysis as JSON indented with four spaces, keeping field order.
pub fn render_json(analysis: &HeaderAnalysis) -> Result<String, AnalyzeError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    analysis.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Writes `analysis` into `output_dir` under a timestamped name and returns the final path.
///
/// The document is staged in a temporary file in the same directory and renamed into
/// place, so a failure at any point leaves no partial output behind.
pub fn write_analysis(
    output_dir: &Path,
    prefix: &str,
    analysis: &HeaderAnalysis,
) -> Result<PathBuf, AnalyzeError> {
    let body = render_json(analysis)?;

    fs::create_dir_all(output_dir)?;
    let file_path = output_dir.join(output_file_name(prefix, &Local::now()));

    let mut staged = NamedTempFile::new_in(output_dir)?;
    staged.write_all(body.as_bytes())?;
    staged.as_file().sync_all()?;
    debug!("Moving {} to {}", staged.path().display(), file_path.display());
    staged.persist(&file_path)?;

    // make this path nicer
    let file_path = file_path
        .normalize()
        .map(|x| x.into_path_buf())
        .unwrap_or(file_path);

    Ok(file_path)
}
