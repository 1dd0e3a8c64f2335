use super::error::AnalyzeError;
use super::headers::{analyze_headers, HeaderAnalysis};
use crate::shared::prelude::{render_json, write_analysis, FoundConfig};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

const PROMPT_TEXT: &str = "Enter header file path (e.g. sample_headers.txt):";

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// File containing the raw email headers, for stdin use '-'. When omitted you will be prompted for it.
    location: Option<String>,

    /// Also print the full analysis document to stdout.
    #[arg(long)]
    print: bool,
}

/// Runs one analysis and reports the outcome. Failures are reported to the console
/// and turned into a non-zero exit code, they are never returned.
pub async fn analyze_root(found_config: &FoundConfig, args: &AnalyzeArgs) -> Result<i32> {
    info!(target: "always", "{}", "=== Email Header Analyzer ===".bold());

    match analyze_and_save(found_config, args).await {
        Ok(_) => Ok(0),
        Err(AnalyzeError::SourceNotFound { file_name }) => {
            debug!("{} does not exist or is not a file", file_name);
            error!(target: "always", "File not found. Please check the path.");
            Ok(1)
        }
        Err(e) => {
            error!(target: "always", "Error: {}", e);
            Ok(1)
        }
    }
}

async fn analyze_and_save(
    found_config: &FoundConfig,
    args: &AnalyzeArgs,
) -> Result<PathBuf, AnalyzeError> {
    let location = match &args.location {
        Some(location) => location.clone(),
        None => prompt_for_location()?,
    };

    let headers = match location.as_str() {
        "-" => read_from_stdin()?,
        file_path => read_from_file(&found_config.resolve(file_path)).await?,
    };
    debug!("Read {} bytes of headers from {}", headers.len(), location);

    let analysis = analyze_headers(&headers);
    info!(target: "user", "Found {} routing hop(s)", analysis.received_path.len());

    let output_path = write_analysis(
        &found_config.output_dir,
        &found_config.output_prefix,
        &analysis,
    )?;

    if args.print {
        println!("{}", render_json(&analysis)?);
    }
    report_result(&analysis, &output_path);

    Ok(output_path)
}

fn report_result(analysis: &HeaderAnalysis, output_path: &Path) {
    info!(target: "always", "{}", "Analysis complete!".green().bold());
    info!(target: "always", "Saved to: {}", output_path.display());
    info!(target: "always", "Flags:");

    if !analysis.has_flags() {
        info!(target: "always", "  none");
    }
    for flag in &analysis.flags {
        warn!(target: "always", "  {} {}", flag.marker(), flag);
    }
}

fn prompt_for_location() -> Result<String, AnalyzeError> {
    let answer = if std::io::stdin().is_terminal() {
        inquire::Text::new(PROMPT_TEXT).prompt()?
    } else {
        // Not interactive, take the first line of stdin as the answer.
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        line
    };

    Ok(answer.trim().to_string())
}

fn read_from_stdin() -> Result<String, AnalyzeError> {
    let mut headers = String::new();
    std::io::stdin().lock().read_to_string(&mut headers)?;
    Ok(headers)
}

async fn read_from_file(file_path: &Path) -> Result<String, AnalyzeError> {
    if !file_path.is_file() {
        return Err(AnalyzeError::SourceNotFound {
            file_name: file_path.display().to_string(),
        });
    }
    Ok(tokio::fs::read_to_string(file_path).await?)
}
