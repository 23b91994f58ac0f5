//! The `psikotest report` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use psikotest_report::{write_document, write_html_report, write_json_report};

use super::open_session;
use crate::config::PsikotestConfig;

pub fn execute(
    config: &PsikotestConfig,
    format: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let format = format.unwrap_or_else(|| config.default_format.clone());
    let formats = parse_formats(&format)?;

    let session = open_session(config)?;
    let results = session
        .results()
        .context("no results yet; run `psikotest score` first")?;
    let candidate = session.candidate();

    for fmt in formats {
        match fmt {
            "html" => {
                let path = write_html_report(candidate, results, &output)?;
                println!("HTML report: {}", path.display());
            }
            "text" => {
                let path = write_document(candidate, results, &output)?;
                println!("Document: {}", path.display());
            }
            "json" => {
                let path = write_json_report(candidate, results, &output)?;
                println!("Results saved to: {}", path.display());
            }
            _ => unreachable!("formats are validated by parse_formats"),
        }
    }

    Ok(())
}

const FORMATS: [&str; 3] = ["html", "text", "json"];

/// Split a `--format` value into known format names, rejecting unknown ones.
fn parse_formats(format: &str) -> Result<Vec<&'static str>> {
    if format.trim() == "all" {
        return Ok(FORMATS.to_vec());
    }
    format
        .split(',')
        .map(str::trim)
        .map(|name| {
            FORMATS
                .iter()
                .copied()
                .find(|known| *known == name)
                .with_context(|| {
                    format!("unknown format: {name} (expected html, text, json or all)")
                })
        })
        .collect()
}
