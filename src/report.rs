//! Rendering of scan outcomes
//!
//! The text form is the line-oriented console report; the JSON form carries
//! the same information for scripts.

use anyhow::Result;
use serde_json::json;
use std::fmt::Write;

use crate::scan::{LineKind, ScanError, ScanReport};
use crate::ExportFormat;

const SEPARATOR_WIDTH: usize = 50;

pub fn export(outcome: &Result<ScanReport, ScanError>, format: &ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => export_to_text(outcome),
        ExportFormat::Json => export_to_json(outcome),
    }
}

pub fn export_to_text(outcome: &Result<ScanReport, ScanError>) -> Result<String> {
    let mut output = String::new();

    match outcome {
        Ok(report) => {
            writeln!(output, "Reading document: {}", report.title)?;
            writeln!(output, "{}", "=".repeat(SEPARATOR_WIDTH))?;

            // Related lines always follow the first pass
            let (first_pass, related): (Vec<_>, Vec<_>) = report
                .lines
                .iter()
                .partition(|line| line.kind != LineKind::Related);

            for line in first_pass {
                writeln!(output, "{}: {}", line.kind.label(), line.text)?;
            }
            if report.searched_related() {
                writeln!(output, "No RSR data found in the document.")?;
                writeln!(output, "Searching for related terms...")?;
                for line in related {
                    writeln!(output, "{}: {}", line.kind.label(), line.text)?;
                }
            }
        }
        Err(err) => {
            writeln!(output, "{err}")?;
        }
    }

    output.push('\n');
    match outcome {
        Ok(report) if !report.entries.is_empty() => {
            writeln!(output, "Found {} RSR-related entries", report.entries.len())?;
        }
        _ => {
            writeln!(output, "No RSR data extracted")?;
        }
    }

    Ok(output)
}

pub fn export_to_json(outcome: &Result<ScanReport, ScanError>) -> Result<String> {
    let value = match outcome {
        Ok(report) => serde_json::to_value(report)?,
        Err(err) => {
            let kind = match err {
                ScanError::MissingFile { .. } => "missing_file",
                ScanError::DocumentReadFailure { .. } => "document_read_failure",
            };
            json!({
                "error": {
                    "kind": kind,
                    "path": err.path().to_string_lossy(),
                    "message": err.to_string(),
                }
            })
        }
    };

    let mut output = serde_json::to_string_pretty(&value)?;
    output.push('\n');
    Ok(output)
}
