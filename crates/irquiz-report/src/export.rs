//! Writing results to disk.
//!
//! The export format follows the destination's extension: `.json` gets a
//! machine-readable document, anything else the plain-text report.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

use irquiz_core::evaluator::ScoreReport;

use crate::text::{format_report, score_line, TIMESTAMP_FORMAT};

/// Output formats for a saved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    /// Pick a format from the destination path.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Text,
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    generated_at: String,
    summary: String,
    #[serde(flatten)]
    report: &'a ScoreReport,
}

/// Render a report in the given format without touching the filesystem.
pub fn render(
    report: &ScoreReport,
    generated_at: NaiveDateTime,
    format: ExportFormat,
) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(format_report(report, generated_at)),
        ExportFormat::Json => {
            let doc = JsonExport {
                generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
                summary: score_line(report),
                report,
            };
            serde_json::to_string_pretty(&doc).context("failed to serialize report")
        }
    }
}

/// Write a report to `path`, creating parent directories as needed.
pub fn write_report(
    report: &ScoreReport,
    path: &Path,
    generated_at: NaiveDateTime,
) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path);
    let content = render(report, generated_at, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    tracing::info!(?format, "report written to {}", path.display());
    Ok(format)
}
