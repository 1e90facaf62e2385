#![deny(missing_docs)]

//! # Report Rendering
//!
//! Serializes reports into the documents printed by the CLI:
//!
//! - success: `{ "file": ..., "count": ..., "types": { ... } }`
//! - failure: `{ "error": ..., "types": {} }`

use crate::error::{AppError, AppResult};
use crate::parser::{TypeEntry, TypeReport};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Text format of rendered documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON, two-space indent.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!(
                "unknown output format `{}` (expected `json` or `yaml`)",
                other
            )),
        }
    }
}

/// Wire shape of a successful report.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    /// Source identifier.
    pub file: &'a str,
    /// Number of entries.
    pub count: usize,
    /// Entries keyed by type name, in discovery order.
    pub types: &'a IndexMap<String, TypeEntry>,
}

impl<'a> From<&'a TypeReport> for ReportDocument<'a> {
    fn from(report: &'a TypeReport) -> Self {
        Self {
            file: &report.source_identifier,
            count: report.entry_count(),
            types: &report.entries,
        }
    }
}

/// Wire shape of a failed run.
#[derive(Debug, Serialize)]
pub struct ErrorDocument {
    /// Human readable failure message.
    pub error: String,
    /// Always empty.
    pub types: IndexMap<String, TypeEntry>,
}

impl From<&AppError> for ErrorDocument {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.to_string(),
            types: IndexMap::new(),
        }
    }
}

/// Renders a single report.
pub fn render_report(report: &TypeReport, format: OutputFormat) -> AppResult<String> {
    render(&ReportDocument::from(report), format)
}

/// Renders several reports as one sequence, in the given order.
pub fn render_reports(reports: &[TypeReport], format: OutputFormat) -> AppResult<String> {
    let documents: Vec<ReportDocument<'_>> = reports.iter().map(ReportDocument::from).collect();
    render(&documents, format)
}

/// Renders the error document for a failed run.
pub fn render_error(error: &AppError, format: OutputFormat) -> AppResult<String> {
    render(&ErrorDocument::from(error), format)
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> AppResult<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}
