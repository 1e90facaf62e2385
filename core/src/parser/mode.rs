//! # Extraction Modes
//!
//! Selects the scanning rules used by the locator and the field decomposer.

use std::fmt::Display;
use std::str::FromStr;

/// Scanning rules for declaration bodies, alias definitions and fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtractionMode {
    /// Bodies end at the first `}`, aliases and fields at the first `;`.
    /// Comments are not recognized.
    #[default]
    Legacy,
    /// Comments are stripped, bodies end at the matching `}` and fields are
    /// split only outside brackets and string literals.
    Structural,
}

impl ExtractionMode {
    /// All modes, in CLI listing order.
    pub const ALL: [ExtractionMode; 2] = [ExtractionMode::Legacy, ExtractionMode::Structural];

    /// The lowercase name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Legacy => "legacy",
            ExtractionMode::Structural => "structural",
        }
    }
}

impl Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ExtractionMode::Legacy),
            "structural" => Ok(ExtractionMode::Structural),
            other => Err(format!(
                "unknown extraction mode `{}` (expected `legacy` or `structural`)",
                other
            )),
        }
    }
}
