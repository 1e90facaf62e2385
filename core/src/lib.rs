#![deny(missing_docs)]

//! # Typeprobe Core
//!
//! Extraction engine for the exported type model of TypeScript sources.
//! Finds `export interface` and `export type` declarations, splits interface
//! bodies into fields and renders the result as JSON or YAML.

/// Shared error types.
pub mod error;

/// Declaration and field extraction.
pub mod parser;

/// Report serialization.
pub mod report;

/// Loading source units from disk.
pub mod source;

pub use error::{AppError, AppResult};
pub use parser::{
    analyze_source, decompose_fields, locate_aliases, locate_interfaces, BodyExtractor,
    ExtractionMode, FieldSpec, RawDeclaration, TypeEntry, TypeReport,
};
pub use report::{render_error, render_report, render_reports, OutputFormat};
pub use source::{analyze_path, load_source, SourceUnit};
