//! # Extraction Logic
//!
//! High-level function turning one source unit into a [`TypeReport`].

use crate::parser::fields::decompose_fields;
use crate::parser::locator::{locate_aliases, locate_interfaces};
use crate::parser::mode::ExtractionMode;
use crate::parser::models::{TypeEntry, TypeReport};
use crate::parser::scan::strip_comments;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Extracts every exported interface and type alias from `text`.
///
/// Interfaces are collected first, then aliases, each in source order. A name
/// declared more than once keeps the last declaration at the position of the
/// first. Malformed declarations and fields are skipped; this never fails.
///
/// # Arguments
///
/// * `source_identifier` - Label copied into the report (e.g. the file path).
/// * `text` - The complete source text.
/// * `mode` - Scanning rules to apply.
pub fn analyze_source(source_identifier: &str, text: &str, mode: ExtractionMode) -> TypeReport {
    let scanned: Cow<'_, str> = match mode {
        ExtractionMode::Legacy => Cow::Borrowed(text),
        ExtractionMode::Structural => Cow::Owned(strip_comments(text)),
    };

    let mut report = TypeReport::new(source_identifier);

    for decl in locate_interfaces(&scanned, mode) {
        let fields = decompose_fields(decl.text, mode);
        debug!("Found interface {} with {} fields", decl.name, fields.len());
        report.insert(decl.name, TypeEntry::Interface { fields });
    }

    for decl in locate_aliases(&scanned, mode) {
        let definition = decl.text.trim().to_string();
        debug!("Found type alias {} = {}", decl.name, definition);
        report.insert(decl.name, TypeEntry::Alias { definition });
    }

    trace!(
        "Extracted {} types from {} ({} mode)",
        report.entry_count(),
        source_identifier,
        mode
    );

    report
}
