//! # Body Extraction
//!
//! Narrow `text -> body span` seam used by the declaration locator, so the
//! first-brace and brace-matching behaviors are interchangeable.

use crate::parser::mode::ExtractionMode;
use crate::parser::scan::closing_brace;

/// Finds the body of a declaration whose opening `{` was just consumed.
pub trait BodyExtractor {
    /// Returns the body (without braces), or `None` when it never closes.
    ///
    /// # Arguments
    ///
    /// * `rest` - The text immediately following the opening brace.
    fn extract<'a>(&self, rest: &'a str) -> Option<&'a str>;
}

/// Ends the body at the first `}`, whatever it closes.
///
/// A nested object type such as `meta: { a: string }` truncates the body at
/// its inner brace.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstBrace;

impl BodyExtractor for FirstBrace {
    fn extract<'a>(&self, rest: &'a str) -> Option<&'a str> {
        rest.find('}').map(|end| &rest[..end])
    }
}

/// Ends the body at the `}` matching the opening brace, ignoring braces in
/// string literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedBraces;

impl BodyExtractor for BalancedBraces {
    fn extract<'a>(&self, rest: &'a str) -> Option<&'a str> {
        closing_brace(rest).map(|end| &rest[..end])
    }
}

impl ExtractionMode {
    /// The body extractor implementing this mode.
    pub fn body_extractor(&self) -> &'static dyn BodyExtractor {
        match self {
            ExtractionMode::Legacy => &FirstBrace,
            ExtractionMode::Structural => &BalancedBraces,
        }
    }
}
