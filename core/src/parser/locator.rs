//! # Declaration Locator
//!
//! Finds exported `interface` and `type` declarations in raw source text.
//!
//! Only declarations introduced by `export` are recognized. Headers with type
//! parameters or `extends` clauses do not match and are skipped silently.

use crate::parser::mode::ExtractionMode;
use crate::parser::scan::statement_end;
use regex::Regex;
use std::sync::OnceLock;

/// A declaration span borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDeclaration<'a> {
    /// The declared name.
    pub name: &'a str,
    /// Interface body (between the braces) or alias definition (after `=`),
    /// untrimmed.
    pub text: &'a str,
}

fn interface_header() -> &'static Regex {
    static INTERFACE_RE: OnceLock<Regex> = OnceLock::new();
    INTERFACE_RE.get_or_init(|| {
        Regex::new(r"\bexport\s+interface\s+([^\W\d]\w*)\s*\{").expect("Invalid regex")
    })
}

fn alias_header() -> &'static Regex {
    static ALIAS_RE: OnceLock<Regex> = OnceLock::new();
    ALIAS_RE
        .get_or_init(|| Regex::new(r"\bexport\s+type\s+([^\W\d]\w*)\s*=").expect("Invalid regex"))
}

/// Locates every exported interface, in source order.
///
/// Scanning resumes after the closing brace of each match, so text inside a
/// body is never taken for another header. An interface whose body never
/// closes is not reported.
pub fn locate_interfaces(text: &str, mode: ExtractionMode) -> Vec<RawDeclaration<'_>> {
    let extractor = mode.body_extractor();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = interface_header().captures_at(text, pos) {
        let (Some(header), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        match extractor.extract(&text[header.end()..]) {
            Some(body) => {
                found.push(RawDeclaration {
                    name: name.as_str(),
                    text: body,
                });
                // skip the closing brace
                pos = header.end() + body.len() + 1;
            }
            None => pos = header.end(),
        }
    }

    found
}

/// Locates every exported type alias, in source order.
///
/// Legacy mode requires a terminating `;`; structural mode also accepts a
/// terminating line break or the end of input. An alias with nothing between
/// `=` and its terminator is not reported. Legacy mode keeps a whitespace-only
/// definition, structural mode drops it.
pub fn locate_aliases(text: &str, mode: ExtractionMode) -> Vec<RawDeclaration<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = alias_header().captures_at(text, pos) {
        let (Some(header), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let rest = &text[header.end()..];
        let end = match mode {
            ExtractionMode::Legacy => rest.find(';'),
            ExtractionMode::Structural => Some(statement_end(rest)),
        };

        match end {
            Some(end) => {
                let definition = &rest[..end];
                let keep = match mode {
                    ExtractionMode::Legacy => !definition.is_empty(),
                    ExtractionMode::Structural => !definition.trim().is_empty(),
                };
                if keep {
                    found.push(RawDeclaration {
                        name: name.as_str(),
                        text: definition,
                    });
                }
                pos = header.end() + end;
            }
            None => pos = header.end(),
        }
    }

    found
}
