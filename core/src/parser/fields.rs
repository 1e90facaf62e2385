//! # Field Decomposer
//!
//! Splits an interface body into named fields. Best-effort: text that does not
//! look like `name?: type` is skipped without error.

use crate::parser::models::FieldSpec;
use crate::parser::mode::ExtractionMode;
use crate::parser::scan::split_top_level;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Field separators recognized at the top level of a structural body.
const FIELD_SEPARATORS: [char; 2] = [';', ','];

fn legacy_field() -> &'static Regex {
    static LEGACY_FIELD_RE: OnceLock<Regex> = OnceLock::new();
    LEGACY_FIELD_RE
        .get_or_init(|| Regex::new(r"(\w+)(\?)?:\s*([^;]+)").expect("Invalid regex"))
}

fn structural_field() -> &'static Regex {
    static STRUCTURAL_FIELD_RE: OnceLock<Regex> = OnceLock::new();
    STRUCTURAL_FIELD_RE.get_or_init(|| {
        Regex::new(r"(?s)^(?:readonly\s+)?([^\W\d]\w*)\s*(\?)?\s*:(.*)$").expect("Invalid regex")
    })
}

/// Decomposes an interface body into fields, in source order.
///
/// A repeated field name keeps its first position and takes the last value.
pub fn decompose_fields(body: &str, mode: ExtractionMode) -> IndexMap<String, FieldSpec> {
    match mode {
        ExtractionMode::Legacy => legacy_fields(body),
        ExtractionMode::Structural => structural_fields(body),
    }
}

/// Unanchored scan: each type runs to the next `;` or the end of the body,
/// across line breaks.
fn legacy_fields(body: &str) -> IndexMap<String, FieldSpec> {
    let mut fields = IndexMap::new();

    for caps in legacy_field().captures_iter(body) {
        let (Some(name), Some(ty)) = (caps.get(1), caps.get(3)) else {
            continue;
        };
        let optional = caps.get(2).is_some();
        fields.insert(name.as_str().to_string(), FieldSpec::new(ty.as_str(), optional));
    }

    fields
}

fn structural_fields(body: &str) -> IndexMap<String, FieldSpec> {
    let mut fields = IndexMap::new();

    for segment in split_top_level(body, &FIELD_SEPARATORS) {
        let Some(caps) = structural_field().captures(segment.trim()) else {
            continue;
        };
        let (Some(name), Some(ty)) = (caps.get(1), caps.get(3)) else {
            continue;
        };
        if ty.as_str().trim().is_empty() {
            continue;
        }
        let optional = caps.get(2).is_some();
        fields.insert(name.as_str().to_string(), FieldSpec::new(ty.as_str(), optional));
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(ty: &str, optional: bool) -> FieldSpec {
        FieldSpec::new(ty, optional)
    }

    #[test]
    fn test_optionality_detection() {
        for mode in ExtractionMode::ALL {
            let fields = decompose_fields("\n  name?: string;\n  id: number;\n", mode);
            assert_eq!(fields.get("name"), Some(&spec("string", true)));
            assert_eq!(fields.get("id"), Some(&spec("number", false)));
        }
    }

    #[test]
    fn test_free_text_is_skipped() {
        for mode in ExtractionMode::ALL {
            let fields = decompose_fields("\n  id: number;\n  this line is just a remark\n", mode);
            assert_eq!(fields.len(), 1, "mode {}", mode);
            assert_eq!(fields.get("id"), Some(&spec("number", false)));
        }
    }

    #[test]
    fn test_duplicate_field_last_wins() {
        for mode in ExtractionMode::ALL {
            let fields = decompose_fields("a: string; b: number; a: boolean;", mode);
            let names: Vec<&str> = fields.keys().map(String::as_str).collect();
            assert_eq!(names, vec!["a", "b"]);
            assert_eq!(fields["a"], spec("boolean", false));
        }
    }

    #[test]
    fn test_legacy_truncates_at_first_semicolon() {
        let fields = decompose_fields(
            " onChange: (a: string; b: number) => void;",
            ExtractionMode::Legacy,
        );
        assert_eq!(fields["onChange"], spec("(a: string", false));
        assert_eq!(fields["b"], spec("number) => void", false));
    }

    #[test]
    fn test_legacy_swallows_unterminated_lines() {
        let fields = decompose_fields("\n  a: string\n  b: number\n", ExtractionMode::Legacy);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["a"], spec("string\n  b: number", false));
    }

    #[test]
    fn test_structural_keeps_nested_types_whole() {
        let body = r#"
  readonly id: number;
  meta: { tags: string[]; source?: string };
  onChange: (a: string, b: number) => void;
  status:
    | "ok"
    | "error"
  label?: string
  [key: string]: unknown;
  save(force: boolean): void;
"#;
        let fields = decompose_fields(body, ExtractionMode::Structural);
        let names: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["id", "meta", "onChange", "status", "label"]);
        assert_eq!(
            fields["meta"],
            spec("{ tags: string[]; source?: string }", false)
        );
        assert_eq!(
            fields["onChange"],
            spec("(a: string, b: number) => void", false)
        );
        assert_eq!(
            fields["status"],
            spec("| \"ok\"\n    | \"error\"", false)
        );
        assert_eq!(fields["label"], spec("string", true));
    }

    #[test]
    fn test_structural_unterminated_string_ends_at_line() {
        let fields = decompose_fields(" a: \"unterminated\n b: string ", ExtractionMode::Structural);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["a"], spec("\"unterminated", false));
        assert_eq!(fields["b"], spec("string", false));
    }

    #[test]
    fn test_empty_body() {
        for mode in ExtractionMode::ALL {
            assert!(decompose_fields("", mode).is_empty());
            assert!(decompose_fields("  \n ", mode).is_empty());
        }
    }
}
