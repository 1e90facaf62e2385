//! # Source Loading
//!
//! Reads one source unit from disk for the extraction engine.

use crate::error::{AppError, AppResult};
use crate::parser::{analyze_source, ExtractionMode, TypeReport};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// The decoded text of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Where the text was read from.
    pub path: PathBuf,
    /// Full UTF-8 contents.
    pub text: String,
}

impl SourceUnit {
    /// The path rendered for reports.
    pub fn identifier(&self) -> String {
        self.path.display().to_string()
    }

    /// Runs the extraction engine over this unit.
    pub fn analyze(&self, mode: ExtractionMode) -> TypeReport {
        analyze_source(&self.identifier(), &self.text, mode)
    }
}

/// Loads a source file.
///
/// A missing file is reported as [`AppError::SourceNotFound`]; any other read
/// failure (permissions, invalid UTF-8, directories) as [`AppError::Io`].
pub fn load_source(path: &Path) -> AppResult<SourceUnit> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::SourceNotFound(path.to_path_buf()),
        _ => AppError::Io(e),
    })?;

    Ok(SourceUnit {
        path: path.to_path_buf(),
        text,
    })
}

/// Loads and analyzes one file.
pub fn analyze_path(path: &Path, mode: ExtractionMode) -> AppResult<TypeReport> {
    let unit = load_source(path)?;
    let report = unit.analyze(mode);
    info!(
        "Analyzed {}: {} types",
        report.source_identifier,
        report.entry_count()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_source_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.ts");
        let err = load_source(&path).unwrap_err();
        match err {
            AppError::SourceNotFound(p) => assert_eq!(p, path),
            other => panic!("expected SourceNotFound, got {}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.ts");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(load_source(&path), Err(AppError::Io(_))));
    }

    #[test]
    fn test_analyze_path_uses_path_as_identifier() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.ts");
        fs::write(&path, "export interface User { id: number; email?: string; }").unwrap();

        let report = analyze_path(&path, ExtractionMode::Legacy).unwrap();
        assert_eq!(report.source_identifier, path.display().to_string());
        assert_eq!(report.entry_count(), 1);
        let fields = report.get("User").and_then(|e| e.fields()).unwrap();
        assert!(fields["email"].optional);
    }
}
