//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! The extraction engine itself never fails; these errors come from loading
//! source text and rendering reports.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The requested source file does not exist.
    /// Ignored for `From<PathBuf>`, it must be raised explicitly by the loader.
    #[from(ignore)]
    #[display("Types file not found: {}", _0.display())]
    SourceNotFound(PathBuf),

    /// JSON serialization failure.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML serialization failure.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
