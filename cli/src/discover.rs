#![deny(missing_docs)]

//! # Source Discovery
//!
//! Collects the TypeScript files below a directory.

use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

/// Returns every file below `root` whose extension is one of `extensions`,
/// in sorted path order.
///
/// Extensions are compared without a leading dot, so `ts` and `.ts` are
/// equivalent. Entries that cannot be read are skipped with a warning.
pub fn collect_sources(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let wanted: Vec<&str> = extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    let mut sources = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| wanted.contains(&ext));

        if matches {
            trace!("Discovered source {:?}", path);
            sources.push(path.to_path_buf());
        }
    }

    sources
}
