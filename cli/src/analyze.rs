#![deny(missing_docs)]

//! # Analyze Command
//!
//! Loads TypeScript sources, runs the extraction engine and renders the report.
//! A directory argument produces one report per discovered file.

use crate::discover::collect_sources;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use typeprobe_core::{
    analyze_path, render_report, render_reports, AppError, AppResult, ExtractionMode,
    OutputFormat, TypeReport,
};

/// Arguments for the analyze command.
#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// TypeScript file, or a directory to scan for TypeScript files.
    #[clap(env = "TYPEPROBE_SOURCE", default_value = "types/index.ts")]
    pub path: PathBuf,

    /// Scanning rules: `legacy` (first `}` / first `;`) or `structural`
    /// (comment stripping, bracket-aware splitting).
    #[clap(long, env = "TYPEPROBE_MODE", default_value_t = ExtractionMode::Legacy)]
    pub mode: ExtractionMode,

    /// Output format: `json` or `yaml`.
    #[clap(long, env = "TYPEPROBE_FORMAT", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout.
    #[clap(long, env = "TYPEPROBE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// File extensions picked up when scanning a directory.
    #[clap(long = "extension", value_delimiter = ',', default_values = ["ts", "tsx"])]
    pub extensions: Vec<String>,
}

/// Executes the analysis and writes the rendered report.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &AnalyzeArgs) -> AppResult<()> {
    let rendered = render(args)?;
    write_output(args.output.as_deref(), &rendered)
}

/// Analyzes `args.path` and returns the rendered document(s).
pub fn render(args: &AnalyzeArgs) -> AppResult<String> {
    if args.path.is_dir() {
        let reports = analyze_directory(&args.path, &args.extensions, args.mode);
        render_reports(&reports, args.format)
    } else {
        let report = analyze_path(&args.path, args.mode)?;
        render_report(&report, args.format)
    }
}

fn analyze_directory(root: &Path, extensions: &[String], mode: ExtractionMode) -> Vec<TypeReport> {
    let sources = collect_sources(root, extensions);
    info!("Analyzing {} files under {:?}", sources.len(), root);

    sources
        .iter()
        .filter_map(|path| match analyze_path(path, mode) {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Skipping {:?}: {}", path, e);
                None
            }
        })
        .collect()
}

fn write_output(output: Option<&Path>, rendered: &str) -> AppResult<()> {
    let text = if rendered.ends_with('\n') {
        rendered.to_string()
    } else {
        format!("{}\n", rendered)
    };

    let Some(out_path) = output else {
        print!("{}", text);
        return Ok(());
    };

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::General(format!("Failed to create output directory: {}", e))
            })?;
        }
    }

    fs::write(out_path, text)
        .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))?;
    info!("Report written to {:?}", out_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const MODELS: &str = r#"
export interface User {
  id: number;
  email?: string;
  profile: { bio: string };
}

export type UserId = number;
"#;

    fn args(path: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            path,
            mode: ExtractionMode::Legacy,
            format: OutputFormat::Json,
            output: None,
            extensions: vec!["ts".to_string(), "tsx".to_string()],
        }
    }

    #[test]
    fn test_analyze_file_to_output() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("index.ts");
        let out_path = dir.path().join("reports").join("types.json");
        fs::write(&src_path, MODELS).unwrap();

        let mut args = args(src_path.clone());
        args.output = Some(out_path.clone());
        execute(&args).unwrap();

        let content = fs::read_to_string(&out_path).unwrap();
        assert!(content.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["file"], src_path.display().to_string());
        assert_eq!(value["count"], 2);
        assert_eq!(value["types"]["User"]["fields"]["email"]["optional"], true);
        assert_eq!(value["types"]["UserId"]["definition"], "number");
    }

    #[test]
    fn test_mode_changes_nested_fields() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("index.ts");
        fs::write(&src_path, MODELS).unwrap();

        let mut args = args(src_path);
        let legacy: serde_json::Value = serde_json::from_str(&render(&args).unwrap()).unwrap();
        assert_eq!(
            legacy["types"]["User"]["fields"]["profile"]["type"],
            "{ bio: string"
        );

        args.mode = ExtractionMode::Structural;
        let structural: serde_json::Value =
            serde_json::from_str(&render(&args).unwrap()).unwrap();
        assert_eq!(
            structural["types"]["User"]["fields"]["profile"]["type"],
            "{ bio: string }"
        );
    }

    #[test]
    fn test_analyze_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.ts"), "export type B = string;").unwrap();
        fs::write(dir.path().join("a.ts"), MODELS).unwrap();
        fs::write(dir.path().join("readme.md"), "export type Skip = 1;").unwrap();

        let rendered = render(&args(dir.path().to_path_buf())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let files: Vec<String> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|doc| doc["file"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            files,
            vec![
                dir.path().join("a.ts").display().to_string(),
                dir.path().join("b.ts").display().to_string(),
            ]
        );
        assert_eq!(value[1]["types"]["B"]["kind"], "type");
    }

    #[test]
    fn test_missing_source() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("types").join("index.ts");
        let err = render(&args(missing.clone())).unwrap_err();
        assert!(matches!(err, AppError::SourceNotFound(ref p) if *p == missing));
    }

    #[test]
    fn test_yaml_format() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("index.ts");
        fs::write(&src_path, MODELS).unwrap();

        let mut args = args(src_path);
        args.format = OutputFormat::Yaml;
        let rendered = render(&args).unwrap();
        assert!(rendered.contains("count: 2"));
        assert!(rendered.contains("kind: interface"));
    }
}
