#![deny(missing_docs)]

//! # Typeprobe CLI
//!
//! Reports the exported interfaces and type aliases of TypeScript sources as
//! JSON or YAML.
//!
//! On failure the error document `{"error": ..., "types": {}}` is printed to
//! stdout and the process exits with status 1.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use typeprobe_core::render_error;

mod analyze;
mod discover;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Report exported TypeScript interfaces and type aliases"
)]
struct Cli {
    #[clap(flatten)]
    analyze: analyze::AnalyzeArgs,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let (error_document, code) = run(&cli.analyze);
    if let Some(document) = error_document {
        println!("{}", document);
    }
    code
}

/// Runs the analysis. On failure returns the rendered error document meant
/// for stdout alongside the failing exit code.
fn run(args: &analyze::AnalyzeArgs) -> (Option<String>, ExitCode) {
    match analyze::execute(args) {
        Ok(()) => (None, ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            let document = match render_error(&e, args.format) {
                Ok(document) => Some(document),
                Err(render_err) => {
                    error!("Failed to render error document: {}", render_err);
                    None
                }
            };
            (document, ExitCode::FAILURE)
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
/// `RUST_LOG=debug` shows every declaration found.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
