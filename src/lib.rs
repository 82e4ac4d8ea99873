//! Static-analysis engine for the target scripting language (§1–§2).
//!
//! `analyze_project` is the sole public entry point: synchronous,
//! single-threaded-cooperative from the caller's perspective (per-file
//! work is internally parallelised, §5), and total — it always returns a
//! well-formed `ProjectReport` for any existing directory, folding I/O and
//! parse failures into per-file errors rather than propagating them.

pub mod aggregator;
pub mod complexity;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod file_analyzer;
pub mod graph;
pub mod halstead;
pub mod imports;
pub mod manifest;
pub mod model;
pub mod output;
pub mod raw_metrics;
pub mod reader;
pub mod smells;
pub mod source_file;
pub mod utils;
pub mod walker;

use std::path::Path;

pub use error::EngineError;
pub use model::ProjectReport;

/// Analyses every source file under `root` and returns the aggregated
/// project report (§6).
///
/// # Errors
///
/// Returns `EngineError::PathNotFound` or `EngineError::NotADirectory` if
/// `root` fails those preconditions. Any other failure (I/O, decoding,
/// syntax error) is captured per-file inside the returned report instead
/// of propagating.
pub fn analyze_project(root: &Path) -> Result<ProjectReport, EngineError> {
    analyze_project_with_excludes(root, &[])
}

/// As `analyze_project`, but merges `extra_excludes` into the hard-coded
/// directory-pruning policy (§4.1, §4.11) — the config-aware entry point
/// the CLI uses once it has loaded `Config`.
///
/// # Errors
///
/// See `analyze_project`.
pub fn analyze_project_with_excludes(
    root: &Path,
    extra_excludes: &[String],
) -> Result<ProjectReport, EngineError> {
    if !root.exists() {
        return Err(EngineError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(EngineError::NotADirectory(root.to_path_buf()));
    }

    tracing::info!(root = %root.display(), "starting project analysis");
    let files = walker::walk_project(root, extra_excludes);
    let report = aggregator::aggregate(files, Vec::new());
    tracing::info!(
        files_analyzed = report.files_analyzed,
        total_functions = report.total_functions,
        "project analysis complete"
    );

    Ok(report)
}
