//! CLI front door (C15, §4.14): parses arguments, drives `analyze_project`,
//! and renders the result either as a colourised summary or as JSON.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use pysource_metrics::config::Config;
use pysource_metrics::{analyze_project_with_excludes, diagnostics, manifest, output};

/// Statically analyzes a source tree and reports per-file and per-function
/// software-quality metrics together with an inter-file import graph.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root to analyze.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Emit progress and resolution diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Emit the full report as JSON to stdout instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    diagnostics::init(cli.verbose);

    let config = Config::load_from_path(&cli.path);
    let extra_excludes = config.pysource_metrics.exclude_folders;

    let report = match analyze_project_with_excludes(&cli.path, &extra_excludes) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    };

    let mut report = report;
    report.external_dependencies = manifest::read_dependencies(&cli.path);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize report: {err}");
                exit(1);
            }
        }
    } else {
        let mut stdout = std::io::stdout();
        if output::print_report(&mut stdout, &report).is_err() {
            eprintln!("error: failed to write report");
            exit(1);
        }
    }

    tracing::info!("analysis complete");
}
