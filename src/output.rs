//! Human-readable rendering of a `ProjectReport` for the CLI's default
//! (non-`--json`) mode (§6, §4.14).

use std::io::Write;

use colored::Colorize;

use crate::model::ProjectReport;

/// Writes a colourised summary of `report` to `writer`.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report(writer: &mut impl Write, report: &ProjectReport) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "╔══════════════════════════════════════╗".cyan())?;
    writeln!(
        writer,
        "{}",
        "║  Static Analysis Report                ║".cyan().bold()
    )?;
    writeln!(writer, "{}", "╚══════════════════════════════════════╝".cyan())?;
    writeln!(writer)?;

    writeln!(
        writer,
        "{}: {}",
        "Files analyzed".bold(),
        report.files_analyzed.to_string().green()
    )?;
    writeln!(writer, "{}: {}", "Total LOC".bold(), report.total_loc)?;
    writeln!(writer, "{}: {}", "Total functions".bold(), report.total_functions)?;
    writeln!(writer, "{}: {}", "Avg cyclomatic".bold(), report.avg_cyclomatic)?;
    writeln!(writer, "{}: {}", "Avg cognitive".bold(), report.avg_cognitive)?;
    writeln!(
        writer,
        "{}: {}",
        "Avg Halstead volume".bold(),
        report.avg_halstead_volume
    )?;

    let smell_label = if report.total_smells == 0 {
        report.total_smells.to_string().green()
    } else {
        report.total_smells.to_string().yellow().bold()
    };
    writeln!(writer, "{}: {}", "Code smells".bold(), smell_label)?;

    let failed: Vec<_> = report.files.iter().filter(|f| f.error.is_some()).collect();
    if !failed.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", "Files that could not be analyzed:".red().bold())?;
        for file in &failed {
            writeln!(
                writer,
                "  {} {}",
                file.source.project_relative_path,
                file.error.as_deref().unwrap_or("unknown error").dimmed()
            )?;
        }
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "{}: {} nodes, {} edges",
        "Import graph".bold(),
        report.graph.nodes.len(),
        report.graph.edges.len()
    )?;

    if !report.external_dependencies.is_empty() {
        writeln!(writer)?;
        writeln!(
            writer,
            "{}: {}",
            "External dependencies".bold(),
            report.external_dependencies.join(", ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImportGraph;

    #[test]
    fn prints_without_error_on_an_empty_report() {
        let report = ProjectReport {
            files_analyzed: 0,
            total_loc: 0,
            total_functions: 0,
            total_smells: 0,
            total_cyclomatic: 0,
            total_cognitive: 0,
            avg_cyclomatic: 0.0,
            avg_cognitive: 0.0,
            total_halstead_volume: 0.0,
            total_halstead_difficulty: 0.0,
            total_halstead_effort: 0.0,
            avg_halstead_volume: 0.0,
            avg_halstead_difficulty: 0.0,
            avg_halstead_effort: 0.0,
            external_dependencies: Vec::new(),
            files: Vec::new(),
            graph: ImportGraph::default(),
        };

        let mut buf = Vec::new();
        assert!(print_report(&mut buf, &report).is_ok());
        assert!(!buf.is_empty());
    }
}
