//! C12: Report Aggregator. Folds every file's metrics into totals and
//! averages and assembles the final `ProjectReport` (§4.10).

use crate::graph::resolve_graph;
use crate::model::{FileReport, ProjectReport};

#[must_use]
pub fn aggregate(files: Vec<FileReport>, external_dependencies: Vec<String>) -> ProjectReport {
    let graph = resolve_graph(&files);

    let mut total_loc = 0usize;
    let mut total_functions = 0usize;
    let mut total_smells = 0usize;
    let mut total_cyclomatic = 0usize;
    let mut total_cognitive = 0usize;
    let mut total_halstead_volume = 0.0f64;
    let mut total_halstead_difficulty = 0.0f64;
    let mut total_halstead_effort = 0.0f64;
    let mut files_analyzed = 0usize;

    for file in &files {
        if file.error.is_some() {
            continue;
        }
        files_analyzed += 1;
        total_loc += file.loc;
        total_functions += file.functions.len();
        total_smells += file.smells.len();
        for function in &file.functions {
            total_cyclomatic += function.cyclomatic;
            total_cognitive += function.cognitive;
        }
        total_halstead_volume += file.halstead.volume;
        total_halstead_difficulty += file.halstead.difficulty;
        total_halstead_effort += file.halstead.effort;
    }

    let avg_cyclomatic = round2(average(total_cyclomatic as f64, total_functions));
    let avg_cognitive = round2(average(total_cognitive as f64, total_functions));
    let avg_halstead_volume = round2(average(total_halstead_volume, files_analyzed));
    let avg_halstead_difficulty = round2(average(total_halstead_difficulty, files_analyzed));
    let avg_halstead_effort = round2(average(total_halstead_effort, files_analyzed));

    ProjectReport {
        files_analyzed,
        total_loc,
        total_functions,
        total_smells,
        total_cyclomatic,
        total_cognitive,
        avg_cyclomatic,
        avg_cognitive,
        total_halstead_volume: round2(total_halstead_volume),
        total_halstead_difficulty: round2(total_halstead_difficulty),
        total_halstead_effort: round2(total_halstead_effort),
        avg_halstead_volume,
        avg_halstead_difficulty,
        avg_halstead_effort,
        external_dependencies,
        files,
        graph,
    }
}

fn average(total: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        total / denominator as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FunctionReport, HalsteadReport, SourceFile};

    fn source_file(path: &str) -> SourceFile {
        SourceFile {
            absolute_path: format!("/project/{path}"),
            project_relative_path: path.to_string(),
            module_name: path.trim_end_matches(".py").to_string(),
        }
    }

    #[test]
    fn averages_are_zero_with_no_functions() {
        let report = aggregate(Vec::new(), Vec::new());
        assert_eq!(report.avg_cyclomatic, 0.0);
        assert_eq!(report.avg_cognitive, 0.0);
        assert_eq!(report.files_analyzed, 0);
    }

    #[test]
    fn errored_files_are_excluded_from_aggregation_but_kept_in_files() {
        let files = vec![
            FileReport {
                source: source_file("bad.py"),
                loc: 10,
                functions: vec![FunctionReport {
                    name: "f".into(),
                    line_number: 1,
                    cyclomatic: 3,
                    cognitive: 2,
                }],
                smells: Vec::new(),
                halstead: HalsteadReport::default(),
                imports: Vec::new(),
                error: Some("boom".into()),
            },
            FileReport {
                source: source_file("good.py"),
                loc: 5,
                functions: vec![FunctionReport {
                    name: "g".into(),
                    line_number: 1,
                    cyclomatic: 1,
                    cognitive: 0,
                }],
                smells: Vec::new(),
                halstead: HalsteadReport::default(),
                imports: Vec::new(),
                error: None,
            },
        ];

        let report = aggregate(files, Vec::new());
        assert_eq!(report.files_analyzed, 1);
        assert_eq!(report.total_loc, 5);
        assert_eq!(report.total_functions, 1);
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.avg_cyclomatic, 1.0);
    }

    #[test]
    fn averages_round_to_two_decimals() {
        let mk_fn = |cyclomatic: usize| FunctionReport {
            name: "f".into(),
            line_number: 1,
            cyclomatic,
            cognitive: 0,
        };
        let files = vec![FileReport {
            source: source_file("m.py"),
            loc: 1,
            functions: vec![mk_fn(1), mk_fn(1), mk_fn(2)],
            smells: Vec::new(),
            halstead: HalsteadReport::default(),
            imports: Vec::new(),
            error: None,
        }];
        let report = aggregate(files, Vec::new());
        assert_eq!(report.avg_cyclomatic, 1.33);
    }
}
