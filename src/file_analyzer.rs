//! C9: File Analyser. Orchestrates C1-C8 for one source file (§4.2).

use std::path::Path;

use ruff_python_parser::parse_module;

use crate::complexity::analyze_functions;
use crate::halstead::analyze_halstead;
use crate::imports::extract_imports;
use crate::model::{FileReport, HalsteadReport, Smell, SmellKind, SourceFile};
use crate::raw_metrics::count_loc;
use crate::reader::read_source;
use crate::smells::analyze_smells;
use crate::source_file;
use crate::utils::LineIndex;

#[must_use]
pub fn analyze_file(absolute_path: &Path, project_relative_path: &str) -> FileReport {
    let source_file = source_file::build(absolute_path, project_relative_path);

    let text = match read_source(absolute_path) {
        Ok(text) => text,
        Err(message) => {
            tracing::warn!(path = project_relative_path, error = %message, "source read failed");
            return FileReport::io_error(source_file, message);
        }
    };

    let loc = count_loc(&text);

    let parsed = match parse_module(&text) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(path = project_relative_path, error = %err, "parse failed");
            return FileReport {
                source: source_file,
                loc,
                functions: Vec::new(),
                smells: vec![Smell {
                    kind: SmellKind::SyntaxError,
                    message: err.to_string(),
                    line_number: 1,
                }],
                halstead: HalsteadReport::default(),
                imports: Vec::new(),
                error: None,
            };
        }
    };

    let module = parsed.into_syntax();
    let line_index = LineIndex::new(&text);

    FileReport {
        source: source_file,
        loc,
        functions: analyze_functions(&module, &line_index),
        smells: analyze_smells(&module, &line_index),
        halstead: analyze_halstead(&module),
        imports: extract_imports(&module),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_source(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn reports_syntax_error_but_keeps_loc() {
        let file = write_source("def f(:\n    pass\n");
        let report = analyze_file(file.path(), "mod.py");
        assert!(report.error.is_none());
        assert_eq!(report.smells.len(), 1);
        assert_eq!(report.smells[0].kind, SmellKind::SyntaxError);
        assert_eq!(report.loc, 2);
        assert!(report.functions.is_empty());
    }

    #[test]
    fn reports_io_error_for_missing_file() {
        let report = analyze_file(Path::new("/nonexistent/path/mod.py"), "mod.py");
        assert!(report.error.is_some());
        assert_eq!(report.loc, 0);
    }

    #[test]
    fn assembles_full_report_for_valid_source() {
        let file = write_source("def f(a, b):\n    if a:\n        return b\n    return a\n");
        let report = analyze_file(file.path(), "mod.py");
        assert!(report.error.is_none());
        assert_eq!(report.functions.len(), 1);
        assert_eq!(report.functions[0].cyclomatic, 2);
    }
}
