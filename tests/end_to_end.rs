//! End-to-end scenarios from §8 of the specification, driven through the
//! public `analyze_project` entry point rather than individual analysers.

use std::fs;

use pysource_metrics::model::SmellKind;
use pysource_metrics::{analyze_project, EngineError};

fn write(dir: &std::path::Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir parents");
    }
    fs::write(path, contents).expect("write source file");
}

#[test]
fn scenario_long_parameter_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "g.py", "def g(a,b,c,d,e,f): return a+b+c+d+e+f\n");

    let report = analyze_project(dir.path()).expect("analysis succeeds");
    let file = &report.files[0];

    assert_eq!(file.functions.len(), 1);
    assert_eq!(file.functions[0].cyclomatic, 1);
    assert_eq!(file.functions[0].cognitive, 0);

    let long_param_smells: Vec<_> = file
        .smells
        .iter()
        .filter(|s| s.kind == SmellKind::LongParameterList)
        .collect();
    assert_eq!(long_param_smells.len(), 1);
}

#[test]
fn scenario_if_with_equality_magic_number() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "h.py",
        "def h(x):\n    if x==2: return 'A'\n    return 'B'\n",
    );

    let report = analyze_project(dir.path()).expect("analysis succeeds");
    let file = &report.files[0];

    assert_eq!(file.functions[0].cyclomatic, 2);
    assert_eq!(file.functions[0].cognitive, 1);
    assert_eq!(
        file.smells
            .iter()
            .filter(|s| s.kind == SmellKind::MagicNumber)
            .count(),
        1
    );
}

#[test]
fn scenario_nested_long_parameter_list_reports_inner_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "nested.py",
        "def outer(a, b, c):\n    def inner(a,b,c,d,e,f):\n        return a\n    return inner\n",
    );

    let report = analyze_project(dir.path()).expect("analysis succeeds");
    let file = &report.files[0];

    let long_param_smells: Vec<_> = file
        .smells
        .iter()
        .filter(|s| s.kind == SmellKind::LongParameterList)
        .collect();
    assert_eq!(long_param_smells.len(), 1);
    assert_eq!(long_param_smells[0].line_number, 2);
}

#[test]
fn scenario_package_import_graph_edge() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "pkg/__init__.py", "");
    write(dir.path(), "pkg/mod.py", "value = 1\n");
    write(dir.path(), "main.py", "import pkg.mod\n");

    let report = analyze_project(dir.path()).expect("analysis succeeds");

    assert_eq!(report.graph.nodes.len(), 3);
    assert!(report
        .graph
        .edges
        .iter()
        .any(|e| e.source == "main.py" && e.target == "pkg/mod.py"));
}

#[test]
fn fatal_error_on_nonexistent_root() {
    let result = analyze_project(std::path::Path::new("/no/such/directory/at/all"));
    assert!(matches!(result, Err(EngineError::PathNotFound(_))));
}

#[test]
fn graph_invariants_hold_over_a_mixed_project() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "pkg/__init__.py", "");
    write(dir.path(), "pkg/a.py", "from . import b\nfrom .b import x\n");
    write(dir.path(), "pkg/b.py", "from ..outside import y\n");
    write(dir.path(), "outside.py", "import pkg.a\nimport pkg\n");
    write(dir.path(), "broken.py", "def broken(:\n    pass\n");

    let report = analyze_project(dir.path()).expect("analysis succeeds");

    let node_paths: std::collections::HashSet<_> =
        report.graph.nodes.iter().map(|n| n.path.as_str()).collect();
    for edge in &report.graph.edges {
        assert!(node_paths.contains(edge.source.as_str()), "edge source must be a node");
        assert!(node_paths.contains(edge.target.as_str()), "edge target must be a node");
        assert_ne!(edge.source, edge.target, "no self-loops");
    }

    let mut seen = std::collections::HashSet::new();
    for edge in &report.graph.edges {
        assert!(
            seen.insert((edge.source.clone(), edge.target.clone())),
            "no duplicate edges"
        );
    }

    let total_cyclomatic: usize = report
        .files
        .iter()
        .filter(|f| f.error.is_none())
        .flat_map(|f| &f.functions)
        .map(|f| f.cyclomatic)
        .sum();
    assert_eq!(total_cyclomatic, report.total_cyclomatic);

    let broken = report
        .files
        .iter()
        .find(|f| f.source.project_relative_path == "broken.py")
        .expect("broken.py present");
    assert!(broken.error.is_none());
    assert_eq!(broken.smells.len(), 1);
    assert_eq!(broken.smells[0].kind, SmellKind::SyntaxError);
}
