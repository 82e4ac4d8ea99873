//! C11: Graph Resolver. Second pass over every analysed file's lexical
//! `ImportRef`s, binding them to concrete project files (§4.9).
//!
//! Runs strictly sequentially over the already-completed `Vec<FileReport>`
//! so that edge-set construction needs no synchronisation and the
//! prefix-match fallback's iteration order is reproducible run-to-run for
//! a given file ordering (§5, §9 open question).

use rustc_hash::FxHashSet;

use crate::model::{FileReport, GraphEdge, GraphNode, ImportGraph};

#[must_use]
pub fn resolve_graph(files: &[FileReport]) -> ImportGraph {
    let nodes: Vec<GraphNode> = files
        .iter()
        .map(|f| GraphNode {
            path: f.source.project_relative_path.clone(),
        })
        .collect();

    // Ordered so the prefix-match fallback (step 3) scans in the same
    // deterministic order the sequential project walk produced the files in.
    let module_table: Vec<(String, String)> = files
        .iter()
        .map(|f| {
            (
                f.source.module_name.clone(),
                f.source.project_relative_path.clone(),
            )
        })
        .collect();

    let mut seen = FxHashSet::default();
    let mut edges = Vec::new();

    for file in files {
        let path = &file.source.project_relative_path;
        let dir_module = directory_module(path);

        for import_ref in &file.imports {
            let Some(target_path) = resolve_one(import_ref, &dir_module, &module_table) else {
                continue;
            };
            if target_path == *path {
                continue;
            }
            let edge = GraphEdge {
                source: path.clone(),
                target: target_path,
            };
            if seen.insert((edge.source.clone(), edge.target.clone())) {
                edges.push(edge);
            }
        }
    }

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "graph resolved");
    ImportGraph { nodes, edges }
}

/// Resolves one lexical `ImportRef` against the module table, returning the
/// target's relative path if found. `dir_module` is the dotted module name
/// of the directory containing the importing file.
fn resolve_one(import_ref: &str, dir_module: &str, module_table: &[(String, String)]) -> Option<String> {
    if import_ref == "." {
        return lookup_exact(dir_module, module_table);
    }

    if let Some(stripped) = import_ref.strip_prefix('.') {
        let level = 1 + stripped.chars().take_while(|&c| c == '.').count();
        let tail = import_ref.trim_start_matches('.');
        let ancestor = ancestor_module(dir_module, level - 1);
        let candidate = join_module(&ancestor, tail);

        if let Some(path) = lookup_exact(&candidate, module_table) {
            return Some(path);
        }
        let init_candidate = join_module(&candidate, "__init__");
        return lookup_exact(&init_candidate, module_table);
    }

    if let Some(path) = lookup_exact(import_ref, module_table) {
        return Some(path);
    }
    module_table
        .iter()
        .find(|(module, _)| module.starts_with(import_ref) || import_ref.starts_with(module.as_str()))
        .map(|(_, path)| path.clone())
}

fn lookup_exact(module: &str, module_table: &[(String, String)]) -> Option<String> {
    module_table
        .iter()
        .find(|(candidate, _)| candidate == module)
        .map(|(_, path)| path.clone())
}

/// Dotted module name of the directory containing `relative_path` (the
/// directory's own segments only, no extension stripping).
fn directory_module(relative_path: &str) -> String {
    match relative_path.rsplit_once('/') {
        Some((dir, _)) => dir.replace('/', "."),
        None => String::new(),
    }
}

fn ancestor_module(dir_module: &str, levels_up: usize) -> String {
    if dir_module.is_empty() {
        return String::new();
    }
    let mut segments: Vec<&str> = dir_module.split('.').collect();
    for _ in 0..levels_up {
        if segments.pop().is_none() {
            break;
        }
    }
    segments.join(".")
}

fn join_module(prefix: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        prefix.to_string()
    } else if prefix.is_empty() {
        suffix.to_string()
    } else {
        format!("{prefix}.{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HalsteadReport, SourceFile};

    fn file(relative_path: &str, module_name: &str, imports: Vec<&str>) -> FileReport {
        FileReport {
            source: SourceFile {
                absolute_path: format!("/project/{relative_path}"),
                project_relative_path: relative_path.to_string(),
                module_name: module_name.to_string(),
            },
            loc: 0,
            functions: Vec::new(),
            smells: Vec::new(),
            halstead: HalsteadReport::default(),
            imports: imports.into_iter().map(str::to_string).collect(),
            error: None,
        }
    }

    #[test]
    fn sibling_relative_import_resolves() {
        let files = vec![
            file("a.py", "a", vec![".b"]),
            file("b.py", "b", vec![]),
        ];
        let graph = resolve_graph(&files);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, "a.py");
        assert_eq!(graph.edges[0].target, "b.py");
    }

    #[test]
    fn absolute_import_resolves_into_package() {
        let files = vec![
            file("pkg/__init__.py", "pkg", vec![]),
            file("pkg/mod.py", "pkg.mod", vec![]),
            file("main.py", "main", vec!["pkg.mod"]),
        ];
        let graph = resolve_graph(&files);
        assert!(graph
            .edges
            .iter()
            .any(|e| e.source == "main.py" && e.target == "pkg/mod.py"));
    }

    #[test]
    fn bare_dot_import_resolves_to_package_init() {
        let files = vec![
            file("pkg/__init__.py", "pkg", vec![]),
            file("pkg/mod.py", "pkg.mod", vec!["."]),
        ];
        let graph = resolve_graph(&files);
        assert!(graph
            .edges
            .iter()
            .any(|e| e.source == "pkg/mod.py" && e.target == "pkg/__init__.py"));
    }

    #[test]
    fn ancestor_relative_import_walks_up_directories() {
        let files = vec![
            file("pkg/sub/leaf.py", "pkg.sub.leaf", vec!["..mod"]),
            file("pkg/mod.py", "pkg.mod", vec![]),
        ];
        let graph = resolve_graph(&files);
        assert!(graph
            .edges
            .iter()
            .any(|e| e.source == "pkg/sub/leaf.py" && e.target == "pkg/mod.py"));
    }

    #[test]
    fn self_import_never_produces_an_edge() {
        let files = vec![file("a.py", "a", vec!["a"])];
        let graph = resolve_graph(&files);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn unresolved_external_import_is_ignored() {
        let files = vec![file("a.py", "a", vec!["numpy"])];
        let graph = resolve_graph(&files);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn duplicate_imports_collapse_to_one_edge() {
        let files = vec![
            file("a.py", "a", vec!["b", "b"]),
            file("b.py", "b", vec![]),
        ];
        let graph = resolve_graph(&files);
        assert_eq!(graph.edges.len(), 1);
    }
}
