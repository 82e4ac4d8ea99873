//! C8: Import Extractor. Collects lexical `ImportRef`s; resolving them to
//! concrete files is the graph resolver's job (§4.8, §4.9).

use ruff_python_ast::{self as ast, ModModule, Stmt};

use crate::model::ImportRef;

#[must_use]
pub fn extract_imports(module: &ModModule) -> Vec<ImportRef> {
    let mut imports = Vec::new();
    visit_body(&module.body, &mut imports);
    imports
}

fn visit_body(body: &[Stmt], imports: &mut Vec<ImportRef>) {
    for stmt in body {
        visit_stmt(stmt, imports);
    }
}

fn visit_stmt(stmt: &Stmt, imports: &mut Vec<ImportRef>) {
    match stmt {
        Stmt::Import(node) => {
            for alias in &node.names {
                imports.push(alias.name.to_string());
            }
        }
        Stmt::ImportFrom(node) => imports.push(import_from_ref(node)),
        Stmt::FunctionDef(node) => visit_body(&node.body, imports),
        Stmt::ClassDef(node) => visit_body(&node.body, imports),
        Stmt::If(node) => {
            visit_body(&node.body, imports);
            for clause in &node.elif_else_clauses {
                visit_body(&clause.body, imports);
            }
        }
        Stmt::For(node) => {
            visit_body(&node.body, imports);
            visit_body(&node.orelse, imports);
        }
        Stmt::While(node) => {
            visit_body(&node.body, imports);
            visit_body(&node.orelse, imports);
        }
        Stmt::With(node) => visit_body(&node.body, imports),
        Stmt::Try(node) => {
            visit_body(&node.body, imports);
            for handler in &node.handlers {
                let ast::ExceptHandler::ExceptHandler(handler) = handler;
                visit_body(&handler.body, imports);
            }
            visit_body(&node.orelse, imports);
            visit_body(&node.finalbody, imports);
        }
        Stmt::Match(node) => {
            for case in &node.cases {
                visit_body(&case.body, imports);
            }
        }
        _ => {}
    }
}

/// `from m.sub import x` -> "m.sub"; `from .sibling import x` -> ".sibling";
/// `from . import x` (no module, level dots only) -> a run of `level` dots.
fn import_from_ref(node: &ast::StmtImportFrom) -> String {
    let dots = ".".repeat(node.level as usize);
    match &node.module {
        Some(module) => format!("{dots}{module}"),
        None => dots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruff_python_parser::parse_module;

    fn imports_of(src: &str) -> Vec<ImportRef> {
        let parsed = parse_module(src).expect("valid python");
        extract_imports(&parsed.into_syntax())
    }

    #[test]
    fn plain_import_emits_one_ref_per_alias() {
        assert_eq!(imports_of("import a, b.c\n"), vec!["a", "b.c"]);
    }

    #[test]
    fn from_import_emits_module_not_symbol() {
        assert_eq!(imports_of("from m.sub import x\n"), vec!["m.sub"]);
    }

    #[test]
    fn relative_from_import_preserves_dots() {
        assert_eq!(imports_of("from .sibling import x\n"), vec![".sibling"]);
        assert_eq!(imports_of("from ..pkg.mod import x\n"), vec!["..pkg.mod"]);
    }

    #[test]
    fn bare_dot_from_import_is_dots_only() {
        assert_eq!(imports_of("from . import x\n"), vec!["."]);
    }

    #[test]
    fn imports_nested_in_functions_are_found() {
        let src = "def f():\n    import os\n    return os\n";
        assert_eq!(imports_of(src), vec!["os"]);
    }
}
