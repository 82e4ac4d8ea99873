//! C4/C5: Cyclomatic and Cognitive analysers. One `FunctionReport` per
//! function, async function, or method definition in the AST (§4.4, §4.5).

pub mod cognitive;
pub mod cyclomatic;

use ruff_python_ast::{ModModule, Stmt};
use ruff_text_size::Ranged;

use crate::model::FunctionReport;
use crate::utils::LineIndex;

#[must_use]
pub fn analyze_functions(module: &ModModule, line_index: &LineIndex) -> Vec<FunctionReport> {
    let mut reports = Vec::new();
    visit_body(&module.body, line_index, &mut reports);
    reports
}

fn visit_body(body: &[Stmt], line_index: &LineIndex, reports: &mut Vec<FunctionReport>) {
    for stmt in body {
        visit_stmt(stmt, line_index, reports);
    }
}

/// Nested definitions produce their own reports rather than having their
/// complexity folded into the enclosing function (§4.4).
fn visit_stmt(stmt: &Stmt, line_index: &LineIndex, reports: &mut Vec<FunctionReport>) {
    match stmt {
        Stmt::FunctionDef(node) => {
            reports.push(FunctionReport {
                name: node.name.to_string(),
                line_number: line_index.line_index(node.start()),
                cyclomatic: cyclomatic::complexity(&node.body),
                cognitive: cognitive::complexity(&node.body),
            });
            visit_body(&node.body, line_index, reports);
        }
        Stmt::ClassDef(node) => visit_body(&node.body, line_index, reports),
        Stmt::If(node) => {
            visit_body(&node.body, line_index, reports);
            for clause in &node.elif_else_clauses {
                visit_body(&clause.body, line_index, reports);
            }
        }
        Stmt::For(node) => {
            visit_body(&node.body, line_index, reports);
            visit_body(&node.orelse, line_index, reports);
        }
        Stmt::While(node) => {
            visit_body(&node.body, line_index, reports);
            visit_body(&node.orelse, line_index, reports);
        }
        Stmt::With(node) => visit_body(&node.body, line_index, reports),
        Stmt::Try(node) => {
            visit_body(&node.body, line_index, reports);
            for handler in &node.handlers {
                let ruff_python_ast::ExceptHandler::ExceptHandler(handler) = handler;
                visit_body(&handler.body, line_index, reports);
            }
            visit_body(&node.orelse, line_index, reports);
            visit_body(&node.finalbody, line_index, reports);
        }
        Stmt::Match(node) => {
            for case in &node.cases {
                visit_body(&case.body, line_index, reports);
            }
        }
        _ => {}
    }
}
