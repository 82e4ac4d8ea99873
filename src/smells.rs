//! C7: Smell Detector. A single AST walk yielding `LongParameterList` and
//! `MagicNumber` findings (§4.7).

use ruff_python_ast::{self as ast, Expr, ModModule, Stmt};
use ruff_text_size::Ranged;

use crate::model::{Smell, SmellKind};
use crate::utils::LineIndex;

const MAX_POSITIONAL_PARAMETERS: usize = 5;

#[must_use]
pub fn analyze_smells(module: &ModModule, line_index: &LineIndex) -> Vec<Smell> {
    let mut smells = Vec::new();
    visit_body(&module.body, line_index, &mut smells);
    smells
}

fn visit_body(body: &[Stmt], line_index: &LineIndex, smells: &mut Vec<Smell>) {
    for stmt in body {
        visit_stmt(stmt, line_index, smells);
    }
}

fn visit_stmt(stmt: &Stmt, line_index: &LineIndex, smells: &mut Vec<Smell>) {
    match stmt {
        Stmt::FunctionDef(node) => {
            check_parameter_list(node, line_index, smells);
            visit_body(&node.body, line_index, smells);
        }
        Stmt::ClassDef(node) => visit_body(&node.body, line_index, smells),
        Stmt::If(node) => {
            visit_expr(&node.test, line_index, smells);
            visit_body(&node.body, line_index, smells);
            for clause in &node.elif_else_clauses {
                if let Some(test) = &clause.test {
                    visit_expr(test, line_index, smells);
                }
                visit_body(&clause.body, line_index, smells);
            }
        }
        Stmt::For(node) => {
            visit_expr(&node.iter, line_index, smells);
            visit_body(&node.body, line_index, smells);
            visit_body(&node.orelse, line_index, smells);
        }
        Stmt::While(node) => {
            visit_expr(&node.test, line_index, smells);
            visit_body(&node.body, line_index, smells);
            visit_body(&node.orelse, line_index, smells);
        }
        Stmt::With(node) => {
            for item in &node.items {
                visit_expr(&item.context_expr, line_index, smells);
            }
            visit_body(&node.body, line_index, smells);
        }
        Stmt::Try(node) => {
            visit_body(&node.body, line_index, smells);
            for handler in &node.handlers {
                let ast::ExceptHandler::ExceptHandler(handler) = handler;
                visit_body(&handler.body, line_index, smells);
            }
            visit_body(&node.orelse, line_index, smells);
            visit_body(&node.finalbody, line_index, smells);
        }
        Stmt::Match(node) => {
            visit_expr(&node.subject, line_index, smells);
            for case in &node.cases {
                if let Some(guard) = &case.guard {
                    visit_expr(guard, line_index, smells);
                }
                visit_body(&case.body, line_index, smells);
            }
        }
        Stmt::Assign(node) => {
            for target in &node.targets {
                visit_expr(target, line_index, smells);
            }
            visit_expr(&node.value, line_index, smells);
        }
        Stmt::AugAssign(node) => {
            visit_expr(&node.target, line_index, smells);
            visit_expr(&node.value, line_index, smells);
        }
        Stmt::AnnAssign(node) => {
            visit_expr(&node.target, line_index, smells);
            if let Some(value) = &node.value {
                visit_expr(value, line_index, smells);
            }
        }
        Stmt::Return(node) => {
            if let Some(value) = &node.value {
                visit_expr(value, line_index, smells);
            }
        }
        Stmt::Expr(node) => visit_expr(&node.value, line_index, smells),
        Stmt::Assert(node) => {
            visit_expr(&node.test, line_index, smells);
            if let Some(msg) = &node.msg {
                visit_expr(msg, line_index, smells);
            }
        }
        Stmt::Delete(node) => {
            for target in &node.targets {
                visit_expr(target, line_index, smells);
            }
        }
        Stmt::Raise(node) => {
            if let Some(exc) = &node.exc {
                visit_expr(exc, line_index, smells);
            }
            if let Some(cause) = &node.cause {
                visit_expr(cause, line_index, smells);
            }
        }
        Stmt::Import(_)
        | Stmt::ImportFrom(_)
        | Stmt::Global(_)
        | Stmt::Nonlocal(_)
        | Stmt::Pass(_)
        | Stmt::Break(_)
        | Stmt::Continue(_)
        | Stmt::IpyEscapeCommand(_) => {}
    }
}

fn check_parameter_list(node: &ast::StmtFunctionDef, line_index: &LineIndex, smells: &mut Vec<Smell>) {
    let count = node.parameters.posonlyargs.len() + node.parameters.args.len();
    if count > MAX_POSITIONAL_PARAMETERS {
        smells.push(Smell {
            kind: SmellKind::LongParameterList,
            message: format!(
                "Function \"{}\" has {count} parameters (more than {MAX_POSITIONAL_PARAMETERS})",
                node.name
            ),
            line_number: line_index.line_index(node.start()),
        });
    }
}

fn visit_expr(expr: &Expr, line_index: &LineIndex, smells: &mut Vec<Smell>) {
    if let Expr::Compare(node) = expr {
        for comparator in &node.comparators {
            check_magic_number(comparator, line_index, smells);
        }
    }
    match expr {
        Expr::BoolOp(node) => {
            for value in &node.values {
                visit_expr(value, line_index, smells);
            }
        }
        Expr::Named(node) => {
            visit_expr(&node.target, line_index, smells);
            visit_expr(&node.value, line_index, smells);
        }
        Expr::BinOp(node) => {
            visit_expr(&node.left, line_index, smells);
            visit_expr(&node.right, line_index, smells);
        }
        Expr::UnaryOp(node) => visit_expr(&node.operand, line_index, smells),
        Expr::Lambda(node) => visit_expr(&node.body, line_index, smells),
        Expr::If(node) => {
            visit_expr(&node.test, line_index, smells);
            visit_expr(&node.body, line_index, smells);
            visit_expr(&node.orelse, line_index, smells);
        }
        Expr::Dict(node) => {
            for item in &node.items {
                if let Some(key) = &item.key {
                    visit_expr(key, line_index, smells);
                }
                visit_expr(&item.value, line_index, smells);
            }
        }
        Expr::Set(node) => {
            for elt in &node.elts {
                visit_expr(elt, line_index, smells);
            }
        }
        Expr::List(node) => {
            for elt in &node.elts {
                visit_expr(elt, line_index, smells);
            }
        }
        Expr::Tuple(node) => {
            for elt in &node.elts {
                visit_expr(elt, line_index, smells);
            }
        }
        Expr::ListComp(node) => visit_comprehension(&node.elt, None, &node.generators, line_index, smells),
        Expr::SetComp(node) => visit_comprehension(&node.elt, None, &node.generators, line_index, smells),
        Expr::DictComp(node) => {
            visit_comprehension(&node.key, Some(&node.value), &node.generators, line_index, smells);
        }
        Expr::Generator(node) => visit_comprehension(&node.elt, None, &node.generators, line_index, smells),
        Expr::Await(node) => visit_expr(&node.value, line_index, smells),
        Expr::Yield(node) => {
            if let Some(value) = &node.value {
                visit_expr(value, line_index, smells);
            }
        }
        Expr::YieldFrom(node) => visit_expr(&node.value, line_index, smells),
        Expr::Compare(node) => {
            visit_expr(&node.left, line_index, smells);
            for comparator in &node.comparators {
                visit_expr(comparator, line_index, smells);
            }
        }
        Expr::Call(node) => {
            visit_expr(&node.func, line_index, smells);
            for arg in &node.arguments.args {
                visit_expr(arg, line_index, smells);
            }
            for keyword in &node.arguments.keywords {
                visit_expr(&keyword.value, line_index, smells);
            }
        }
        Expr::Attribute(node) => visit_expr(&node.value, line_index, smells),
        Expr::Subscript(node) => {
            visit_expr(&node.value, line_index, smells);
            visit_expr(&node.slice, line_index, smells);
        }
        Expr::Starred(node) => visit_expr(&node.value, line_index, smells),
        Expr::Slice(node) => {
            if let Some(lower) = &node.lower {
                visit_expr(lower, line_index, smells);
            }
            if let Some(upper) = &node.upper {
                visit_expr(upper, line_index, smells);
            }
            if let Some(step) = &node.step {
                visit_expr(step, line_index, smells);
            }
        }
        Expr::Name(_)
        | Expr::StringLiteral(_)
        | Expr::BytesLiteral(_)
        | Expr::NumberLiteral(_)
        | Expr::BooleanLiteral(_)
        | Expr::NoneLiteral(_)
        | Expr::EllipsisLiteral(_)
        | Expr::FString(_)
        | Expr::TString(_)
        | Expr::IpyEscapeCommand(_) => {}
    }
}

fn visit_comprehension(
    elt: &Expr,
    second: Option<&Expr>,
    generators: &[ast::Comprehension],
    line_index: &LineIndex,
    smells: &mut Vec<Smell>,
) {
    visit_expr(elt, line_index, smells);
    if let Some(second) = second {
        visit_expr(second, line_index, smells);
    }
    for gen in generators {
        visit_expr(&gen.iter, line_index, smells);
        for if_ in &gen.ifs {
            visit_expr(if_, line_index, smells);
        }
    }
}

/// Only an integer literal on the right-hand side of a comparison counts
/// (§4.7); non-integer literals and non-literals are ignored, and the
/// left-hand side is never inspected.
fn check_magic_number(expr: &Expr, line_index: &LineIndex, smells: &mut Vec<Smell>) {
    if let Expr::NumberLiteral(node) = expr {
        if let ast::Number::Int(value) = &node.value {
            smells.push(Smell {
                kind: SmellKind::MagicNumber,
                message: format!("Magic number {value} found in comparison"),
                line_number: line_index.line_index(node.start()),
            });
        }
    }
}
