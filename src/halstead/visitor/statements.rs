use ruff_python_ast::{self as ast, Stmt};

use super::HalsteadVisitor;

/// Visits one statement node and all its descendants. Per §4.6, only
/// definition/loop/flow statement kinds are themselves classified as
/// operators; every other statement kind contributes nothing directly but
/// is still walked so nested expressions are reached.
pub(super) fn visit_stmt(visitor: &mut HalsteadVisitor, stmt: &Stmt) {
    match stmt {
        Stmt::FunctionDef(node) => {
            visitor.add_operator(if node.is_async {
                "AsyncFunctionDef"
            } else {
                "FunctionDef"
            });
            visitor.visit_body(&node.body);
        }
        Stmt::ClassDef(node) => {
            visitor.add_operator("ClassDef");
            visitor.visit_body(&node.body);
        }
        Stmt::If(node) => {
            visitor.add_operator("If");
            visitor.visit_expr(&node.test);
            visitor.visit_body(&node.body);
            for clause in &node.elif_else_clauses {
                if let Some(test) = &clause.test {
                    visitor.visit_expr(test);
                }
                visitor.visit_body(&clause.body);
            }
        }
        Stmt::While(node) => {
            visitor.add_operator("While");
            visitor.visit_expr(&node.test);
            visitor.visit_body(&node.body);
            visitor.visit_body(&node.orelse);
        }
        Stmt::For(node) => {
            visitor.add_operator(if node.is_async { "AsyncFor" } else { "For" });
            visitor.visit_expr(&node.target);
            visitor.visit_expr(&node.iter);
            visitor.visit_body(&node.body);
            visitor.visit_body(&node.orelse);
        }
        Stmt::Return(node) => {
            visitor.add_operator("Return");
            if let Some(value) = &node.value {
                visitor.visit_expr(value);
            }
        }
        Stmt::With(node) => {
            for item in &node.items {
                visitor.visit_expr(&item.context_expr);
                if let Some(vars) = &item.optional_vars {
                    visitor.visit_expr(vars);
                }
            }
            visitor.visit_body(&node.body);
        }
        Stmt::Try(node) => {
            visitor.visit_body(&node.body);
            for handler in &node.handlers {
                let ast::ExceptHandler::ExceptHandler(h) = handler;
                if let Some(type_) = &h.type_ {
                    visitor.visit_expr(type_);
                }
                visitor.visit_body(&h.body);
            }
            visitor.visit_body(&node.orelse);
            visitor.visit_body(&node.finalbody);
        }
        Stmt::Assign(node) => {
            for target in &node.targets {
                visitor.visit_expr(target);
            }
            visitor.visit_expr(&node.value);
        }
        Stmt::AugAssign(node) => {
            visitor.visit_expr(&node.target);
            visitor.visit_expr(&node.value);
        }
        Stmt::AnnAssign(node) => {
            visitor.visit_expr(&node.target);
            if let Some(value) = &node.value {
                visitor.visit_expr(value);
            }
        }
        Stmt::Delete(node) => {
            for target in &node.targets {
                visitor.visit_expr(target);
            }
        }
        Stmt::Raise(node) => {
            if let Some(exc) = &node.exc {
                visitor.visit_expr(exc);
            }
            if let Some(cause) = &node.cause {
                visitor.visit_expr(cause);
            }
        }
        Stmt::Assert(node) => {
            visitor.visit_expr(&node.test);
            if let Some(msg) = &node.msg {
                visitor.visit_expr(msg);
            }
        }
        Stmt::Expr(node) => visitor.visit_expr(&node.value),
        Stmt::Match(node) => {
            visitor.visit_expr(&node.subject);
            for case in &node.cases {
                if let Some(guard) = &case.guard {
                    visitor.visit_expr(guard);
                }
                visitor.visit_body(&case.body);
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
