//! Sonar-style cognitive complexity for one function body (§4.5).

use ruff_python_ast::{self as ast, Expr, Stmt};

#[must_use]
pub fn complexity(body: &[Stmt]) -> usize {
    let mut visitor = CognitiveVisitor { complexity: 0 };
    visitor.visit_body(body, 0);
    visitor.complexity
}

struct CognitiveVisitor {
    complexity: usize,
}

impl CognitiveVisitor {
    fn visit_body(&mut self, body: &[Stmt], nesting: usize) {
        for stmt in body {
            self.visit_stmt(stmt, nesting);
        }
    }

    /// Nested function/class definitions are reported separately (§4.5);
    /// their bodies are not walked here, and they don't reset `nesting`
    /// because the caller never descends into them.
    fn visit_stmt(&mut self, stmt: &Stmt, nesting: usize) {
        match stmt {
            Stmt::FunctionDef(_) | Stmt::ClassDef(_) => {}
            Stmt::If(node) => {
                self.complexity += 1 + nesting;
                self.visit_expr(&node.test, nesting);
                self.visit_body(&node.body, nesting + 1);
                for clause in &node.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.complexity += 1 + nesting;
                        self.visit_expr(test, nesting);
                    }
                    self.visit_body(&clause.body, nesting + 1);
                }
            }
            Stmt::While(node) => {
                self.complexity += 1 + nesting;
                self.visit_expr(&node.test, nesting);
                self.visit_body(&node.body, nesting + 1);
                self.visit_body(&node.orelse, nesting);
            }
            Stmt::For(node) => {
                self.complexity += 1 + nesting;
                self.visit_expr(&node.target, nesting);
                self.visit_expr(&node.iter, nesting);
                self.visit_body(&node.body, nesting + 1);
                self.visit_body(&node.orelse, nesting);
            }
            Stmt::Try(node) => {
                self.complexity += 1 + nesting;
                self.visit_body(&node.body, nesting + 1);
                for handler in &node.handlers {
                    self.complexity += 1 + nesting;
                    let ast::ExceptHandler::ExceptHandler(handler) = handler;
                    if let Some(type_) = &handler.type_ {
                        self.visit_expr(type_, nesting);
                    }
                    self.visit_body(&handler.body, nesting + 1);
                }
                self.visit_body(&node.orelse, nesting);
                self.visit_body(&node.finalbody, nesting);
            }
            Stmt::With(node) => {
                self.complexity += 1 + nesting;
                for item in &node.items {
                    self.visit_expr(&item.context_expr, nesting);
                    if let Some(vars) = &item.optional_vars {
                        self.visit_expr(vars, nesting);
                    }
                }
                self.visit_body(&node.body, nesting + 1);
            }
            Stmt::Match(node) => {
                self.visit_expr(&node.subject, nesting);
                for case in &node.cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard, nesting);
                    }
                    self.visit_body(&case.body, nesting);
                }
            }
            Stmt::Assign(node) => {
                for target in &node.targets {
                    self.visit_expr(target, nesting);
                }
                self.visit_expr(&node.value, nesting);
            }
            Stmt::AugAssign(node) => {
                self.visit_expr(&node.target, nesting);
                self.visit_expr(&node.value, nesting);
            }
            Stmt::AnnAssign(node) => {
                self.visit_expr(&node.target, nesting);
                if let Some(value) = &node.value {
                    self.visit_expr(value, nesting);
                }
            }
            Stmt::Delete(node) => {
                for target in &node.targets {
                    self.visit_expr(target, nesting);
                }
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.visit_expr(exc, nesting);
                }
                if let Some(cause) = &node.cause {
                    self.visit_expr(cause, nesting);
                }
            }
            Stmt::Assert(node) => {
                self.visit_expr(&node.test, nesting);
                if let Some(msg) = &node.msg {
                    self.visit_expr(msg, nesting);
                }
            }
            Stmt::Return(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value, nesting);
                }
            }
            Stmt::Expr(node) => self.visit_expr(&node.value, nesting),
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

    fn visit_expr(&mut self, expr: &Expr, nesting: usize) {
        match expr {
            Expr::BoolOp(node) => {
                self.complexity += node.values.len().saturating_sub(1);
                for value in &node.values {
                    self.visit_expr(value, nesting);
                }
            }
            Expr::If(node) => {
                self.complexity += 1 + nesting;
                self.visit_expr(&node.test, nesting);
                self.visit_expr(&node.body, nesting);
                self.visit_expr(&node.orelse, nesting);
            }
            Expr::ListComp(node) => self.visit_comprehensions(&node.generators, &[&node.elt], nesting),
            Expr::SetComp(node) => self.visit_comprehensions(&node.generators, &[&node.elt], nesting),
            Expr::DictComp(node) => {
                self.visit_comprehensions(&node.generators, &[&node.key, &node.value], nesting);
            }
            Expr::Generator(node) => self.visit_comprehensions(&node.generators, &[&node.elt], nesting),
            Expr::Lambda(node) => self.visit_expr(&node.body, nesting),
            Expr::BinOp(node) => {
                self.visit_expr(&node.left, nesting);
                self.visit_expr(&node.right, nesting);
            }
            Expr::UnaryOp(node) => self.visit_expr(&node.operand, nesting),
            Expr::Compare(node) => {
                self.visit_expr(&node.left, nesting);
                for comparator in &node.comparators {
                    self.visit_expr(comparator, nesting);
                }
            }
            Expr::Named(node) => {
                self.visit_expr(&node.target, nesting);
                self.visit_expr(&node.value, nesting);
            }
            Expr::Attribute(node) => self.visit_expr(&node.value, nesting),
            Expr::Subscript(node) => {
                self.visit_expr(&node.value, nesting);
                self.visit_expr(&node.slice, nesting);
            }
            Expr::Starred(node) => self.visit_expr(&node.value, nesting),
            Expr::Slice(node) => {
                if let Some(lower) = &node.lower {
                    self.visit_expr(lower, nesting);
                }
                if let Some(upper) = &node.upper {
                    self.visit_expr(upper, nesting);
                }
                if let Some(step) = &node.step {
                    self.visit_expr(step, nesting);
                }
            }
            Expr::Tuple(node) => self.visit_expr_list(&node.elts, nesting),
            Expr::List(node) => self.visit_expr_list(&node.elts, nesting),
            Expr::Set(node) => self.visit_expr_list(&node.elts, nesting),
            Expr::Dict(node) => {
                for item in &node.items {
                    if let Some(key) = &item.key {
                        self.visit_expr(key, nesting);
                    }
                    self.visit_expr(&item.value, nesting);
                }
            }
            Expr::Await(node) => self.visit_expr(&node.value, nesting),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value, nesting);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&node.value, nesting),
            Expr::Call(node) => {
                self.visit_expr(&node.func, nesting);
                self.visit_expr_list(&node.arguments.args, nesting);
                for keyword in &node.arguments.keywords {
                    self.visit_expr(&keyword.value, nesting);
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

    fn visit_expr_list(&mut self, exprs: &[Expr], nesting: usize) {
        for expr in exprs {
            self.visit_expr(expr, nesting);
        }
    }

    fn visit_comprehensions(
        &mut self,
        generators: &[ast::Comprehension],
        results: &[&Expr],
        nesting: usize,
    ) {
        for gen in generators {
            self.complexity += 1 + nesting;
            self.visit_expr(&gen.target, nesting);
            self.visit_expr(&gen.iter, nesting);
            self.visit_expr_list(&gen.ifs, nesting);
        }
        for result in results {
            self.visit_expr(result, nesting);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruff_python_parser::parse_module;

    fn body_complexity(src: &str) -> usize {
        let parsed = parse_module(src).expect("valid python");
        let module = parsed.into_syntax();
        complexity(&module.body)
    }

    #[test]
    fn straight_line_code_is_zero() {
        assert_eq!(body_complexity("x = 1\ny = 2\n"), 0);
    }

    #[test]
    fn nested_if_adds_nesting_penalty() {
        let src = "if a:\n    if b:\n        pass\n";
        assert_eq!(body_complexity(src), 1 + 2);
    }

    #[test]
    fn boolean_chain_is_flat_not_nested() {
        assert_eq!(body_complexity("if a and b or c:\n    pass\n"), 1 + 2);
    }

    #[test]
    fn with_inside_loop_compounds_nesting() {
        let src = "for x in xs:\n    with a:\n        pass\n";
        assert_eq!(body_complexity(src), 1 + 2);
    }
}
