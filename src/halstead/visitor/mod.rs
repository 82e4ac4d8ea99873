mod expressions;
mod statements;

use ruff_python_ast::Stmt;
use rustc_hash::FxHashSet;

use crate::model::HalsteadReport;

/// Accumulates operator/operand occurrences over one file's AST. The node
/// kind strings inserted here are the target language's own AST class
/// names (`"Add"`, `"FunctionDef"`, `"Eq"`, ...), not the surface-syntax
/// token — two syntactically different spellings of the same AST node
/// (e.g. both comparison operands) collapse to one operator identity, and
/// conversely a stringified literal value collides with a same-valued
/// identifier, by design (see the Halstead open question in the spec).
pub(super) struct HalsteadVisitor {
    operators: FxHashSet<&'static str>,
    operands: FxHashSet<String>,
    total_operators: usize,
    total_operands: usize,
}

impl HalsteadVisitor {
    pub(super) fn new() -> Self {
        Self {
            operators: FxHashSet::default(),
            operands: FxHashSet::default(),
            total_operators: 0,
            total_operands: 0,
        }
    }

    fn add_operator(&mut self, kind: &'static str) {
        self.operators.insert(kind);
        self.total_operators += 1;
    }

    fn add_operand(&mut self, token: impl Into<String>) {
        self.operands.insert(token.into());
        self.total_operands += 1;
    }

    pub(super) fn visit_body(&mut self, body: &[Stmt]) {
        for stmt in body {
            statements::visit_stmt(self, stmt);
        }
    }

    fn visit_expr(&mut self, expr: &ruff_python_ast::Expr) {
        expressions::visit_expr(self, expr);
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn into_report(self) -> HalsteadReport {
        let h1 = self.operators.len();
        let h2 = self.operands.len();
        let n1 = self.total_operators;
        let n2 = self.total_operands;

        let vocabulary = h1 + h2;
        let length = n1 + n2;

        if vocabulary == 0 || length == 0 {
            return HalsteadReport {
                h1,
                h2,
                n1,
                n2,
                vocabulary,
                length,
                ..HalsteadReport::default()
            };
        }

        let volume = length as f64 * (vocabulary as f64).log2();
        let difficulty = if h2 == 0 {
            0.0
        } else {
            (h1 as f64 / 2.0) * (n2 as f64 / h2 as f64)
        };
        let effort = difficulty * volume;
        let time = effort / 18.0;
        let bugs = volume / 3000.0;

        HalsteadReport {
            h1,
            h2,
            n1,
            n2,
            vocabulary,
            length,
            volume: round2(volume),
            difficulty: round2(difficulty),
            effort: round2(effort),
            time: round2(time),
            bugs: round4(bugs),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
