//! C6: Halstead Analyser. Classifies every AST node as an operator or an
//! operand and derives the Halstead software-science suite (§4.6).

mod visitor;

use ruff_python_ast::ModModule;

use crate::model::HalsteadReport;
use visitor::HalsteadVisitor;

#[must_use]
pub fn analyze_halstead(module: &ModModule) -> HalsteadReport {
    let mut visitor = HalsteadVisitor::new();
    visitor.visit_body(&module.body);
    visitor.into_report()
}
