use ruff_python_ast::{self as ast, Expr};

use super::HalsteadVisitor;

/// Visits one expression node and all its descendants. Per §4.6, only
/// arithmetic/bitwise/shift/boolean/comparison/unary operators are
/// classified as Halstead operators, and only names, literals, and
/// attribute accesses as operands; every other expression kind (calls,
/// containers, comprehensions, ...) contributes nothing directly but is
/// still walked to reach the operators/operands nested inside it.
pub(super) fn visit_expr(visitor: &mut HalsteadVisitor, expr: &Expr) {
    match expr {
        Expr::BoolOp(node) => {
            visitor.add_operator(match node.op {
                ast::BoolOp::And => "And",
                ast::BoolOp::Or => "Or",
            });
            for value in &node.values {
                visitor.visit_expr(value);
            }
        }
        Expr::BinOp(node) => {
            visitor.add_operator(binop_kind(node.op));
            visitor.visit_expr(&node.left);
            visitor.visit_expr(&node.right);
        }
        Expr::UnaryOp(node) => {
            visitor.add_operator(match node.op {
                ast::UnaryOp::Invert => "Invert",
                ast::UnaryOp::Not => "Not",
                ast::UnaryOp::UAdd => "UAdd",
                ast::UnaryOp::USub => "USub",
            });
            visitor.visit_expr(&node.operand);
        }
        Expr::Compare(node) => {
            for op in &node.ops {
                visitor.add_operator(cmpop_kind(*op));
            }
            visitor.visit_expr(&node.left);
            for comparator in &node.comparators {
                visitor.visit_expr(comparator);
            }
        }
        Expr::Name(node) => visitor.add_operand(node.id.to_string()),
        Expr::Attribute(node) => {
            visitor.visit_expr(&node.value);
            visitor.add_operand(node.attr.to_string());
        }
        Expr::StringLiteral(node) => visitor.add_operand(node.value.to_string()),
        Expr::BytesLiteral(node) => visitor.add_operand(format!("{:?}", node.value)),
        Expr::NumberLiteral(node) => visitor.add_operand(number_literal_token(&node.value)),
        Expr::BooleanLiteral(node) => visitor.add_operand(node.value.to_string()),
        Expr::NoneLiteral(_) => visitor.add_operand("None"),
        Expr::EllipsisLiteral(_) => visitor.add_operand("..."),
        Expr::Named(node) => {
            visitor.visit_expr(&node.target);
            visitor.visit_expr(&node.value);
        }
        Expr::Lambda(node) => visitor.visit_expr(&node.body),
        Expr::If(node) => {
            visitor.visit_expr(&node.test);
            visitor.visit_expr(&node.body);
            visitor.visit_expr(&node.orelse);
        }
        Expr::Dict(node) => {
            for item in &node.items {
                if let Some(key) = &item.key {
                    visitor.visit_expr(key);
                }
                visitor.visit_expr(&item.value);
            }
        }
        Expr::Set(node) => visit_expr_list(visitor, &node.elts),
        Expr::List(node) => visit_expr_list(visitor, &node.elts),
        Expr::Tuple(node) => {
            for elt in &node.elts {
                visitor.visit_expr(elt);
            }
        }
        Expr::ListComp(node) => {
            visitor.visit_expr(&node.elt);
            visit_generators(visitor, &node.generators);
        }
        Expr::SetComp(node) => {
            visitor.visit_expr(&node.elt);
            visit_generators(visitor, &node.generators);
        }
        Expr::DictComp(node) => {
            visitor.visit_expr(&node.key);
            visitor.visit_expr(&node.value);
            visit_generators(visitor, &node.generators);
        }
        Expr::Generator(node) => {
            visitor.visit_expr(&node.elt);
            visit_generators(visitor, &node.generators);
        }
        Expr::Await(node) => visitor.visit_expr(&node.value),
        Expr::Yield(node) => {
            if let Some(value) = &node.value {
                visitor.visit_expr(value);
            }
        }
        Expr::YieldFrom(node) => visitor.visit_expr(&node.value),
        Expr::Call(node) => {
            visitor.visit_expr(&node.func);
            for arg in &node.arguments.args {
                visitor.visit_expr(arg);
            }
            for keyword in &node.arguments.keywords {
                visitor.visit_expr(&keyword.value);
            }
        }
        Expr::FString(node) => {
            for part in &node.value {
                if let ast::FStringPart::Literal(s) = part {
                    visitor.add_operand(s.to_string());
                }
            }
        }
        Expr::Subscript(node) => {
            visitor.visit_expr(&node.value);
            visitor.visit_expr(&node.slice);
        }
        Expr::Starred(node) => visitor.visit_expr(&node.value),
        Expr::Slice(node) => {
            if let Some(lower) = &node.lower {
                visitor.visit_expr(lower);
            }
            if let Some(upper) = &node.upper {
                visitor.visit_expr(upper);
            }
            if let Some(step) = &node.step {
                visitor.visit_expr(step);
            }
        }
        Expr::TString(_) | Expr::IpyEscapeCommand(_) => {}
    }
}

fn visit_expr_list(visitor: &mut HalsteadVisitor, exprs: &[Expr]) {
    for expr in exprs {
        visitor.visit_expr(expr);
    }
}

fn visit_generators(visitor: &mut HalsteadVisitor, generators: &[ast::Comprehension]) {
    for gen in generators {
        visitor.visit_expr(&gen.target);
        visitor.visit_expr(&gen.iter);
        visit_expr_list(visitor, &gen.ifs);
    }
}

/// Stringifies the literal *value*, not its `Debug` form, so a number and a
/// same-spelled string literal collide in the operand set (§9).
fn number_literal_token(number: &ast::Number) -> String {
    match number {
        ast::Number::Int(i) => i.to_string(),
        ast::Number::Float(f) => f.to_string(),
        ast::Number::Complex { real, imag } => format!("{real}+{imag}j"),
    }
}

fn binop_kind(op: ast::Operator) -> &'static str {
    match op {
        ast::Operator::Add => "Add",
        ast::Operator::Sub => "Sub",
        ast::Operator::Mult => "Mult",
        ast::Operator::MatMult => "MatMult",
        ast::Operator::Div => "Div",
        ast::Operator::Mod => "Mod",
        ast::Operator::Pow => "Pow",
        ast::Operator::LShift => "LShift",
        ast::Operator::RShift => "RShift",
        ast::Operator::BitOr => "BitOr",
        ast::Operator::BitXor => "BitXor",
        ast::Operator::BitAnd => "BitAnd",
        ast::Operator::FloorDiv => "FloorDiv",
    }
}

fn cmpop_kind(op: ast::CmpOp) -> &'static str {
    match op {
        ast::CmpOp::Eq => "Eq",
        ast::CmpOp::NotEq => "NotEq",
        ast::CmpOp::Lt => "Lt",
        ast::CmpOp::LtE => "LtE",
        ast::CmpOp::Gt => "Gt",
        ast::CmpOp::GtE => "GtE",
        ast::CmpOp::Is => "Is",
        ast::CmpOp::IsNot => "IsNot",
        ast::CmpOp::In => "In",
        ast::CmpOp::NotIn => "NotIn",
    }
}
