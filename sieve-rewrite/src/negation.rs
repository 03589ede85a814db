use std::sync::Arc;

use sieve_ast::ast::{self, Expr, ExprVisitor, LogicalBinaryExpr};
use tracing::trace;

/// An expression equivalent to `NOT expr`, with the negation pushed down
/// to the leaves.
///
/// Connectives are flipped by De Morgan's laws, double negations cancel and
/// boolean literals are inverted. Anything else that ends up negated is
/// wrapped in `NOT`.
pub fn negate(expr: &Expr) -> Expr {
    expr.accept(&mut NegationPushdown, true)
}

/// Rewrite every `NOT` in the tree into negation normal form: afterwards
/// `NOT` only appears directly above a column or a non-boolean literal.
pub fn push_down_negation(expr: &Expr) -> Expr {
    expr.accept(&mut NegationPushdown, false)
}

// the context is whether an odd number of NOTs sits above this node
struct NegationPushdown;

impl NegationPushdown {
    fn rewrite(&mut self, expr: &ast::ExprRef, negated: bool) -> ast::ExprRef {
        Arc::new(expr.accept(self, negated))
    }
}

impl ExprVisitor<bool> for NegationPushdown {
    type Output = Expr;

    fn visit_literal(&mut self, literal: &ast::LiteralExpr, negated: bool) -> Expr {
        if !negated {
            return literal.clone().into();
        }
        match literal.value() {
            ast::Literal::Boolean(value) => {
                let inverted = ast::LiteralExpr::new(ast::Literal::Boolean(!value));
                match literal.location() {
                    Some(location) => inverted.with_location(location).into(),
                    None => inverted.into(),
                }
            }
            _ => Expr::not(Expr::from(literal.clone())),
        }
    }

    fn visit_column_ref(&mut self, column: &ast::ColumnRef, negated: bool) -> Expr {
        if negated {
            Expr::not(Expr::from(column.clone()))
        } else {
            column.clone().into()
        }
    }

    fn visit_not_expr(&mut self, not: &ast::NotExpr, negated: bool) -> Expr {
        trace!(negated, "absorbing NOT");
        not.operand().accept(self, !negated)
    }

    fn visit_logical_binary_expr(
        &mut self,
        logical: &ast::LogicalBinaryExpr,
        negated: bool,
    ) -> Expr {
        let operator = if negated {
            let flipped = logical.operator().flip();
            trace!(from = %logical.operator(), to = %flipped, "flipping connective under NOT");
            flipped
        } else {
            logical.operator()
        };
        let left = self.rewrite(logical.left(), negated);
        let right = self.rewrite(logical.right(), negated);
        let rewritten = LogicalBinaryExpr::new(operator, left, right);
        match logical.location() {
            Some(location) => rewritten.with_location(location).into(),
            None => rewritten.into(),
        }
    }
}
