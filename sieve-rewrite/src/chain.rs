use std::sync::Arc;

use ahash::HashSet;
use sieve_ast::ast::{self, Expr, ExprRef, ExprVisitor, LogicalOperator};
use tracing::debug;

/// The operands of a chain of `operator`, left to right.
///
/// `(a AND b) AND (c OR d)` flattened for AND gives `[a, b, c OR d]`. An
/// expression that isn't a connective of that kind is a chain of one.
pub fn flatten(expr: &ExprRef, operator: LogicalOperator) -> Vec<ExprRef> {
    let mut flatten = Flatten {
        operator,
        operands: Vec::new(),
    };
    expr.accept(&mut flatten, expr);
    flatten.operands
}

/// Rebuild a left-deep chain of `operator` over the operands.
///
/// Returns `None` when there are no operands.
pub fn combine(
    operator: LogicalOperator,
    operands: impl IntoIterator<Item = ExprRef>,
) -> Option<Expr> {
    let mut operands = operands.into_iter();
    let first = operands.next()?;
    let combined = operands.fold(first, |acc, operand| {
        Arc::new(Expr::logical(operator, acc, operand))
    });
    Some(Arc::unwrap_or_clone(combined))
}

/// Drop operands that repeat within an AND or OR chain; the first
/// occurrence is kept.
pub fn dedup_operands(expr: &Expr) -> Expr {
    let expr = Arc::new(expr.clone());
    Arc::unwrap_or_clone(expr.accept(&mut Dedup, &expr))
}

// context is the node being visited, so leaves can be pushed as-is
struct Flatten {
    operator: LogicalOperator,
    operands: Vec<ExprRef>,
}

impl<'a> ExprVisitor<&'a ExprRef> for Flatten {
    type Output = ();

    fn visit_literal(&mut self, _literal: &ast::LiteralExpr, expr: &'a ExprRef) {
        self.operands.push(expr.clone());
    }

    fn visit_column_ref(&mut self, _column: &ast::ColumnRef, expr: &'a ExprRef) {
        self.operands.push(expr.clone());
    }

    fn visit_not_expr(&mut self, _not: &ast::NotExpr, expr: &'a ExprRef) {
        self.operands.push(expr.clone());
    }

    fn visit_logical_binary_expr(&mut self, logical: &ast::LogicalBinaryExpr, expr: &'a ExprRef) {
        if logical.operator() != self.operator {
            self.operands.push(expr.clone());
            return;
        }
        logical.left().accept(self, logical.left());
        logical.right().accept(self, logical.right());
    }
}

struct Dedup;

impl<'a> ExprVisitor<&'a ExprRef> for Dedup {
    type Output = ExprRef;

    fn visit_literal(&mut self, _literal: &ast::LiteralExpr, expr: &'a ExprRef) -> ExprRef {
        expr.clone()
    }

    fn visit_column_ref(&mut self, _column: &ast::ColumnRef, expr: &'a ExprRef) -> ExprRef {
        expr.clone()
    }

    fn visit_not_expr(&mut self, not: &ast::NotExpr, _expr: &'a ExprRef) -> ExprRef {
        let operand = not.operand().accept(self, not.operand());
        let rewritten = ast::NotExpr::new(operand);
        Arc::new(match not.location() {
            Some(location) => rewritten.with_location(location).into(),
            None => rewritten.into(),
        })
    }

    fn visit_logical_binary_expr(
        &mut self,
        logical: &ast::LogicalBinaryExpr,
        expr: &'a ExprRef,
    ) -> ExprRef {
        let operator = logical.operator();
        // an operand can collapse into this chain's operator once deduped
        let operands = flatten(expr, operator)
            .iter()
            .flat_map(|operand| flatten(&operand.accept(self, operand), operator))
            .collect::<Vec<_>>();
        let total = operands.len();

        let mut seen: HashSet<ExprRef> = HashSet::default();
        let kept = operands
            .into_iter()
            .filter(|operand| seen.insert(operand.clone()))
            .collect::<Vec<_>>();
        if kept.len() < total {
            debug!(%operator, before = total, after = kept.len(), "removed duplicate operands");
        }

        match combine(operator, kept) {
            Some(combined) => Arc::new(match (combined, logical.location()) {
                (Expr::LogicalBinary(rebuilt), Some(location)) => {
                    rebuilt.with_location(location).into()
                }
                (combined, _) => combined,
            }),
            None => expr.clone(),
        }
    }
}
