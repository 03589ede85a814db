use blanket::blanket;

use crate::ast;

/// Double dispatch over expression kinds.
///
/// [`ast::Expr::accept`] calls exactly one of these methods, passing the
/// node and the context through untouched, and returns what it returns.
/// Adding an expression kind adds a method here, so every visitor has to
/// handle it before the crate compiles again.
pub trait ExprVisitor<C> {
    type Output;

    fn visit_literal(&mut self, literal: &ast::LiteralExpr, context: C) -> Self::Output;
    fn visit_column_ref(&mut self, column: &ast::ColumnRef, context: C) -> Self::Output;
    fn visit_not_expr(&mut self, not: &ast::NotExpr, context: C) -> Self::Output;
    fn visit_logical_binary_expr(
        &mut self,
        logical: &ast::LogicalBinaryExpr,
        context: C,
    ) -> Self::Output;
}

/// A traversal that descends into every subexpression by default.
///
/// Override only the methods for the nodes you care about; call the
/// matching function in [`walk`] to keep descending.
#[blanket(default = "walk")]
pub trait ExprWalker {
    fn visit_expr(&mut self, expr: &ast::Expr);
    fn visit_literal(&mut self, literal: &ast::LiteralExpr);
    fn visit_column_ref(&mut self, column: &ast::ColumnRef);
    fn visit_not_expr(&mut self, not: &ast::NotExpr);
    fn visit_logical_binary_expr(&mut self, logical: &ast::LogicalBinaryExpr);
    fn visit_logical_operator(&mut self, operator: ast::LogicalOperator);
}

pub mod walk {
    use super::{ExprVisitor, ExprWalker};
    use crate::ast;

    // lets a walker go through `Expr::accept` like every other traversal
    struct Dispatch<'a, V: ExprWalker + ?Sized>(&'a mut V);

    impl<V: ExprWalker + ?Sized> ExprVisitor<()> for Dispatch<'_, V> {
        type Output = ();

        fn visit_literal(&mut self, literal: &ast::LiteralExpr, _context: ()) {
            self.0.visit_literal(literal)
        }

        fn visit_column_ref(&mut self, column: &ast::ColumnRef, _context: ()) {
            self.0.visit_column_ref(column)
        }

        fn visit_not_expr(&mut self, not: &ast::NotExpr, _context: ()) {
            self.0.visit_not_expr(not)
        }

        fn visit_logical_binary_expr(&mut self, logical: &ast::LogicalBinaryExpr, _context: ()) {
            self.0.visit_logical_binary_expr(logical)
        }
    }

    pub fn visit_expr<V: ExprWalker + ?Sized>(v: &mut V, expr: &ast::Expr) {
        expr.accept(&mut Dispatch(v), ())
    }

    pub fn visit_literal<V: ExprWalker + ?Sized>(_v: &mut V, _literal: &ast::LiteralExpr) {
        // intentionally left blank
    }

    pub fn visit_column_ref<V: ExprWalker + ?Sized>(_v: &mut V, _column: &ast::ColumnRef) {
        // intentionally left blank
    }

    pub fn visit_not_expr<V: ExprWalker + ?Sized>(v: &mut V, not: &ast::NotExpr) {
        v.visit_expr(not.operand());
    }

    pub fn visit_logical_binary_expr<V: ExprWalker + ?Sized>(
        v: &mut V,
        logical: &ast::LogicalBinaryExpr,
    ) {
        v.visit_logical_operator(logical.operator());
        v.visit_expr(logical.left());
        v.visit_expr(logical.right());
    }

    pub fn visit_logical_operator<V: ExprWalker + ?Sized>(
        _v: &mut V,
        _operator: ast::LogicalOperator,
    ) {
        // intentionally left blank
    }
}
