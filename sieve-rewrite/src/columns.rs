use sieve_ast::ast::{self, ExprWalker, Name};

/// The columns an expression refers to, in the order they appear.
/// Repeated references are listed each time.
pub fn referenced_columns(expr: &ast::Expr) -> Vec<Name> {
    let mut collector = ColumnCollector::default();
    collector.visit_expr(expr);
    collector.columns
}

#[derive(Default)]
struct ColumnCollector {
    columns: Vec<Name>,
}

impl ExprWalker for ColumnCollector {
    fn visit_column_ref(&mut self, column: &ast::ColumnRef) {
        self.columns.push(column.name().clone());
    }
}
