mod ast_core;
mod logical;
mod visitor;

pub use ast_core::*;
pub use logical::{LogicalBinaryExpr, LogicalBinaryExprBuilder};
pub use visitor::{walk, ExprVisitor, ExprWalker};

pub use crate::location::NodeLocation;
pub use crate::operator::LogicalOperator;
