//! Expression AST for the Sieve query language.
//!
//! Nodes are immutable and compare structurally; source locations are
//! carried for diagnostics only. Traversal goes through
//! [`ast::Expr::accept`], either with an [`ast::ExprVisitor`] that returns a
//! value per node or with an [`ast::ExprWalker`] that descends by default.

pub mod ast;
mod error;
mod location;
mod operator;
mod printer;

pub use error::{Error, Result};
pub use printer::{KeywordCase, Parenthesize, Position, PrintOptions, Printer, Side};
