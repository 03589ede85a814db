//! Boolean rewrites over the Sieve expression AST.
//!
//! Every pass goes through the AST's visitor interface and builds new
//! nodes; the input tree is never changed.

mod chain;
mod columns;
mod negation;

pub use chain::{combine, dedup_operands, flatten};
pub use columns::referenced_columns;
pub use negation::{negate, push_down_negation};
