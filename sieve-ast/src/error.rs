use thiserror::Error;

/// Rejected construction of a node.
///
/// This always indicates a bug in whatever produced the node (the parser
/// or a rewrite pass); it's not a data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("logical binary expression is missing its operator")]
    MissingOperator,
    #[error("logical binary expression is missing its left operand")]
    MissingLeft,
    #[error("logical binary expression is missing its right operand")]
    MissingRight,
}

pub type Result<T> = std::result::Result<T, Error>;
