use std::fmt;

/// A position in the query text, for diagnostics.
///
/// Lines and columns are 1-based. A location never takes part in the
/// equality or hash of the node that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeLocation {
    line: u32,
    column: u32,
}

impl NodeLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
