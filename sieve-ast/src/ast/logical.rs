use std::hash::{Hash, Hasher};

use crate::ast::ast_core::ExprRef;
use crate::ast::visitor::ExprVisitor;
use crate::error::{Error, Result};
use crate::location::NodeLocation;
use crate::operator::LogicalOperator;

/// `left AND right` or `left OR right`.
///
/// The node cannot be changed after construction; rewrites build a new node.
/// Two nodes are equal when their operators and operands are structurally
/// equal. The location is not taken into account.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogicalBinaryExpr {
    operator: LogicalOperator,
    left: ExprRef,
    right: ExprRef,
    location: Option<NodeLocation>,
}

impl LogicalBinaryExpr {
    pub fn new(
        operator: LogicalOperator,
        left: impl Into<ExprRef>,
        right: impl Into<ExprRef>,
    ) -> Self {
        Self {
            operator,
            left: left.into(),
            right: right.into(),
            location: None,
        }
    }

    /// Construct a node for a connective found in the query text.
    pub fn located(
        location: NodeLocation,
        operator: LogicalOperator,
        left: impl Into<ExprRef>,
        right: impl Into<ExprRef>,
    ) -> Self {
        Self::new(operator, left, right).with_location(location)
    }

    pub fn and(left: impl Into<ExprRef>, right: impl Into<ExprRef>) -> Self {
        Self::new(LogicalOperator::And, left, right)
    }

    pub fn or(left: impl Into<ExprRef>, right: impl Into<ExprRef>) -> Self {
        Self::new(LogicalOperator::Or, left, right)
    }

    pub fn builder() -> LogicalBinaryExprBuilder {
        LogicalBinaryExprBuilder::default()
    }

    pub fn with_location(self, location: NodeLocation) -> Self {
        Self {
            location: Some(location),
            ..self
        }
    }

    #[inline]
    pub fn operator(&self) -> LogicalOperator {
        self.operator
    }

    #[inline]
    pub fn left(&self) -> &ExprRef {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &ExprRef {
        &self.right
    }

    #[inline]
    pub fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    pub fn accept<V, C>(&self, visitor: &mut V, context: C) -> V::Output
    where
        V: ExprVisitor<C> + ?Sized,
    {
        visitor.visit_logical_binary_expr(self, context)
    }
}

impl PartialEq for LogicalBinaryExpr {
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator && self.left == other.left && self.right == other.right
    }
}

impl Hash for LogicalBinaryExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.operator.hash(state);
        self.left.hash(state);
        self.right.hash(state);
    }
}

/// Assemble a [`LogicalBinaryExpr`] from parts that may not all be known up
/// front, as a parser reducing a production does.
///
/// `build` rejects a node with a missing operator or operand.
#[derive(Debug, Clone, Default)]
pub struct LogicalBinaryExprBuilder {
    operator: Option<LogicalOperator>,
    left: Option<ExprRef>,
    right: Option<ExprRef>,
    location: Option<NodeLocation>,
}

impl LogicalBinaryExprBuilder {
    pub fn operator(mut self, operator: LogicalOperator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn left(mut self, left: impl Into<ExprRef>) -> Self {
        self.left = Some(left.into());
        self
    }

    pub fn right(mut self, right: impl Into<ExprRef>) -> Self {
        self.right = Some(right.into());
        self
    }

    pub fn location(mut self, location: NodeLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn build(self) -> Result<LogicalBinaryExpr> {
        let operator = self.operator.ok_or(Error::MissingOperator)?;
        let left = self.left.ok_or(Error::MissingLeft)?;
        let right = self.right.ok_or(Error::MissingRight)?;
        Ok(LogicalBinaryExpr {
            operator,
            left,
            right,
            location: self.location,
        })
    }
}
