use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ibig::IBig;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

use crate::ast::logical::LogicalBinaryExpr;
use crate::ast::visitor::ExprVisitor;
use crate::location::NodeLocation;
use crate::operator::LogicalOperator;

/// A shared, read-only reference to a subexpression.
pub type ExprRef = Arc<Expr>;

/// An expression node.
///
/// Nodes are immutable once built. Equality and hashing are structural and
/// ignore source locations, so independently parsed trees for the same
/// text compare (and hash) equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    Literal(LiteralExpr),
    Column(ColumnRef),
    Not(NotExpr),
    LogicalBinary(LogicalBinaryExpr),
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(LiteralExpr::new(value))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::literal(Literal::Boolean(value))
    }

    pub fn column(name: impl Into<Name>) -> Self {
        Expr::Column(ColumnRef::new(name))
    }

    pub fn not(operand: impl Into<ExprRef>) -> Self {
        Expr::Not(NotExpr::new(operand))
    }

    pub fn and(left: impl Into<ExprRef>, right: impl Into<ExprRef>) -> Self {
        Expr::LogicalBinary(LogicalBinaryExpr::and(left, right))
    }

    pub fn or(left: impl Into<ExprRef>, right: impl Into<ExprRef>) -> Self {
        Expr::LogicalBinary(LogicalBinaryExpr::or(left, right))
    }

    pub fn logical(
        operator: LogicalOperator,
        left: impl Into<ExprRef>,
        right: impl Into<ExprRef>,
    ) -> Self {
        Expr::LogicalBinary(LogicalBinaryExpr::new(operator, left, right))
    }

    pub fn location(&self) -> Option<NodeLocation> {
        match self {
            Expr::Literal(literal) => literal.location(),
            Expr::Column(column) => column.location(),
            Expr::Not(not) => not.location(),
            Expr::LogicalBinary(logical) => logical.location(),
        }
    }

    /// Route to the visitor method for this node's kind.
    ///
    /// This is the one place that looks at which kind of node an
    /// expression is; everything else traverses through it.
    pub fn accept<V, C>(&self, visitor: &mut V, context: C) -> V::Output
    where
        V: ExprVisitor<C> + ?Sized,
    {
        match self {
            Expr::Literal(literal) => literal.accept(visitor, context),
            Expr::Column(column) => column.accept(visitor, context),
            Expr::Not(not) => not.accept(visitor, context),
            Expr::LogicalBinary(logical) => logical.accept(visitor, context),
        }
    }

    pub fn as_logical_binary(&self) -> Option<&LogicalBinaryExpr> {
        match self {
            Expr::LogicalBinary(logical) => Some(logical),
            _ => None,
        }
    }
}

impl From<LiteralExpr> for Expr {
    fn from(literal: LiteralExpr) -> Self {
        Expr::Literal(literal)
    }
}

impl From<ColumnRef> for Expr {
    fn from(column: ColumnRef) -> Self {
        Expr::Column(column)
    }
}

impl From<NotExpr> for Expr {
    fn from(not: NotExpr) -> Self {
        Expr::Not(not)
    }
}

impl From<LogicalBinaryExpr> for Expr {
    fn from(logical: LogicalBinaryExpr) -> Self {
        Expr::LogicalBinary(logical)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(IBig),
    Decimal(Decimal),
    Double(OrderedFloat<f64>),
    String(String),
}

#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LiteralExpr {
    value: Literal,
    location: Option<NodeLocation>,
}

impl LiteralExpr {
    pub fn new(value: Literal) -> Self {
        Self {
            value,
            location: None,
        }
    }

    pub fn with_location(self, location: NodeLocation) -> Self {
        Self {
            location: Some(location),
            ..self
        }
    }

    #[inline]
    pub fn value(&self) -> &Literal {
        &self.value
    }

    #[inline]
    pub fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    pub fn accept<V, C>(&self, visitor: &mut V, context: C) -> V::Output
    where
        V: ExprVisitor<C> + ?Sized,
    {
        visitor.visit_literal(self, context)
    }
}

// location is diagnostic only
impl PartialEq for LiteralExpr {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Hash for LiteralExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// A possibly qualified column name, such as `orders.total`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Name {
    qualifier: Option<String>,
    name: String,
}

impl Name {
    pub fn new(name: &str) -> Self {
        Name {
            qualifier: None,
            name: name.to_string(),
        }
    }

    pub fn qualified(qualifier: &str, name: &str) -> Self {
        Name {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        }
    }

    #[inline]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}.{}", qualifier, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        match name.split_once('.') {
            Some((qualifier, name)) => Name::qualified(qualifier, name),
            None => Name::new(name),
        }
    }
}

#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnRef {
    name: Name,
    location: Option<NodeLocation>,
}

impl ColumnRef {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    pub fn with_location(self, location: NodeLocation) -> Self {
        Self {
            location: Some(location),
            ..self
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    pub fn accept<V, C>(&self, visitor: &mut V, context: C) -> V::Output
    where
        V: ExprVisitor<C> + ?Sized,
    {
        visitor.visit_column_ref(self, context)
    }
}

impl PartialEq for ColumnRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Hash for ColumnRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NotExpr {
    operand: ExprRef,
    location: Option<NodeLocation>,
}

impl NotExpr {
    pub fn new(operand: impl Into<ExprRef>) -> Self {
        Self {
            operand: operand.into(),
            location: None,
        }
    }

    pub fn with_location(self, location: NodeLocation) -> Self {
        Self {
            location: Some(location),
            ..self
        }
    }

    #[inline]
    pub fn operand(&self) -> &ExprRef {
        &self.operand
    }

    #[inline]
    pub fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    pub fn accept<V, C>(&self, visitor: &mut V, context: C) -> V::Output
    where
        V: ExprVisitor<C> + ?Sized,
    {
        visitor.visit_not_expr(self, context)
    }
}

impl PartialEq for NotExpr {
    fn eq(&self, other: &Self) -> bool {
        self.operand == other.operand
    }
}

impl Hash for NotExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.operand.hash(state);
    }
}
