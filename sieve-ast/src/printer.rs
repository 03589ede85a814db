use std::fmt;

use crate::ast::{self, ExprVisitor, LogicalOperator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parenthesize {
    /// Only where precedence or association requires it.
    #[default]
    Minimal,
    /// Around every nested connective.
    Always,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintOptions {
    pub keyword_case: KeywordCase,
    pub parenthesize: Parenthesize,
}

impl PrintOptions {
    pub fn with_keyword_case(self, keyword_case: KeywordCase) -> Self {
        Self {
            keyword_case,
            ..self
        }
    }

    pub fn with_parenthesize(self, parenthesize: Parenthesize) -> Self {
        Self {
            parenthesize,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Where the expression being printed sits relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Top,
    Operand(LogicalOperator, Side),
    Negated,
}

/// Renders an expression as query text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    options: PrintOptions,
}

impl Printer {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn print(&mut self, expr: &ast::Expr) -> String {
        expr.accept(self, Position::Top)
    }

    /// Join two already printed operands with a connective.
    pub fn join(&self, operator: LogicalOperator, left: &str, right: &str) -> String {
        format!("{} {} {}", left, self.keyword(operator.into()), right)
    }

    fn keyword(&self, keyword: &str) -> String {
        match self.options.keyword_case {
            KeywordCase::Upper => keyword.to_string(),
            KeywordCase::Lower => keyword.to_lowercase(),
        }
    }

    fn needs_parens(&self, operator: LogicalOperator, position: Position) -> bool {
        match position {
            Position::Top => false,
            Position::Negated => true,
            Position::Operand(parent, side) => {
                self.options.parenthesize == Parenthesize::Always
                    || operator.binding_power() < parent.binding_power()
                    || (operator == parent && side == Side::Right)
            }
        }
    }

    fn literal(&self, literal: &ast::Literal) -> String {
        match literal {
            ast::Literal::Null => self.keyword("NULL"),
            ast::Literal::Boolean(true) => self.keyword("TRUE"),
            ast::Literal::Boolean(false) => self.keyword("FALSE"),
            ast::Literal::Integer(i) => i.to_string(),
            ast::Literal::Decimal(d) => d.to_string(),
            ast::Literal::Double(d) => self.double(d.0),
            ast::Literal::String(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }

    // always with a fraction or exponent, so it doesn't read back as an integer
    fn double(&self, d: f64) -> String {
        if d.is_finite() {
            return format!("{:?}", d);
        }
        let special = if d.is_nan() {
            "NaN"
        } else if d > 0.0 {
            "Infinity"
        } else {
            "-Infinity"
        };
        format!(
            "{}('{}' {} {})",
            self.keyword("CAST"),
            special,
            self.keyword("AS"),
            self.keyword("DOUBLE")
        )
    }
}

impl ExprVisitor<Position> for Printer {
    type Output = String;

    fn visit_literal(&mut self, literal: &ast::LiteralExpr, _position: Position) -> String {
        self.literal(literal.value())
    }

    fn visit_column_ref(&mut self, column: &ast::ColumnRef, _position: Position) -> String {
        column.name().to_string()
    }

    fn visit_not_expr(&mut self, not: &ast::NotExpr, _position: Position) -> String {
        let operand = not.operand().accept(self, Position::Negated);
        format!("{} {}", self.keyword("NOT"), operand)
    }

    fn visit_logical_binary_expr(
        &mut self,
        logical: &ast::LogicalBinaryExpr,
        position: Position,
    ) -> String {
        let operator = logical.operator();
        let left = logical
            .left()
            .accept(self, Position::Operand(operator, Side::Left));
        let right = logical
            .right()
            .accept(self, Position::Operand(operator, Side::Right));
        let joined = self.join(operator, &left, &right);
        if self.needs_parens(operator, position) {
            format!("({})", joined)
        } else {
            joined
        }
    }
}

impl fmt::Display for ast::Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::default().print(self))
    }
}

impl fmt::Display for ast::LogicalBinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.accept(&mut Printer::default(), Position::Top))
    }
}
