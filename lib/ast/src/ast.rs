use std::fmt::{self, Display, Formatter};

use scanner::Token;

mod printer;
pub use printer::{AstPrinter, RpnPrinter};

/// An expression tree. Each composite variant owns its children outright, so
/// a tree is finite and acyclic by construction and torn down recursively
/// when dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary { left: Box<Expr>, operator: Token, right: Box<Expr> },
    Grouping { expression: Box<Expr> },
    Literal { value: LiteralValue },
    Unary { operator: Token, right: Box<Expr> },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping { expression: Box::new(expression) }
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expr::Literal { value: value.into() }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary { operator, right: Box::new(right) }
    }

    /// Dispatches to the visitor operation matching this node's variant. The
    /// match is exhaustive, so a visitor missing a case does not compile.
    /// Child nodes are handed over unvisited, each visitor recurses in
    /// whatever order its own result requires.
    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>) -> R {
        match self {
            Expr::Binary { left, operator, right } => {
                visitor.visit_binary(left, operator, right)
            }
            Expr::Grouping { expression } => visitor.visit_grouping(expression),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
        }
    }
}

/// One operation per variant; `Expr::accept` routes each node here.
pub trait ExprVisitor<R> {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> R;
    fn visit_grouping(&mut self, expression: &Expr) -> R;
    fn visit_literal(&mut self, value: &LiteralValue) -> R;
    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> R;
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    Str(String),
    Boolean(bool),
    Nil,
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops the trailing `.0` of whole values,
            // so 123.0 renders as `123`.
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Str(s) => write!(f, "{}", s),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::Str(s.to_string())
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}
