use std::fmt::Display;

use crate::interpreter::value::Value;

/// Binary operator tags. `Divide` is the `/` real division, `IntegerDivide`
/// the `div` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    IntegerDivide,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::IntegerDivide => "div",
        };
        write!(f, "{}", spelling)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        };
        write!(f, "{}", spelling)
    }
}

/// Expression nodes. Each node owns its children; the tree is immutable once
/// the parser returns it and both walks only read it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BinOp {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnOp {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Num {
        value: Value,
    },
    Var {
        name: String,
    },
}
