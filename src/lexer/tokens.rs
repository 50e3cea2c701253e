use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Reserved keywords, keyed by their lower-cased spelling. Identifiers
    /// are lower-cased before this lookup, which makes keywords
    /// case-insensitive.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("var", TokenKind::Var);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("integer", TokenKind::Integer);
        map.insert("real", TokenKind::Real);
        map.insert("div", TokenKind::IntegerDiv);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    IntegerConst,
    RealConst,
    Id,

    Plus,
    Minus,
    Mul,
    Slash,

    OpenParen,
    CloseParen,

    Assign, // :=
    Semicolon,
    Colon,
    Comma,
    Dot,

    // Reserved
    Program,
    Var,
    Procedure,
    Begin,
    End,
    Integer,
    Real,
    IntegerDiv,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload carried by a token. Most tokens carry none; literals carry their
/// parsed numeric value and identifiers/keywords their lower-cased spelling.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Real(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue) -> Token {
        Token { kind, value }
    }

    /// The identifier or keyword spelling; empty for tokens without one.
    pub fn text(&self) -> String {
        match &self.value {
            TokenValue::Text(text) => text.clone(),
            _ => String::new(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "Token({})", self.kind),
            TokenValue::Integer(value) => write!(f, "Token({}, {})", self.kind, value),
            TokenValue::Real(value) => write!(f, "Token({}, {})", self.kind, value),
            TokenValue::Text(text) => write!(f, "Token({}, {:?})", self.kind, text),
        }
    }
}
