use crate::{
    ast::expressions::{BinaryOp, Expr, UnaryOp},
    errors::errors::Error,
    interpreter::value::Value,
    lexer::tokens::{TokenKind, TokenValue},
};

use super::{parser::Parser, stmt::parse_variable};

/// expr := term ((PLUS | MINUS) term)*
///
/// A bare `INTEGER_CONST` left over after the operator loop is malformed
/// input and rejected here rather than at a caller.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut node = parse_term(parser)?;

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Subtract,
            _ => break,
        };
        parser.eat(parser.current_token_kind())?;

        node = Expr::BinOp {
            op,
            left: Box::new(node),
            right: Box::new(parse_term(parser)?),
        };
    }

    if parser.current_token_kind() == TokenKind::IntegerConst {
        return Err(parser.invalid_syntax());
    }

    Ok(node)
}

/// term := factor ((MUL | DIV | SLASH) factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut node = parse_factor(parser)?;

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Mul => BinaryOp::Multiply,
            TokenKind::Slash => BinaryOp::Divide,
            TokenKind::IntegerDiv => BinaryOp::IntegerDivide,
            _ => break,
        };
        parser.eat(parser.current_token_kind())?;

        node = Expr::BinOp {
            op,
            left: Box::new(node),
            right: Box::new(parse_factor(parser)?),
        };
    }

    Ok(node)
}

/// factor := (PLUS | MINUS) factor
///         | INTEGER_CONST
///         | REAL_CONST
///         | OPEN_PAREN expr CLOSE_PAREN
///         | variable
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match (parser.current_token_kind(), parser.current_token().value.clone()) {
        (TokenKind::Plus, _) => {
            parser.eat(TokenKind::Plus)?;
            Ok(Expr::UnOp {
                op: UnaryOp::Plus,
                operand: Box::new(parse_factor(parser)?),
            })
        }
        (TokenKind::Minus, _) => {
            parser.eat(TokenKind::Minus)?;
            Ok(Expr::UnOp {
                op: UnaryOp::Minus,
                operand: Box::new(parse_factor(parser)?),
            })
        }
        (TokenKind::IntegerConst, TokenValue::Integer(value)) => {
            parser.eat(TokenKind::IntegerConst)?;
            Ok(Expr::Num {
                value: Value::Integer(value),
            })
        }
        (TokenKind::RealConst, TokenValue::Real(value)) => {
            parser.eat(TokenKind::RealConst)?;
            Ok(Expr::Num {
                value: Value::Real(value),
            })
        }
        (TokenKind::OpenParen, _) => {
            parser.eat(TokenKind::OpenParen)?;
            let node = parse_expr(parser)?;
            parser.eat(TokenKind::CloseParen)?;
            Ok(node)
        }
        _ => parse_variable(parser),
    }
}
