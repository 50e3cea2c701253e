//! Tree-to-text emitters over expression trees.
//!
//! Both renderers walk the same parsed tree the evaluator would walk;
//! neither re-parses. Operator spellings come from the operator tags'
//! `Display` implementations, so `div` renders as written in source.

use crate::{
    ast::expressions::Expr,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::{expr::parse_expr, parser::Parser},
};

/// Renders an expression tree in reverse-Polish order: operands left to
/// right, then the operator. Unary operators follow their single operand.
pub fn to_postfix(node: &Expr) -> String {
    match node {
        Expr::BinOp { op, left, right } => {
            format!("{} {} {}", to_postfix(left), to_postfix(right), op)
        }
        Expr::UnOp { op, operand } => format!("{} {}", to_postfix(operand), op),
        Expr::Num { value } => value.to_string(),
        Expr::Var { name } => name.clone(),
    }
}

/// Renders an expression tree as fully-parenthesized prefix (LISP-style)
/// text.
pub fn to_lisp(node: &Expr) -> String {
    match node {
        Expr::BinOp { op, left, right } => {
            format!("({} {} {})", op, to_lisp(left), to_lisp(right))
        }
        Expr::UnOp { op, operand } => format!("({} {})", op, to_lisp(operand)),
        Expr::Num { value } => value.to_string(),
        Expr::Var { name } => name.clone(),
    }
}

/// Parses an arithmetic expression and renders it in reverse-Polish form.
pub fn translate_to_postfix(source: &str) -> Result<String, Error> {
    Ok(to_postfix(&parse_expression(source)?))
}

/// Parses an arithmetic expression and renders it in LISP-style prefix
/// form.
pub fn translate_to_lisp(source: &str) -> Result<String, Error> {
    Ok(to_lisp(&parse_expression(source)?))
}

fn parse_expression(source: &str) -> Result<Expr, Error> {
    let lexer = Lexer::new(source, None);
    let mut parser = Parser::new(lexer)?;
    let expr = parse_expr(&mut parser)?;

    if parser.current_token_kind() != TokenKind::Eof {
        return Err(parser.invalid_syntax());
    }

    Ok(expr)
}
