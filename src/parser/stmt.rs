use crate::{
    ast::{expressions::Expr, statements::Stmt, types::TypeSpec},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// program := PROGRAM variable SEMI block DOT
pub fn parse_program(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Program)?;
    let name = parser.eat(TokenKind::Id)?.text();
    parser.eat(TokenKind::Semicolon)?;

    let block = parse_block(parser)?;
    parser.eat(TokenKind::Dot)?;

    Ok(Stmt::Program {
        name,
        block: Box::new(block),
    })
}

/// block := declarations compound_statement
pub fn parse_block(parser: &mut Parser) -> Result<Stmt, Error> {
    let declarations = parse_declarations(parser)?;
    let compound_statement = parse_compound_statement(parser)?;

    Ok(Stmt::Block {
        declarations,
        compound_statement: Box::new(compound_statement),
    })
}

/// declarations := VAR (variable_declaration SEMI)+
///               | (PROCEDURE ID SEMI block SEMI)*
///               | empty
///
/// A `VAR` section (when present) may be followed by procedure
/// declarations.
pub fn parse_declarations(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut declarations = Vec::new();

    if parser.current_token_kind() == TokenKind::Var {
        parser.eat(TokenKind::Var)?;
        loop {
            declarations.extend(parse_variable_declaration(parser)?);
            parser.eat(TokenKind::Semicolon)?;

            if parser.current_token_kind() != TokenKind::Id {
                break;
            }
        }
    }

    while parser.current_token_kind() == TokenKind::Procedure {
        parser.eat(TokenKind::Procedure)?;
        let name = parser.eat(TokenKind::Id)?.text();
        parser.eat(TokenKind::Semicolon)?;

        let block = parse_block(parser)?;
        parser.eat(TokenKind::Semicolon)?;

        declarations.push(Stmt::ProcedureDecl {
            name,
            block: Box::new(block),
        });
    }

    Ok(declarations)
}

/// variable_declaration := ID (COMMA ID)* COLON type_spec
///
/// One declaration per listed name, all sharing the same type node.
pub fn parse_variable_declaration(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut names = vec![parser.eat(TokenKind::Id)?.text()];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.eat(TokenKind::Comma)?;
        names.push(parser.eat(TokenKind::Id)?.text());
    }

    parser.eat(TokenKind::Colon)?;
    let type_node = parse_type_spec(parser)?;

    Ok(names
        .into_iter()
        .map(|name| Stmt::VarDecl {
            var_node: Expr::Var { name },
            type_node: type_node.clone(),
        })
        .collect())
}

/// type_spec := INTEGER | REAL
pub fn parse_type_spec(parser: &mut Parser) -> Result<TypeSpec, Error> {
    let token = match parser.current_token_kind() {
        TokenKind::Integer => parser.eat(TokenKind::Integer)?,
        TokenKind::Real => parser.eat(TokenKind::Real)?,
        _ => return Err(parser.invalid_syntax()),
    };

    Ok(TypeSpec { name: token.text() })
}

/// compound_statement := BEGIN statement_list END
pub fn parse_compound_statement(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Begin)?;
    let children = parse_statement_list(parser)?;
    parser.eat(TokenKind::End)?;

    Ok(Stmt::Compound { children })
}

/// statement_list := statement (SEMI statement)*
pub fn parse_statement_list(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = vec![parse_statement(parser)?];

    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.eat(TokenKind::Semicolon)?;
        statements.push(parse_statement(parser)?);
    }

    Ok(statements)
}

/// statement := compound_statement | assignment_statement | empty
pub fn parse_statement(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Begin => parse_compound_statement(parser),
        TokenKind::Id => parse_assignment_statement(parser),
        _ => Ok(Stmt::NoOp),
    }
}

/// assignment_statement := variable ASSIGN expr
pub fn parse_assignment_statement(parser: &mut Parser) -> Result<Stmt, Error> {
    let left = parse_variable(parser)?;
    parser.eat(TokenKind::Assign)?;
    let right = parse_expr(parser)?;

    Ok(Stmt::AssignOp { left, right })
}

/// variable := ID
pub fn parse_variable(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::Id)?;
    Ok(Expr::Var { name: token.text() })
}
