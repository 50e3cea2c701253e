//! Parser state and top-level entry point.
//!
//! The parser pulls tokens from the lexer on demand and keeps exactly one
//! token of lookahead. Each grammar rule is a dedicated function in
//! `stmt.rs` or `expr.rs`; this module owns the shared token-consumption
//! machinery.

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_program;

/// The parser structure: the lexer it pulls from and the single lookahead
/// token.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    /// Creates a parser over the given lexer, pulling the first token.
    pub fn new(mut lexer: Lexer) -> Result<Parser, Error> {
        let current_token = lexer.get_next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Consumes the current token if its kind matches, returning it and
    /// pulling the next token from the lexer. A mismatch is `InvalidSyntax`,
    /// which aborts the whole parse; there is no recovery or
    /// synchronization.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token.kind != expected_kind {
            return Err(self.invalid_syntax());
        }

        let next_token = self.lexer.get_next_token()?;
        Ok(std::mem::replace(&mut self.current_token, next_token))
    }

    /// Builds an `InvalidSyntax` error for the current token.
    pub fn invalid_syntax(&self) -> Error {
        Error::new(
            ErrorImpl::InvalidSyntax {
                token: self.current_token.to_string(),
            },
            self.get_position(),
        )
    }

    pub fn get_position(&self) -> Position {
        self.lexer.get_position()
    }
}

/// Parses source text into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It builds the lexer, parses the
/// `program` rule and rejects any tokens left over after the closing `.`.
pub fn parse(source: &str, file: Option<String>) -> Result<Stmt, Error> {
    let lexer = Lexer::new(source, file);
    let mut parser = Parser::new(lexer)?;

    let program = parse_program(&mut parser)?;

    if parser.current_token_kind() != TokenKind::Eof {
        return Err(parser.invalid_syntax());
    }

    Ok(program)
}
