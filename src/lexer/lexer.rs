use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

/// Character-level scanner. Tokens are produced one at a time through
/// `get_next_token`, pulled on demand by the parser; nothing is buffered
/// ahead except the current character.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let chars: Vec<char> = source.chars().collect();
        let current_char = chars.first().copied();

        Lexer {
            chars,
            pos: 0,
            current_char,
            file: file_name,
        }
    }

    /// Consumes one character.
    pub fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.chars.get(self.pos).copied();
    }

    /// One character of lookahead, without consuming anything.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char, Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Skips a `{...}` block comment. The opening brace is the current
    /// character on entry.
    fn skip_comment(&mut self) -> Result<(), Error> {
        self.advance();
        loop {
            match self.current_char {
                Some('}') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => self.advance(),
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnterminatedComment,
                        self.get_position(),
                    ))
                }
            }
        }
    }

    /// Scans an unsigned numeric literal: digits, optionally followed by a
    /// `.` and more digits. No exponent form; any sign is a parser-level
    /// unary operator.
    fn number(&mut self) -> Result<Token, Error> {
        let mut digits = String::new();

        while let Some(c) = self.current_char.filter(|c| c.is_ascii_digit()) {
            digits.push(c);
            self.advance();
        }

        if self.current_char == Some('.') && matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            digits.push('.');
            self.advance();
            while let Some(c) = self.current_char.filter(|c| c.is_ascii_digit()) {
                digits.push(c);
                self.advance();
            }

            let value = digits.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: digits.clone(),
                    },
                    self.get_position(),
                )
            })?;
            Ok(Token::new(TokenKind::RealConst, TokenValue::Real(value)))
        } else {
            let value = digits.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: digits.clone(),
                    },
                    self.get_position(),
                )
            })?;
            Ok(Token::new(
                TokenKind::IntegerConst,
                TokenValue::Integer(value),
            ))
        }
    }

    /// Scans an identifier or keyword: alphanumeric/underscore characters,
    /// lower-cased, then checked against the reserved-keyword table.
    fn id(&mut self) -> Token {
        let mut result = String::new();

        while let Some(c) = self.current_char.filter(|&c| c.is_alphanumeric() || c == '_') {
            result.push(c);
            self.advance();
        }

        let result = result.to_lowercase();
        match RESERVED_LOOKUP.get(result.as_str()) {
            Some(kind) => Token::new(*kind, TokenValue::Text(result)),
            None => Token::new(TokenKind::Id, TokenValue::Text(result)),
        }
    }

    /// Returns the next token, skipping whitespace and block comments.
    pub fn get_next_token(&mut self) -> Result<Token, Error> {
        while let Some(current_char) = self.current_char {
            if current_char.is_whitespace() {
                self.skip_whitespace();
                continue;
            }

            if current_char == '{' {
                self.skip_comment()?;
                continue;
            }

            if current_char.is_ascii_digit() {
                return self.number();
            }

            if current_char.is_alphabetic() || current_char == '_' {
                return Ok(self.id());
            }

            if current_char == ':' && self.peek() == Some('=') {
                self.advance();
                self.advance();
                return Ok(Token::new(TokenKind::Assign, TokenValue::None));
            }

            let kind = match current_char {
                '+' => Some(TokenKind::Plus),
                '-' => Some(TokenKind::Minus),
                '*' => Some(TokenKind::Mul),
                '/' => Some(TokenKind::Slash),
                '(' => Some(TokenKind::OpenParen),
                ')' => Some(TokenKind::CloseParen),
                ';' => Some(TokenKind::Semicolon),
                ':' => Some(TokenKind::Colon),
                ',' => Some(TokenKind::Comma),
                '.' => Some(TokenKind::Dot),
                _ => None,
            };

            if let Some(kind) = kind {
                self.advance();
                return Ok(Token::new(kind, TokenValue::None));
            }

            return Err(Error::new(
                ErrorImpl::InvalidCharacter {
                    character: current_char,
                },
                self.get_position(),
            ));
        }

        Ok(Token::new(TokenKind::Eof, TokenValue::None))
    }
}
