use thiserror::Error;

use crate::errors::messages::{localize, DEFAULT_LANG};
use crate::Position;

/// An interpreter failure: the kind of fault plus where in the input it was
/// raised. Every failure is fatal to the cycle that raised it.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::InvalidSyntax { .. } => "InvalidSyntax",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredIdentifier { .. } => "UndeclaredIdentifier",
            ErrorImpl::DivisionByZero => "DivisionByZero",
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", localize(&self.internal_error, DEFAULT_LANG))
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("invalid syntax: unexpected {token}")]
    InvalidSyntax { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("identifier {name:?} already declared")]
    DuplicateDeclaration { name: String },
    #[error("identifier {name:?} not declared")]
    UndeclaredIdentifier { name: String },
    #[error("division by zero")]
    DivisionByZero,
}
