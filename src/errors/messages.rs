//! Human-readable message rendering for error kinds.
//!
//! Rendering is a presentation concern: the rest of the crate signals typed
//! `ErrorImpl` values and never branches on message text. The interpreter
//! itself always renders through `DEFAULT_LANG`.

use super::errors::ErrorImpl;

/// Supported message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

/// The language the interpreter requests for its own output.
pub const DEFAULT_LANG: Lang = Lang::En;

/// Renders an error kind into a message string for the given language.
pub fn localize(error: &ErrorImpl, lang: Lang) -> String {
    match lang {
        Lang::En => match error {
            ErrorImpl::InvalidCharacter { character } => {
                format!("invalid character {:?} in input", character)
            }
            ErrorImpl::UnterminatedComment => {
                String::from("comment is missing its closing '}'")
            }
            ErrorImpl::InvalidSyntax { token } => {
                format!("invalid syntax near {}", token)
            }
            ErrorImpl::NumberParseError { token } => {
                format!("number literal {} is out of range", token)
            }
            ErrorImpl::DuplicateDeclaration { name } => {
                format!("identifier '{}' is already declared", name)
            }
            ErrorImpl::UndeclaredIdentifier { name } => {
                format!("identifier '{}' is not declared", name)
            }
            ErrorImpl::DivisionByZero => String::from("division by zero"),
        },
        Lang::Ru => match error {
            ErrorImpl::InvalidCharacter { character } => {
                format!("недопустимый символ {:?} во входных данных", character)
            }
            ErrorImpl::UnterminatedComment => {
                String::from("комментарий не закрыт символом '}'")
            }
            ErrorImpl::InvalidSyntax { token } => {
                format!("синтаксическая ошибка возле {}", token)
            }
            ErrorImpl::NumberParseError { token } => {
                format!("числовой литерал {} вне допустимого диапазона", token)
            }
            ErrorImpl::DuplicateDeclaration { name } => {
                format!("идентификатор '{}' уже объявлен", name)
            }
            ErrorImpl::UndeclaredIdentifier { name } => {
                format!("идентификатор '{}' не объявлен", name)
            }
            ErrorImpl::DivisionByZero => String::from("деление на ноль"),
        },
    }
}
