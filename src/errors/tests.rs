//! Unit tests for error types and message rendering.

use super::{
    errors::{Error, ErrorImpl},
    messages::{localize, Lang},
};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '@' },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnterminatedComment,
        Position(42, std::rc::Rc::new("test.pas".to_string())),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.pas");
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::InvalidCharacter { character: '@' },
            "InvalidCharacter",
        ),
        (ErrorImpl::UnterminatedComment, "UnterminatedComment"),
        (
            ErrorImpl::InvalidSyntax {
                token: "Token(Dot)".to_string(),
            },
            "InvalidSyntax",
        ),
        (
            ErrorImpl::NumberParseError {
                token: "99999999999999999999".to_string(),
            },
            "NumberParseError",
        ),
        (
            ErrorImpl::DuplicateDeclaration {
                name: "a".to_string(),
            },
            "DuplicateDeclaration",
        ),
        (
            ErrorImpl::UndeclaredIdentifier {
                name: "a".to_string(),
            },
            "UndeclaredIdentifier",
        ),
        (ErrorImpl::DivisionByZero, "DivisionByZero"),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, Position::null()).get_error_name(), name);
    }
}

#[test]
fn test_localize_english() {
    let message = localize(
        &ErrorImpl::UndeclaredIdentifier {
            name: "ghost".to_string(),
        },
        Lang::En,
    );

    assert_eq!(message, "identifier 'ghost' is not declared");
}

#[test]
fn test_localize_russian() {
    let message = localize(
        &ErrorImpl::UndeclaredIdentifier {
            name: "ghost".to_string(),
        },
        Lang::Ru,
    );

    assert_eq!(message, "идентификатор 'ghost' не объявлен");
}

#[test]
fn test_localize_covers_every_kind() {
    let kinds = [
        ErrorImpl::InvalidCharacter { character: '@' },
        ErrorImpl::UnterminatedComment,
        ErrorImpl::InvalidSyntax {
            token: "Token(Dot)".to_string(),
        },
        ErrorImpl::NumberParseError {
            token: "1".to_string(),
        },
        ErrorImpl::DuplicateDeclaration {
            name: "a".to_string(),
        },
        ErrorImpl::UndeclaredIdentifier {
            name: "a".to_string(),
        },
        ErrorImpl::DivisionByZero,
    ];

    for kind in &kinds {
        assert!(!localize(kind, Lang::En).is_empty());
        assert!(!localize(kind, Lang::Ru).is_empty());
    }
}

#[test]
fn test_error_display_uses_default_language() {
    let error = Error::new(ErrorImpl::DivisionByZero, Position::null());

    assert_eq!(error.to_string(), "division by zero");
}
