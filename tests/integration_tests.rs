//! Integration tests for the full pipeline.
//!
//! These tests verify that complete programs run correctly from source text
//! through tokenization, parsing, semantic checking and evaluation.

use pascal_interpreter::{
    errors::errors::ErrorImpl,
    execute,
    interpreter::{interpreter::Interpreter, value::Value},
    parser::parser::parse,
    run,
    semantics::semantics::SemanticAnalyzer,
    translators::translators::{translate_to_lisp, translate_to_postfix},
};
use pretty_assertions::assert_eq;

#[test]
fn test_execute_simple_program() {
    let source = "PROGRAM Test; VAR a, b: INTEGER; BEGIN a := 5; b := a + 1 END.";
    let bindings = execute(source).unwrap();

    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings.get("a"), Some(&Value::Integer(5)));
    assert_eq!(bindings.get("b"), Some(&Value::Integer(6)));
}

#[test]
fn test_semantic_pass_registers_program_symbols() {
    let source = "PROGRAM Test; VAR a, b: INTEGER; BEGIN a := 5; b := a + 1 END.";
    let program = parse(source, None).unwrap();

    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&program).unwrap();

    assert_eq!(
        analyzer.symbol_table().names(),
        &[
            "integer".to_string(),
            "real".to_string(),
            "a".to_string(),
            "b".to_string(),
        ]
    );
}

#[test]
fn test_division_forms() {
    let source = "
        PROGRAM Division;
        VAR d, e, f: REAL;
        BEGIN
            d := 10 DIV 2;
            e := 10 / 2;
            f := 10 / 4
        END.
    ";
    let bindings = execute(source).unwrap();

    assert_eq!(bindings.get("d"), Some(&Value::Integer(5)));
    assert_eq!(bindings.get("e"), Some(&Value::Integer(5)));
    assert_eq!(bindings.get("f"), Some(&Value::Real(2.5)));
}

#[test]
fn test_full_program_with_declarations_and_comments() {
    let source = "
        PROGRAM Part10;
        VAR number     : INTEGER;
            a, b, c, x : INTEGER;
            y          : REAL;

        BEGIN { Part10 }
            BEGIN
                number := 2;
                a := number;
                b := 10 * a + 10 * number DIV 4;
                c := a - - b
            END;
            x := 11;
            y := 20 / 7 + 3.14;
            { writeln statements would go here }
        END. { Part10 }
    ";
    let bindings = execute(source).unwrap();

    assert_eq!(bindings.get("number"), Some(&Value::Integer(2)));
    assert_eq!(bindings.get("a"), Some(&Value::Integer(2)));
    assert_eq!(bindings.get("b"), Some(&Value::Integer(25)));
    assert_eq!(bindings.get("c"), Some(&Value::Integer(27)));
    assert_eq!(bindings.get("x"), Some(&Value::Integer(11)));
    let Some(Value::Real(y)) = bindings.get("y") else {
        panic!("expected y to be real");
    };
    assert!((y - (20.0 / 7.0 + 3.14)).abs() < 1e-12);
}

#[test]
fn test_program_with_procedures() {
    let source = "
        PROGRAM Part12;
        VAR a : INTEGER;

        PROCEDURE P1;
        VAR k : INTEGER;
        BEGIN
            k := 1
        END;

        PROCEDURE P2;
        BEGIN
            a := 999
        END;

        BEGIN
            a := 10
        END.
    ";
    let bindings = execute(source).unwrap();

    // Procedures are declared but never executed; only the main body ran.
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings.get("a"), Some(&Value::Integer(10)));
}

#[test]
fn test_keywords_are_case_insensitive() {
    let source = "program Mixed; var a: integer; Begin A := 3 End.";
    let bindings = execute(source).unwrap();

    assert_eq!(bindings.get("a"), Some(&Value::Integer(3)));
}

#[test]
fn test_undeclared_assignment_fails_before_evaluation() {
    let source = "PROGRAM Test; VAR a: INTEGER; BEGIN a := 5; c := 1 END.";
    let mut interpreter = Interpreter::new();
    let error = run(source, &mut interpreter).unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorImpl::UndeclaredIdentifier { name } if name == "c"
    ));
    // The semantic pass failed, so evaluation never started: even the valid
    // first assignment left no binding behind.
    assert!(interpreter.globals().is_empty());
}

#[test]
fn test_duplicate_declaration_fails() {
    let source = "PROGRAM Test; VAR a: INTEGER; a: REAL; BEGIN END.";
    let error = execute(source).unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorImpl::DuplicateDeclaration { name } if name == "a"
    ));
}

#[test]
fn test_unterminated_comment_fails() {
    let source = "PROGRAM Test; BEGIN END. { never closed";
    let error = execute(source).unwrap_err();

    assert!(matches!(error.kind(), ErrorImpl::UnterminatedComment));
}

#[test]
fn test_invalid_character_fails() {
    let source = "PROGRAM Test; BEGIN a ? 5 END.";
    let error = execute(source).unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorImpl::InvalidCharacter { character: '?' }
    ));
}

#[test]
fn test_syntax_error_aborts_parse() {
    let source = "PROGRAM Test; BEGIN a := END.";
    let error = execute(source).unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidSyntax");
}

#[test]
fn test_division_by_zero_fails_at_evaluation() {
    let source = "PROGRAM Test; VAR a: INTEGER; BEGIN a := 1 DIV 0 END.";
    let error = execute(source).unwrap_err();

    assert!(matches!(error.kind(), ErrorImpl::DivisionByZero));
}

#[test]
fn test_translators_agree_with_evaluation_order() {
    // Both renderings derive from the same precedence-respecting tree shape
    // the evaluator walks.
    assert_eq!(translate_to_postfix("(2 + 3) * 4").unwrap(), "2 3 + 4 *");
    assert_eq!(translate_to_lisp("(2 + 3) * 4").unwrap(), "(* (+ 2 3) 4)");

    let bindings =
        execute("PROGRAM Test; VAR r: INTEGER; BEGIN r := (2 + 3) * 4 END.").unwrap();
    assert_eq!(bindings.get("r"), Some(&Value::Integer(20)));
}
