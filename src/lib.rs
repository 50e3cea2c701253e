#![allow(clippy::module_inception)]

use std::{collections::HashMap, rc::Rc};

use crate::{
    errors::errors::Error,
    interpreter::{interpreter::Interpreter, value::Value},
    parser::parser::parse,
    semantics::semantics::SemanticAnalyzer,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod semantics;
pub mod translators;

/// A byte offset into an input plus the input's name (`"shell"` for
/// interactive lines).
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Finds the line containing `position` in the given source text. Returns
/// the 1-based line number, the line itself and the offset within it.
/// Positions at or past the end of the source land on the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    (1, source.to_string(), 0)
}

/// Prints an error with a caret marking its position in the source text.
pub fn display_error(error: &Error, source: &str) {
    /*
        Error: InvalidCharacter (invalid character '@' in input)
        -> shell
           |
         1 | a := @;
           | -----^
    */

    let position = error.get_position();

    println!("Error: {} ({})", error.get_error_name(), error);

    if source.is_empty() {
        return;
    }

    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("-> {}", position.1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

/// Runs one full cycle — lex, parse, semantic check, evaluate — against the
/// given interpreter. The semantic pass must complete over the whole tree
/// before evaluation starts; a failed check means nothing is executed.
pub fn run(source: &str, interpreter: &mut Interpreter) -> Result<(), Error> {
    let program = parse(source, None)?;

    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&program)?;

    interpreter.interpret(&program)
}

/// One-shot convenience: runs a program in a fresh interpreter and returns
/// its final variable bindings.
pub fn execute(source: &str) -> Result<HashMap<String, Value>, Error> {
    let mut interpreter = Interpreter::new();
    run(source, &mut interpreter)?;
    Ok(interpreter.into_globals())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "BEGIN\n    a := 5\nEND.\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 2);
        assert_eq!(line_number, 1);
        assert_eq!(line, "BEGIN\n");
        assert_eq!(line_pos, 2);

        let (line_number, line, line_pos) = get_line_at_position(source, 10);
        assert_eq!(line_number, 2);
        assert_eq!(line, "    a := 5\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_execute_returns_bindings() {
        let bindings = execute("PROGRAM Test; VAR a: INTEGER; BEGIN a := 2 + 2 END.").unwrap();
        assert_eq!(bindings.get("a"), Some(&Value::Integer(4)));
    }

    #[test]
    fn test_run_keeps_bindings_between_cycles() {
        let mut interpreter = Interpreter::new();
        run(
            "PROGRAM First; VAR a: INTEGER; BEGIN a := 1 END.",
            &mut interpreter,
        )
        .unwrap();
        run(
            "PROGRAM Second; VAR a, b: INTEGER; BEGIN b := a + 1 END.",
            &mut interpreter,
        )
        .unwrap();

        assert_eq!(interpreter.globals().get("b"), Some(&Value::Integer(2)));
    }
}
