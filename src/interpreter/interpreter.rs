//! The tree-walking evaluator.
//!
//! A second, independent walk over the same immutable tree the semantic
//! pass validated. Name validity is re-derived here against the runtime
//! store rather than shared from the semantic pass; both layers report a
//! miss through the same `UndeclaredIdentifier` kind.

use std::collections::HashMap;

use crate::{
    ast::{
        expressions::{BinaryOp, Expr, UnaryOp},
        statements::Stmt,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::value::Value;

/// The evaluator and its flat runtime variable store.
///
/// The store is created when the session owner constructs the interpreter
/// and lives until the interpreter is dropped; within one session it
/// persists across evaluation cycles, so variables set by an earlier input
/// stay visible to later ones. Declared types are never consulted here.
pub struct Interpreter {
    globals: HashMap<String, Value>,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter {
            globals: HashMap::new(),
        }
    }

    /// The current variable bindings.
    pub fn globals(&self) -> &HashMap<String, Value> {
        &self.globals
    }

    pub fn into_globals(self) -> HashMap<String, Value> {
        self.globals
    }

    /// Typed lookup into the runtime store, the evaluator's counterpart of
    /// `SymbolTable::resolve`. A miss can only happen when the semantic
    /// pass was skipped, since the grammar puts every declaration before
    /// every use under the flat scoping rule.
    fn resolve(&self, name: &str) -> Result<Value, Error> {
        match self.globals.get(name) {
            Some(value) => Ok(*value),
            None => Err(Error::new(
                ErrorImpl::UndeclaredIdentifier {
                    name: String::from(name),
                },
                Position::null(),
            )),
        }
    }

    /// Executes a statement node.
    pub fn interpret(&mut self, node: &Stmt) -> Result<(), Error> {
        match node {
            Stmt::Program { block, .. } => self.interpret(block),
            Stmt::Block {
                declarations,
                compound_statement,
            } => {
                for declaration in declarations {
                    self.interpret(declaration)?;
                }
                self.interpret(compound_statement)
            }
            // Declared types are advisory metadata; nothing to execute.
            Stmt::VarDecl { .. } => Ok(()),
            // Declared procedures never run: the language defines no call
            // syntax.
            Stmt::ProcedureDecl { .. } => Ok(()),
            Stmt::Compound { children } => {
                for child in children {
                    self.interpret(child)?;
                }
                Ok(())
            }
            Stmt::AssignOp { left, right } => {
                let value = self.evaluate(right)?;
                if let Expr::Var { name } = left {
                    self.globals.insert(name.clone(), value);
                }
                Ok(())
            }
            Stmt::NoOp => Ok(()),
        }
    }

    /// Evaluates an expression node to a value.
    pub fn evaluate(&mut self, node: &Expr) -> Result<Value, Error> {
        match node {
            Expr::BinOp { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;

                match op {
                    BinaryOp::Add => Ok(left.add(right)),
                    BinaryOp::Subtract => Ok(left.subtract(right)),
                    BinaryOp::Multiply => Ok(left.multiply(right)),
                    BinaryOp::Divide => {
                        if right.is_zero() {
                            return Err(self.division_by_zero());
                        }
                        Ok(left.divide(right))
                    }
                    BinaryOp::IntegerDivide => {
                        if right.is_zero() {
                            return Err(self.division_by_zero());
                        }
                        Ok(left.integer_divide(right))
                    }
                }
            }
            Expr::UnOp { op, operand } => {
                let value = self.evaluate(operand)?;
                match op {
                    UnaryOp::Plus => Ok(value),
                    UnaryOp::Minus => Ok(value.negate()),
                }
            }
            Expr::Num { value } => Ok(*value),
            Expr::Var { name } => self.resolve(name),
        }
    }

    fn division_by_zero(&self) -> Error {
        Error::new(ErrorImpl::DivisionByZero, Position::null())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
