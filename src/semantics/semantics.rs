//! The symbol-table-building pass.
//!
//! Walks the AST once before evaluation, validating declarations and name
//! references. The whole tree must pass this check before the interpreter
//! runs; a failure here means evaluation never starts.

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
};

use super::symbol_table::{Symbol, SymbolTable};

#[derive(Debug)]
pub struct SemanticAnalyzer {
    symtab: SymbolTable,
}

impl SemanticAnalyzer {
    pub fn new() -> SemanticAnalyzer {
        SemanticAnalyzer {
            symtab: SymbolTable::new(),
        }
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symtab
    }

    pub fn analyze(&mut self, program: &Stmt) -> Result<(), Error> {
        self.visit_stmt(program)
    }

    fn visit_stmt(&mut self, node: &Stmt) -> Result<(), Error> {
        match node {
            Stmt::Program { block, .. } => self.visit_stmt(block),
            Stmt::Block {
                declarations,
                compound_statement,
            } => {
                for declaration in declarations {
                    self.visit_stmt(declaration)?;
                }
                self.visit_stmt(compound_statement)
            }
            Stmt::VarDecl {
                var_node,
                type_node,
            } => {
                // The declared type must already exist as a built-in.
                let var_type = self.symtab.resolve(&type_node.name)?.clone();

                if let Expr::Var { name } = var_node {
                    self.symtab.define(Symbol::Variable {
                        name: name.clone(),
                        var_type: Box::new(var_type),
                    })?;
                }
                Ok(())
            }
            // The nested block is deliberately not entered: declarations
            // live in one flat scope and procedure bodies never execute.
            Stmt::ProcedureDecl { .. } => Ok(()),
            Stmt::Compound { children } => {
                for child in children {
                    self.visit_stmt(child)?;
                }
                Ok(())
            }
            Stmt::AssignOp { left, right } => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            }
            Stmt::NoOp => Ok(()),
        }
    }

    fn visit_expr(&mut self, node: &Expr) -> Result<(), Error> {
        match node {
            Expr::BinOp { left, right, .. } => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            }
            Expr::UnOp { operand, .. } => self.visit_expr(operand),
            Expr::Num { .. } => Ok(()),
            Expr::Var { name } => self.symtab.resolve(name).map(|_| ()),
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        SemanticAnalyzer::new()
    }
}
