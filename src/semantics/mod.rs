//! Semantic analysis module.
//!
//! This module validates the AST before evaluation. It provides:
//!
//! - The symbol table: an insertion-ordered registry of declared names,
//!   pre-seeded with the built-in `integer` and `real` type symbols
//! - The semantic pass that builds the table from declarations and checks
//!   every name reference against it
//!
//! Declarations live in a single flat scope; procedure bodies are not
//! entered.

pub mod semantics;
pub mod symbol_table;
