use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// A declared name. Variables hold the built-in type symbol they were
/// declared with; the type is advisory metadata and is never enforced at
/// evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    BuiltinType { name: String },
    Variable { name: String, var_type: Box<Symbol> },
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::BuiltinType { name } => name,
            Symbol::Variable { name, .. } => name,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::BuiltinType { name } => write!(f, "{}", name),
            Symbol::Variable { name, var_type } => write!(f, "<{}:{}>", name, var_type),
        }
    }
}

/// Insertion-ordered mapping from lower-cased name to symbol.
///
/// The two built-in type symbols are seeded at construction, before any user
/// declaration is processed, and the duplicate check in `define` keeps them
/// from ever being removed or shadowed.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
    insertion_order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        let mut table = SymbolTable {
            symbols: HashMap::new(),
            insertion_order: Vec::new(),
        };

        for name in ["integer", "real"] {
            table.insert(Symbol::BuiltinType {
                name: String::from(name),
            });
        }

        table
    }

    fn normalize(name: &str) -> String {
        name.to_lowercase()
    }

    fn insert(&mut self, symbol: Symbol) {
        let key = Self::normalize(symbol.name());
        self.insertion_order.push(key.clone());
        self.symbols.insert(key, symbol);
    }

    /// Inserts a new symbol, signalling `DuplicateDeclaration` if the name
    /// is already present.
    pub fn define(&mut self, symbol: Symbol) -> Result<(), Error> {
        let key = Self::normalize(symbol.name());
        if self.symbols.contains_key(&key) {
            return Err(Error::new(
                ErrorImpl::DuplicateDeclaration { name: key },
                Position::null(),
            ));
        }

        self.insert(symbol);
        Ok(())
    }

    /// Typed lookup: resolves a name or signals `UndeclaredIdentifier`. The
    /// runtime variable store exposes the same operation shape, so both
    /// validity layers report misses identically.
    pub fn resolve(&self, name: &str) -> Result<&Symbol, Error> {
        let key = Self::normalize(name);
        match self.symbols.get(&key) {
            Some(symbol) => Ok(symbol),
            None => Err(Error::new(
                ErrorImpl::UndeclaredIdentifier { name: key },
                Position::null(),
            )),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(&Self::normalize(name))
    }

    /// Declared names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.insertion_order
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
