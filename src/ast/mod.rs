/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: expression node kinds and operator tags
/// - statements: statement node kinds
/// - types: type annotation nodes
pub mod expressions;
pub mod statements;
pub mod types;
