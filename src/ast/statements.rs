use super::{expressions::Expr, types::TypeSpec};

/// Statement nodes.
///
/// `VarDecl` keeps its variable as a `Var` expression node and its type as a
/// `TypeSpec` node, mirroring how the declaration is written in source.
/// `AssignOp`'s left side is likewise always a `Var` node by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Program {
        name: String,
        block: Box<Stmt>,
    },
    Block {
        declarations: Vec<Stmt>,
        compound_statement: Box<Stmt>,
    },
    VarDecl {
        var_node: Expr,
        type_node: TypeSpec,
    },
    /// Parsed and stored, but never executed: the language defines no call
    /// syntax.
    ProcedureDecl {
        name: String,
        block: Box<Stmt>,
    },
    Compound {
        children: Vec<Stmt>,
    },
    AssignOp {
        left: Expr,
        right: Expr,
    },
    NoOp,
}
