use serde::Serialize;

use super::expressions::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    Var,
    Let,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElifBranch {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// Statement node. Blocks are plain statement lists owned by their construct.
///
/// Fields serialize in camelCase (`thenBranch`, `returnType`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Stmt {
    VarDecl {
        kind: VarKind,
        name: String,
        value: Option<Expr>,
    },
    /// The target is always an `Expr::Identifier`.
    Assign {
        target: Expr,
        value: Expr,
    },
    ExprStatement {
        expression: Expr,
    },
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        elif_branches: Vec<ElifBranch>,
        else_branch: Option<Vec<Stmt>>,
    },
    Return {
        value: Option<Expr>,
    },
    ProcDecl {
        name: String,
        params: Vec<Param>,
        return_type: Option<String>,
        body: Vec<Stmt>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    For {
        iterator: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    Import {
        module: String,
    },
    Discard {
        expression: Option<Expr>,
    },
}
