use serde::Serialize;

use super::ast::LiteralValue;

/// Expression node.
///
/// Member access (`a.b`) and ranges (`0..10`) are binary expressions with
/// `.` and `..` as the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "BinaryExpr")]
    Binary {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    #[serde(rename = "CallExpr")]
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Identifier {
        name: String,
    },
    Literal {
        value: LiteralValue,
    },
}

impl Expr {
    pub fn binary(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn number(value: f64) -> Self {
        Expr::Literal {
            value: LiteralValue::Number(value),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal {
            value: LiteralValue::String(value.into()),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }
}
