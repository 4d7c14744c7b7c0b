use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal front-end error tagged with the source position it occurred at.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} @{position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IndentationMismatch { .. } => "IndentationMismatch",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IndentationMismatch { width } => ErrorTip::Suggestion(format!(
                "no enclosing block is indented by {} columns",
                width
            )),
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected {} but got {}",
                expected, found
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedExpression { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("indentation error: width {width} matches no enclosing level")]
    IndentationMismatch { width: usize },
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("parse error: expected {expected} but got {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("parse error: {message} (got {token})")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("parse error: unexpected token {token}")]
    ExpectedExpression { token: String },
}
