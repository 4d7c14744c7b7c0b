//! Error types and error handling for the front end.
//!
//! Both failure modes of the pipeline are fatal and share one positioned
//! error type:
//!
//! - indentation errors raised by the lexer
//! - parse errors raised by the token cursor and expression parser
//!
//! Each error carries a `line:column` position and a short suggestion that
//! the driver renders under the offending source line.

pub mod errors;
