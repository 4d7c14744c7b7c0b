/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and literal values
/// - expressions: The closed set of expression nodes
/// - statements: The closed set of statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
