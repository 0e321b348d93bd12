/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Program` root
/// - expressions: Expression nodes, literals and operators
/// - statements: Statement nodes and blocks
/// - types: Type names used in declarations
/// - printer: Canonical source rendering (`Display`) for every node
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;
