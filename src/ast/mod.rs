/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the `Program` root, the closed `Stmt` / `Expr` enums and node tags
/// - expressions: expression payloads, operators and expression constructors
/// - statements: statement payloads and statement constructors
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
