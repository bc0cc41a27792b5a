/// AST module
/// Contains the few syntactic notions the line-oriented validator needs
///
/// Submodules:
/// - statements: The statement kinds a line is classified into
/// - types: The primitive types and their widening rules
pub mod statements;
pub mod types;
