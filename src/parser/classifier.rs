use tracing::trace;

use crate::{
    ast::{statements::StatementKind, types::VarType},
    errors::errors::{Error, StructureError},
};

use super::grammar::{
    ASSIGNMENT, BOOLEAN_TOKEN, CHAR_TOKEN, DOUBLE_TOKEN, FUNCTION_CALL, IF_OR_WHILE, INT_TOKEN,
    METHOD_DECLARATION, METHOD_DECLARATION_START, RETURN, STRING_TOKEN, VARIABLE_DECLARATIONS,
    VARIABLE_DECLARATION_START,
};

/// Decides which statement a raw source line is.
///
/// The grammars are tried in a fixed order. A line that starts like a method
/// or variable declaration but does not match the full grammar is reported
/// with a dedicated error instead of falling through to the later grammars.
///
/// # Errors
///
/// Returns a structure error when the line matches no grammar. The error is
/// not yet tied to a line; callers anchor it with [`Error::at`].
pub fn classify(line: &str) -> Result<StatementKind, Error> {
    let kind = if METHOD_DECLARATION.is_match(line) {
        StatementKind::MethodDeclaration
    } else if METHOD_DECLARATION_START.is_match(line) {
        return Err(Error::structure(
            StructureError::InvalidGlobalFunctionDeclaration,
        ));
    } else if VARIABLE_DECLARATIONS.iter().any(|regex| regex.is_match(line)) {
        StatementKind::VariableDeclaration
    } else if VARIABLE_DECLARATION_START.is_match(line) {
        return Err(Error::structure(
            StructureError::InvalidGlobalVariableDeclaration,
        ));
    } else if IF_OR_WHILE.is_match(line) {
        StatementKind::IfOrWhile
    } else if FUNCTION_CALL.is_match(line) {
        StatementKind::FunctionCall
    } else if ASSIGNMENT.is_match(line) {
        StatementKind::Assignment
    } else if RETURN.is_match(line) {
        StatementKind::Return
    } else {
        return Err(Error::structure(StructureError::InvalidLine));
    };

    trace!(%kind, line, "classified");
    Ok(kind)
}

/// Infers the type of a literal from its spelling.
///
/// Returns `None` when the token is not a literal, i.e. it names a variable.
pub fn literal_type(token: &str) -> Option<VarType> {
    if INT_TOKEN.is_match(token) {
        Some(VarType::Int)
    } else if DOUBLE_TOKEN.is_match(token) {
        Some(VarType::Double)
    } else if BOOLEAN_TOKEN.is_match(token) {
        Some(VarType::Boolean)
    } else if STRING_TOKEN.is_match(token) {
        Some(VarType::String)
    } else if CHAR_TOKEN.is_match(token) {
        Some(VarType::Char)
    } else {
        None
    }
}

/// Whether a value of type `source` may be stored in a slot of type `target`.
pub fn match_types(source: VarType, target: VarType) -> bool {
    source.is_assignable_to(target)
}

/// [`match_types`] for a literal token; a non-literal never matches.
pub fn literal_matches(token: &str, target: VarType) -> bool {
    literal_type(token).is_some_and(|ty| match_types(ty, target))
}
