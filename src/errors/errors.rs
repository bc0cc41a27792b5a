use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::VarType, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Coarse classification of an [`Error`], used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Structure,
    Logical,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn structure(error: StructureError) -> Self {
        Error::new(ErrorImpl::Structure(error), Position::null())
    }

    pub fn logical(error: LogicalError, position: Position) -> Self {
        Error::new(ErrorImpl::Logical(error), position)
    }

    /// Re-anchors an error raised away from any line (e.g. by the classifier).
    pub fn at(mut self, position: Position) -> Self {
        if self.position.is_null() {
            self.position = position;
        }
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::Io { .. } => ErrorKind::Io,
            ErrorImpl::Structure(_) => ErrorKind::Structure,
            ErrorImpl::Logical(_) => ErrorKind::Logical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Io => 2,
            ErrorKind::Structure | ErrorKind::Logical => 1,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Io { .. } => "IoError",
            ErrorImpl::Structure(error) => match error {
                StructureError::InvalidLine => "InvalidLine",
                StructureError::InvalidGlobalVariableDeclaration => {
                    "InvalidGlobalVariableDeclaration"
                }
                StructureError::InvalidGlobalFunctionDeclaration => {
                    "InvalidGlobalFunctionDeclaration"
                }
            },
            ErrorImpl::Logical(error) => match error {
                LogicalError::InvalidGlobalLine => "InvalidGlobalLine",
                LogicalError::UndeclaredAssignmentTarget { .. } => "UndeclaredAssignmentTarget",
                LogicalError::FinalAssignmentTarget { .. } => "FinalAssignmentTarget",
                LogicalError::NonMatchingConstant { .. } => "NonMatchingConstant",
                LogicalError::UninitializedSource { .. } => "UninitializedSource",
                LogicalError::NonMatchingVariable { .. } => "NonMatchingVariable",
                LogicalError::FinalWithoutValue { .. } => "FinalWithoutValue",
                LogicalError::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
                LogicalError::DuplicateParameter { .. } => "DuplicateParameter",
                LogicalError::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
                LogicalError::ScopeMismatch => "ScopeMismatch",
                LogicalError::NestedFunction => "NestedFunction",
                LogicalError::IllegalLineInScope => "IllegalLineInScope",
                LogicalError::MissingReturn => "MissingReturn",
                LogicalError::UnknownFunction { .. } => "UnknownFunction",
                LogicalError::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
                LogicalError::UninitializedArgument { .. } => "UninitializedArgument",
                LogicalError::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
                LogicalError::UninitializedConditionVariable { .. } => {
                    "UninitializedConditionVariable"
                }
                LogicalError::NonBooleanConditionVariable { .. } => "NonBooleanConditionVariable",
                LogicalError::NonBooleanConditionConstant { .. } => "NonBooleanConditionConstant",
            },
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Structure(StructureError::InvalidGlobalVariableDeclaration) => {
                ErrorTip::Suggestion(String::from(
                    "initializers must be a variable or a literal of the declared type",
                ))
            }
            ErrorImpl::Structure(StructureError::InvalidGlobalFunctionDeclaration) => {
                ErrorTip::Suggestion(String::from(
                    "expected `void name(type param, ...) {` on a single line",
                ))
            }
            ErrorImpl::Logical(LogicalError::FinalWithoutValue { name }) => {
                ErrorTip::Suggestion(format!("give `{}` a value where it is declared", name))
            }
            ErrorImpl::Logical(LogicalError::ScopeMismatch) => {
                ErrorTip::Suggestion(String::from("is a closing `}` missing?"))
            }
            ErrorImpl::Logical(LogicalError::MissingReturn) => ErrorTip::Suggestion(
                String::from("a method body must end with `return;` followed by `}`"),
            ),
            ErrorImpl::Logical(LogicalError::UninitializedSource { name })
            | ErrorImpl::Logical(LogicalError::UninitializedArgument { name })
            | ErrorImpl::Logical(LogicalError::UninitializedConditionVariable { name }) => {
                ErrorTip::Suggestion(format!(
                    "assignments inside `if`/`while` blocks do not initialize `{}` outside them",
                    name
                ))
            }
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

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
    #[error("cannot read {path:?}: {message}")]
    Io { path: String, message: String },
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Logical(#[from] LogicalError),
}

/// The line matches none of the statement grammars.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("there was no match to a valid line")]
    InvalidLine,
    #[error("invalid global variable declaration")]
    InvalidGlobalVariableDeclaration,
    #[error("invalid global function declaration")]
    InvalidGlobalFunctionDeclaration,
}

/// The line is grammatical but breaks a scoping, typing or flow rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicalError {
    #[error("invalid line in the global scope")]
    InvalidGlobalLine,
    #[error("trying to assign a value to undeclared variable {name:?}")]
    UndeclaredAssignmentTarget { name: String },
    #[error("trying to assign a value to final variable {name:?}")]
    FinalAssignmentTarget { name: String },
    #[error("trying to assign {value} from a constant that does not match {expected}")]
    NonMatchingConstant { value: String, expected: VarType },
    #[error("trying to assign a value from uninitialized variable {name:?}")]
    UninitializedSource { name: String },
    #[error("trying to assign {found} variable {name:?} where {expected} is expected")]
    NonMatchingVariable {
        name: String,
        expected: VarType,
        found: VarType,
    },
    #[error("declaring final variable {name:?} without assigning a value")]
    FinalWithoutValue { name: String },
    #[error("variable {name:?} already declared in this scope")]
    VariableAlreadyDeclared { name: String },
    #[error("two parameters named {name:?} in the same method")]
    DuplicateParameter { name: String },
    #[error("two methods named {name:?}")]
    FunctionAlreadyDeclared { name: String },
    #[error("non matching number of scopes opened and closed")]
    ScopeMismatch,
    #[error("method declaration inside a method body")]
    NestedFunction,
    #[error("illegal line inside scope")]
    IllegalLineInScope,
    #[error("method body does not end with `return;`")]
    MissingReturn,
    #[error("trying to call unknown method {name:?}")]
    UnknownFunction { name: String },
    #[error("method {name:?} expects {expected} arguments, received {received}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("argument {name:?} supplied to method is not initialized")]
    UninitializedArgument { name: String },
    #[error("argument {argument} cannot be passed where {expected} is expected")]
    ArgumentTypeMismatch { argument: String, expected: VarType },
    #[error("variable {name:?} in boolean expression is not initialized")]
    UninitializedConditionVariable { name: String },
    #[error("{found} variable {name:?} in boolean expression cannot be used as boolean")]
    NonBooleanConditionVariable { name: String, found: VarType },
    #[error("constant {value} in boolean expression cannot be used as boolean")]
    NonBooleanConditionConstant { value: String },
}
