//! Type system definitions for sjava.
//!
//! The language knows exactly five primitive types and no user-defined ones.
//! Values of a narrower type may widen into a wider slot:
//!
//! - `int` widens to `double` and `boolean`
//! - `double` widens to `boolean`
//!
//! `char` and `String` never convert.

use std::{fmt::Display, str::FromStr};

use crate::errors::errors::{Error, StructureError};

/// A primitive sjava type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Double,
    Boolean,
    Char,
    String,
}

impl VarType {
    pub const ALL: [VarType; 5] = [
        VarType::Int,
        VarType::Double,
        VarType::Boolean,
        VarType::Char,
        VarType::String,
    ];

    /// The keyword spelling used in source code.
    pub fn keyword(&self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Double => "double",
            VarType::Boolean => "boolean",
            VarType::Char => "char",
            VarType::String => "String",
        }
    }

    /// Whether a value of type `self` may be stored in a slot of type `target`.
    pub fn is_assignable_to(&self, target: VarType) -> bool {
        matches!(
            (self, target),
            (VarType::Int, VarType::Double)
                | (VarType::Int, VarType::Boolean)
                | (VarType::Double, VarType::Boolean)
        ) || *self == target
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for VarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VarType::ALL
            .into_iter()
            .find(|ty| ty.keyword() == s)
            .ok_or_else(|| Error::structure(StructureError::InvalidLine))
    }
}
