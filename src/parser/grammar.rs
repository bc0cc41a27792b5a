//! Whole-line grammar of sjava.
//!
//! Every statement occupies exactly one line, so each statement kind is
//! described by a single pattern that must match the entire line. The
//! patterns are assembled from the named fragments below.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{ast::types::VarType, MK_PATTERN};

const WORD: &str = "[A-Za-z0-9_]";

/// `x`, `x1`, `_x`; a lone `_` is not a name.
pub fn name() -> String {
    format!("(?:[A-Za-z]|_{w}){w}*", w = WORD)
}

/// Method names must start with a letter.
pub fn function_name() -> String {
    format!("[A-Za-z]{}*", WORD)
}

pub fn type_keyword() -> String {
    let keywords: Vec<&str> = VarType::ALL.iter().map(|ty| ty.keyword()).collect();
    format!("(?:{})", keywords.join("|"))
}

pub const INT_LITERAL: &str = r"[+-]?[0-9]+";
pub const DOUBLE_LITERAL: &str = r"[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)";
pub const BOOLEAN_WORD: &str = "(?:true|false)";
pub const CHAR_LITERAL: &str = "'[^']'";
pub const STRING_LITERAL: &str = "\"[^\"]*\"";

/// The literal forms a declarator of type `ty` may be initialized with.
pub fn literal_of(ty: VarType) -> String {
    match ty {
        VarType::Int => INT_LITERAL.to_string(),
        VarType::Double => DOUBLE_LITERAL.to_string(),
        VarType::Boolean => boolean_literal(),
        VarType::Char => CHAR_LITERAL.to_string(),
        VarType::String => STRING_LITERAL.to_string(),
    }
}

/// `true`, `false` or any number.
pub fn boolean_literal() -> String {
    format!("(?:{}|{})", BOOLEAN_WORD, DOUBLE_LITERAL)
}

/// Right-hand side of assignments and method-call arguments.
pub fn value() -> String {
    format!(
        "(?:{}|{}|{}|{})",
        boolean_literal(),
        STRING_LITERAL,
        CHAR_LITERAL,
        name()
    )
}

pub fn condition_term() -> String {
    format!("(?:{}|{})", boolean_literal(), name())
}

pub fn parameter() -> String {
    format!(r"(?:final\s+)?{}\s+{}", type_keyword(), name())
}

fn declarator(ty: VarType) -> String {
    format!(
        r"{name}\s*(?:=\s*(?:{name}|{literal})\s*)?",
        name = name(),
        literal = literal_of(ty)
    )
}

fn variable_declaration(ty: VarType) -> String {
    format!(
        r"\s*(?:final\s+)?{ty}\s+{decl}(?:,\s*{decl})*;\s*",
        ty = ty.keyword(),
        decl = declarator(ty)
    )
}

lazy_static! {
    pub static ref METHOD_DECLARATION: Regex = MK_PATTERN!(
        r"\s*void\s+{name}\s*\(\s*(?:{param}(?:\s*,\s*{param})*)?\s*\)\s*\{{\s*",
        name = function_name(),
        param = parameter()
    );
    pub static ref METHOD_DECLARATION_START: Regex = Regex::new(r"^\s*void\b").unwrap();

    pub static ref VARIABLE_DECLARATIONS: Vec<Regex> = VarType::ALL
        .iter()
        .map(|ty| MK_PATTERN!("{}", variable_declaration(*ty)))
        .collect();
    pub static ref VARIABLE_DECLARATION_START: Regex =
        Regex::new(&format!(r"^\s*(?:final\s+)?{}\b", type_keyword())).unwrap();

    pub static ref IF_OR_WHILE: Regex = MK_PATTERN!(
        r"\s*(?:if|while)\s*\(\s*{term}(?:\s*(?:\|\||&&)\s*{term})*\s*\)\s*\{{\s*",
        term = condition_term()
    );

    pub static ref FUNCTION_CALL: Regex = MK_PATTERN!(
        r"\s*{name}\s*\(\s*(?:{value}(?:\s*,\s*{value})*)?\s*\)\s*;\s*",
        name = function_name(),
        value = value()
    );

    pub static ref ASSIGNMENT: Regex = MK_PATTERN!(
        r"\s*{name}\s*=\s*{value}(?:\s*,\s*{name}\s*=\s*{value})*\s*;\s*",
        name = name(),
        value = value()
    );

    pub static ref RETURN: Regex = MK_PATTERN!(r"\s*return\s*;\s*");

    pub static ref INT_TOKEN: Regex = MK_PATTERN!("{}", INT_LITERAL);
    pub static ref DOUBLE_TOKEN: Regex = MK_PATTERN!("{}", DOUBLE_LITERAL);
    pub static ref BOOLEAN_TOKEN: Regex = MK_PATTERN!("{}", BOOLEAN_WORD);
    pub static ref STRING_TOKEN: Regex = MK_PATTERN!("{}", STRING_LITERAL);
    pub static ref CHAR_TOKEN: Regex = MK_PATTERN!("{}", CHAR_LITERAL);
}
