//! Utility macros for the validator.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for a fixed token
//! - `MK_MATCH_HANDLER!` - Creates a lexer handler that keeps the matched text
//! - `MK_PATTERN!` - Compiles an anchored whole-line grammar pattern
//!
//! These macros reduce boilerplate in the lexer and grammar tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a lexer handler for single, fixed-text tokens.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _regex: &::regex::Regex| {
            lexer.push($crate::MK_TOKEN!($kind, String::from($value)));
            lexer.advance_n($value.len());
        }
    };
}

/// Creates a lexer handler that pushes whatever the pattern matched.
#[macro_export]
macro_rules! MK_MATCH_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, regex: &::regex::Regex| {
            let matched = regex
                .find(lexer.remainder())
                .map(|m| m.as_str().to_string());

            if let Some(value) = matched {
                let length = value.len();
                lexer.push($crate::MK_TOKEN!($kind, value));
                lexer.advance_n(length);
            }
        }
    };
}

/// Compiles a grammar fragment into a pattern that must match a whole line.
///
/// Accepts the same arguments as `format!`. Only used on static grammar
/// text, so a failed compilation is a bug in the grammar itself.
///
/// # Example
///
/// ```ignore
/// let ret = MK_PATTERN!(r"\s*return\s*;\s*");
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($($arg:tt)*) => {
        ::regex::Regex::new(&format!("^(?:{})$", format!($($arg)*))).unwrap()
    };
}
