#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::source::SourceFile,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbol_table;
pub mod validator;

extern crate regex;

pub use validator::validator::validate;

/// A 1-based line number in a named source file. Line 0 means "no line".
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0 && self.1.as_str() == "<null>"
    }
}

pub fn format_error(error: &Error, source: &SourceFile) -> String {
    /*
        Error: name (tip)
        -> file.sjava:20
           |
        20 | int a = b;
           | ^^^^^^^^^^
           = message
    */

    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };

    let position = error.get_position();
    let line = if position.is_null() {
        None
    } else {
        source.line(position.0)
    };

    let Some(line) = line else {
        out.push_str(&format!("-> {}\n", position.1));
        out.push_str(&format!("   = {}\n", error));
        return out;
    };

    let line_string = line.number.to_string();
    let padding = line_string.len() + 2;
    let text = line.text.trim();

    out.push_str(&format!("-> {}:{}\n", source.file(), line.number));
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, text));
    out.push_str(&format!(
        "{:>padding$} {}\n",
        "|",
        "^".repeat(text.chars().count().max(1))
    ));
    out.push_str(&format!("{:>padding$} {}\n", "=", error));
    out
}

pub fn display_error(error: &Error, source: &SourceFile) {
    eprint!("{}", format_error(error, source));
}
