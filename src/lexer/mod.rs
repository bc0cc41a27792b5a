//! Lexical analysis module for the validator.
//!
//! This module turns source text into tokens for the validator. It handles:
//!
//! - Loading the source once into numbered lines
//! - Skipping blank and `//` comment lines
//! - Tokenization of a line using regex patterns
//! - A forward-only cursor over tokens, one line at a time

pub mod lexer;
pub mod source;
pub mod tokenizer;
pub mod tokens;
