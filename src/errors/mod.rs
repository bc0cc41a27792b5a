//! Error types and error handling for the validator.
//!
//! This module defines the error types raised while validating a source
//! file. It includes:
//!
//! - The `Error` structure carrying the offending line
//! - Structure (grammar) and logical (semantic) error variants
//! - Exit-code mapping and helpful suggestions

pub mod errors;
