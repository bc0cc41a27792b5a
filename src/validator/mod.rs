//! Two-pass semantic validation of sjava source files.
//!
//! - `functions`: the method signatures gathered by the first pass
//! - `validator`: the pass driver and per-statement checks

pub mod functions;
pub mod validator;

#[cfg(test)]
mod tests;
