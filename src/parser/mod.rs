//! Parser module for recognising sjava statements.
//!
//! sjava places exactly one statement on each line, so instead of building
//! a tree the parser classifies whole lines against a fixed grammar:
//!
//! - Statement classification (declarations, calls, blocks, assignments)
//! - Literal type inference from a token's spelling
//! - Type compatibility between a value and its destination
//!
//! The grammar itself lives in `grammar`, as named regex fragments.

pub mod classifier;
pub mod grammar;

#[cfg(test)]
mod tests;
