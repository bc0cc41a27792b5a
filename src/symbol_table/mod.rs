//! Scoped symbol tables.
//!
//! A `ScopeStack` holds one `Scope` per open nesting level (global, method
//! body, `if`/`while` body). Each scope maps a name to its `Binding`.

pub mod symbol_table;
