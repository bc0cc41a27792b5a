use std::collections::HashMap;

use tracing::debug;

use crate::ast::types::VarType;

/// What is known about one declared variable or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    var_type: VarType,
    is_final: bool,
    initialized: bool,
}

impl Binding {
    pub fn new(var_type: VarType, is_final: bool, initialized: bool) -> Self {
        Binding {
            var_type,
            is_final,
            initialized,
        }
    }

    pub fn var_type(&self) -> VarType {
        self.var_type
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}

/// The bindings introduced by one lexical nesting level.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    bindings: HashMap<String, Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a binding, replacing any previous one with the same name.
    pub fn insert(&mut self, name: String, binding: Binding) -> Option<Binding> {
        self.bindings.insert(name, binding)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.bindings.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

/// Stack of scopes, global scope at the bottom.
///
/// Lookups walk from the innermost scope outwards and return the first
/// binding found, so inner declarations shadow outer ones.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack whose bottom frame starts out with the given global bindings.
    pub fn with_globals(globals: Scope) -> Self {
        ScopeStack {
            scopes: vec![globals],
        }
    }

    pub fn open_scope(&mut self) {
        self.scopes.push(Scope::new());
        debug!(depth = self.scopes.len(), "opened scope");
    }

    /// Pops the innermost scope, dropping every binding created in it.
    pub fn close_scope(&mut self) -> Option<Scope> {
        let scope = self.scopes.pop();
        debug!(depth = self.scopes.len(), "closed scope");
        scope
    }

    /// Number of scopes currently open.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The bottom-most scope, if any scope is open.
    pub fn global(&self) -> Option<&Scope> {
        self.scopes.first()
    }

    /// Binds `name` in the innermost scope. Callers check for duplicates.
    pub fn add(&mut self, name: &str, binding: Binding) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), binding);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Binding> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name))
    }

    pub fn is_on_current_scope(&self, name: &str) -> bool {
        self.scopes
            .last()
            .map_or(false, |scope| scope.contains(name))
    }

    /// Copies the visible binding of `name` into the innermost scope, marked
    /// initialized.
    ///
    /// This is how an assignment inside a nested block initializes an outer
    /// variable: the outer binding is left untouched, so the variable is
    /// initialized only until the block closes.
    pub fn materialize_local(&mut self, name: &str) -> Option<&Binding> {
        let outer = *self.get(name)?;
        let scope = self.scopes.last_mut()?;

        scope.insert(
            name.to_string(),
            Binding::new(outer.var_type(), outer.is_final(), true),
        );
        debug!(name, "shadowed outer binding");
        scope.get(name)
    }

    /// Removes `name` from the innermost scope only, uncovering any outer
    /// binding of the same name.
    pub fn discard_local(&mut self, name: &str) -> Option<Binding> {
        let binding = self.scopes.last_mut()?.remove(name);
        debug!(name, "discarded local binding");
        binding
    }
}
