use std::collections::HashMap;

use crate::{
    ast::types::VarType,
    errors::errors::{Error, LogicalError},
    Position,
};

/// Method signatures collected by the first pass.
#[derive(Debug, Default, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, Vec<VarType>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_function(
        &mut self,
        name: String,
        parameters: Vec<VarType>,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.functions.contains_key(&name) {
            Err(Error::logical(
                LogicalError::FunctionAlreadyDeclared { name },
                current_position,
            ))
        } else {
            self.functions.insert(name, parameters);
            Ok(())
        }
    }

    /// Parameter types of `name`, in declaration order.
    pub fn get_function(&self, name: &str) -> Option<&[VarType]> {
        self.functions.get(name).map(Vec::as_slice)
    }
}
