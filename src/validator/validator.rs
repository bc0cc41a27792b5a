use tracing::debug;

use crate::{
    ast::{statements::StatementKind, types::VarType},
    errors::errors::{Error, LogicalError, StructureError},
    lexer::{
        source::{Line, SourceFile},
        tokenizer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    parser::classifier::{classify, literal_matches, match_types},
    symbol_table::symbol_table::{Binding, ScopeStack},
    Position,
};

use super::functions::FunctionRegistry;

struct Parameter {
    name: String,
    var_type: VarType,
    is_final: bool,
}

/// Two-pass validator over one source file.
///
/// The first pass walks the global scope: it binds global variables and
/// records every method signature, skipping method bodies by brace
/// counting. The second pass walks the whole file again with a fresh cursor
/// and checks every statement, starting from the globals and signatures the
/// first pass finalized.
pub struct Validator<'a> {
    source: &'a SourceFile,
    tokenizer: Tokenizer<'a>,
    pub(super) scopes: ScopeStack,
    pub(super) functions: FunctionRegistry,
    depth: usize,
}

impl<'a> Validator<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Validator {
            source,
            tokenizer: Tokenizer::new(source),
            scopes: ScopeStack::new(),
            functions: FunctionRegistry::new(),
            depth: 0,
        }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.first_pass()?;
        self.second_pass()
    }

    pub(super) fn first_pass(&mut self) -> Result<(), Error> {
        debug!(file = %self.source.file(), "starting first pass");
        self.scopes.open_scope();

        while !self.tokenizer.at_end() {
            match self.classify_current()? {
                StatementKind::MethodDeclaration => self.register_method()?,
                StatementKind::VariableDeclaration => self.validate_variable_declaration()?,
                StatementKind::Assignment => self.validate_assignment()?,
                _ => return Err(self.error(LogicalError::InvalidGlobalLine)),
            }
        }

        debug!("finished first pass");
        Ok(())
    }

    fn second_pass(&mut self) -> Result<(), Error> {
        debug!(file = %self.source.file(), "starting second pass");
        let globals = self.scopes.global().cloned().unwrap_or_default();
        self.scopes = ScopeStack::with_globals(globals);
        self.tokenizer = Tokenizer::new(self.source);
        self.depth = 0;

        while !self.tokenizer.at_end() {
            self.validate_statement()?;
        }

        debug!("finished second pass");
        Ok(())
    }

    fn validate_statement(&mut self) -> Result<(), Error> {
        match self.classify_current()? {
            // Global declarations were fully checked by the first pass.
            StatementKind::VariableDeclaration if self.depth == 0 => {
                self.tokenizer.advance_line();
                Ok(())
            }
            StatementKind::VariableDeclaration => self.validate_variable_declaration(),
            StatementKind::IfOrWhile => self.validate_if_or_while(),
            StatementKind::MethodDeclaration if self.depth == 0 => self.validate_method(),
            StatementKind::MethodDeclaration => Err(self.error(LogicalError::NestedFunction)),
            StatementKind::FunctionCall => self.validate_function_call(),
            StatementKind::Assignment => self.validate_assignment(),
            StatementKind::Return if self.depth > 0 => {
                self.tokenizer.advance_line();
                Ok(())
            }
            StatementKind::Return => Err(self.error(LogicalError::IllegalLineInScope)),
        }
    }

    // `final`? type name [= value] (, name [= value])* ;
    fn validate_variable_declaration(&mut self) -> Result<(), Error> {
        let is_final = self.kind()? == TokenKind::Final;
        if is_final {
            self.tokenizer.advance();
        }
        let var_type = self.var_type()?;
        self.tokenizer.advance();

        loop {
            let name = self.value()?;
            self.tokenizer.advance();

            let mut initialized = false;
            if self.kind()? == TokenKind::Assignment {
                self.tokenizer.advance();
                let value = self.value()?;
                self.check_value(&value, var_type)?;
                initialized = true;
                self.tokenizer.advance();
            } else if is_final {
                return Err(self.error(LogicalError::FinalWithoutValue { name }));
            }

            if self.scopes.is_on_current_scope(&name) {
                return Err(self.error(LogicalError::VariableAlreadyDeclared { name }));
            }
            self.scopes
                .add(&name, Binding::new(var_type, is_final, initialized));

            match self.kind()? {
                TokenKind::Comma => self.tokenizer.advance(),
                TokenKind::Semicolon => break,
                _ => return Err(self.invalid_line()),
            }
        }

        self.tokenizer.advance_line();
        Ok(())
    }

    // name = value (, name = value)* ;
    fn validate_assignment(&mut self) -> Result<(), Error> {
        loop {
            let name = self.value()?;
            let binding = *self.scopes.get(&name).ok_or_else(|| {
                self.error(LogicalError::UndeclaredAssignmentTarget { name: name.clone() })
            })?;
            if binding.is_final() {
                return Err(self.error(LogicalError::FinalAssignmentTarget { name }));
            }

            self.tokenizer.advance(); // past the name
            self.tokenizer.advance(); // past `=`
            let value = self.value()?;
            self.assign(&name, &value, binding)?;
            self.tokenizer.advance();

            match self.kind()? {
                TokenKind::Comma => self.tokenizer.advance(),
                TokenKind::Semicolon => break,
                _ => return Err(self.invalid_line()),
            }
        }

        self.tokenizer.advance_line();
        Ok(())
    }

    /// Assigns `value` to `name`, whose binding was `binding` before the
    /// assignment.
    ///
    /// An uninitialized variable from an enclosing scope gets an initialized
    /// local copy first, and `value` is checked against that copy: the block
    /// may never run, so the outer variable must stay uninitialized once the
    /// block closes. A rejected value leaves no copy behind.
    fn assign(&mut self, name: &str, value: &str, binding: Binding) -> Result<(), Error> {
        let shadowed = !binding.is_initialized() && !self.scopes.is_on_current_scope(name);
        if shadowed {
            self.scopes.materialize_local(name);
        }

        if let Err(error) = self.check_value(value, binding.var_type()) {
            if shadowed {
                self.scopes.discard_local(name);
            }
            return Err(error);
        }

        if let Some(binding) = self.scopes.get_mut(name) {
            binding.mark_initialized();
        }
        Ok(())
    }

    /// Checks that `value` (a literal or a variable name) can be stored in a
    /// slot of type `target`.
    fn check_value(&self, value: &str, target: VarType) -> Result<(), Error> {
        match self.scopes.get(value) {
            Some(binding) if !binding.is_initialized() => {
                Err(self.error(LogicalError::UninitializedSource {
                    name: value.to_string(),
                }))
            }
            Some(binding) if !match_types(binding.var_type(), target) => {
                Err(self.error(LogicalError::NonMatchingVariable {
                    name: value.to_string(),
                    expected: target,
                    found: binding.var_type(),
                }))
            }
            Some(_) => Ok(()),
            None if literal_matches(value, target) => Ok(()),
            None => Err(self.error(LogicalError::NonMatchingConstant {
                value: value.to_string(),
                expected: target,
            })),
        }
    }

    fn register_method(&mut self) -> Result<(), Error> {
        let position = self.position();
        self.tokenizer.advance(); // past `void`
        let name = self.value()?;
        self.tokenizer.advance(); // past the name
        self.tokenizer.advance(); // past `(`

        let parameters: Vec<VarType> = self
            .parameters()?
            .into_iter()
            .map(|parameter| parameter.var_type)
            .collect();
        debug!(%name, ?parameters, "registered method");
        self.functions
            .declare_function(name, parameters, position)?;

        self.skip_body()
    }

    /// Skips a method body by counting braces, leaving the cursor on the
    /// line after the closing brace.
    fn skip_body(&mut self) -> Result<(), Error> {
        self.depth += 1;
        self.tokenizer.advance_line();

        while self.depth != 0 {
            let line = self.current_line()?;
            if line.opens_scope() {
                self.depth += 1;
            } else if line.closes_scope() {
                self.depth -= 1;
            }
            self.tokenizer.advance_line();
        }

        Ok(())
    }

    // (final? type name (, final? type name)*)?  -- leaves the cursor on `)`
    fn parameters(&mut self) -> Result<Vec<Parameter>, Error> {
        let mut parameters = vec![];

        while self.kind()? != TokenKind::CloseParen {
            if self.kind()? == TokenKind::Comma {
                self.tokenizer.advance();
            }
            let is_final = self.kind()? == TokenKind::Final;
            if is_final {
                self.tokenizer.advance();
            }
            let var_type = self.var_type()?;
            self.tokenizer.advance();
            let name = self.value()?;
            self.tokenizer.advance();

            parameters.push(Parameter {
                name,
                var_type,
                is_final,
            });
        }

        Ok(parameters)
    }

    fn validate_method(&mut self) -> Result<(), Error> {
        self.tokenizer.advance(); // past `void`
        let name = self.value()?;
        self.tokenizer.advance(); // past the name
        self.tokenizer.advance(); // past `(`
        let parameters = self.parameters()?;

        debug!(%name, "validating method body");
        self.scopes.open_scope();
        self.depth += 1;

        let result = self.validate_method_body(parameters);

        self.depth -= 1;
        self.scopes.close_scope();
        result
    }

    fn validate_method_body(&mut self, parameters: Vec<Parameter>) -> Result<(), Error> {
        for parameter in parameters {
            if self.scopes.is_on_current_scope(&parameter.name) {
                return Err(self.error(LogicalError::DuplicateParameter {
                    name: parameter.name,
                }));
            }
            self.scopes.add(
                &parameter.name,
                Binding::new(parameter.var_type, parameter.is_final, true),
            );
        }
        self.tokenizer.advance_line();

        loop {
            if self.current_line()?.closes_scope() {
                return Err(self.error(LogicalError::MissingReturn));
            }

            if self.classify_current()? == StatementKind::Return {
                self.tokenizer.advance_line();
                if self.tokenizer.current_line().is_some_and(Line::closes_scope) {
                    self.tokenizer.advance_line();
                    return Ok(());
                }
                continue;
            }

            self.validate_statement()?;
        }
    }

    fn validate_if_or_while(&mut self) -> Result<(), Error> {
        self.tokenizer.advance(); // past `if` / `while`
        self.tokenizer.advance(); // past `(`
        self.validate_condition()?;

        self.scopes.open_scope();
        self.depth += 1;
        self.tokenizer.advance_line();

        let result = self.validate_block_body();

        self.depth -= 1;
        self.scopes.close_scope();
        result
    }

    fn validate_block_body(&mut self) -> Result<(), Error> {
        loop {
            if self.current_line()?.closes_scope() {
                self.tokenizer.advance_line();
                return Ok(());
            }
            self.validate_statement()?;
        }
    }

    // term ((|| | &&) term)*  -- leaves the cursor on `)`
    fn validate_condition(&mut self) -> Result<(), Error> {
        loop {
            let term = self.value()?;
            self.validate_condition_term(&term)?;
            self.tokenizer.advance();

            match self.kind()? {
                TokenKind::Or | TokenKind::And => self.tokenizer.advance(),
                TokenKind::CloseParen => return Ok(()),
                _ => return Err(self.invalid_line()),
            }
        }
    }

    fn validate_condition_term(&self, term: &str) -> Result<(), Error> {
        match self.scopes.get(term) {
            Some(binding) if !binding.is_initialized() => {
                Err(self.error(LogicalError::UninitializedConditionVariable {
                    name: term.to_string(),
                }))
            }
            Some(binding) if !match_types(binding.var_type(), VarType::Boolean) => {
                Err(self.error(LogicalError::NonBooleanConditionVariable {
                    name: term.to_string(),
                    found: binding.var_type(),
                }))
            }
            Some(_) => Ok(()),
            None if literal_matches(term, VarType::Boolean) => Ok(()),
            None => Err(self.error(LogicalError::NonBooleanConditionConstant {
                value: term.to_string(),
            })),
        }
    }

    fn validate_function_call(&mut self) -> Result<(), Error> {
        let name = self.value()?;
        let parameters = self
            .functions
            .get_function(&name)
            .map(<[VarType]>::to_vec)
            .ok_or_else(|| self.error(LogicalError::UnknownFunction { name: name.clone() }))?;
        self.tokenizer.advance(); // past the name
        self.tokenizer.advance(); // past `(`

        let mut arguments = vec![];
        while self.kind()? != TokenKind::CloseParen {
            if self.kind()? == TokenKind::Comma {
                self.tokenizer.advance();
            }
            arguments.push(self.value()?);
            self.tokenizer.advance();
        }

        if arguments.len() != parameters.len() {
            return Err(self.error(LogicalError::ArgumentCountMismatch {
                name,
                expected: parameters.len(),
                received: arguments.len(),
            }));
        }
        for (argument, expected) in arguments.iter().zip(parameters) {
            self.validate_argument(argument, expected)?;
        }

        self.tokenizer.advance_line();
        Ok(())
    }

    fn validate_argument(&self, argument: &str, expected: VarType) -> Result<(), Error> {
        match self.scopes.get(argument) {
            Some(binding) if !binding.is_initialized() => {
                Err(self.error(LogicalError::UninitializedArgument {
                    name: argument.to_string(),
                }))
            }
            Some(binding) if match_types(binding.var_type(), expected) => Ok(()),
            None if literal_matches(argument, expected) => Ok(()),
            _ => Err(self.error(LogicalError::ArgumentTypeMismatch {
                argument: argument.to_string(),
                expected,
            })),
        }
    }

    fn classify_current(&self) -> Result<StatementKind, Error> {
        let line = self.current_line()?;
        classify(&line.text).map_err(|error| error.at(self.position()))
    }

    /// The current line; running out of input here means a block was never
    /// closed.
    fn current_line(&self) -> Result<&'a Line, Error> {
        self.tokenizer
            .current_line()
            .ok_or_else(|| self.error(LogicalError::ScopeMismatch))
    }

    fn token(&self) -> Result<&Token, Error> {
        self.tokenizer
            .current_token()
            .ok_or_else(|| self.invalid_line())
    }

    fn kind(&self) -> Result<TokenKind, Error> {
        Ok(self.token()?.kind)
    }

    fn value(&self) -> Result<String, Error> {
        Ok(self.token()?.value.clone())
    }

    fn var_type(&self) -> Result<VarType, Error> {
        self.value()?
            .parse::<VarType>()
            .map_err(|error| error.at(self.position()))
    }

    fn position(&self) -> Position {
        self.tokenizer.position()
    }

    fn error(&self, error: LogicalError) -> Error {
        Error::logical(error, self.position())
    }

    fn invalid_line(&self) -> Error {
        Error::structure(StructureError::InvalidLine).at(self.position())
    }
}

/// Validates a whole source file, stopping at the first violation.
pub fn validate(source: &SourceFile) -> Result<(), Error> {
    Validator::new(source).run()
}
