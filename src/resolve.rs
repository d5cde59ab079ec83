//! Resolution of typed tokens into the [Symbol]s they describe.

use alloc::string::ToString;

use crate::{error::TokenError, node::{Operator, Symbol}, registry::VariableRegistry};

/// Turns free-form text into a [Symbol], or explains why it can't.
///
/// Resolution is tried in this order:
///   - If the text is exactly a registered variable name, it becomes a [Symbol::Variable].
///   - If the text starts with the command prefix, the rest is looked up as an operator command
///     (e.g. `/add`).
///   - Anything else is rejected.
///
/// The resolver never touches a tree; it only decides what should be built.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    registry: &'a VariableRegistry,
    command_prefix: char,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a VariableRegistry, command_prefix: char) -> Self {
        Self { registry, command_prefix }
    }

    pub fn resolve(&self, text: &str) -> Result<Symbol, TokenError> {
        if text.is_empty() {
            return Err(TokenError::Empty);
        }

        if let Some(letter) = self.registry.lookup(text) {
            return Ok(Symbol::Variable(letter));
        }

        if let Some(command) = text.strip_prefix(self.command_prefix) {
            return Operator::from_command(command)
                .map(Symbol::Compound)
                .ok_or_else(|| TokenError::UnknownCommand(command.to_string()));
        }

        Err(TokenError::Unrecognised(text.to_string()))
    }
}
