//! The command catalog an editor offers as selectable command nodes.
//!
//! The compiler itself only needs a command's bare name; the catalog is what hosts use to
//! populate and search the command palette.

use crate::engine::{ExecutionOutcome, ScriptEngine};
use crate::error::CatalogError;

pub mod signature;

pub use signature::*;

/// Lists the built-in commands worth offering as nodes.
pub const CATALOG_QUERY: &str = concat!(
    "help commands | where command_type == built-in",
    " | where category != core | where category != \"debug\""
);

#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    commands: Vec<CommandSignature>,
}

impl CommandCatalog {
    pub fn new(commands: Vec<CommandSignature>) -> Self {
        Self { commands }
    }

    /// Parses the JSON array produced by `help commands`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let commands: Vec<CommandSignature> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        tracing::debug!(commands = commands.len(), "command catalog loaded");
        Ok(Self::new(commands))
    }

    /// Asks the engine for its command list, falling back to a bundled JSON dump when the
    /// engine fails or answers with something that is not a command list.
    pub fn from_engine(
        engine: &impl ScriptEngine,
        fallback_json: &str,
    ) -> Result<Self, CatalogError> {
        let reason = match engine.run(CATALOG_QUERY) {
            ExecutionOutcome::Ok(value) => {
                match serde_json::from_value::<Vec<CommandSignature>>(value) {
                    Ok(commands) => {
                        tracing::debug!(
                            commands = commands.len(),
                            "command catalog loaded from engine"
                        );
                        return Ok(Self::new(commands));
                    }
                    Err(e) => format!("engine returned an invalid command list: {}", e),
                }
            }
            ExecutionOutcome::Error(message) => message,
        };
        tracing::warn!(reason = %reason, "falling back to the bundled command catalog");
        Self::from_json(fallback_json)
    }

    pub fn get(&self, name: &str) -> Option<&CommandSignature> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Commands matching `filter`, in catalog order.
    pub fn filter<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = &'a CommandSignature> + 'a {
        self.commands
            .iter()
            .filter(move |command| command.matches_filter(filter))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
