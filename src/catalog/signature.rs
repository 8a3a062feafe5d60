use serde::{Deserialize, Serialize};

const NOTHING_TYPE: &str = "nothing";

/// One accepted input type and the output type it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoSignature {
    pub input: String,
    pub output: String,
}

/// A command as listed by Nushell's `help commands`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSignature {
    pub name: String,
    pub category: String,
    pub command_type: String,
    #[serde(default)]
    pub description: String,
    /// Parameter declarations, kept as the engine reports them.
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub input_output: Vec<IoSignature>,
    #[serde(default)]
    pub search_terms: String,
}

impl CommandSignature {
    /// True for an empty filter, or when the name or category contains it.
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter.is_empty() || self.name.contains(filter) || self.category.contains(filter)
    }

    /// Whether the command accepts pipeline input for at least one of its signatures.
    pub fn has_input(&self) -> bool {
        self.input_output
            .iter()
            .any(|signature| signature.input != NOTHING_TYPE)
    }
}
