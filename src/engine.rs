//! Contracts of the collaborators that surround the compiler.
//!
//! nuflow never runs scripts or checks literal syntax itself. Hosts plug a Nushell
//! engine in through these traits.

use crate::graph::LiteralType;
use serde::{Deserialize, Serialize};

const UNDISPLAYABLE_RESULT: &str =
    "Computation succeeded, but the result value cannot be displayed";

/// Decides whether raw literal text is valid for its literal type.
pub trait LiteralValidator: Send + Sync {
    fn is_valid_literal(&self, text: &str, literal_type: LiteralType) -> bool;
}

impl<F> LiteralValidator for F
where
    F: Fn(&str, LiteralType) -> bool + Send + Sync,
{
    fn is_valid_literal(&self, text: &str, literal_type: LiteralType) -> bool {
        self(text, literal_type)
    }
}

/// The raw answer of a script engine, as it crosses the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawExecution {
    Success { value_json: String },
    Failure { error_json: String },
    SerializeFailure,
}

/// What a host shows to the user after running a compiled script.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    Ok(serde_json::Value),
    Error(String),
}

impl From<RawExecution> for ExecutionOutcome {
    fn from(raw: RawExecution) -> Self {
        match raw {
            RawExecution::Success { value_json } => match serde_json::from_str(&value_json) {
                Ok(value) => ExecutionOutcome::Ok(value),
                Err(e) => ExecutionOutcome::Error(format!("Engine returned invalid JSON: {}", e)),
            },
            RawExecution::Failure { error_json } => ExecutionOutcome::Error(error_json),
            RawExecution::SerializeFailure => {
                ExecutionOutcome::Error(UNDISPLAYABLE_RESULT.to_string())
            }
        }
    }
}

/// A script engine that can execute rendered Nushell source.
pub trait ScriptEngine {
    fn execute(&self, source: &str) -> RawExecution;

    /// Executes `source` and converts the engine's answer into an [`ExecutionOutcome`].
    fn run(&self, source: &str) -> ExecutionOutcome {
        let raw = self.execute(source);
        if let RawExecution::Failure { error_json } = &raw {
            tracing::warn!(error = %error_json, "script execution failed");
        }
        raw.into()
    }
}
