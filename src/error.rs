use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while compiling a graph into source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Malformed graph reference: {message}")]
    MalformedGraphReference { message: String },

    #[error("Node '{node_id}' has an unrecognized role: {message}")]
    UnrecognizedNodeRole { node_id: String, message: String },

    #[error("No node is connected to the result node")]
    MissingResultProducer,

    #[error("Too many nodes are connected to the result node ({count} found, expected 1)")]
    AmbiguousResultProducer { count: usize },

    #[error("Result node is used as an input of node '{consumer_id}'")]
    NonTerminalResultEncountered { consumer_id: String },

    #[error("Operator node '{node_id}' requires exactly 2 inputs, but received {count}")]
    OperatorArityViolation { node_id: String, count: usize },

    #[error("Operator node '{node_id}' has invalid input handles: {message}")]
    OperatorHandleViolation { node_id: String, message: String },

    #[error("Data node '{node_id}' holds '{text}', which is not a valid {literal_type} literal")]
    InvalidLiteral {
        node_id: String,
        text: String,
        literal_type: String,
    },

    #[error("Command node '{node_id}' has {count} pipe inputs, but at most one is allowed")]
    AmbiguousPipeInput { node_id: String, count: usize },
}

/// Machine-readable discriminant of a [`CompileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    JsonParseError,
    MalformedGraphReference,
    UnrecognizedNodeRole,
    MissingResultProducer,
    AmbiguousResultProducer,
    NonTerminalResultEncountered,
    OperatorArityViolation,
    OperatorHandleViolation,
    InvalidLiteral,
    AmbiguousPipeInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Who is expected to fix an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The user built a graph the compiler cannot express; shown in the editor.
    UserCorrectable,
    /// The editor handed over a graph that breaks its own guarantees.
    Internal,
}

/// Serializable `{kind, category, message}` view of an error, for hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredError {
    pub kind: ErrorKind,
    pub category: ErrorCategory,
    pub message: String,
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::JsonParseError(_) => ErrorKind::JsonParseError,
            CompileError::MalformedGraphReference { .. } => ErrorKind::MalformedGraphReference,
            CompileError::UnrecognizedNodeRole { .. } => ErrorKind::UnrecognizedNodeRole,
            CompileError::MissingResultProducer => ErrorKind::MissingResultProducer,
            CompileError::AmbiguousResultProducer { .. } => ErrorKind::AmbiguousResultProducer,
            CompileError::NonTerminalResultEncountered { .. } => {
                ErrorKind::NonTerminalResultEncountered
            }
            CompileError::OperatorArityViolation { .. } => ErrorKind::OperatorArityViolation,
            CompileError::OperatorHandleViolation { .. } => ErrorKind::OperatorHandleViolation,
            CompileError::InvalidLiteral { .. } => ErrorKind::InvalidLiteral,
            CompileError::AmbiguousPipeInput { .. } => ErrorKind::AmbiguousPipeInput,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            ErrorKind::JsonParseError
            | ErrorKind::MissingResultProducer
            | ErrorKind::AmbiguousResultProducer
            | ErrorKind::InvalidLiteral
            | ErrorKind::AmbiguousPipeInput => ErrorCategory::UserCorrectable,
            ErrorKind::MalformedGraphReference
            | ErrorKind::UnrecognizedNodeRole
            | ErrorKind::NonTerminalResultEncountered
            | ErrorKind::OperatorArityViolation
            | ErrorKind::OperatorHandleViolation => ErrorCategory::Internal,
        }
    }

    pub fn is_user_correctable(&self) -> bool {
        self.category() == ErrorCategory::UserCorrectable
    }

    pub fn to_structured(&self) -> StructuredError {
        StructuredError {
            kind: self.kind(),
            category: self.category(),
            message: self.to_string(),
        }
    }
}

/// Errors that can occur when loading a command catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse command catalog JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur when converting a custom editor format into a `UiGraph`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom graph data: {0}")]
    ValidationError(String),
}
