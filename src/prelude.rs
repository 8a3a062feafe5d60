//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the nuflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use nuflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph_json = std::fs::read_to_string("path/to/graph.json")?;
//! let source = Compiler::default().compile_json(&graph_json)?;
//! println!("{}", source);
//! # Ok(())
//! # }
//! ```

// Compilation pipeline
pub use crate::compiler::{
    CompilationArtifacts, Compiler, CompilerBuilder, PipeInputPolicy, compile_graph, normalize,
};
pub use crate::render::render;

// Trees
pub use crate::ast::{InputTree, SyntaxTree};

// Graph model and editor format
pub use crate::graph::{
    EdgeHandle, GraphBuilder, GraphModel, LiteralType, NodeRole, Operand, OperatorToken,
};
pub use crate::ui::{IntoGraph, UiEdge, UiGraph, UiNode, UiNodeData};

// Collaborator contracts
pub use crate::catalog::{CommandCatalog, CommandSignature};
pub use crate::engine::{ExecutionOutcome, LiteralValidator, RawExecution, ScriptEngine};

// Error types
pub use crate::error::{CompileError, ErrorCategory, ErrorKind, StructuredError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
