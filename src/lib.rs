//! # nuflow - Visual Dataflow Graph Compiler for Nushell
//!
//! **nuflow** turns the node graphs users draw in a visual editor into Nushell pipeline
//! source. Nodes are commands, data literals, binary operators and a single `result` sink;
//! edges link producers to consumers, optionally tagged with the operand slot they fill.
//!
//! ## Core Workflow
//!
//! 1.  **Build the graph model**: raw editor nodes and edges are classified into closed
//!     node roles and an incoming-edge index. Unknown shapes are rejected here.
//! 2.  **Extract the input tree**: a backward depth-first walk from the result sink.
//! 3.  **Normalize**: pipe inputs become explicit `Pipe` nodes, switches join parameters.
//! 4.  **Render**: the syntax tree is serialized into fully parenthesized source text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nuflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"{
//!         "nodes": [
//!             { "id": "ls", "type": "command", "data": { "label": "ls" } },
//!             { "id": "sort", "type": "command", "data": { "label": "sort" } },
//!             { "id": "result", "type": "result" }
//!         ],
//!         "edges": [
//!             { "source": "ls", "target": "sort" },
//!             { "source": "sort", "target": "result" }
//!         ]
//!     }"#;
//!
//!     let compiler = Compiler::builder()
//!         .with_pipe_policy(PipeInputPolicy::Strict)
//!         .build();
//!
//!     match compiler.compile_json(json) {
//!         Ok(source) => println!("{}", source), // (ls)|(sort)
//!         Err(e) if e.is_user_correctable() => println!("Fix your graph: {}", e),
//!         Err(e) => eprintln!("Editor bug: {}", e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod catalog;
pub mod compiler;
pub mod engine;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod render;
pub mod ui;

pub use compiler::{CompilationArtifacts, Compiler, CompilerBuilder, compile_graph};
