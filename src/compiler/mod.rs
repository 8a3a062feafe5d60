use crate::ast::{InputTree, SyntaxTree};
use crate::engine::LiteralValidator;
use crate::error::CompileError;
use crate::graph::{GraphBuilder, GraphModel};
use crate::render::render;
use crate::ui::UiGraph;

mod extractor;
mod normalizer;

use extractor::TreeExtractor;

pub use extractor::PipeInputPolicy;
pub use normalizer::normalize;

/// Every intermediate product of one compile call, for debugging and tooling.
#[derive(Debug, Clone)]
pub struct CompilationArtifacts {
    pub input_tree: InputTree,
    pub syntax_tree: SyntaxTree,
    pub source: String,
}

/// Compiles editor graphs into Nushell source.
///
/// A `Compiler` holds configuration only; each compile call builds its own graph model and
/// trees, so one instance can be shared between threads.
pub struct Compiler {
    graph_builder: GraphBuilder,
    pipe_policy: PipeInputPolicy,
}

pub struct CompilerBuilder {
    graph_builder: GraphBuilder,
    pipe_policy: PipeInputPolicy,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            graph_builder: GraphBuilder::new(),
            pipe_policy: PipeInputPolicy::default(),
        }
    }
    pub fn with_type_mapping(mut self, user_type_name: &str, canonical_type_name: &str) -> Self {
        self.graph_builder = self
            .graph_builder
            .with_type_mapping(user_type_name, canonical_type_name);
        self
    }
    pub fn with_pipe_policy(mut self, policy: PipeInputPolicy) -> Self {
        self.pipe_policy = policy;
        self
    }
    pub fn with_literal_validator(mut self, validator: Box<dyn LiteralValidator>) -> Self {
        self.graph_builder = self.graph_builder.with_literal_validator(validator);
        self
    }
    pub fn build(self) -> Compiler {
        Compiler {
            graph_builder: self.graph_builder,
            pipe_policy: self.pipe_policy,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        CompilerBuilder::new().build()
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// Compiles a graph into source text.
    pub fn compile(&self, graph: &UiGraph) -> Result<String, CompileError> {
        self.compile_with_artifacts(graph)
            .map(|artifacts| artifacts.source)
            .inspect_err(|e| {
                tracing::warn!(kind = %e.kind(), category = ?e.category(), "compilation failed: {}", e)
            })
    }

    /// Parses the editor's JSON export and compiles it.
    pub fn compile_json(&self, json: &str) -> Result<String, CompileError> {
        let graph =
            UiGraph::from_json(json).map_err(|e| CompileError::JsonParseError(e.to_string()))?;
        self.compile(&graph)
    }

    /// Compiles a graph and keeps the trees built along the way.
    pub fn compile_with_artifacts(
        &self,
        graph: &UiGraph,
    ) -> Result<CompilationArtifacts, CompileError> {
        tracing::info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "starting graph compilation"
        );

        let model = self.graph_builder.build(&graph.nodes, &graph.edges)?;
        let input_tree = self.extract(&model)?;
        tracing::debug!(size = input_tree.size(), "input tree extracted");

        let syntax_tree = normalize(input_tree.clone());
        let source = render(&syntax_tree);
        tracing::info!(bytes = source.len(), "compilation successful");

        Ok(CompilationArtifacts {
            input_tree,
            syntax_tree,
            source,
        })
    }

    /// Builds the input tree of an already validated graph model.
    pub fn extract(&self, model: &GraphModel) -> Result<InputTree, CompileError> {
        TreeExtractor::new(model, self.pipe_policy).extract()
    }
}

/// Compiles a graph with the default settings.
pub fn compile_graph(graph: &UiGraph) -> Result<String, CompileError> {
    Compiler::default().compile(graph)
}
