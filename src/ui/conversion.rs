use super::types::UiGraph;
use crate::error::ConversionError;

/// A trait for custom graph formats that can be converted into a nuflow `UiGraph`.
///
/// Editors that do not export the xyflow layout implement this on their own structs to
/// hand the compiler a graph it understands.
///
/// # Example
///
/// ```rust,no_run
/// use nuflow::error::ConversionError;
/// use nuflow::ui::{IntoGraph, UiEdge, UiGraph, UiNode, UiNodeData};
///
/// struct Step { id: String, command: String }
/// struct Chain { steps: Vec<Step> }
///
/// impl IntoGraph for Chain {
///     fn into_graph(self) -> Result<UiGraph, ConversionError> {
///         let mut graph = UiGraph::default();
///         let mut previous: Option<String> = None;
///         for step in self.steps {
///             graph.nodes.push(UiNode {
///                 id: step.id.clone(),
///                 node_type: Some("command".to_string()),
///                 data: UiNodeData { label: Some(step.command), ..Default::default() },
///             });
///             if let Some(prev) = previous.replace(step.id.clone()) {
///                 graph.edges.push(UiEdge { source: prev, target: step.id, target_handle: None });
///             }
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a compilable graph.
    fn into_graph(self) -> Result<UiGraph, ConversionError>;
}

impl IntoGraph for UiGraph {
    fn into_graph(self) -> Result<UiGraph, ConversionError> {
        Ok(self)
    }
}
