//! Common test utilities for building editor graphs.
use nuflow::prelude::*;

#[allow(dead_code)]
pub fn command(id: &str, name: &str) -> UiNode {
    UiNode {
        id: id.to_string(),
        node_type: Some("command".to_string()),
        data: UiNodeData {
            label: Some(name.to_string()),
            ..Default::default()
        },
    }
}

#[allow(dead_code)]
pub fn command_with_switches(id: &str, name: &str, switches: &[&str]) -> UiNode {
    let mut node = command(id, name);
    node.data.switches = Some(switches.iter().map(|s| s.to_string()).collect());
    node
}

#[allow(dead_code)]
pub fn data(id: &str, text: &str, literal_type: &str) -> UiNode {
    UiNode {
        id: id.to_string(),
        node_type: Some("data".to_string()),
        data: UiNodeData {
            value: Some(text.to_string()),
            literal_type: Some(literal_type.to_string()),
            ..Default::default()
        },
    }
}

#[allow(dead_code)]
pub fn operator(id: &str, token: &str) -> UiNode {
    UiNode {
        id: id.to_string(),
        node_type: Some("operator".to_string()),
        data: UiNodeData {
            operator: Some(token.to_string()),
            ..Default::default()
        },
    }
}

#[allow(dead_code)]
pub fn result() -> UiNode {
    UiNode {
        id: "result".to_string(),
        node_type: Some("result".to_string()),
        data: UiNodeData::default(),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> UiEdge {
    UiEdge {
        source: source.to_string(),
        target: target.to_string(),
        target_handle: None,
    }
}

#[allow(dead_code)]
pub fn handle_edge(source: &str, target: &str, handle: &str) -> UiEdge {
    UiEdge {
        source: source.to_string(),
        target: target.to_string(),
        target_handle: Some(handle.to_string()),
    }
}

#[allow(dead_code)]
pub fn graph(nodes: Vec<UiNode>, edges: Vec<UiEdge>) -> UiGraph {
    UiGraph { nodes, edges }
}

/// Logic: `ls | sort`
#[allow(dead_code)]
pub fn create_pipe_graph() -> UiGraph {
    graph(
        vec![command("ls", "ls"), command("sort", "sort"), result()],
        vec![edge("ls", "sort"), edge("sort", "result")],
    )
}

/// Logic: `1 + 2`
#[allow(dead_code)]
pub fn create_arithmetic_graph() -> UiGraph {
    graph(
        vec![
            data("one", "1", "int"),
            data("two", "2", "int"),
            operator("plus", "+"),
            result(),
        ],
        vec![
            handle_edge("one", "plus", "A"),
            handle_edge("two", "plus", "B"),
            edge("plus", "result"),
        ],
    )
}

/// Logic: `(ls | length) > 3`
#[allow(dead_code)]
pub fn create_comparison_graph() -> UiGraph {
    graph(
        vec![
            command("ls", "ls"),
            command("length", "length"),
            data("three", "3", "int"),
            operator("gt", ">"),
            result(),
        ],
        vec![
            edge("ls", "length"),
            handle_edge("length", "gt", "A"),
            handle_edge("three", "gt", "B"),
            edge("gt", "result"),
        ],
    )
}

/// The editor's JSON export of `ls | sort`, with the layout fields it carries.
#[allow(dead_code)]
pub const PIPE_GRAPH_JSON: &str = r#"{
    "nodes": [
        { "id": "n1", "type": "command", "position": { "x": 0, "y": 0 }, "data": { "label": "ls" } },
        { "id": "n2", "type": "command", "position": { "x": 200, "y": 0 }, "data": { "label": "sort" } },
        { "id": "result", "type": "result", "position": { "x": 400, "y": 0 }, "data": {} }
    ],
    "edges": [
        { "id": "e1", "source": "n1", "target": "n2", "targetHandle": null },
        { "id": "e2", "source": "n2", "target": "result" }
    ]
}"#;
