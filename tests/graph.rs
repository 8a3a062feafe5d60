//! Tests for building the graph model from editor nodes and edges.
mod common;
use common::*;
use nuflow::prelude::*;

fn build(graph: &UiGraph) -> std::result::Result<GraphModel, CompileError> {
    GraphBuilder::new().build(&graph.nodes, &graph.edges)
}

#[test]
fn test_builds_roles_and_incoming_index() {
    let model = build(&create_arithmetic_graph()).expect("Failed to build graph");

    assert_eq!(model.node_count(), 4);
    assert_eq!(model.edge_count(), 3);
    assert_eq!(model.result_id(), "result");
    assert_eq!(
        model.role("one"),
        Some(&NodeRole::Data {
            text: "1".to_string(),
            literal_type: LiteralType::Int
        })
    );
    assert_eq!(
        model.role("plus"),
        Some(&NodeRole::Operator {
            op: OperatorToken::Add
        })
    );

    let incoming = model.incoming("plus");
    assert_eq!(incoming.len(), 2);
    assert_eq!(incoming[0].source, "one");
    assert_eq!(incoming[0].handle, Some(EdgeHandle::Operand(Operand::Left)));
    assert_eq!(incoming[1].handle, Some(EdgeHandle::Operand(Operand::Right)));
    assert!(model.incoming("one").is_empty());
}

#[test]
fn test_result_recognized_by_id_alone() {
    let mut graph = create_pipe_graph();
    graph.nodes[2].node_type = None;
    let model = build(&graph).unwrap();
    assert_eq!(model.role("result"), Some(&NodeRole::Result));
}

#[test]
fn test_result_recognized_by_type_alone() {
    let mut graph = create_pipe_graph();
    graph.nodes[2].id = "sink".to_string();
    graph.edges[1].target = "sink".to_string();
    let model = build(&graph).unwrap();
    assert_eq!(model.result_id(), "sink");
}

#[test]
fn test_command_name_from_label_and_switches() {
    let graph = graph(
        vec![command_with_switches("ls", "ls", &["--all(-a)"]), result()],
        vec![edge("ls", "result")],
    );
    let model = build(&graph).unwrap();
    assert_eq!(
        model.role("ls"),
        Some(&NodeRole::Command {
            name: "ls".to_string(),
            switches: vec!["--all(-a)".to_string()]
        })
    );
}

#[test]
fn test_operator_token_falls_back_to_label() {
    let mut node = operator("op", "");
    node.data.operator = None;
    node.data.label = Some("starts-with".to_string());
    let model = build(&graph(vec![node, result()], vec![])).unwrap();
    assert_eq!(
        model.role("op"),
        Some(&NodeRole::Operator {
            op: OperatorToken::StartsWith
        })
    );
}

#[test]
fn test_named_handles_are_kept() {
    let graph = graph(
        vec![data("d", "x", "string"), command("echo", "echo"), result()],
        vec![handle_edge("d", "echo", "0"), edge("echo", "result")],
    );
    let model = build(&graph).unwrap();
    assert_eq!(
        model.incoming("echo")[0].handle,
        Some(EdgeHandle::Named("0".to_string()))
    );
    assert_eq!(model.incoming("result")[0].handle, None);
}

#[test]
fn test_unrecognized_roles() {
    let cases = vec![
        UiNode {
            id: "w".to_string(),
            node_type: Some("widget".to_string()),
            data: UiNodeData::default(),
        },
        UiNode {
            id: "c".to_string(),
            node_type: Some("command".to_string()),
            data: UiNodeData::default(),
        },
        data("d", "1", "complex"),
        operator("o", "^^"),
    ];

    for node in cases {
        let id = node.id.clone();
        let err = build(&graph(vec![node, result()], vec![])).unwrap_err();
        match err {
            CompileError::UnrecognizedNodeRole { node_id, .. } => assert_eq!(node_id, id),
            other => panic!("Expected UnrecognizedNodeRole, got {:?}", other),
        }
    }
}

#[test]
fn test_edge_to_undeclared_node() {
    let mut graph = create_pipe_graph();
    graph.edges.push(edge("ghost", "sort"));
    let err = build(&graph).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedGraphReference);
    assert!(err.to_string().contains("ghost"));

    let mut graph = create_pipe_graph();
    graph.edges.push(edge("ls", "ghost"));
    assert_eq!(
        build(&graph).unwrap_err().kind(),
        ErrorKind::MalformedGraphReference
    );
}

#[test]
fn test_result_node_count_and_duplicate_ids() {
    let no_result = graph(vec![command("ls", "ls")], vec![]);
    assert_eq!(
        build(&no_result).unwrap_err().kind(),
        ErrorKind::MalformedGraphReference
    );

    let mut second_sink = result();
    second_sink.id = "sink".to_string();
    let two_results = graph(vec![result(), second_sink], vec![]);
    assert_eq!(
        build(&two_results).unwrap_err().kind(),
        ErrorKind::MalformedGraphReference
    );

    let duplicate = graph(vec![command("ls", "ls"), command("ls", "sort"), result()], vec![]);
    assert_eq!(
        build(&duplicate).unwrap_err().kind(),
        ErrorKind::MalformedGraphReference
    );
}

#[test]
fn test_every_operator_token_round_trips() {
    for op in OperatorToken::ALL {
        assert_eq!(OperatorToken::from_token(op.as_str()), Some(*op));
    }
    assert_eq!(OperatorToken::Modulo.group(), "arithmetic");
    assert_eq!(OperatorToken::NotIn.group(), "string-match");
    assert_eq!(OperatorToken::from_token("**"), Some(OperatorToken::Power));
}

#[test]
fn test_graph_from_editor_json() {
    let graph = UiGraph::from_json(PIPE_GRAPH_JSON).unwrap();
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.nodes[0].data.label.as_deref(), Some("ls"));
    assert_eq!(graph.edges[0].target_handle, None);

    let json = r#"{
        "nodes": [{ "id": "d", "type": "data", "data": { "value": "10kb", "literalType": "filesize" } }],
        "edges": [{ "source": "d", "target": "op", "targetHandle": "A" }]
    }"#;
    let graph = UiGraph::from_json(json).unwrap();
    assert_eq!(graph.nodes[0].data.literal_type.as_deref(), Some("filesize"));
    assert_eq!(graph.edges[0].target_handle.as_deref(), Some("A"));
}

#[test]
fn test_canonical_type_applies_type_mapping() {
    let builder = GraphBuilder::new().with_type_mapping("shellCommand", "command");
    assert_eq!(builder.canonical_type("shellCommand"), "command");
    assert_eq!(builder.canonical_type("command"), "command");
    assert_eq!(builder.canonical_type("data"), "data");
    assert_eq!(GraphBuilder::new().canonical_type("shellCommand"), "shellCommand");

    let mut graph = create_pipe_graph();
    graph.nodes[0].node_type = Some("shellCommand".to_string());
    let model = builder.build(&graph.nodes, &graph.edges).unwrap();
    assert!(matches!(model.role("ls"), Some(NodeRole::Command { name, .. }) if name == "ls"));
}
