//! Mutation behavior over realistic documents.

use pagecraft_document::resolve;
use pagecraft_editor::{Breakpoint, Mutation, MutationError, Node, NodeGraph};
use serde_json::json;

fn sample_graph() -> NodeGraph {
    NodeGraph::from_value(json!({
        "ROOT": {"type": "Container", "props": {}, "nodes": ["hero", "body"]},
        "hero": {"type": "Container", "props": {}, "nodes": ["title"]},
        "title": {"type": "Text", "props": {"text": "Welcome", "fontSize": 16}, "nodes": []},
        "body": {"type": "Container", "props": {}, "nodes": []}
    }))
    .unwrap()
}

#[test]
fn test_set_prop_literal() {
    let mut graph = sample_graph();

    Mutation::SetProp {
        node_id: "title".to_string(),
        prop: "text".to_string(),
        breakpoint: None,
        value: "Hello".into(),
    }
    .apply(&mut graph)
    .unwrap();

    assert_eq!(
        graph.get("title").unwrap().prop("text"),
        Some(&json!("Hello"))
    );
}

#[test]
fn test_set_prop_at_breakpoint_lifts_literal() {
    let mut graph = sample_graph();

    Mutation::SetProp {
        node_id: "title".to_string(),
        prop: "fontSize".to_string(),
        breakpoint: Some(Breakpoint::Desktop),
        value: 24.into(),
    }
    .apply(&mut graph)
    .unwrap();

    let prop = graph.get("title").unwrap().prop("fontSize");
    assert_eq!(resolve(prop, Breakpoint::Desktop), Some(&json!(24)));
    // The pre-existing literal survives at untouched tiers.
    assert_eq!(resolve(prop, Breakpoint::Mobile), Some(&json!(16)));
    assert_eq!(resolve(prop, Breakpoint::Tablet), Some(&json!(16)));
}

#[test]
fn test_set_prop_on_missing_node_fails() {
    let mut graph = sample_graph();

    let err = Mutation::SetProp {
        node_id: "ghost".to_string(),
        prop: "text".to_string(),
        breakpoint: None,
        value: "x".into(),
    }
    .apply(&mut graph)
    .unwrap_err();

    assert_eq!(err, MutationError::NodeNotFound("ghost".to_string()));
}

#[test]
fn test_remove_prop_restores_rule_default() {
    let mut graph = sample_graph();

    Mutation::RemoveProp {
        node_id: "title".to_string(),
        prop: "fontSize".to_string(),
    }
    .apply(&mut graph)
    .unwrap();

    assert_eq!(graph.get("title").unwrap().prop("fontSize"), None);
}

#[test]
fn test_insert_node() {
    let mut graph = sample_graph();

    Mutation::InsertNode {
        parent_id: "body".to_string(),
        index: 0,
        node_id: "cta".to_string(),
        node: Node::new("Button").with_prop("text", "Sign up".into()),
    }
    .apply(&mut graph)
    .unwrap();

    assert!(graph.contains("cta"));
    assert_eq!(graph.get("body").unwrap().children, vec!["cta"]);
}

#[test]
fn test_insert_clamps_index() {
    let mut graph = sample_graph();

    Mutation::InsertNode {
        parent_id: "ROOT".to_string(),
        index: 99,
        node_id: "tail".to_string(),
        node: Node::new("Text"),
    }
    .apply(&mut graph)
    .unwrap();

    assert_eq!(
        graph.get("ROOT").unwrap().children,
        vec!["hero", "body", "tail"]
    );
}

#[test]
fn test_insert_duplicate_id_fails() {
    let mut graph = sample_graph();

    let err = Mutation::InsertNode {
        parent_id: "ROOT".to_string(),
        index: 0,
        node_id: "title".to_string(),
        node: Node::new("Text"),
    }
    .apply(&mut graph)
    .unwrap_err();

    assert_eq!(err, MutationError::DuplicateNode("title".to_string()));
}

#[test]
fn test_move_node() {
    let mut graph = sample_graph();

    Mutation::MoveNode {
        node_id: "title".to_string(),
        new_parent_id: "body".to_string(),
        index: 0,
    }
    .apply(&mut graph)
    .unwrap();

    assert!(graph.get("hero").unwrap().children.is_empty());
    assert_eq!(graph.get("body").unwrap().children, vec!["title"]);
}

#[test]
fn test_move_into_own_subtree_fails() {
    let mut graph = sample_graph();

    let err = Mutation::MoveNode {
        node_id: "hero".to_string(),
        new_parent_id: "title".to_string(),
        index: 0,
    }
    .apply(&mut graph)
    .unwrap_err();

    assert_eq!(err, MutationError::CycleDetected);
    // Failed validation leaves the graph untouched.
    assert_eq!(graph, sample_graph());
}

#[test]
fn test_move_root_fails() {
    let mut graph = sample_graph();

    let err = Mutation::MoveNode {
        node_id: "ROOT".to_string(),
        new_parent_id: "body".to_string(),
        index: 0,
    }
    .apply(&mut graph)
    .unwrap_err();

    assert_eq!(err, MutationError::RootImmutable);
}

#[test]
fn test_remove_node_detaches_and_removes_descendants() {
    let mut graph = sample_graph();

    Mutation::RemoveNode {
        node_id: "hero".to_string(),
    }
    .apply(&mut graph)
    .unwrap();

    assert!(!graph.contains("hero"));
    assert!(!graph.contains("title"));
    assert_eq!(graph.get("ROOT").unwrap().children, vec!["body"]);
}

#[test]
fn test_remove_root_fails() {
    let mut graph = sample_graph();

    let err = Mutation::RemoveNode {
        node_id: "ROOT".to_string(),
    }
    .apply(&mut graph)
    .unwrap_err();

    assert_eq!(err, MutationError::RootImmutable);
}

#[test]
fn test_move_to_missing_parent_leaves_graph_unchanged() {
    let mut graph = sample_graph();

    let err = Mutation::MoveNode {
        node_id: "title".to_string(),
        new_parent_id: "ghost".to_string(),
        index: 0,
    }
    .apply(&mut graph)
    .unwrap_err();

    assert_eq!(err, MutationError::ParentNotFound("ghost".to_string()));
    assert_eq!(graph, sample_graph());
}
