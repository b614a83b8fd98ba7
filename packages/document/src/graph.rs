use crate::{DocumentError, Node, ROOT_ID};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// Flat serialized form of a composed page: node id → node.
///
/// This is the sole persisted/transmitted artifact. A document is valid
/// only if the reserved root id is present. Ids are kept in a sorted map
/// so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeGraph {
    nodes: BTreeMap<String, Node>,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized document, requiring the root node.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let graph: NodeGraph = serde_json::from_str(text)?;
        graph.require_root()
    }

    /// Build a graph from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let graph: NodeGraph = serde_json::from_value(value)?;
        graph.require_root()
    }

    fn require_root(self) -> Result<Self, DocumentError> {
        if self.nodes.contains_key(ROOT_ID) {
            Ok(self)
        } else {
            Err(DocumentError::MissingRoot)
        }
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<&Node> {
        self.get(ROOT_ID)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, node: Node) -> Option<Node> {
        self.nodes.insert(id.into(), node)
    }

    pub fn remove(&mut self, id: &str) -> Option<Node> {
        self.nodes.remove(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// The id of the node listing `id` as a child, if any.
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.nodes.iter().find_map(|(parent_id, node)| {
            if node.children.iter().any(|child| child == id) {
                Some(parent_id.as_str())
            } else {
                None
            }
        })
    }

    /// Ids of `id` and every node below it, in depth-first pre-order.
    ///
    /// Dangling child references are skipped; a visited set guards
    /// against cycles in corrupted documents.
    pub fn subtree_ids(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        self.collect_subtree(id, &mut seen, &mut out);
        out
    }

    fn collect_subtree(&self, id: &str, seen: &mut HashSet<String>, out: &mut Vec<String>) {
        if !seen.insert(id.to_string()) {
            return;
        }
        let node = match self.get(id) {
            Some(node) => node,
            None => return,
        };
        out.push(id.to_string());
        for child in &node.children {
            self.collect_subtree(child, seen, out);
        }
    }

    /// Ids reachable from the root, in depth-first pre-order.
    pub fn reachable_from_root(&self) -> Vec<String> {
        self.subtree_ids(ROOT_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_node_doc() -> NodeGraph {
        NodeGraph::from_value(json!({
            "ROOT": {
                "type": {"resolvedName": "Container"},
                "props": {"background": "#ffffff"},
                "nodes": ["t1"]
            },
            "t1": {"type": "Text", "props": {"text": "Hi"}, "nodes": []}
        }))
        .unwrap()
    }

    #[test]
    fn test_parses_minimal_document() {
        let graph = NodeGraph::from_json(
            r##"{"ROOT": {"type": {"resolvedName": "Container"}, "props": {"background": "#ffffff"}, "nodes": []}}"##,
        )
        .unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.root().unwrap().type_name.name(), "Container");
    }

    #[test]
    fn test_rejects_document_without_root() {
        let err = NodeGraph::from_json(r#"{"a": {"type": "Text", "props": {}, "nodes": []}}"#)
            .unwrap_err();
        assert!(matches!(err, DocumentError::MissingRoot));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = NodeGraph::from_json("{not json").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn test_round_trips_through_json() {
        let graph = two_node_doc();
        let text = graph.to_json().unwrap();
        let back = NodeGraph::from_json(&text).unwrap();
        assert_eq!(back, graph);
    }

    #[test]
    fn test_parent_lookup() {
        let graph = two_node_doc();
        assert_eq!(graph.parent_of("t1"), Some(ROOT_ID));
        assert_eq!(graph.parent_of(ROOT_ID), None);
    }

    #[test]
    fn test_subtree_skips_dangling_references() {
        let graph = NodeGraph::from_value(json!({
            "ROOT": {"type": "Container", "props": {}, "nodes": ["a", "ghost", "b"]},
            "a": {"type": "Text", "props": {}, "nodes": []},
            "b": {"type": "Text", "props": {}, "nodes": []}
        }))
        .unwrap();

        assert_eq!(graph.reachable_from_root(), vec!["ROOT", "a", "b"]);
    }
}
