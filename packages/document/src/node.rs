use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved id of the document root node.
pub const ROOT_ID: &str = "ROOT";

/// Wire encoding of a node's type name.
///
/// The editing surface serializes registered components as
/// `{"resolvedName": "Container"}` but hand-written or legacy documents
/// may carry a bare string. Both are accepted, and a document
/// round-trips with whichever form it used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeName {
    Resolved {
        #[serde(rename = "resolvedName")]
        resolved_name: String,
    },
    Bare(String),
}

impl TypeName {
    pub fn bare(name: impl Into<String>) -> Self {
        TypeName::Bare(name.into())
    }

    pub fn resolved(name: impl Into<String>) -> Self {
        TypeName::Resolved {
            resolved_name: name.into(),
        }
    }

    /// The type name regardless of wire encoding.
    pub fn name(&self) -> &str {
        match self {
            TypeName::Resolved { resolved_name } => resolved_name,
            TypeName::Bare(name) => name,
        }
    }
}

/// A single block in the document tree.
///
/// Extra wire fields emitted by editing surfaces (`displayName`,
/// `custom`, `parent`, …) are ignored on read; the persisted data model
/// is type + props + child ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Selects which rendering rule applies.
    #[serde(rename = "type")]
    pub type_name: TypeName,

    /// Stylable properties. Each value is either a literal or a
    /// per-breakpoint map; see [`crate::responsive`].
    #[serde(default)]
    pub props: Map<String, Value>,

    /// Child ids in render order (left-to-right / top-to-bottom).
    #[serde(default, rename = "nodes")]
    pub children: Vec<String>,
}

impl Node {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: TypeName::Bare(type_name.into()),
            props: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: Value) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    pub fn with_children<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_bare_type_name() {
        let node: Node = serde_json::from_value(json!({
            "type": "Text",
            "props": {"text": "Hi"},
            "nodes": []
        }))
        .unwrap();

        assert_eq!(node.type_name.name(), "Text");
        assert_eq!(node.prop("text"), Some(&json!("Hi")));
    }

    #[test]
    fn test_accepts_resolved_type_name() {
        let node: Node = serde_json::from_value(json!({
            "type": {"resolvedName": "Container"},
            "props": {},
            "nodes": ["a", "b"]
        }))
        .unwrap();

        assert_eq!(node.type_name.name(), "Container");
        assert_eq!(node.children, vec!["a", "b"]);
    }

    #[test]
    fn test_type_name_round_trips_wire_form() {
        let resolved = TypeName::resolved("Button");
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json, json!({"resolvedName": "Button"}));

        let bare = TypeName::bare("Button");
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!("Button"));
    }

    #[test]
    fn test_missing_props_and_nodes_default_empty() {
        let node: Node = serde_json::from_value(json!({"type": "Button"})).unwrap();
        assert!(node.props.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_editor_metadata_fields_are_ignored() {
        let node: Node = serde_json::from_value(json!({
            "type": {"resolvedName": "Text"},
            "isCanvas": false,
            "displayName": "Text",
            "custom": {},
            "hidden": false,
            "parent": "ROOT",
            "linkedNodes": {},
            "props": {"fontSize": 16},
            "nodes": []
        }))
        .unwrap();

        assert_eq!(node.type_name.name(), "Text");
        assert_eq!(node.prop("fontSize"), Some(&json!(16)));
    }
}
