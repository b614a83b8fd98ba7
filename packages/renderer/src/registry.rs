//! Type dispatch for rendering rules.
//!
//! The supported node types form a closed set ([`NodeKind`]); the
//! registry maps each kind to its rule and is checked for completeness
//! at the boundary, so a missing rule surfaces before traversal instead
//! of deep in recursion.

use crate::renderer::RenderContext;
use crate::rules::{ButtonRule, ContainerRule, ImageRule, TextRule};
use crate::vdom::VNode;
use pagecraft_document::Node;
use std::collections::HashMap;

/// Closed set of node types the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Container,
    Text,
    Button,
    Image,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Container,
        NodeKind::Text,
        NodeKind::Button,
        NodeKind::Image,
    ];

    /// Map a wire type name to a kind.
    ///
    /// `UserImage` is the editing surface's registered name for the
    /// image block; `Image` is accepted for hand-written documents.
    pub fn from_type_name(name: &str) -> Option<NodeKind> {
        match name {
            "Container" => Some(NodeKind::Container),
            "Text" => Some(NodeKind::Text),
            "Button" => Some(NodeKind::Button),
            "UserImage" | "Image" => Some(NodeKind::Image),
            _ => None,
        }
    }

    /// Every wire type name with a rendering rule, for diagnostics.
    pub fn known_type_names() -> &'static [&'static str] {
        &["Container", "Text", "Button", "UserImage", "Image"]
    }
}

/// A per-type rendering rule: resolved props + children → visual output.
///
/// Rules resolve every prop they use through the responsive resolver
/// and supply their own per-property defaults, so documents produced
/// before a property existed still render correctly.
pub trait RenderRule {
    fn render(&self, node: &Node, ctx: &RenderContext<'_>) -> VNode;
}

/// Static mapping from node kind to rendering rule.
pub struct Registry {
    rules: HashMap<NodeKind, Box<dyn RenderRule>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry with every built-in rule registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(NodeKind::Container, Box::new(ContainerRule));
        registry.register(NodeKind::Text, Box::new(TextRule));
        registry.register(NodeKind::Button, Box::new(ButtonRule));
        registry.register(NodeKind::Image, Box::new(ImageRule));
        registry
    }

    pub fn register(&mut self, kind: NodeKind, rule: Box<dyn RenderRule>) {
        self.rules.insert(kind, rule);
    }

    pub fn rule(&self, kind: NodeKind) -> Option<&dyn RenderRule> {
        self.rules.get(&kind).map(|rule| rule.as_ref())
    }

    /// Kinds with no registered rule.
    pub fn missing_kinds(&self) -> Vec<NodeKind> {
        NodeKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.rules.contains_key(kind))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
