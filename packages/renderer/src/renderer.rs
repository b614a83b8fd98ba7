//! Node-tree rendering.
//!
//! Depth-first, pre-order walk of a node graph, dispatching each node's
//! type through the registry. The active breakpoint is fixed for the
//! duration of a pass and passed down explicitly; the graph is read,
//! never written.

use crate::registry::{NodeKind, Registry};
use crate::vdom::VNode;
use pagecraft_document::{resolve, Breakpoint, Node, NodeGraph, ROOT_ID};
use serde_json::Value;
use tracing::{debug, warn};

/// Options for a render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Explicit breakpoint override; wins over `viewport_width`.
    pub breakpoint: Option<Breakpoint>,

    /// Live viewport width, mapped through the fixed thresholds when no
    /// override is given.
    pub viewport_width: Option<u32>,
}

impl RenderOptions {
    /// Render at an explicit breakpoint.
    pub fn at(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint: Some(breakpoint),
            viewport_width: None,
        }
    }

    /// Derive the breakpoint from a viewport width.
    pub fn for_width(width: u32) -> Self {
        Self {
            breakpoint: None,
            viewport_width: Some(width),
        }
    }

    fn active_breakpoint(&self) -> Breakpoint {
        if let Some(breakpoint) = self.breakpoint {
            return breakpoint;
        }
        if let Some(width) = self.viewport_width {
            return Breakpoint::from_width(width);
        }
        Breakpoint::default()
    }
}

/// Read-only context threaded down through the recursive walk.
pub struct RenderContext<'a> {
    graph: &'a NodeGraph,
    registry: &'a Registry,
    breakpoint: Breakpoint,
}

impl<'a> RenderContext<'a> {
    /// The breakpoint this pass renders at.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Resolve a prop on `node` for the active breakpoint.
    pub fn prop<'n>(&self, node: &'n Node, name: &str) -> Option<&'n Value> {
        resolve(node.prop(name), self.breakpoint)
    }

    /// Render each child id in order. Missing ids and unknown types are
    /// skipped so siblings of corrupt entries still render.
    pub fn render_children(&self, ids: &[String]) -> Vec<VNode> {
        ids.iter().filter_map(|id| self.render_node(id)).collect()
    }

    /// Render one node by id; `None` when the id has no node or the
    /// type has no rule.
    pub fn render_node(&self, id: &str) -> Option<VNode> {
        let node = match self.graph.get(id) {
            Some(node) => node,
            None => {
                warn!("Node not found: {}", id);
                return None;
            }
        };

        let name = node.type_name.name();
        let kind = match NodeKind::from_type_name(name) {
            Some(kind) => kind,
            None => {
                warn!("Unknown component type: {}", name);
                return None;
            }
        };

        let rule = match self.registry.rule(kind) {
            Some(rule) => rule,
            None => {
                warn!("No rendering rule registered for {:?}", kind);
                return None;
            }
        };

        Some(rule.render(node, self))
    }
}

/// Standalone renderer: serialized node graph → virtual DOM.
pub struct Renderer {
    registry: Registry,
}

impl Renderer {
    /// Renderer with all built-in rules.
    pub fn new() -> Self {
        Self {
            registry: Registry::with_builtins(),
        }
    }

    /// Renderer with a custom rule set. Unregistered kinds are reported
    /// here, at the boundary, and skipped during traversal.
    pub fn with_registry(registry: Registry) -> Self {
        for kind in registry.missing_kinds() {
            warn!("No rendering rule registered for {:?}", kind);
        }
        Self { registry }
    }

    /// Render serialized JSON text. Malformed documents — bad JSON or a
    /// missing root — produce the placeholder, never an error.
    pub fn render_json(&self, text: &str, options: &RenderOptions) -> VNode {
        match NodeGraph::from_json(text) {
            Ok(graph) => self.render_graph(&graph, options),
            Err(err) => {
                debug!("Not a renderable document: {}", err);
                placeholder()
            }
        }
    }

    /// Render an already-parsed graph.
    pub fn render_graph(&self, graph: &NodeGraph, options: &RenderOptions) -> VNode {
        let ctx = RenderContext {
            graph,
            registry: &self.registry,
            breakpoint: options.active_breakpoint(),
        };
        ctx.render_node(ROOT_ID).unwrap_or_else(placeholder)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Well-defined output for documents with nothing to show.
fn placeholder() -> VNode {
    VNode::element("div")
        .with_style("padding", "20px")
        .with_style("text-align", "center")
        .with_style("color", "#999")
        .with_child(VNode::text("No content to display"))
}
