//! Document diagnostics.
//!
//! Structural problems in a node graph are reported, never repaired:
//! rendering recovers from all of them locally, but editing surfaces
//! want to surface them to the user.

use crate::responsive::PropShape;
use crate::{Breakpoint, NodeGraph, ROOT_ID};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => f.write_str("error"),
            DiagnosticLevel::Warning => f.write_str("warning"),
            DiagnosticLevel::Info => f.write_str("info"),
        }
    }
}

/// A diagnostic message about a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// The node the issue was found on, if any
    pub node_id: Option<String>,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            rule: rule.into(),
            message: message.into(),
            node_id: None,
        }
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            rule: rule.into(),
            message: message.into(),
            node_id: None,
        }
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            rule: rule.into(),
            message: message.into(),
            node_id: None,
        }
    }

    pub fn on_node(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }
}

/// Check structural rules: dangling child references, responsive maps
/// mixing breakpoint and foreign keys, and nodes unreachable from the
/// root.
pub fn check(graph: &NodeGraph) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (id, node) in graph.iter() {
        for child in &node.children {
            if !graph.contains(child) {
                diagnostics.push(
                    Diagnostic::error(
                        "missing-node",
                        format!("Node \"{}\" references missing child \"{}\"", id, child),
                    )
                    .on_node(id),
                );
            }
        }

        for (prop, value) in &node.props {
            if let PropShape::Responsive(map) = PropShape::of(value) {
                let has_foreign_key = map
                    .keys()
                    .any(|key| Breakpoint::ORDER.iter().all(|bp| bp.as_str() != key));
                if has_foreign_key {
                    diagnostics.push(
                        Diagnostic::warning(
                            "mixed-keys",
                            format!(
                                "Prop \"{}\" on node \"{}\" mixes breakpoint and non-breakpoint keys",
                                prop, id
                            ),
                        )
                        .on_node(id),
                    );
                }
            }
        }
    }

    let reachable: HashSet<String> = graph.reachable_from_root().into_iter().collect();
    for (id, _) in graph.iter() {
        if id != ROOT_ID && !reachable.contains(id) {
            diagnostics.push(
                Diagnostic::info(
                    "orphan-node",
                    format!("Node \"{}\" is not reachable from the root", id),
                )
                .on_node(id),
            );
        }
    }

    diagnostics
}

/// [`check`] plus an unknown-type warning for every node whose type name
/// is not in `known_types`. The renderer supplies its registered names
/// so this crate stays independent of the rule set.
pub fn check_with_types(graph: &NodeGraph, known_types: &[&str]) -> Vec<Diagnostic> {
    let mut diagnostics = check(graph);

    for (id, node) in graph.iter() {
        let name = node.type_name.name();
        if !known_types.contains(&name) {
            diagnostics.push(
                Diagnostic::warning(
                    "unknown-type",
                    format!("Node \"{}\" has unknown type \"{}\"", id, name),
                )
                .on_node(id),
            );
        }
    }

    diagnostics
}
