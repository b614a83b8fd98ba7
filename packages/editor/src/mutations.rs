//! # Document Mutations
//!
//! High-level semantic operations on a node graph, as invoked by
//! editing surfaces (settings panels, layer trees).
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents a semantic operation
//! 2. **Validated**: All mutations validate structural constraints first
//! 3. **Pure value updates**: A breakpoint-targeted prop write builds a
//!    new prop value through the responsive resolver; the old value is
//!    never edited in place
//!
//! ## Mutation Semantics
//!
//! ### SetProp
//! - With a breakpoint: literal props are lifted to responsive maps,
//!   then only the targeted tier is replaced
//! - Without a breakpoint: atomic replacement of the whole prop
//!
//! ### MoveNode
//! - Atomic relocation to a new parent at index
//! - Fails if the node or parent is missing (does not create orphans)
//! - Fails if the move would create a cycle
//!
//! ### RemoveNode
//! - Removes the node and all descendants
//! - Detaches the id from its parent's child list

use pagecraft_document::{set_at_breakpoint, Breakpoint, Node, NodeGraph, ROOT_ID};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Write a prop: at one breakpoint (lifting literals as needed) or
    /// literally when no breakpoint is given
    SetProp {
        node_id: String,
        prop: String,
        breakpoint: Option<Breakpoint>,
        value: Value,
    },

    /// Clear a prop so the rendering rule's default applies again
    RemoveProp { node_id: String, prop: String },

    /// Attach a new node under a parent at index
    InsertNode {
        parent_id: String,
        index: usize,
        node_id: String,
        node: Node,
    },

    /// Move a node to a new parent at index
    MoveNode {
        node_id: String,
        new_parent_id: String,
        index: usize,
    },

    /// Remove a node and all its descendants
    RemoveNode { node_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("The root node cannot be moved or removed")]
    RootImmutable,
}

/// Result of applying a mutation
#[derive(Debug, Clone)]
pub struct MutationResult {
    /// New version number
    pub version: u64,
}

impl Mutation {
    /// Apply mutation to the graph with validation
    pub fn apply(&self, graph: &mut NodeGraph) -> Result<(), MutationError> {
        // Validate first
        self.validate(graph)?;

        match self {
            Mutation::SetProp {
                node_id,
                prop,
                breakpoint,
                value,
            } => Self::apply_set_prop(graph, node_id, prop, *breakpoint, value),

            Mutation::RemoveProp { node_id, prop } => {
                Self::apply_remove_prop(graph, node_id, prop)
            }

            Mutation::InsertNode {
                parent_id,
                index,
                node_id,
                node,
            } => Self::apply_insert(graph, parent_id, *index, node_id, node),

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                index,
            } => Self::apply_move(graph, node_id, new_parent_id, *index),

            Mutation::RemoveNode { node_id } => Self::apply_remove(graph, node_id),
        }
    }

    fn apply_set_prop(
        graph: &mut NodeGraph,
        node_id: &str,
        prop: &str,
        breakpoint: Option<Breakpoint>,
        value: &Value,
    ) -> Result<(), MutationError> {
        let node = graph
            .get_mut(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        let updated = match breakpoint {
            Some(bp) => set_at_breakpoint(node.prop(prop), bp, value.clone()),
            None => value.clone(),
        };
        node.props.insert(prop.to_string(), updated);
        Ok(())
    }

    fn apply_remove_prop(
        graph: &mut NodeGraph,
        node_id: &str,
        prop: &str,
    ) -> Result<(), MutationError> {
        let node = graph
            .get_mut(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
        node.props.remove(prop);
        Ok(())
    }

    fn apply_insert(
        graph: &mut NodeGraph,
        parent_id: &str,
        index: usize,
        node_id: &str,
        node: &Node,
    ) -> Result<(), MutationError> {
        graph.insert(node_id.to_string(), node.clone());

        let parent = graph
            .get_mut(parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string()))?;
        let insert_index = index.min(parent.children.len());
        parent.children.insert(insert_index, node_id.to_string());
        Ok(())
    }

    fn apply_move(
        graph: &mut NodeGraph,
        node_id: &str,
        new_parent_id: &str,
        index: usize,
    ) -> Result<(), MutationError> {
        // Detach from the current parent first
        if let Some(parent_id) = graph.parent_of(node_id).map(str::to_string) {
            if let Some(parent) = graph.get_mut(&parent_id) {
                parent.children.retain(|child| child != node_id);
            }
        }

        let parent = graph
            .get_mut(new_parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(new_parent_id.to_string()))?;
        let insert_index = index.min(parent.children.len());
        parent.children.insert(insert_index, node_id.to_string());
        Ok(())
    }

    fn apply_remove(graph: &mut NodeGraph, node_id: &str) -> Result<(), MutationError> {
        if let Some(parent_id) = graph.parent_of(node_id).map(str::to_string) {
            if let Some(parent) = graph.get_mut(&parent_id) {
                parent.children.retain(|child| child != node_id);
            }
        }

        for id in graph.subtree_ids(node_id) {
            graph.remove(&id);
        }
        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, graph: &NodeGraph) -> Result<(), MutationError> {
        match self {
            Mutation::SetProp { node_id, .. } | Mutation::RemoveProp { node_id, .. } => {
                Self::require_node(graph, node_id)
            }

            Mutation::InsertNode {
                parent_id, node_id, ..
            } => {
                Self::require_node(graph, parent_id)
                    .map_err(|_| MutationError::ParentNotFound(parent_id.clone()))?;
                if graph.contains(node_id) {
                    return Err(MutationError::DuplicateNode(node_id.clone()));
                }
                Ok(())
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                ..
            } => {
                if node_id == ROOT_ID {
                    return Err(MutationError::RootImmutable);
                }
                Self::require_node(graph, node_id)?;
                Self::require_node(graph, new_parent_id)
                    .map_err(|_| MutationError::ParentNotFound(new_parent_id.clone()))?;

                // Moving a node under itself or one of its descendants
                // would detach the subtree into a cycle.
                if graph
                    .subtree_ids(node_id)
                    .iter()
                    .any(|id| id == new_parent_id)
                {
                    return Err(MutationError::CycleDetected);
                }
                Ok(())
            }

            Mutation::RemoveNode { node_id } => {
                if node_id == ROOT_ID {
                    return Err(MutationError::RootImmutable);
                }
                Self::require_node(graph, node_id)
            }
        }
    }

    fn require_node(graph: &NodeGraph, node_id: &str) -> Result<(), MutationError> {
        if graph.contains(node_id) {
            Ok(())
        } else {
            Err(MutationError::NodeNotFound(node_id.to_string()))
        }
    }
}
