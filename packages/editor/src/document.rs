//! # Document Handle
//!
//! Core document abstraction for pagecraft editing.
//!
//! A Document owns a node graph and its editing state. Documents can be:
//! - **Memory-backed**: Temporary, for testing or in-memory operations
//! - **File-backed**: Single-user editing with disk persistence
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Parse → Edit → Serialize → Save
//!   ↓      ↓       ↓        ↓         ↓
//! File  NodeGraph Mutations JSON    File
//! ```

use crate::{EditorError, Mutation, MutationResult};
use pagecraft_document::NodeGraph;
use std::path::PathBuf;

/// Editable page document
#[derive(Debug)]
pub struct Document {
    /// Path to the backing file (if any)
    pub path: PathBuf,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs)
    Memory { graph: NodeGraph },

    /// File-backed (single-user editing)
    File { graph: NodeGraph, dirty: bool },
}

impl Document {
    /// Create a document from serialized JSON (memory-backed)
    pub fn from_json(path: PathBuf, text: &str) -> Result<Self, EditorError> {
        let graph = NodeGraph::from_json(text)?;

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::Memory { graph },
        })
    }

    /// Create a document from a parsed graph (memory-backed)
    pub fn from_graph(graph: NodeGraph) -> Self {
        Self {
            path: PathBuf::new(),
            version: 0,
            storage: DocumentStorage::Memory { graph },
        }
    }

    /// Load a document from disk (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let text = std::fs::read_to_string(&path)?;
        let graph = NodeGraph::from_json(&text)?;

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::File {
                graph,
                dirty: false,
            },
        })
    }

    /// The current node graph
    pub fn graph(&self) -> &NodeGraph {
        match &self.storage {
            DocumentStorage::Memory { graph } => graph,
            DocumentStorage::File { graph, .. } => graph,
        }
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        match &mut self.storage {
            DocumentStorage::Memory { graph } | DocumentStorage::File { graph, .. } => {
                mutation.apply(graph)?;
            }
        }

        self.version += 1;
        if let DocumentStorage::File { dirty, .. } = &mut self.storage {
            *dirty = true;
        }

        Ok(MutationResult {
            version: self.version,
        })
    }

    /// Check if the document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            _ => false,
        }
    }

    /// Serialize the current graph
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(self.graph().to_json()?)
    }

    /// Save the document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { graph, dirty } => {
                std::fs::write(&self.path, graph.to_json_pretty()?)?;
                *dirty = false;
                Ok(())
            }
            _ => Err(EditorError::NotFileBacked),
        }
    }
}
