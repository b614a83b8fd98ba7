//! # Pagecraft Editor
//!
//! Document editing engine for pagecraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: JSON text ↔ NodeGraph             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Load/save documents                      │
//! │  - Apply mutations with validation          │
//! │  - Responsive prop writes (lift + set)      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: NodeGraph → VDOM                  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The node graph is the source of truth**: rendered output is a
//!    derived view and is never written back
//! 2. **Prop writes are pure value updates**: a breakpoint-targeted
//!    write builds a new prop value through the responsive resolver
//!    instead of editing the old one in place
//! 3. **Structural operations validate before applying**: no orphaned
//!    children, no cycles, no dangling root
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{Breakpoint, Document, Mutation};
//!
//! let mut doc = Document::load("page.json".into())?;
//!
//! doc.apply(Mutation::SetProp {
//!     node_id: "t1".to_string(),
//!     prop: "fontSize".to_string(),
//!     breakpoint: Some(Breakpoint::Desktop),
//!     value: 24.into(),
//! })?;
//!
//! doc.save()?;
//! ```

mod document;
mod errors;
mod mutations;

pub use document::{Document, DocumentStorage};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationResult};

// Re-export common types for convenience
pub use pagecraft_document::{Breakpoint, Node, NodeGraph};
