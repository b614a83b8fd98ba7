//! # Pagecraft Document
//!
//! Data model for serialized page documents: the flat node graph, the
//! breakpoint set, and the responsive-value resolution protocol that every
//! rendering and editing surface builds on.
//!
//! A document is a flat map of node id → node, serialized as JSON. Each
//! node carries a type name (which selects a rendering rule), a prop map,
//! and an ordered list of child ids. Any prop may hold either a plain
//! value or a per-breakpoint map; see [`responsive`] for the resolution
//! protocol.

pub mod breakpoint;
pub mod diagnostic;
pub mod error;
pub mod graph;
pub mod node;
pub mod responsive;

pub use breakpoint::Breakpoint;
pub use diagnostic::{check, check_with_types, Diagnostic, DiagnosticLevel};
pub use error::DocumentError;
pub use graph::NodeGraph;
pub use node::{Node, TypeName, ROOT_ID};
pub use responsive::{is_responsive, resolve, set_at_breakpoint, PropShape};
