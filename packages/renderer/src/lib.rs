//! # Pagecraft Renderer
//!
//! Standalone renderer: serialized node graph → virtual DOM. No
//! dependency on the editing surface that produced the document.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Rendering is fully deterministic.**
//!
//! For any (graph, breakpoint) pair, rendering produces identical output
//! on every invocation:
//!
//! - One breakpoint per walk — the active tier is threaded down as an
//!   explicit parameter and never changes mid-traversal
//! - Ordered style/attribute maps — no hash iteration order leaks
//! - No time/random/environment dependence
//!
//! ## Recovery Policy
//!
//! Partial output beats no output for a visual builder. Missing nodes
//! and unknown types are skipped per node (with a `tracing` diagnostic);
//! malformed documents render a placeholder. A render pass never fails
//! and never mutates the graph.

pub mod registry;
pub mod renderer;
pub mod rules;
pub mod spacing;
pub mod vdom;


pub use registry::{NodeKind, Registry, RenderRule};
pub use renderer::{RenderContext, RenderOptions, Renderer};
pub use vdom::VNode;
