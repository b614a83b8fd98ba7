//! # Responsive-value resolution
//!
//! Every stylable prop may be stored either as a plain value or as a
//! per-breakpoint map (`{"mobile": 14, "desktop": 24}`). This module is
//! the single place that distinguishes the two shapes and resolves a
//! prop to a concrete value for a given breakpoint.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Resolution is total and deterministic.**
//!
//! For any `(prop, breakpoint)` pair, [`resolve`] returns the same value
//! on every invocation and never fails. Both operations are pure: no
//! error conditions, no mutation of their inputs.
//!
//! ## Shape rules
//!
//! A value is *responsive* iff it is a non-array JSON object carrying at
//! least one breakpoint key. Everything else — scalars, arrays (edge
//! insets like `[10, 20, 10, 20]`), keyless objects — is a *literal*
//! and resolves to itself at every breakpoint. A map mixing breakpoint
//! and non-breakpoint keys counts as responsive; that is a deliberate
//! choice, not a detected error (the mix is reported separately by
//! document diagnostics, never rejected here).

use crate::Breakpoint;
use serde_json::{Map, Value};

/// Structural classification of a prop value.
///
/// The literal-vs-responsive test lives in [`PropShape::of`] and only
/// there, so the two shapes are an explicit tagged view rather than ad
/// hoc sniffing scattered across callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropShape<'a> {
    /// A plain value: resolves to itself at every breakpoint.
    Literal(&'a Value),

    /// A per-breakpoint map with at least one breakpoint key.
    Responsive(&'a Map<String, Value>),
}

impl<'a> PropShape<'a> {
    /// Classify a prop value.
    pub fn of(value: &'a Value) -> Self {
        match value.as_object() {
            Some(map) if Breakpoint::ORDER.iter().any(|bp| map.contains_key(bp.as_str())) => {
                PropShape::Responsive(map)
            }
            _ => PropShape::Literal(value),
        }
    }
}

/// Whether a prop currently holds per-breakpoint values.
pub fn is_responsive(value: &Value) -> bool {
    matches!(PropShape::of(value), PropShape::Responsive(_))
}

/// Resolve a prop to its effective value at `breakpoint`.
///
/// Fallback chain for responsive maps: the requested breakpoint, then
/// mobile, then the first entry present in ascending breakpoint order.
/// Absent and null props resolve to `None` so every caller can supply
/// its own per-property default.
pub fn resolve<'a>(prop: Option<&'a Value>, breakpoint: Breakpoint) -> Option<&'a Value> {
    let value = prop?;
    if value.is_null() {
        return None;
    }

    match PropShape::of(value) {
        PropShape::Literal(literal) => Some(literal),
        PropShape::Responsive(map) => map
            .get(breakpoint.as_str())
            .or_else(|| map.get(Breakpoint::Mobile.as_str()))
            .or_else(|| Breakpoint::ORDER.iter().find_map(|bp| map.get(bp.as_str()))),
    }
}

/// Write `new_value` at `breakpoint`, returning the updated prop.
///
/// A literal prop is first *lifted*: the original value is copied into
/// every other breakpoint before the target entry is written, so the
/// appearance at tiers the user has not customized is preserved. A
/// responsive prop keeps every entry except the targeted one, including
/// stray non-breakpoint keys. The input is never mutated.
pub fn set_at_breakpoint(current: Option<&Value>, breakpoint: Breakpoint, new_value: Value) -> Value {
    if let Some(value) = current {
        if let PropShape::Responsive(map) = PropShape::of(value) {
            let mut updated = map.clone();
            updated.insert(breakpoint.as_str().to_string(), new_value);
            return Value::Object(updated);
        }
    }

    let mut lifted = Map::new();
    if let Some(value) = current.filter(|v| !v.is_null()) {
        for bp in Breakpoint::ORDER {
            lifted.insert(bp.as_str().to_string(), value.clone());
        }
    }
    lifted.insert(breakpoint.as_str().to_string(), new_value);
    Value::Object(lifted)
}
