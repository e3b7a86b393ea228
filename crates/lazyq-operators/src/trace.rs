//! Tracing hooks for buffering operators.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
pub fn emit_materialized(operator: &'static str, buffered: usize) {
    tracing::trace!(operator, buffered, "materialized");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_materialized(_operator: &'static str, _buffered: usize) {}
