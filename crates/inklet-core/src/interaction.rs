//! Pointer interaction status.

use serde::{Deserialize, Serialize};

/// Phase of the single active pointer.
///
/// The status is threaded through the editor state rather than kept in a
/// free-standing mutable cell, preserving the same transition table:
/// `Idle → Pointing` on pointer-down over a shape, `Pointing → Dragging`
/// on the first move, and back to `Idle` on pointer-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerStatus {
    #[default]
    Idle,
    /// Pointer is down on a shape but has not moved yet.
    Pointing,
    /// Pointer moved while down; selected shapes follow it.
    Dragging,
}
