//! Core task model types.

use serde::{Deserialize, Serialize};

/// Execution state of a single task, derived from its checkbox marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// The checkbox is unmarked (or carries an unrecognized marker).
    NotStarted,
    /// The checkbox is marked `-` or `~`.
    InProgress,
    /// The checkbox is marked `x`.
    Completed,
}

/// One checkbox list item and its nested sub-items.
///
/// A parse produces a forest of these; every node exclusively owns its
/// `children` and no node is mutated after construction. Flattening the
/// forest in pre-order reproduces the original document line order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, `"<group_id>-<line>"`. Unique within a parse.
    pub id: String,
    /// Trimmed text of the list item. A trailing `_Requirements: …_`
    /// annotation is kept in place; only `requirement_refs` is extracted
    /// from it.
    pub title: String,
    /// Execution state from the checkbox marker, never inferred from text.
    pub status: TaskStatus,
    /// Nesting depth, `indent_chars / 2`.
    pub level: usize,
    /// Zero-based source line number.
    pub line: usize,
    /// Identifier of the owning task list (the change id).
    pub group_id: String,
    /// Ordered requirement reference tokens (e.g. `"1.1"`, `"2.3"`).
    pub requirement_refs: Vec<String>,
    /// Ordered child tasks, exclusively owned.
    pub children: Vec<Task>,
}
