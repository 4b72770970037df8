//! Completion aggregation over task sets and subtrees.

use super::model::{Task, TaskStatus};

/// Completed/total counts over a set of tasks, for lens titles and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Number of tasks in the set with status completed.
    pub completed: usize,
    /// Total number of tasks in the set.
    pub total: usize,
}

/// Returns `true` when the task and every descendant, at any depth, is
/// completed.
#[must_use]
pub fn subtree_complete(task: &Task) -> bool {
    task.status == TaskStatus::Completed && task.children.iter().all(subtree_complete)
}

/// Returns `true` when the set is non-empty and every member's entire
/// subtree is completed.
///
/// Descendants count even when they are not listed in the set themselves:
/// a completed task with an incomplete nested child makes the set
/// incomplete. An empty set is never complete.
#[must_use]
pub fn all_complete(tasks: &[&Task]) -> bool {
    !tasks.is_empty() && tasks.iter().all(|t| subtree_complete(t))
}

/// Counts completed and total tasks over the given set.
#[must_use]
pub fn progress(tasks: &[&Task]) -> Progress {
    Progress {
        completed: tasks.iter().filter(|t| t.status == TaskStatus::Completed).count(),
        total: tasks.len(),
    }
}
