//! Declarative editor annotations for task lists.
//!
//! A stateless view over a parsed forest and its phases: per-line task
//! annotations (glyph + action label) and per-phase lens entries with
//! progress counts. Editor adapters consume this as plain data; lifecycle
//! and disposal of any decoration objects belong entirely to them.

use serde::Serialize;

use crate::task::{all_complete, flatten, progress, Phase, Task, TaskStatus};

/// Annotation for one task line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskAnnotation {
    /// Zero-based line of the task.
    pub line: usize,
    /// The task's status.
    pub status: TaskStatus,
    /// Gutter glyph for the status.
    pub glyph: String,
    /// Action label for a lens or decoration on this line.
    pub action: String,
}

/// Lens entry for one phase heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseAnnotation {
    /// Zero-based line of the phase heading.
    pub line: usize,
    /// Heading text of the phase.
    pub title: String,
    /// Completed tasks among the phase's owned set.
    pub completed: usize,
    /// Total tasks owned by the phase.
    pub total: usize,
    /// Whether the phase is fully complete (recursive, all descendants).
    pub complete: bool,
    /// Action label for the phase lens.
    pub action: String,
}

/// The full annotation set for one task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationSet {
    /// Identifier of the annotated task list.
    pub group_id: String,
    /// One entry per task line, in document order.
    pub tasks: Vec<TaskAnnotation>,
    /// One entry per phase heading, in document order.
    pub phases: Vec<PhaseAnnotation>,
}

fn task_glyph(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✓",
        TaskStatus::InProgress => "●",
        TaskStatus::NotStarted => "▶",
    }
}

fn task_action(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "Rerun task",
        TaskStatus::InProgress => "Continue task",
        TaskStatus::NotStarted => "Start task",
    }
}

/// Computes the annotation set for a parsed forest and its phases.
#[must_use]
pub fn annotate(group_id: &str, forest: &[Task], phases: &[Phase]) -> AnnotationSet {
    let tasks = flatten(forest)
        .into_iter()
        .map(|task| TaskAnnotation {
            line: task.line,
            status: task.status,
            glyph: task_glyph(task.status).to_string(),
            action: task_action(task.status).to_string(),
        })
        .collect();

    let phases = phases
        .iter()
        .map(|phase| {
            let owned = phase.owned_tasks(forest);
            let counts = progress(&owned);
            let complete = all_complete(&owned);
            PhaseAnnotation {
                line: phase.heading_line,
                title: phase.title.clone(),
                completed: counts.completed,
                total: counts.total,
                complete,
                action: if complete { "Rerun phase" } else { "Run phase" }.to_string(),
            }
        })
        .collect();

    AnnotationSet { group_id: group_id.to_string(), tasks, phases }
}

#[cfg(test)]
mod tests {
    use super::annotate;
    use crate::task::{parse_tasks, segment_phases};

    #[test]
    fn task_annotations_carry_action_labels() {
        let content = "- [ ] open\n- [-] active\n- [x] done";
        let forest = parse_tasks(content, "c");
        let set = annotate("c", &forest, &[]);
        let actions: Vec<&str> = set.tasks.iter().map(|t| t.action.as_str()).collect();
        assert_eq!(actions, vec!["Start task", "Continue task", "Rerun task"]);
        let glyphs: Vec<&str> = set.tasks.iter().map(|t| t.glyph.as_str()).collect();
        assert_eq!(glyphs, vec!["▶", "●", "✓"]);
    }

    #[test]
    fn phase_lens_counts_owned_tasks() {
        let content = "## Phase 1: Setup\n- [x] a\n- [ ] b\n  - [-] b1";
        let forest = parse_tasks(content, "c");
        let phases = segment_phases(content);
        let set = annotate("c", &forest, &phases);

        assert_eq!(set.phases.len(), 1);
        let lens = &set.phases[0];
        assert_eq!(lens.title, "Phase 1: Setup");
        assert_eq!(lens.completed, 1);
        assert_eq!(lens.total, 3);
        assert!(!lens.complete);
        assert_eq!(lens.action, "Run phase");
    }

    #[test]
    fn complete_phase_offers_rerun() {
        let content = "## Phase 1: Done\n- [x] a\n  - [x] a1";
        let forest = parse_tasks(content, "c");
        let phases = segment_phases(content);
        let set = annotate("c", &forest, &phases);
        assert!(set.phases[0].complete);
        assert_eq!(set.phases[0].action, "Rerun phase");
    }

    #[test]
    fn annotations_serialize_to_json() {
        let content = "- [x] a";
        let forest = parse_tasks(content, "c");
        let set = annotate("c", &forest, &[]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"status\":\"completed\""));
        assert!(json.contains("\"group_id\":\"c\""));
    }
}
