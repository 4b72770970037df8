//! Prompt context: the bundle of fragments the assembler renders.

use std::path::PathBuf;

use crate::ports::docs::{DocRef, DocumentSource, SpecDelta};
use crate::task::{tasks_before, Task};

/// What a prompt is being assembled for: one task, or a phase's task group.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptTarget<'a> {
    /// A single task.
    Task(&'a Task),
    /// A phase: its heading title and every task it owns, in line order.
    Phase {
        /// Heading text of the phase (e.g. `"Phase 1: Setup"`).
        title: String,
        /// The phase's owned tasks, flattened in line order.
        tasks: Vec<&'a Task>,
    },
}

/// The fragments consumed by the prompt assembler. Built fresh per
/// invocation; borrows the forest and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptContext<'a> {
    /// The methodology document reference.
    pub methodology: DocRef,
    /// The project document, when present and non-empty.
    pub project: Option<DocRef>,
    /// The change's proposal reference.
    pub proposal: DocRef,
    /// The design document, when present and non-empty.
    pub design: Option<DocRef>,
    /// Named spec-delta fragments, ordered by capability name.
    pub specs: Vec<SpecDelta>,
    /// Tasks on lines before the target, flattened in line order.
    pub previous: Vec<&'a Task>,
    /// The task or task group being run.
    pub target: PromptTarget<'a>,
    /// Path of the task list file, for the closing instructions.
    pub task_list_path: PathBuf,
}

/// Builds the context for running a single task.
#[must_use]
pub fn build_task_context<'a>(
    docs: &dyn DocumentSource,
    forest: &'a [Task],
    task: &'a Task,
) -> PromptContext<'a> {
    PromptContext {
        methodology: docs.methodology(),
        project: docs.project(),
        proposal: docs.proposal(),
        design: docs.design(),
        specs: docs.spec_deltas(),
        previous: tasks_before(forest, task.line),
        target: PromptTarget::Task(task),
        task_list_path: docs.task_list_path(),
    }
}

/// Builds the context for running a phase's task group.
///
/// `tasks` must be the phase's owned tasks in line order and non-empty;
/// previous tasks are everything before the first of them.
#[must_use]
pub fn build_phase_context<'a>(
    docs: &dyn DocumentSource,
    forest: &'a [Task],
    title: String,
    tasks: Vec<&'a Task>,
) -> PromptContext<'a> {
    let first_line = tasks.first().map_or(0, |t| t.line);
    PromptContext {
        methodology: docs.methodology(),
        project: docs.project(),
        proposal: docs.proposal(),
        design: docs.design(),
        specs: docs.spec_deltas(),
        previous: tasks_before(forest, first_line),
        target: PromptTarget::Phase { title, tasks },
        task_list_path: docs.task_list_path(),
    }
}
