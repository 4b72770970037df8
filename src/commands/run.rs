//! `tasklens run` command: assemble and dispatch a single-task prompt.

use std::path::Path;

use crate::adapters::live::docs::FsDocumentSource;
use crate::commands::{deliver, load_context};
use crate::ports::docs::DocumentSource;
use crate::prompt::{build_task_context, render};
use crate::task::{find_task_at_line, parse_tasks};

/// Execute the `run` command for the task at the given zero-based line.
///
/// Assembles the prompt from the change's documents and the task list, then
/// dispatches it to the chat endpoint; with `dry_run` the prompt is printed
/// to stdout instead.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read or no task sits
/// on the given line.
pub fn run(workspace: &Path, change: &str, line: usize, dry_run: bool) -> Result<(), String> {
    let (ctx, config) = load_context(workspace)?;
    let docs = FsDocumentSource::new(&*ctx.fs, workspace, &config, change);

    let content = docs
        .task_list()
        .map_err(|e| format!("Failed to read task list for change {change}: {e}"))?;
    let forest = parse_tasks(&content, change);
    let task = find_task_at_line(&forest, line).ok_or_else(|| {
        format!("No task at line {line} in {}", docs.task_list_path().display())
    })?;

    let prompt = render(&build_task_context(&docs, &forest, task));

    if dry_run {
        print!("{prompt}");
        return Ok(());
    }

    println!("Running task: {}", task.title);
    deliver(&ctx, &prompt, false, docs.change_root())
}
