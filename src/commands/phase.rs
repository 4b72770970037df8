//! `tasklens run-phase` command: assemble and dispatch a phase prompt.

use std::path::Path;

use crate::adapters::live::docs::FsDocumentSource;
use crate::commands::{deliver, load_context};
use crate::ports::docs::DocumentSource;
use crate::prompt::{build_phase_context, render};
use crate::task::{parse_tasks, segment_phases};

/// Execute the `run-phase` command for the phase with the given number.
///
/// The prompt covers every task the phase owns, in sequence, and asks the
/// assistant surface for a fresh session.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read, the phase does
/// not exist, or it owns no tasks.
pub fn run(workspace: &Path, change: &str, number: u32, dry_run: bool) -> Result<(), String> {
    let (ctx, config) = load_context(workspace)?;
    let docs = FsDocumentSource::new(&*ctx.fs, workspace, &config, change);

    let content = docs
        .task_list()
        .map_err(|e| format!("Failed to read task list for change {change}: {e}"))?;
    let forest = parse_tasks(&content, change);
    let phases = segment_phases(&content);

    let phase = phases.iter().find(|p| p.number == number).ok_or_else(|| {
        format!("No phase {number} in {}", docs.task_list_path().display())
    })?;
    let owned = phase.owned_tasks(&forest);
    if owned.is_empty() {
        return Err(format!("No tasks in phase {number}"));
    }

    let prompt = render(&build_phase_context(&docs, &forest, phase.title.clone(), owned));

    if dry_run {
        print!("{prompt}");
        return Ok(());
    }

    println!("Running phase: {}", phase.title);
    deliver(&ctx, &prompt, true, docs.change_root())
}
