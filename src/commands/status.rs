//! `tasklens status` command.

use std::path::Path;

use crate::adapters::live::docs::FsDocumentSource;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::ports::docs::DocumentSource;
use crate::task::{all_complete, flatten, parse_tasks, progress, segment_phases};

/// Execute the `status` command.
///
/// Displays a table of the change's phases showing title, task count,
/// completed count, and aggregate state, followed by overall totals.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read.
pub fn run(workspace: &Path, change: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let config = Config::load(&*ctx.fs, workspace)?;
    let docs = FsDocumentSource::new(&*ctx.fs, workspace, &config, change);

    let content = docs
        .task_list()
        .map_err(|e| format!("Failed to read task list for change {change}: {e}"))?;
    let forest = parse_tasks(&content, change);
    let phases = segment_phases(&content);

    let all = flatten(&forest);
    if all.is_empty() {
        println!("No tasks found in {}.", docs.task_list_path().display());
        return Ok(());
    }

    if phases.is_empty() {
        println!("No phases found.");
    } else {
        // Collect rows for column-width calculation.
        let mut rows: Vec<(String, String, String, String)> = Vec::new();
        for phase in &phases {
            let owned = phase.owned_tasks(&forest);
            let counts = progress(&owned);
            let state = if all_complete(&owned) { "complete" } else { "open" };
            rows.push((
                phase.title.clone(),
                counts.total.to_string(),
                counts.completed.to_string(),
                state.to_string(),
            ));
        }

        let phase_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(5).max(5);
        let tasks_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(5).max(5);
        let done_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(4).max(4);
        let state_width = rows.iter().map(|r| r.3.len()).max().unwrap_or(5).max(5);

        println!(
            "{:<phase_width$}  {:<tasks_width$}  {:<done_width$}  {:<state_width$}",
            "PHASE", "TASKS", "DONE", "STATE",
        );
        println!(
            "{:-<phase_width$}  {:-<tasks_width$}  {:-<done_width$}  {:-<state_width$}",
            "", "", "", "",
        );
        for (title, tasks, done, state) in &rows {
            println!(
                "{title:<phase_width$}  {tasks:<tasks_width$}  {done:<done_width$}  {state:<state_width$}",
            );
        }

        let unphased = all
            .iter()
            .filter(|t| {
                !phases.iter().any(|p| t.line > p.heading_line && t.line < p.end_line)
            })
            .count();
        if unphased > 0 {
            println!("\n{unphased} task(s) outside any phase.");
        }
    }

    let overall = progress(&all);
    println!("\n{}/{} tasks complete.", overall.completed, overall.total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::run;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn workspace(name: &str, tasks: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        write(&dir.join("openspec/changes/demo/tasks.md"), tasks);
        dir
    }

    #[test]
    fn status_with_phases_succeeds() {
        let dir = workspace(
            "tasklens_cmd_status_phases",
            "## Phase 1: Setup\n- [x] a\n- [ ] b\n## Phase 2: Build\n- [x] c\n",
        );
        assert!(run(&dir, "demo").is_ok());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn status_without_phases_succeeds() {
        let dir = workspace("tasklens_cmd_status_flat", "- [x] a\n- [ ] b\n");
        assert!(run(&dir, "demo").is_ok());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn status_for_missing_change_is_an_error() {
        let dir = workspace("tasklens_cmd_status_missing", "- [ ] a\n");
        let result = run(&dir, "nonexistent");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("nonexistent"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
