//! `tasklens show` command.

use std::path::Path;

use crate::adapters::live::docs::FsDocumentSource;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::ports::docs::DocumentSource;
use crate::prompt::status_glyph;
use crate::task::{parse_tasks, Task};

/// Execute the `show` command.
///
/// Prints the parsed task forest as an indented, glyph-annotated tree, or as
/// JSON when `json` is set (for editor adapters and scripting).
///
/// # Errors
///
/// Returns an error string if the task list cannot be read or serialized.
pub fn run(workspace: &Path, change: &str, json: bool) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let config = Config::load(&*ctx.fs, workspace)?;
    let docs = FsDocumentSource::new(&*ctx.fs, workspace, &config, change);

    let content = docs
        .task_list()
        .map_err(|e| format!("Failed to read task list for change {change}: {e}"))?;
    let forest = parse_tasks(&content, change);

    if json {
        let rendered = serde_json::to_string_pretty(&forest)
            .map_err(|e| format!("Failed to serialize tasks: {e}"))?;
        println!("{rendered}");
        return Ok(());
    }

    if forest.is_empty() {
        println!("No tasks found in {}.", docs.task_list_path().display());
        return Ok(());
    }

    print_tree(&forest);
    Ok(())
}

fn print_tree(tasks: &[Task]) {
    for task in tasks {
        let indent = "  ".repeat(task.level);
        println!("{indent}{} {} (line {})", status_glyph(task.status), task.title, task.line);
        print_tree(&task.children);
    }
}
