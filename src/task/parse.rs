//! Task list parsing: line grammar and indentation-driven tree construction.
//!
//! Only two line shapes matter to this crate: checkbox list items (parsed
//! here) and level-2 headings (handled by [`crate::task::phase`]). Everything
//! else is skipped while still counting toward line numbers.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{Task, TaskStatus};

/// Grammar for a checkbox list item: indent, marker, title.
static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)-\s+\[([x\s\-~])\]\s+(.+)$").expect("task line regex is valid")
});

/// Trailing requirement annotation inside a task title.
static REQUIREMENT_REFS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_Requirements:\s+([\d.]+(?:,\s*[\d.]+)*)_").expect("requirement regex is valid")
});

/// A single recognized checkbox line, before tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskLine {
    /// Number of literal whitespace characters before the `-`.
    indent: usize,
    status: TaskStatus,
    title: String,
    requirement_refs: Vec<String>,
}

/// Recognizes one line as a checkbox list item.
///
/// Returns `None` for anything that does not match the grammar; malformed
/// checkbox syntax is never an error, the line is simply not a task.
fn parse_task_line(line: &str) -> Option<TaskLine> {
    let caps = TASK_LINE.captures(line)?;
    let indent = caps[1].len();
    let status = match &caps[2] {
        "x" => TaskStatus::Completed,
        "-" | "~" => TaskStatus::InProgress,
        _ => TaskStatus::NotStarted,
    };
    let title = caps[3].trim().to_string();

    // Extract references from the annotation without removing it from the
    // title; display-side stripping is the caller's concern.
    let requirement_refs = REQUIREMENT_REFS.captures(&title).map_or_else(Vec::new, |req| {
        req[1].split(',').map(|r| r.trim().to_string()).collect()
    });

    Some(TaskLine { indent, status, title, requirement_refs })
}

/// Parses a task list document into a forest of [`Task`] trees.
///
/// Nesting follows literal indentation width: a stack of open ancestors is
/// popped while its top is at the same or deeper indent, then the new task
/// attaches to the remaining top (or becomes a root). Irregular indentation
/// never fails; it only flattens or deepens the resulting tree.
#[must_use]
pub fn parse_tasks(content: &str, group_id: &str) -> Vec<Task> {
    let mut roots: Vec<Task> = Vec::new();
    let mut stack: Vec<(Task, usize)> = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let Some(parsed) = parse_task_line(line) else { continue };

        let task = Task {
            id: format!("{group_id}-{line_no}"),
            title: parsed.title,
            status: parsed.status,
            level: parsed.indent / 2,
            line: line_no,
            group_id: group_id.to_string(),
            requirement_refs: parsed.requirement_refs,
            children: Vec::new(),
        };

        // A same-or-shallower sibling ends the previous ancestor chain.
        while stack.last().is_some_and(|&(_, top_indent)| top_indent >= parsed.indent) {
            let Some((finished, _)) = stack.pop() else { break };
            attach(finished, &mut stack, &mut roots);
        }

        stack.push((task, parsed.indent));
    }

    while let Some((finished, _)) = stack.pop() {
        attach(finished, &mut stack, &mut roots);
    }

    roots
}

/// Attaches a finished task to the current stack top, or to the root list
/// when no ancestor remains open.
fn attach(finished: Task, stack: &mut Vec<(Task, usize)>, roots: &mut Vec<Task>) {
    match stack.last_mut() {
        Some((parent, _)) => parent.children.push(finished),
        None => roots.push(finished),
    }
}

/// Finds the task at the given zero-based source line, at any depth.
#[must_use]
pub fn find_task_at_line(tasks: &[Task], line: usize) -> Option<&Task> {
    for task in tasks {
        if task.line == line {
            return Some(task);
        }
        if let Some(found) = find_task_at_line(&task.children, line) {
            return Some(found);
        }
    }
    None
}

/// Flattens a forest in pre-order. Line numbers in the result are strictly
/// increasing, matching original document order.
#[must_use]
pub fn flatten(tasks: &[Task]) -> Vec<&Task> {
    let mut result = Vec::new();
    collect(tasks, &mut result);
    result
}

fn collect<'a>(tasks: &'a [Task], into: &mut Vec<&'a Task>) {
    for task in tasks {
        into.push(task);
        collect(&task.children, into);
    }
}

/// Returns all tasks, at any depth, on lines before `line`.
#[must_use]
pub fn tasks_before(tasks: &[Task], line: usize) -> Vec<&Task> {
    flatten(tasks).into_iter().filter(|t| t.line < line).collect()
}
