//! Prompt rendering: ordered optional section builders joined in one step.
//!
//! Every section builder returns either a complete block or `None`; the
//! final join is the only place blocks are combined. A header therefore
//! cannot render without its body. Field interpolation is literal string
//! substitution; document content is trusted and never escaped.

use std::fmt::Write as _;

use super::context::{PromptContext, PromptTarget};
use crate::task::{Task, TaskStatus};

/// Status glyph used in previous-task listings and tree displays.
#[must_use]
pub fn status_glyph(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✅",
        TaskStatus::InProgress => "🔵",
        TaskStatus::NotStarted => "⚪",
    }
}

/// Renders the full prompt for the given context.
///
/// Output is deterministic: identical contexts produce byte-identical
/// prompts.
#[must_use]
pub fn render(ctx: &PromptContext<'_>) -> String {
    let sections = [
        Some(title_section(&ctx.target)),
        Some(context_files_section(ctx)),
        spec_deltas_section(ctx),
        previous_tasks_section(&ctx.previous),
        Some(target_section(&ctx.target)),
        Some(instructions_section(ctx)),
    ];

    let mut prompt = sections.into_iter().flatten().collect::<Vec<_>>().join("\n\n");
    prompt.push('\n');
    prompt
}

fn title_section(target: &PromptTarget<'_>) -> String {
    match target {
        PromptTarget::Task(_) => "# Task Execution".to_string(),
        PromptTarget::Phase { .. } => "# Phase Execution".to_string(),
    }
}

fn context_files_section(ctx: &PromptContext<'_>) -> String {
    let mut block = String::from(
        "## Context Files\n\n\
         Please read and follow the methodology and conventions from these files:\n",
    );
    let _ = write!(block, "\n- @{}", ctx.methodology.path.display());
    if let Some(project) = &ctx.project {
        let _ = write!(block, "\n- @{}", project.path.display());
    }
    let _ = write!(block, "\n- @{}", ctx.proposal.path.display());
    if let Some(design) = &ctx.design {
        let _ = write!(block, "\n- @{}", design.path.display());
    }
    block
}

fn spec_deltas_section(ctx: &PromptContext<'_>) -> Option<String> {
    if ctx.specs.is_empty() {
        return None;
    }
    let mut block = String::from("### Specification Deltas\n");
    for spec in &ctx.specs {
        let _ = write!(block, "\n- @{}", spec.path.display());
    }
    Some(block)
}

fn previous_tasks_section(previous: &[&Task]) -> Option<String> {
    if previous.is_empty() {
        return None;
    }
    let mut block = String::from("## Previous Tasks (completed)\n");
    for task in previous {
        let indent = "  ".repeat(task.level);
        let _ = write!(block, "\n{indent}- {} {}", status_glyph(task.status), task.title);
    }
    Some(block)
}

fn target_section(target: &PromptTarget<'_>) -> String {
    match target {
        PromptTarget::Task(task) => {
            let mut block = format!("## Current Task\n\n**Task:** {}", task.title);
            if !task.requirement_refs.is_empty() {
                let _ = write!(
                    block,
                    "\n\n**Related Requirements:** {}",
                    task.requirement_refs.join(", "),
                );
            }
            block
        }
        PromptTarget::Phase { title, tasks } => {
            let mut block = format!(
                "## Current Phase: {title}\n\n\
                 Please complete ALL tasks in this phase in sequence. For each task:\n",
            );
            let base_level = tasks.first().map_or(0, |t| t.level);
            for task in tasks {
                let indent = "  ".repeat(task.level.saturating_sub(base_level));
                let _ = write!(block, "\n{indent}- [ ] {}", task.title);
                if !task.requirement_refs.is_empty() {
                    let _ = write!(block, " _(Requirements: {})_", task.requirement_refs.join(", "));
                }
            }
            block
        }
    }
}

fn instructions_section(ctx: &PromptContext<'_>) -> String {
    let tasks_file = ctx.task_list_path.display();
    match &ctx.target {
        PromptTarget::Task(_) => format!(
            "## Instructions\n\n\
             Please implement the current task above following the methodology and project \
             conventions from the context files. Review the specification deltas to understand \
             what requirements to implement. Previous tasks show what has already been completed.\n\n\
             **IMPORTANT:** After completing this task:\n\
             1. Update the task status in @{tasks_file}\n\
             2. Change the checkbox from `[ ]` to `[-]` (in-progress) or `[x]` (completed)\n\
             3. This helps track progress and provides visibility into what's been done",
        ),
        PromptTarget::Phase { .. } => format!(
            "## Instructions\n\n\
             Implement ALL tasks in the phase above following the methodology and project \
             conventions from the context files. Review the specification deltas to understand \
             what requirements to implement. Previous tasks show what has already been completed.\n\n\
             **IMPORTANT:** After completing each task:\n\
             1. Update the task status in @{tasks_file}\n\
             2. Mark in-progress tasks with `[-]` and completed tasks with `[x]`\n\
             3. Keep the status up-to-date as you work through each task\n\
             4. This helps track progress and provides visibility into what's been done",
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{render, status_glyph};
    use crate::ports::docs::{DocRef, SpecDelta};
    use crate::prompt::context::{PromptContext, PromptTarget};
    use crate::task::{flatten, parse_tasks, TaskStatus};

    fn doc(path: &str) -> DocRef {
        DocRef { path: PathBuf::from(path), content: "text".to_string() }
    }

    fn minimal_context<'a>(target: PromptTarget<'a>) -> PromptContext<'a> {
        PromptContext {
            methodology: doc("/ws/openspec/AGENTS.md"),
            project: None,
            proposal: doc("/ws/openspec/changes/add-auth/proposal.md"),
            design: None,
            specs: Vec::new(),
            previous: Vec::new(),
            target,
            task_list_path: PathBuf::from("/ws/openspec/changes/add-auth/tasks.md"),
        }
    }

    #[test]
    fn glyphs_map_three_ways() {
        assert_eq!(status_glyph(TaskStatus::Completed), "✅");
        assert_eq!(status_glyph(TaskStatus::InProgress), "🔵");
        assert_eq!(status_glyph(TaskStatus::NotStarted), "⚪");
    }

    #[test]
    fn minimal_context_renders_two_bullets_and_no_optional_headers() {
        let tasks = parse_tasks("- [ ] only task", "add-auth");
        let ctx = minimal_context(PromptTarget::Task(&tasks[0]));
        let prompt = render(&ctx);

        let bullets = prompt.lines().filter(|l| l.starts_with("- @")).count();
        assert_eq!(bullets, 2);
        assert!(!prompt.contains("## Previous Tasks"));
        assert!(!prompt.contains("### Specification Deltas"));
        assert!(prompt.starts_with("# Task Execution\n"));
        assert!(prompt.ends_with('\n'));
    }

    #[test]
    fn optional_documents_add_bullets_in_order() {
        let tasks = parse_tasks("- [ ] t", "c");
        let mut ctx = minimal_context(PromptTarget::Task(&tasks[0]));
        ctx.project = Some(doc("/ws/openspec/project.md"));
        ctx.design = Some(doc("/ws/openspec/changes/add-auth/design.md"));
        let prompt = render(&ctx);

        let bullets: Vec<&str> = prompt.lines().filter(|l| l.starts_with("- @")).collect();
        assert_eq!(bullets.len(), 4);
        assert!(bullets[0].ends_with("AGENTS.md"));
        assert!(bullets[1].ends_with("project.md"));
        assert!(bullets[2].ends_with("proposal.md"));
        assert!(bullets[3].ends_with("design.md"));
    }

    #[test]
    fn spec_deltas_render_as_subsection() {
        let tasks = parse_tasks("- [ ] t", "c");
        let mut ctx = minimal_context(PromptTarget::Task(&tasks[0]));
        ctx.specs = vec![
            SpecDelta {
                name: "auth".to_string(),
                path: PathBuf::from("/ws/specs/auth/spec.md"),
                content: String::new(),
            },
            SpecDelta {
                name: "billing".to_string(),
                path: PathBuf::from("/ws/specs/billing/spec.md"),
                content: String::new(),
            },
        ];
        let prompt = render(&ctx);
        assert!(prompt.contains("### Specification Deltas\n\n- @/ws/specs/auth/spec.md\n- @/ws/specs/billing/spec.md"));
    }

    #[test]
    fn previous_tasks_render_with_glyphs_and_indent() {
        let forest = parse_tasks("- [x] done one\n  - [-] half way\n- [ ] current", "c");
        let flat = flatten(&forest);
        let mut ctx = minimal_context(PromptTarget::Task(flat[2]));
        ctx.previous = flat[..2].to_vec();
        let prompt = render(&ctx);

        assert!(prompt.contains("## Previous Tasks (completed)\n\n- ✅ done one\n  - 🔵 half way"));
    }

    #[test]
    fn task_target_lists_requirements_when_present() {
        let tasks = parse_tasks("- [ ] Implement parser _Requirements: 1.1, 2.3_", "c");
        let ctx = minimal_context(PromptTarget::Task(&tasks[0]));
        let prompt = render(&ctx);
        assert!(prompt.contains("**Task:** Implement parser _Requirements: 1.1, 2.3_"));
        assert!(prompt.contains("**Related Requirements:** 1.1, 2.3"));
    }

    #[test]
    fn task_target_omits_requirements_line_when_absent() {
        let tasks = parse_tasks("- [ ] plain", "c");
        let ctx = minimal_context(PromptTarget::Task(&tasks[0]));
        let prompt = render(&ctx);
        assert!(!prompt.contains("**Related Requirements:**"));
    }

    #[test]
    fn phase_target_lists_tasks_relative_to_first_level() {
        let forest = parse_tasks("  - [ ] lead _Requirements: 2.1_\n    - [x] nested", "c");
        let flat = flatten(&forest);
        let ctx = minimal_context(PromptTarget::Phase {
            title: "Phase 1: Setup".to_string(),
            tasks: flat,
        });
        let prompt = render(&ctx);

        assert!(prompt.starts_with("# Phase Execution\n"));
        assert!(prompt.contains("## Current Phase: Phase 1: Setup"));
        // First task at indentation zero, child two spaces in, open markers.
        assert!(prompt.contains("\n- [ ] lead _Requirements: 2.1_ _(Requirements: 2.1)_\n  - [ ] nested"));
        assert!(prompt.contains("After completing each task:"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let tasks = parse_tasks("- [x] a\n- [ ] b", "c");
        let flat = flatten(&tasks);
        let mut ctx = minimal_context(PromptTarget::Task(flat[1]));
        ctx.previous = flat[..1].to_vec();
        assert_eq!(render(&ctx), render(&ctx));
    }
}
