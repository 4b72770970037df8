//! `tasklens annotate` command: editor annotations as JSON.

use std::path::Path;

use crate::adapters::live::docs::FsDocumentSource;
use crate::annotate::annotate;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::ports::docs::DocumentSource;
use crate::task::{parse_tasks, segment_phases};

/// Execute the `annotate` command.
///
/// Emits the full annotation set (per-line task entries and per-phase lens
/// entries) as pretty-printed JSON for an editor adapter to consume.
///
/// # Errors
///
/// Returns an error string if the task list cannot be read or serialized.
pub fn run(workspace: &Path, change: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let config = Config::load(&*ctx.fs, workspace)?;
    let docs = FsDocumentSource::new(&*ctx.fs, workspace, &config, change);

    let content = docs
        .task_list()
        .map_err(|e| format!("Failed to read task list for change {change}: {e}"))?;
    let forest = parse_tasks(&content, change);
    let phases = segment_phases(&content);

    let set = annotate(change, &forest, &phases);
    let rendered = serde_json::to_string_pretty(&set)
        .map_err(|e| format!("Failed to serialize annotations: {e}"))?;
    println!("{rendered}");
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

    #[test]
    fn annotate_emits_json() {
        let dir: PathBuf = std::env::temp_dir().join("tasklens_cmd_annotate");
        let _ = std::fs::remove_dir_all(&dir);
        write(
            &dir.join("openspec/changes/demo/tasks.md"),
            "## Phase 1: Setup\n- [x] a\n- [ ] b\n",
        );
        assert!(run(&dir, "demo").is_ok());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn annotate_missing_change_is_an_error() {
        let dir: PathBuf = std::env::temp_dir().join("tasklens_cmd_annotate_missing");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        assert!(run(&dir, "demo").is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
