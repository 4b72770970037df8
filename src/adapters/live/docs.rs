//! Live document source resolving a change's files on disk.
//!
//! Layout, relative to the workspace root (directory and file names come
//! from [`Config`](crate::config::Config)):
//!
//! ```text
//! <root_dir>/
//!   ├── AGENTS.md
//!   ├── project.md
//!   └── changes/<change_id>/
//!         ├── proposal.md
//!         ├── design.md
//!         ├── tasks.md
//!         └── specs/<capability>/spec.md
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::ports::docs::{DocRef, DocumentSource, SpecDelta};
use crate::ports::filesystem::FileSystem;

/// Document source backed by the [`FileSystem`] port.
pub struct FsDocumentSource<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
    change_root: PathBuf,
    methodology_file: String,
    project_file: String,
}

impl<'a> FsDocumentSource<'a> {
    /// Creates a source for one change under the given workspace root.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, workspace: &Path, config: &Config, change_id: &str) -> Self {
        let root = workspace.join(&config.root_dir);
        let change_root = root.join("changes").join(change_id);
        Self {
            fs,
            root,
            change_root,
            methodology_file: config.methodology_file.clone(),
            project_file: config.project_file.clone(),
        }
    }

    /// The change's directory, used for fallback prompt files.
    #[must_use]
    pub fn change_root(&self) -> &Path {
        &self.change_root
    }

    /// Reads a required document; unreadable files degrade to empty content.
    fn required(&self, path: PathBuf) -> DocRef {
        let content = self.fs.read_to_string(&path).unwrap_or_default();
        DocRef { path, content }
    }

    /// Reads an optional document; absent or empty files become `None`.
    fn optional(&self, path: PathBuf) -> Option<DocRef> {
        match self.fs.read_to_string(&path) {
            Ok(content) if !content.is_empty() => Some(DocRef { path, content }),
            _ => None,
        }
    }
}

impl DocumentSource for FsDocumentSource<'_> {
    fn methodology(&self) -> DocRef {
        self.required(self.root.join(&self.methodology_file))
    }

    fn project(&self) -> Option<DocRef> {
        self.optional(self.root.join(&self.project_file))
    }

    fn proposal(&self) -> DocRef {
        self.required(self.change_root.join("proposal.md"))
    }

    fn design(&self) -> Option<DocRef> {
        self.optional(self.change_root.join("design.md"))
    }

    fn spec_deltas(&self) -> Vec<SpecDelta> {
        let specs_dir = self.change_root.join("specs");
        let Ok(entries) = self.fs.list_subdirs(&specs_dir) else { return Vec::new() };

        let mut deltas = Vec::new();
        for name in entries {
            let path = specs_dir.join(&name).join("spec.md");
            if let Ok(content) = self.fs.read_to_string(&path) {
                if !content.is_empty() {
                    deltas.push(SpecDelta { name, path, content });
                }
            }
        }
        deltas
    }

    fn task_list(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.fs.read_to_string(&self.task_list_path())
    }

    fn task_list_path(&self) -> PathBuf {
        self.change_root.join("tasks.md")
    }
}
