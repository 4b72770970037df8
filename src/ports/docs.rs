//! Document source port: the named text fragments of one change.

use std::path::PathBuf;

/// A referenced document: where it lives and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRef {
    /// Path of the document, used for `@`-references in prompts.
    pub path: PathBuf,
    /// Raw document text. Empty when a required document could not be read;
    /// the assembler renders a degraded prompt rather than failing.
    pub content: String,
}

/// One named spec-delta fragment under a change's `specs/` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDelta {
    /// The capability name (the spec's directory name).
    pub name: String,
    /// Path of the delta's `spec.md`.
    pub path: PathBuf,
    /// Raw fragment text.
    pub content: String,
}

/// Resolves the documents belonging to one change by logical name.
///
/// Optional documents distinguish "absent" from "present but empty" only as
/// far as the prompt cares: both suppress the corresponding section, so both
/// are surfaced as `None`.
pub trait DocumentSource {
    /// The methodology document. Required; empty content on read failure.
    fn methodology(&self) -> DocRef;

    /// The project document, if present and non-empty.
    fn project(&self) -> Option<DocRef>;

    /// The change's proposal. Required; empty content on read failure.
    fn proposal(&self) -> DocRef;

    /// The change's design document, if present and non-empty.
    fn design(&self) -> Option<DocRef>;

    /// All spec-delta fragments of the change, ordered by capability name.
    fn spec_deltas(&self) -> Vec<SpecDelta>;

    /// Raw text of the task list itself.
    ///
    /// # Errors
    ///
    /// Returns an error when the task list cannot be read; without it there
    /// is nothing to parse or run.
    fn task_list(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Path of the task list file, referenced by the prompt's closing
    /// instructions.
    fn task_list_path(&self) -> PathBuf;
}
