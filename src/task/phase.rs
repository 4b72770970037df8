//! Phase segmentation: heading-delimited groupings of tasks.
//!
//! A phase starts at a `## Phase <n>: <title>` heading and ends immediately
//! before the next level-2 heading of ANY kind, or at end of document. The
//! asymmetry is deliberate: only phase-shaped headings start a phase, but a
//! plain `## Notes` heading still terminates the one before it.

use std::sync::LazyLock;

use regex::Regex;

use super::model::Task;
use super::parse::flatten;

/// Grammar for a phase heading: exact wording "Phase", a numeral, a colon.
static PHASE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+Phase\s+(\d+):.*$").expect("phase heading regex is valid"));

/// Any level-2 heading; terminates the preceding phase's range.
static LEVEL2_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+.*$").expect("heading regex is valid"));

/// A derived, heading-delimited grouping of tasks.
///
/// Phases are computed views over the line sequence; they hold no tasks
/// themselves. Membership is resolved against a forest via [`Phase::owned_tasks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// The numeral from the heading.
    pub number: u32,
    /// Heading text without the `##` prefix (e.g. `"Phase 1: Setup"`).
    pub title: String,
    /// Zero-based line of the heading itself.
    pub heading_line: usize,
    /// Exclusive end of the owned range, with trailing blank lines trimmed.
    pub end_line: usize,
}

impl Phase {
    /// Resolves the tasks this phase owns: every task in the forest, at any
    /// depth, whose line falls strictly inside the range. A nested task can
    /// belong even when its parent sits outside the range.
    #[must_use]
    pub fn owned_tasks<'a>(&self, forest: &'a [Task]) -> Vec<&'a Task> {
        flatten(forest)
            .into_iter()
            .filter(|t| t.line > self.heading_line && t.line < self.end_line)
            .collect()
    }
}

/// Scans the document for phase headings and computes each phase's range.
#[must_use]
pub fn segment_phases(content: &str) -> Vec<Phase> {
    let lines: Vec<&str> = content.lines().collect();
    let mut phases = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = PHASE_HEADING.captures(line) else { continue };
        let number = caps[1].parse().unwrap_or(u32::MAX);

        let boundary = lines[i + 1..]
            .iter()
            .position(|l| LEVEL2_HEADING.is_match(l))
            .map_or(lines.len(), |offset| i + 1 + offset);

        // Trim trailing blank lines, but never past the heading itself.
        let mut end = boundary;
        while end > i + 1 && lines[end - 1].trim().is_empty() {
            end -= 1;
        }

        let title = line[2..].trim().to_string();
        phases.push(Phase { number, title, heading_line: i, end_line: end });
    }

    phases
}
