//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `tasklens`.
#[derive(Debug, Parser)]
#[command(name = "tasklens", version, about = "Parse, track, and run markdown task lists")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show per-phase progress for a change's task list.
    Status {
        /// Change identifier (directory name under `changes/`).
        change: String,
    },
    /// Print the parsed task tree.
    Show {
        /// Change identifier (directory name under `changes/`).
        change: String,
        /// Emit the forest as JSON instead of a tree.
        #[arg(long)]
        json: bool,
    },
    /// Assemble and dispatch the prompt for a single task.
    Run {
        /// Change identifier (directory name under `changes/`).
        change: String,
        /// Zero-based line number of the task in the task list.
        #[arg(long)]
        line: usize,
        /// Print the prompt to stdout instead of dispatching it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Assemble and dispatch the prompt for all tasks in a phase.
    RunPhase {
        /// Change identifier (directory name under `changes/`).
        change: String,
        /// Phase number from the heading (`## Phase <n>: …`).
        #[arg(long)]
        phase: u32,
        /// Print the prompt to stdout instead of dispatching it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Emit editor annotations for a change's task list as JSON.
    Annotate {
        /// Change identifier (directory name under `changes/`).
        change: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_status_subcommand() {
        let cli = Cli::parse_from(["tasklens", "status", "add-auth"]);
        assert!(matches!(cli.command, Command::Status { change } if change == "add-auth"));
    }

    #[test]
    fn parses_run_with_line_and_dry_run() {
        let cli = Cli::parse_from(["tasklens", "run", "add-auth", "--line", "3", "--dry-run"]);
        match cli.command {
            Command::Run { change, line, dry_run } => {
                assert_eq!(change, "add-auth");
                assert_eq!(line, 3);
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_run_phase_subcommand() {
        let cli = Cli::parse_from(["tasklens", "run-phase", "add-auth", "--phase", "2"]);
        match cli.command {
            Command::RunPhase { change, phase, dry_run } => {
                assert_eq!(change, "add-auth");
                assert_eq!(phase, 2);
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_requires_a_line() {
        assert!(Cli::try_parse_from(["tasklens", "run", "add-auth"]).is_err());
    }
}
