//! Command dispatch and handlers.

pub mod annotate;
pub mod phase;
pub mod run;
pub mod show;
pub mod status;

use std::path::{Path, PathBuf};

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Commands operate on the current working directory as the workspace root.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let workspace = workspace_root()?;
    match command {
        Command::Status { change } => status::run(&workspace, change),
        Command::Show { change, json } => show::run(&workspace, change, *json),
        Command::Run { change, line, dry_run } => run::run(&workspace, change, *line, *dry_run),
        Command::RunPhase { change, phase, dry_run } => {
            phase::run(&workspace, change, *phase, *dry_run)
        }
        Command::Annotate { change } => annotate::run(&workspace, change),
    }
}

/// The workspace root all commands resolve documents against.
fn workspace_root() -> Result<PathBuf, String> {
    std::env::current_dir().map_err(|e| format!("Failed to determine working directory: {e}"))
}

/// Loads the workspace configuration and builds a service context, wiring
/// the chat sink when an endpoint is configured.
pub(crate) fn load_context(workspace: &Path) -> Result<(ServiceContext, Config), String> {
    let ctx = ServiceContext::live();
    let config = Config::load(&*ctx.fs, workspace)?;
    let ctx = match config.chat_endpoint() {
        Some(url) => ServiceContext::live_with_chat(url),
        None => ctx,
    };
    Ok((ctx, config))
}

/// Delivers a prompt through the context's sink, falling back to a prompt
/// file in `fallback_dir` when dispatch fails.
///
/// The fallback is the CLI's text-holding mechanism: the prompt is preserved
/// on disk and the user is told where to find it.
pub(crate) fn deliver(
    ctx: &ServiceContext,
    prompt: &str,
    fresh_session: bool,
    fallback_dir: &Path,
) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    match runtime.block_on(ctx.sink.dispatch(prompt, fresh_session)) {
        Ok(()) => {
            println!("Prompt dispatched to chat endpoint.");
            Ok(())
        }
        Err(err) => {
            let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
            let path = fallback_dir.join(format!("prompt-{stamp}.md"));
            ctx.fs
                .write(&path, prompt)
                .map_err(|e| format!("Failed to write fallback prompt {}: {e}", path.display()))?;
            println!("Chat dispatch unavailable ({err}).");
            println!("Prompt saved to {}; paste it into your assistant.", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::deliver;
    use crate::context::ServiceContext;

    #[test]
    fn deliver_falls_back_to_a_prompt_file() {
        let dir = std::env::temp_dir().join("tasklens_deliver_fallback");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        // Live context has no chat endpoint, so dispatch fails and the
        // prompt lands in the fallback file.
        let ctx = ServiceContext::live();
        deliver(&ctx, "# Task Execution\n", false, &dir).unwrap();

        let saved: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("prompt-"))
            .collect();
        assert_eq!(saved.len(), 1);
        let content = std::fs::read_to_string(saved[0].path()).unwrap();
        assert_eq!(content, "# Task Execution\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
