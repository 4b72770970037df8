//! Service context bundling the port trait objects.

use crate::adapters::live::dispatch::HttpChatSink;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::dispatch::{DispatchFuture, PromptSink};
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire up
/// different sink implementations depending on configuration.
pub struct ServiceContext {
    /// Filesystem for document reads and fallback prompt writes.
    pub fs: Box<dyn FileSystem>,
    /// Sink receiving assembled prompts.
    pub sink: Box<dyn PromptSink>,
}

impl ServiceContext {
    /// Creates a live context with the real filesystem and no chat endpoint.
    ///
    /// Dispatching through the unconfigured sink fails with a configuration
    /// hint, which routes prompts into the file fallback.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), sink: Box::new(UnconfiguredSink) }
    }

    /// Creates a live context that dispatches prompts to a chat endpoint.
    #[must_use]
    pub fn live_with_chat(url: String) -> Self {
        Self { fs: Box::new(LiveFileSystem), sink: Box::new(HttpChatSink::new(url)) }
    }
}

/// Sink used when no chat endpoint is configured. Always fails, with a
/// message pointing at the configuration knobs.
struct UnconfiguredSink;

impl PromptSink for UnconfiguredSink {
    fn dispatch(&self, _prompt: &str, _fresh_session: bool) -> DispatchFuture<'_> {
        Box::pin(async {
            Err::<(), _>(Box::<dyn std::error::Error + Send + Sync>::from(
                "no chat endpoint configured (set chat_url in .tasklens.yaml or TASKLENS_CHAT_URL)",
            ))
        })
    }
}
