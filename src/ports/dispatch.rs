//! Prompt sink port for handing assembled prompts to an assistant surface.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`PromptSink`] to keep the trait
/// dyn-compatible.
pub type DispatchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<(), Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Delivers an assembled prompt to an external assistant surface.
///
/// The core only guarantees it can produce the string; delivery, retries,
/// and fallbacks are the adapter's and caller's concern.
pub trait PromptSink: Send + Sync {
    /// Dispatches the prompt. `fresh_session` asks the surface to start a
    /// new conversation first (phase runs do; single-task runs do not).
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; callers fall back to a
    /// text-holding mechanism with a user-visible recovery action.
    fn dispatch(&self, prompt: &str, fresh_session: bool) -> DispatchFuture<'_>;
}
