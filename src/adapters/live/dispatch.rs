//! Live prompt sink posting to a chat endpoint over HTTP.

use reqwest::Client;
use serde::Serialize;

use crate::ports::dispatch::{DispatchFuture, PromptSink};

/// Live sink that delivers prompts to a configured chat endpoint.
pub struct HttpChatSink {
    client: Client,
    url: String,
}

impl HttpChatSink {
    /// Creates a sink for the given endpoint URL.
    #[must_use]
    pub fn new(url: String) -> Self {
        Self { client: Client::new(), url }
    }
}

/// Request body sent to the chat endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
    fresh_session: bool,
}

impl PromptSink for HttpChatSink {
    fn dispatch(&self, prompt: &str, fresh_session: bool) -> DispatchFuture<'_> {
        let prompt = prompt.to_string();

        Box::pin(async move {
            let body = ChatRequest { prompt: &prompt, fresh_session };

            let response = self
                .client
                .post(&self.url)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Chat endpoint request failed: {e}").into()
                })?;

            let status = response.status();
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(format!("Chat endpoint error ({}): {text}", status.as_u16()).into());
            }

            Ok(())
        })
    }
}
