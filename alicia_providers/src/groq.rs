use alicia_core::{
    ChatMessage, CompletionError, CompletionOptions, LLMProvider, LLMResponse, check_api_key,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for Groq's OpenAI-compatible chat completions endpoint.
///
/// One request per call: failures are reported, never retried.
#[derive(Clone)]
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GroqProvider {
    pub fn new(api_key: String) -> Self {
        info!("Creating GroqProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn transport_error(err: &reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout
        } else if err.is_decode() {
            CompletionError::InvalidResponse(err.to_string())
        } else {
            CompletionError::Transport(err.to_string())
        }
    }

    fn status_error(status: StatusCode) -> Option<CompletionError> {
        match status {
            StatusCode::UNAUTHORIZED => Some(CompletionError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Some(CompletionError::RateLimited),
            s if !s.is_success() => Some(CompletionError::Status(s.as_u16())),
            _ => None,
        }
    }

    async fn try_send(&self, request: &serde_json::Value) -> Result<LLMResponse, CompletionError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        if let Some(err) = Self::status_error(response.status()) {
            return Err(err);
        }

        let response = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| CompletionError::InvalidResponse("missing content".to_string()))?
            .to_string();

        Ok(LLMResponse { content })
    }
}

#[async_trait]
impl LLMProvider for GroqProvider {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<LLMResponse, CompletionError> {
        check_api_key(&self.api_key)?;

        let request = json!({
            "model": options.model,
            "messages": messages,
            "temperature": options.temperature,
            "max_tokens": options.max_tokens,
            "top_p": options.top_p,
        });

        debug!(
            "Sending request to Groq API: model={}, messages={}",
            options.model,
            messages.len()
        );

        self.try_send(&request).await
    }
}
