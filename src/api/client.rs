//! API client facade for the chat-completions endpoint.

use super::completions;
use super::ModelClient;
use crate::config::{ApiSettings, Config};
use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;

/// Client for OpenAI-compatible chat-completion APIs.
///
/// Exactly one request per call: no retry, no streaming, and no client-side
/// timeout beyond what the transport imposes.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ApiClient {
    /// Build a client from resolved settings and stored credentials.
    pub fn new(settings: &ApiSettings, config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
            model: settings.model.clone(),
        }
    }

    /// Send a chat request and return the parsed response.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        completions::request(&self.http, &self.base_url, request, &self.api_key).await
    }
}

#[async_trait]
impl ModelClient for ApiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let request = ChatRequest::single_turn(self.model.clone(), prompt);
        let response = self.chat(&request).await?;
        response
            .reply_text()
            .map(str::to_string)
            .ok_or(ApiError::EmptyReply)
    }
}
