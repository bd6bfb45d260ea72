//! HTTP client for OpenAI-compatible chat-completion APIs.
//!
//! - `completions`: the `/chat/completions` wire call
//! - `client`: credential and settings wiring around it

use crate::error::ApiError;
use async_trait::async_trait;

mod client;
mod completions;

pub use client::ApiClient;

/// Minimal model interface used by the mode flows.
///
/// Tests provide scripted replies through this trait without network calls
/// while the production path uses [`ApiClient`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Model identifier, for display.
    fn model(&self) -> &str;

    /// Send one prompt as a single user message and return the reply text.
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}
