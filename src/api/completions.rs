//! `/chat/completions` protocol request helper.

use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse};

/// Send one `/chat/completions` request and parse the chat response payload.
pub(crate) async fn request(
    http: &reqwest::Client,
    base_url: &str,
    request: &ChatRequest,
    bearer: &str,
) -> Result<ChatResponse, ApiError> {
    let url = format!("{base_url}/chat/completions");
    let body =
        serde_json::to_vec(request).map_err(|err| ApiError::Build(err.to_string()))?;
    tracing::debug!(%url, model = %request.model, bytes = body.len(), "sending chat request");

    let response = http
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .bearer_auth(bearer)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    tracing::debug!(status = status.as_u16(), bytes = text.len(), "chat response received");
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16(), text));
    }

    serde_json::from_str::<ChatResponse>(&text)
        .map_err(|err| ApiError::InvalidResponse(err.to_string()))
}
