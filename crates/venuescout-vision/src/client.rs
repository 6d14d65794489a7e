//! HTTP client for the vision-capable responses endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::VisionError;
use crate::prompt::InputMessage;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Fixed model identifier used for every enrichment call.
pub const VISION_MODEL: &str = "gpt-4o-2024-11-20";

/// Client for the AI responses endpoint.
///
/// Use [`VisionClient::new`] for production or
/// [`VisionClient::with_base_url`] to point at a mock server in tests.
pub struct VisionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a [InputMessage],
}

/// Reply envelope. The endpoint answers with either a flat `output_text`
/// or a nested `output[0].content[0].text`; both are checked, first
/// non-empty wins.
#[derive(Debug, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(default)]
    text: Option<String>,
}

impl VisionClient {
    /// Creates a new client pointed at the production endpoint.
    ///
    /// The timeout should be generous (tens of seconds): every call carries
    /// a multi-image payload.
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, VisionError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, VisionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("venuescout/0.1 (place-discovery)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Sends one ordered multi-part message list and returns the reply text.
    ///
    /// # Errors
    ///
    /// - [`VisionError::Unconfigured`] if the credential is empty (checked
    ///   before any network call).
    /// - [`VisionError::Http`] on transport failure.
    /// - [`VisionError::Api`] on a non-2xx status.
    /// - [`VisionError::EmptyReply`] if neither reply field carries text.
    pub async fn respond(&self, input: &[InputMessage]) -> Result<String, VisionError> {
        if self.api_key.trim().is_empty() {
            return Err(VisionError::Unconfigured);
        }

        let request = ResponsesRequest {
            model: VISION_MODEL,
            input,
        };
        let url = format!("{}/v1/responses", self.base_url);
        tracing::debug!(%url, model = VISION_MODEL, parts = input.len(), "vision request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VisionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ResponsesReply = response.json().await?;
        reply_text(reply).ok_or(VisionError::EmptyReply)
    }
}

fn reply_text(reply: ResponsesReply) -> Option<String> {
    if let Some(text) = reply.output_text.filter(|t| !t.is_empty()) {
        return Some(text);
    }
    reply
        .output
        .into_iter()
        .next()
        .and_then(|item| item.content.into_iter().next())
        .and_then(|content| content.text)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(output_text: Option<&str>, nested: Option<&str>) -> ResponsesReply {
        ResponsesReply {
            output_text: output_text.map(str::to_owned),
            output: nested
                .map(|text| {
                    vec![OutputItem {
                        content: vec![OutputContent {
                            text: Some(text.to_owned()),
                        }],
                    }]
                })
                .unwrap_or_default(),
        }
    }

    #[test]
    fn flat_output_text_wins_when_non_empty() {
        let text = reply_text(reply(Some("flat"), Some("nested")));
        assert_eq!(text.as_deref(), Some("flat"));
    }

    #[test]
    fn empty_flat_field_falls_back_to_nested() {
        let text = reply_text(reply(Some(""), Some("nested")));
        assert_eq!(text.as_deref(), Some("nested"));
    }

    #[test]
    fn both_fields_absent_is_none() {
        assert_eq!(reply_text(reply(None, None)), None);
    }
}
