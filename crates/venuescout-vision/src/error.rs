use thiserror::Error;

/// Errors raised by the vision client.
///
/// These never escape the enrichment pipeline: every variant is recovered
/// locally by skipping the affected place.
#[derive(Debug, Error)]
pub enum VisionError {
    /// The AI credential is missing or empty. Raised before any network call.
    #[error("vision API key is not configured; set OPENAI_API_KEY")]
    Unconfigured,

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status from the AI endpoint.
    #[error("vision API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// A 2xx reply that carried no text output in either known field.
    #[error("vision reply carried no text output")]
    EmptyReply,
}
