use thiserror::Error;

/// Errors surfaced by the places provider client and search router.
///
/// Classified once at the network boundary; each kind carries a distinct
/// human-readable message so callers never need to inspect message text to
/// tell failures apart.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The provider credential is missing or empty. Raised before any
    /// network call is attempted.
    #[error("places API key is not configured; set GOOGLE_PLACES_KEY")]
    Unconfigured,

    /// The search query is blank and no category type was supplied.
    #[error("search query is blank and no category type was given")]
    MissingQuery,

    /// The search request carried no center coordinates.
    #[error("search coordinates are missing")]
    MissingCoordinates,

    /// Upstream HTTP 403: credential invalid or the API is not enabled.
    #[error("places API key was rejected or the API is not enabled (HTTP 403): {message}")]
    AuthRejected { message: String },

    /// Upstream HTTP 400, echoing the upstream message.
    #[error("places API rejected the request (HTTP 400): {message}")]
    BadRequest { message: String },

    /// Upstream HTTP 429.
    #[error("places API quota exceeded (HTTP 429); try again later")]
    RateLimited,

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("failed to reach the places API: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// Any other non-2xx upstream status, echoing status and message.
    #[error("places API returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    /// A 2xx response body that could not be decoded as either upstream shape.
    #[error("malformed places API response for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
