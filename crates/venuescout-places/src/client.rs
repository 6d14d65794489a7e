//! HTTP client for the places provider.
//!
//! Wraps `reqwest` with credential management, the fixed field masks, and
//! the [`PlacesError`] classification. Each endpoint normalizes its response
//! via [`crate::normalize`] before returning, so callers only ever see the
//! internal schema.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use venuescout_core::{Coordinates, PhotoRef, PlaceDetails, SearchResult};

use crate::error::PlacesError;
use crate::normalize;

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";

/// Field mask sent with every search call.
const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.location,places.types,places.rating,places.userRatingCount,places.photos,places.websiteUri,places.priceLevel";

/// Field mask sent with details calls.
const DETAILS_FIELD_MASK: &str = "id,displayName,formattedAddress,formattedPhoneNumber,websiteUri,regularOpeningHours,photos,location,types,rating,userRatingCount,reviews";

/// Results requested per search page; the provider caps pages at 20 anyway.
const PAGE_SIZE: u32 = 20;

/// Client for the places provider.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    /// Creates a new client pointed at the production provider.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Unreachable`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Unreachable`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
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

    /// Free-text search biased to a circular area.
    ///
    /// # Errors
    ///
    /// Returns a [`PlacesError`] classified per the taxonomy: `Unconfigured`
    /// before any network call if the credential is empty, `AuthRejected` /
    /// `BadRequest` / `RateLimited` / `Upstream` for non-2xx statuses,
    /// `Unreachable` on transport failure, `Decode` on a malformed body.
    pub async fn text_search(
        &self,
        query: &str,
        center: Coordinates,
        radius_m: f64,
        page_token: Option<&str>,
    ) -> Result<SearchResult, PlacesError> {
        self.ensure_configured()?;

        let mut body = serde_json::json!({
            "textQuery": query,
            "locationBias": {
                "circle": {
                    "center": { "latitude": center.lat, "longitude": center.lng },
                    "radius": radius_m,
                }
            },
            "pageSize": PAGE_SIZE,
        });
        if let Some(token) = page_token {
            body["pageToken"] = Value::String(token.to_owned());
        }

        let url = format!("{}/v1/places:searchText", self.base_url);
        tracing::debug!(%url, query, "places text search");
        let raw = self.post_search(&url, &body).await?;
        normalize::search_result(raw, &url)
    }

    /// Category (nearby) search restricted to a circular area.
    ///
    /// # Errors
    ///
    /// Same classification as [`Self::text_search`].
    pub async fn category_search(
        &self,
        place_type: &str,
        center: Coordinates,
        radius_m: f64,
        page_token: Option<&str>,
    ) -> Result<SearchResult, PlacesError> {
        self.ensure_configured()?;

        let mut body = serde_json::json!({
            "includedTypes": [place_type],
            "maxResultCount": PAGE_SIZE,
            "locationRestriction": {
                "circle": {
                    "center": { "latitude": center.lat, "longitude": center.lng },
                    "radius": radius_m,
                }
            },
        });
        if let Some(token) = page_token {
            body["pageToken"] = Value::String(token.to_owned());
        }

        let url = format!("{}/v1/places:searchNearby", self.base_url);
        tracing::debug!(%url, place_type, "places category search");
        let raw = self.post_search(&url, &body).await?;
        normalize::search_result(raw, &url)
    }

    /// Fetches extended details for one place.
    ///
    /// The identifier may be a bare legacy id or already namespaced; it is
    /// normalized idempotently before the call.
    ///
    /// # Errors
    ///
    /// Same classification as [`Self::text_search`].
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        self.ensure_configured()?;

        let id = normalize::canonical_place_id(place_id);
        let url = format!("{}/v1/{id}", self.base_url);
        tracing::debug!(%url, "place details");

        let response = self
            .client
            .get(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", DETAILS_FIELD_MASK)
            .send()
            .await?;

        let raw = Self::read_json(response, &url).await?;
        normalize::place_details(raw, &url)
    }

    /// Builds a fetchable media URL for a photo reference. Pure, no network.
    #[must_use]
    pub fn photo_url(&self, photo: &PhotoRef, max_width: u32) -> String {
        format!(
            "{}/v1/{}/media?maxWidthPx={max_width}&key={}",
            self.base_url,
            photo.as_str(),
            self.api_key
        )
    }

    /// Fails fast with [`PlacesError::Unconfigured`] when the credential is
    /// missing, before any network call.
    fn ensure_configured(&self) -> Result<(), PlacesError> {
        if self.api_key.trim().is_empty() {
            return Err(PlacesError::Unconfigured);
        }
        Ok(())
    }

    async fn post_search(&self, url: &str, body: &Value) -> Result<Value, PlacesError> {
        let response = self
            .client
            .post(url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", SEARCH_FIELD_MASK)
            .json(body)
            .send()
            .await?;

        Self::read_json(response, url).await
    }

    /// Asserts a 2xx status and parses the body as JSON; non-2xx statuses
    /// are classified into the error taxonomy here, exactly once.
    async fn read_json(response: Response, context: &str) -> Result<Value, PlacesError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status, &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Decode {
            context: context.to_string(),
            source: e,
        })
    }

    fn classify_failure(status: StatusCode, body: &str) -> PlacesError {
        let message = upstream_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

        match status {
            StatusCode::FORBIDDEN => PlacesError::AuthRejected { message },
            StatusCode::BAD_REQUEST => PlacesError::BadRequest { message },
            StatusCode::TOO_MANY_REQUESTS => PlacesError::RateLimited,
            _ => PlacesError::Upstream {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Best-effort extraction of an error message from a non-2xx body: the
/// provider nests it under `error.message`, some variants use a top-level
/// `message`. Unparsable bodies yield `None`.
fn upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(api_key: &str) -> PlacesClient {
        PlacesClient::with_base_url(api_key, 10, "https://places.test/")
            .expect("client construction should not fail")
    }

    #[test]
    fn photo_url_embeds_reference_width_and_key() {
        let client = test_client("k-123");
        let url = client.photo_url(&PhotoRef("places/p1/photos/a".to_string()), 800);
        assert_eq!(
            url,
            "https://places.test/v1/places/p1/photos/a/media?maxWidthPx=800&key=k-123"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = test_client("k");
        let url = client.photo_url(&PhotoRef("r".to_string()), 400);
        assert!(url.starts_with("https://places.test/v1/"), "got: {url}");
    }

    #[test]
    fn upstream_message_reads_nested_error_shape() {
        let body = r#"{"error":{"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(upstream_message(body).as_deref(), Some("API key not valid"));
    }

    #[test]
    fn upstream_message_reads_flat_shape() {
        let body = r#"{"message":"missing field"}"#;
        assert_eq!(upstream_message(body).as_deref(), Some("missing field"));
    }

    #[test]
    fn upstream_message_unparsable_body_is_none() {
        assert_eq!(upstream_message("<html>gateway timeout</html>"), None);
    }

    #[test]
    fn classify_failure_distinguishes_auth_from_quota() {
        let auth = PlacesClient::classify_failure(StatusCode::FORBIDDEN, "{}");
        let quota = PlacesClient::classify_failure(StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(matches!(auth, PlacesError::AuthRejected { .. }));
        assert!(matches!(quota, PlacesError::RateLimited));
        assert_ne!(auth.to_string(), quota.to_string());
    }

    #[tokio::test]
    async fn empty_api_key_fails_before_any_network_call() {
        let client = test_client("  ");
        let result = client
            .text_search(
                "cafe",
                Coordinates {
                    lat: 41.0,
                    lng: 29.0,
                },
                3000.0,
                None,
            )
            .await;
        assert!(matches!(result, Err(PlacesError::Unconfigured)));
    }
}
