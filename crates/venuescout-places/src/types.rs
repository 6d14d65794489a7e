//! Places provider response types.
//!
//! The provider answers in one of two JSON shapes: the newer form keyed by
//! `places` with `location.latitude/longitude` and `photos[].name`, and the
//! legacy form keyed by `results` with `geometry.location` and
//! `photo_reference`. Both are modeled here verbatim; [`crate::normalize`]
//! converts either into the internal schema.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Newer shape (places:searchText / places:searchNearby / place details)
// ---------------------------------------------------------------------------

/// Top-level search envelope in the newer shape.
///
/// `places` is absent entirely when nothing matched, hence the default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSearchResponse {
    #[serde(default)]
    pub places: Vec<WirePlace>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One place in the newer shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePlace {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub location: Option<WireLatLng>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    #[serde(default)]
    pub photos: Vec<WirePhoto>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub price_level: Option<String>,
}

/// Localized text wrapper (`displayName`, review text).
#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct WireLatLng {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Photo resource in the newer shape; `name` is the opaque reference used
/// to build a media URL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePhoto {
    pub name: String,
    #[serde(default)]
    pub width_px: Option<u32>,
    #[serde(default)]
    pub height_px: Option<u32>,
}

/// Place details in the newer shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePlaceDetails {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub regular_opening_hours: Option<WireOpeningHours>,
    #[serde(default)]
    pub photos: Vec<WirePhoto>,
    #[serde(default)]
    pub location: Option<WireLatLng>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    #[serde(default)]
    pub reviews: Vec<WireReview>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOpeningHours {
    #[serde(default)]
    pub weekday_descriptions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReview {
    #[serde(default)]
    pub author_attribution: Option<WireAuthorAttribution>,
    #[serde(default)]
    pub text: Option<LocalizedText>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub publish_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAuthorAttribution {
    #[serde(default)]
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// Legacy shape
// ---------------------------------------------------------------------------

/// Top-level search envelope in the legacy shape. The legacy `status`
/// string is intentionally ignored: status is always recomputed from the
/// normalized result count so both shapes report it identically.
#[derive(Debug, Deserialize)]
pub struct LegacySearchResponse {
    #[serde(default)]
    pub results: Vec<LegacyPlace>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One place in the legacy shape.
#[derive(Debug, Deserialize)]
pub struct LegacyPlace {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub geometry: Option<LegacyGeometry>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub photos: Vec<LegacyPhoto>,
    #[serde(default)]
    pub website: Option<String>,
    /// Numeric ordinal into the five-value price table.
    #[serde(default)]
    pub price_level: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyGeometry {
    #[serde(default)]
    pub location: Option<LegacyLatLng>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyLatLng {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct LegacyPhoto {
    pub photo_reference: String,
}
