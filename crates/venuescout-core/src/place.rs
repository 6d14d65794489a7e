//! Normalized place records and search envelopes.
//!
//! Every upstream response shape is converted into these types at the
//! provider boundary; nothing downstream ever sees provider-specific fields.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Opaque provider-native photo handle.
///
/// Resolved to a fetchable URL only when needed for display or AI input,
/// via the provider client's `photo_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(pub String);

impl PhotoRef {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Price bracket reported by the provider, ordered cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceLevel {
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
}

impl PriceLevel {
    /// Maps the provider's price-level enum string to a variant.
    ///
    /// The table is fixed at five values; anything else (including the
    /// unspecified sentinel) maps to `None`.
    #[must_use]
    pub fn from_provider_name(name: &str) -> Option<Self> {
        match name {
            "FREE" => Some(Self::Free),
            "INEXPENSIVE" => Some(Self::Inexpensive),
            "MODERATE" => Some(Self::Moderate),
            "EXPENSIVE" => Some(Self::Expensive),
            "VERY_EXPENSIVE" => Some(Self::VeryExpensive),
            _ => None,
        }
    }

    /// Maps the legacy numeric ordinal (0..=4) to a variant.
    #[must_use]
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Free),
            1 => Some(Self::Inexpensive),
            2 => Some(Self::Moderate),
            3 => Some(Self::Expensive),
            4 => Some(Self::VeryExpensive),
            _ => None,
        }
    }
}

/// A normalized point-of-interest record.
///
/// `id` is the provider-stable identity and the dedup key for all
/// aggregation: two records with the same `id` are the same entity, and
/// later occurrences are discarded whole, never merged field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub rating_count: u32,
    pub photos: Vec<PhotoRef>,
    /// Single already-resolved photo URL kept for older records; used as a
    /// fallback input when collecting enrichment photos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub website: Option<String>,
    pub price_level: Option<PriceLevel>,
    /// AI-derived ambiance labels; replaced wholesale per enrichment run.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Appended by enrichment, never replaced.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Appended by enrichment, never replaced.
    #[serde(default)]
    pub features: Vec<String>,
}

/// One search invocation's inputs. Constructed per user action or per
/// category in a multi-category round; never mutated after construction.
///
/// `center` is optional so the router can reject its absence as a typed
/// `MissingCoordinates` failure before any provider call.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub center: Option<Coordinates>,
    pub radius_m: f64,
    pub category_type: Option<String>,
    pub page_token: Option<String>,
}

/// Outcome status of a single provider search.
///
/// Always computed from the normalized result count (the two upstream
/// shapes do not share a status field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Ok,
    ZeroResults,
}

/// One page of normalized search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub status: SearchStatus,
    pub places: Vec<Place>,
    pub next_page_token: Option<String>,
}

/// AI-derived labels for one successfully analyzed place.
///
/// Absence of a record for a given place id means "skipped, leave the place
/// unlabeled" — not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub place_id: String,
    pub labels: Vec<String>,
    pub features: Vec<String>,
    pub tags: Vec<String>,
}

/// Extended detail for a single place, from the details endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Human-readable weekday opening descriptions, provider order.
    pub opening_hours: Vec<String>,
    pub photos: Vec<PhotoRef>,
    pub coordinates: Coordinates,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub rating_count: u32,
    pub reviews: Vec<PlaceReview>,
}

/// A single user review attached to a place's details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceReview {
    pub author: String,
    pub text: String,
    pub rating: Option<f64>,
    pub published: String,
}
