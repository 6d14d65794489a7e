//! Normalization from provider response shapes to the internal schema.
//!
//! Both the legacy and the newer upstream shape land here; internal
//! components never see upstream-shape-specific fields. `status` is always
//! computed from the normalized result count because the two shapes do not
//! share a status field.

use serde_json::Value;
use venuescout_core::{
    Coordinates, PhotoRef, Place, PlaceDetails, PlaceReview, PriceLevel, SearchResult,
    SearchStatus,
};

use crate::error::PlacesError;
use crate::types::{
    LegacyPlace, LegacySearchResponse, WirePlace, WirePlaceDetails, WireSearchResponse,
};

/// Review author shown when the provider omits attribution.
const ANONYMOUS_REVIEWER: &str = "Ziyaretci";

/// Converts a raw search response body (either upstream shape) into a
/// normalized [`SearchResult`].
///
/// The shape is detected by the envelope key: `results` marks the legacy
/// form, anything else is parsed as the newer form (whose `places` key is
/// absent on empty responses).
///
/// # Errors
///
/// Returns [`PlacesError::Decode`] if the body matches neither shape.
pub fn search_result(body: Value, context: &str) -> Result<SearchResult, PlacesError> {
    let (places, next_page_token) = if body.get("results").is_some() {
        let legacy: LegacySearchResponse = decode(body, context)?;
        (
            legacy.results.into_iter().map(place_from_legacy).collect::<Vec<_>>(),
            legacy.next_page_token,
        )
    } else {
        let wire: WireSearchResponse = decode(body, context)?;
        (
            wire.places.into_iter().map(place_from_wire).collect::<Vec<_>>(),
            wire.next_page_token,
        )
    };

    let status = if places.is_empty() {
        SearchStatus::ZeroResults
    } else {
        SearchStatus::Ok
    };

    Ok(SearchResult {
        status,
        places,
        next_page_token,
    })
}

/// Converts a raw details response body into a normalized [`PlaceDetails`].
///
/// # Errors
///
/// Returns [`PlacesError::Decode`] if the body does not match the newer
/// details shape.
pub fn place_details(body: Value, context: &str) -> Result<PlaceDetails, PlacesError> {
    let wire: WirePlaceDetails = decode(body, context)?;
    Ok(details_from_wire(wire))
}

/// Normalizes a place identifier to the namespaced form used by the details
/// endpoint. Idempotent: an already-namespaced id passes through unchanged.
#[must_use]
pub fn canonical_place_id(id: &str) -> String {
    if id.starts_with("places/") {
        id.to_string()
    } else {
        format!("places/{id}")
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: Value, context: &str) -> Result<T, PlacesError> {
    serde_json::from_value(body).map_err(|e| PlacesError::Decode {
        context: context.to_string(),
        source: e,
    })
}

fn place_from_wire(wire: WirePlace) -> Place {
    Place {
        id: wire.id,
        name: wire.display_name.map(|n| n.text).unwrap_or_default(),
        address: wire.formatted_address.unwrap_or_default(),
        coordinates: wire.location.map_or(Coordinates { lat: 0.0, lng: 0.0 }, |l| Coordinates {
            lat: l.latitude,
            lng: l.longitude,
        }),
        types: wire.types,
        rating: wire.rating,
        rating_count: wire.user_rating_count.unwrap_or(0),
        photos: wire.photos.into_iter().map(|p| PhotoRef(p.name)).collect(),
        photo: None,
        website: wire.website_uri.filter(|w| !w.is_empty()),
        price_level: wire
            .price_level
            .as_deref()
            .and_then(PriceLevel::from_provider_name),
        labels: Vec::new(),
        tags: Vec::new(),
        features: Vec::new(),
    }
}

fn place_from_legacy(legacy: LegacyPlace) -> Place {
    Place {
        id: legacy.place_id,
        name: legacy.name,
        address: legacy.formatted_address,
        coordinates: legacy
            .geometry
            .and_then(|g| g.location)
            .map_or(Coordinates { lat: 0.0, lng: 0.0 }, |l| Coordinates {
                lat: l.lat,
                lng: l.lng,
            }),
        types: legacy.types,
        rating: legacy.rating,
        rating_count: legacy.user_ratings_total.unwrap_or(0),
        photos: legacy
            .photos
            .into_iter()
            .map(|p| PhotoRef(p.photo_reference))
            .collect(),
        photo: None,
        website: legacy.website.filter(|w| !w.is_empty()),
        price_level: legacy.price_level.and_then(PriceLevel::from_ordinal),
        labels: Vec::new(),
        tags: Vec::new(),
        features: Vec::new(),
    }
}

fn details_from_wire(wire: WirePlaceDetails) -> PlaceDetails {
    PlaceDetails {
        id: wire.id,
        name: wire.display_name.map(|n| n.text).unwrap_or_default(),
        address: wire.formatted_address.unwrap_or_default(),
        phone: wire.formatted_phone_number.filter(|p| !p.is_empty()),
        website: wire.website_uri.filter(|w| !w.is_empty()),
        opening_hours: wire
            .regular_opening_hours
            .map(|h| h.weekday_descriptions)
            .unwrap_or_default(),
        photos: wire.photos.into_iter().map(|p| PhotoRef(p.name)).collect(),
        coordinates: wire.location.map_or(Coordinates { lat: 0.0, lng: 0.0 }, |l| Coordinates {
            lat: l.latitude,
            lng: l.longitude,
        }),
        types: wire.types,
        rating: wire.rating,
        rating_count: wire.user_rating_count.unwrap_or(0),
        reviews: wire
            .reviews
            .into_iter()
            .map(|r| PlaceReview {
                author: r
                    .author_attribution
                    .map(|a| a.display_name)
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| ANONYMOUS_REVIEWER.to_string()),
                text: r.text.map(|t| t.text).unwrap_or_default(),
                rating: r.rating,
                published: r.publish_time.unwrap_or_default(),
            })
            .collect(),
    }
}
