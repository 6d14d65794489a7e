//! Multi-category fan-out and order-stable merge.

use std::collections::HashSet;

use venuescout_core::{Coordinates, Place};

use crate::client::PlacesClient;

/// Maps a user-facing category label to the provider place-type string.
///
/// The three canonical categories (including the Turkish UI spellings) map
/// to fixed provider types; any other label passes through lowercased.
#[must_use]
pub fn provider_type(label: &str) -> String {
    let lower = label.to_lowercase();
    match lower.as_str() {
        "kafe" | "cafe" => "cafe".to_string(),
        "restoran" | "restaurant" => "restaurant".to_string(),
        "bar" => "bar".to_string(),
        _ => lower,
    }
}

/// Runs one category search per requested category, concurrently, and
/// merges the results deduplicated by place id.
///
/// A failed category contributes zero results (logged as a warning); the
/// aggregation proceeds with the rest, and an all-failure round simply
/// yields an empty list. The merge iterates categories in requested order
/// and each category's places in provider order, keeping only the first
/// occurrence of each id — deterministic regardless of which network call
/// returned first.
pub async fn search_all_categories(
    client: &PlacesClient,
    categories: &[String],
    center: Coordinates,
    radius_m: f64,
) -> Vec<Place> {
    let searches = categories.iter().map(|category| async move {
        let place_type = provider_type(category);
        client
            .category_search(&place_type, center, radius_m, None)
            .await
    });
    let outcomes = futures::future::join_all(searches).await;

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<Place> = Vec::new();

    for (category, outcome) in categories.iter().zip(outcomes) {
        match outcome {
            Ok(result) => {
                for place in result.places {
                    if seen.insert(place.id.clone()) {
                        merged.push(place);
                    }
                }
            }
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    error = %e,
                    "category search failed; continuing without it"
                );
            }
        }
    }

    merged
}
