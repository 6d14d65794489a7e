//! Enrichment pipeline orchestration.
//!
//! Places are processed sequentially — one AI call in flight at a time —
//! to bound upstream request size and rate. Every per-place failure
//! (missing photos, network, unparsable reply) is logged and recovered by
//! skipping that place; the pipeline never fails as a whole.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use venuescout_core::{EnrichmentRecord, Place};
use venuescout_places::PlacesClient;

use crate::client::VisionClient;
use crate::extract;
use crate::labels::{self, AmbianceReport};
use crate::prompt::{self, SystemPromptLoader};

/// Photo inputs per place are capped before resolution.
const MAX_PHOTOS_PER_PLACE: usize = 6;

/// Drives photo-based enrichment for batches of places.
///
/// Holds the vision client and the single-flight system-prompt cache; keep
/// one instance per process so the prompt file is read at most once.
pub struct Enricher {
    client: VisionClient,
    prompt: SystemPromptLoader,
    photo_max_width: u32,
}

impl Enricher {
    #[must_use]
    pub fn new(client: VisionClient, system_prompt_path: PathBuf, photo_max_width: u32) -> Self {
        Self {
            client,
            prompt: SystemPromptLoader::new(system_prompt_path),
            photo_max_width,
        }
    }

    /// Analyzes each place's photos and returns enrichment records keyed by
    /// place id.
    ///
    /// Absence of an entry means the place was skipped (no usable photos,
    /// call failure, or unparsable reply) — never an error. The result is a
    /// key→value accumulation, so the mapping is unaffected by processing
    /// order.
    pub async fn enrich(
        &self,
        places_client: &PlacesClient,
        places: &[Place],
    ) -> HashMap<String, EnrichmentRecord> {
        let mut results = HashMap::new();
        if places.is_empty() {
            return results;
        }

        let system_prompt = self.prompt.load().await;

        for place in places {
            let photo_urls = collect_photo_urls(place, places_client, self.photo_max_width);
            if photo_urls.is_empty() {
                tracing::debug!(place = %place.name, "no usable photos; skipping enrichment");
                continue;
            }

            let input = prompt::build_input(system_prompt, &place.name, &photo_urls);
            let reply = match self.client.respond(&input).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(place = %place.name, error = %e, "vision call failed; skipping place");
                    continue;
                }
            };

            let Some(json) = extract::first_json_object(&reply) else {
                tracing::warn!(place = %place.name, "no JSON object in vision reply; skipping place");
                continue;
            };

            let report: AmbianceReport = match serde_json::from_str(json) {
                Ok(report) => report,
                Err(e) => {
                    tracing::warn!(place = %place.name, error = %e, "vision reply did not parse; skipping place");
                    continue;
                }
            };

            results.insert(place.id.clone(), labels::to_record(&place.id, &report));
        }

        results
    }
}

/// Merges enrichment results back into the place list.
///
/// Labels are replaced wholesale; tags and features are appended. Places
/// without a record pass through untouched.
#[must_use]
pub fn merge_enrichment(
    places: Vec<Place>,
    results: &HashMap<String, EnrichmentRecord>,
) -> Vec<Place> {
    places
        .into_iter()
        .map(|mut place| {
            if let Some(record) = results.get(&place.id) {
                place.labels = record.labels.clone();
                place.tags.extend(record.tags.iter().cloned());
                place.features.extend(record.features.iter().cloned());
            }
            place
        })
        .collect()
}

/// Collects up to six photo URLs for one place: the photo reference list
/// first, then the single legacy URL fallback, capped, deduplicated, and
/// stripped of anything not shaped like a URL.
fn collect_photo_urls(place: &Place, places_client: &PlacesClient, max_width: u32) -> Vec<String> {
    let mut urls: Vec<String> = place
        .photos
        .iter()
        .map(|photo| places_client.photo_url(photo, max_width))
        .collect();
    if let Some(legacy) = &place.photo {
        urls.push(legacy.clone());
    }
    urls.truncate(MAX_PHOTOS_PER_PLACE);

    let mut seen: HashSet<String> = HashSet::new();
    urls.into_iter()
        .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use venuescout_core::{Coordinates, PhotoRef};

    fn place_with_photos(id: &str, refs: &[&str], legacy: Option<&str>) -> Place {
        Place {
            id: id.to_string(),
            name: format!("place {id}"),
            address: String::new(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            types: vec!["cafe".to_string()],
            rating: None,
            rating_count: 0,
            photos: refs.iter().map(|r| PhotoRef((*r).to_string())).collect(),
            photo: legacy.map(str::to_string),
            website: None,
            price_level: None,
            labels: Vec::new(),
            tags: Vec::new(),
            features: Vec::new(),
        }
    }

    fn test_places_client() -> PlacesClient {
        PlacesClient::with_base_url("k", 10, "https://places.test")
            .expect("client construction should not fail")
    }

    #[test]
    fn photo_refs_resolve_before_the_legacy_fallback() {
        let client = test_places_client();
        let place = place_with_photos("p1", &["r1"], Some("https://cdn.example/legacy.jpg"));
        let urls = collect_photo_urls(&place, &client, 800);

        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains("/v1/r1/media"));
        assert_eq!(urls[1], "https://cdn.example/legacy.jpg");
    }

    #[test]
    fn photo_list_is_capped_at_six() {
        let client = test_places_client();
        let refs: Vec<String> = (0..9).map(|i| format!("r{i}")).collect();
        let ref_strs: Vec<&str> = refs.iter().map(String::as_str).collect();
        let place = place_with_photos("p1", &ref_strs, Some("https://cdn.example/legacy.jpg"));

        let urls = collect_photo_urls(&place, &client, 800);
        assert_eq!(urls.len(), 6);
        assert!(urls.iter().all(|u| u.contains("/media")));
    }

    #[test]
    fn duplicate_and_malformed_entries_are_dropped() {
        let client = test_places_client();
        let place = place_with_photos("p1", &["r1", "r1"], Some("not-a-url"));
        let urls = collect_photo_urls(&place, &client, 800);
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn merge_replaces_labels_and_appends_tags() {
        let mut place = place_with_photos("p1", &[], None);
        place.labels = vec!["stale".to_string()];
        place.tags = vec!["existing-tag".to_string()];
        let untouched = place_with_photos("p2", &[], None);

        let mut results = HashMap::new();
        results.insert(
            "p1".to_string(),
            EnrichmentRecord {
                place_id: "p1".to_string(),
                labels: vec!["Retro".to_string()],
                features: vec!["teras".to_string()],
                tags: vec!["yeni-tag".to_string()],
            },
        );

        let merged = merge_enrichment(vec![place, untouched], &results);
        assert_eq!(merged[0].labels, vec!["Retro".to_string()]);
        assert_eq!(
            merged[0].tags,
            vec!["existing-tag".to_string(), "yeni-tag".to_string()]
        );
        assert_eq!(merged[0].features, vec!["teras".to_string()]);
        assert!(merged[1].labels.is_empty());
    }
}
