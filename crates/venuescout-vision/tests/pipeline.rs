//! Integration tests for the enrichment pipeline using wiremock HTTP mocks.

use std::path::PathBuf;

use venuescout_core::{Coordinates, PhotoRef, Place};
use venuescout_places::PlacesClient;
use venuescout_vision::{Enricher, VisionClient};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn place(id: &str, name: &str, photo_refs: &[&str]) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        address: String::new(),
        coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        types: vec!["cafe".to_string()],
        rating: None,
        rating_count: 0,
        photos: photo_refs.iter().map(|r| PhotoRef((*r).to_string())).collect(),
        photo: None,
        website: None,
        price_level: None,
        labels: Vec::new(),
        tags: Vec::new(),
        features: Vec::new(),
    }
}

fn enricher(base_url: &str) -> Enricher {
    let client = VisionClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail");
    Enricher::new(client, PathBuf::from("/nonexistent/prompt.txt"), 800)
}

fn places_client() -> PlacesClient {
    PlacesClient::with_base_url("places-key", 10, "https://places.test")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn prose_wrapped_reply_is_extracted_and_mapped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output_text": "Sure, here: {\"deniz_manzarasi\": true} thanks"
        })))
        .mount(&server)
        .await;

    let results = enricher(&server.uri())
        .enrich(&places_client(), &[place("p1", "Sahil Cafe", &["r1"])])
        .await;

    let record = results.get("p1").expect("place should be enriched");
    assert!(record.labels.contains(&"Deniz goruyor".to_string()));
    assert!(!record.labels.contains(&"Deniz gormuyor".to_string()));
}

#[tokio::test]
async fn nested_reply_shape_is_read_when_flat_field_is_absent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": [{ "content": [{ "text": "{\"koltuk_var_mi\": false}" }] }]
        })))
        .mount(&server)
        .await;

    let results = enricher(&server.uri())
        .enrich(&places_client(), &[place("p1", "Moda Kahve", &["r1"])])
        .await;

    assert_eq!(
        results.get("p1").expect("place should be enriched").labels,
        vec!["Koltuk yok".to_string()]
    );
}

#[tokio::test]
async fn place_without_photos_is_absent_from_results() {
    let server = MockServer::start().await;

    // No mock mounted: a call for the photoless place would 404 loudly.
    let results = enricher(&server.uri())
        .enrich(&places_client(), &[place("p1", "Fotografsiz", &[])])
        .await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn failed_call_skips_only_the_affected_place() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(body_string_contains("Bozuk Mekan"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(body_string_contains("Saglam Mekan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output_text": "{\"ambiyans\": {\"retro\": true, \"modern\": false}}"
        })))
        .mount(&server)
        .await;

    let places = [
        place("broken", "Bozuk Mekan", &["r1"]),
        place("healthy", "Saglam Mekan", &["r2"]),
    ];
    let results = enricher(&server.uri()).enrich(&places_client(), &places).await;

    assert!(!results.contains_key("broken"));
    assert_eq!(
        results.get("healthy").expect("healthy place enriched").labels,
        vec!["Retro".to_string()]
    );
}

#[tokio::test]
async fn reply_without_json_object_is_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output_text": "Maalesef bu fotograflari analiz edemiyorum."
        })))
        .mount(&server)
        .await;

    let results = enricher(&server.uri())
        .enrich(&places_client(), &[place("p1", "Moda Kahve", &["r1"])])
        .await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn request_carries_model_and_place_instruction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(body_string_contains("gpt-4o-2024-11-20"))
        .and(body_string_contains("Tüm fotoğraflar \\\"Moda Kahve\\\" mekanına aittir"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output_text": "{\"deniz_manzarasi\": false}"
        })))
        .mount(&server)
        .await;

    let results = enricher(&server.uri())
        .enrich(&places_client(), &[place("p1", "Moda Kahve", &["r1"])])
        .await;

    assert!(results.contains_key("p1"), "matcher did not see expected body");
}
