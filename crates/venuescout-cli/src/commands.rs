//! Command handlers for the CLI.
//!
//! Each handler wires the library surface end to end: search or discover,
//! optionally enrich, filter, and print normalized JSON to stdout.
//! Enrichment failures never abort a run; the affected places simply print
//! without labels.

use std::collections::HashMap;

use venuescout_core::{
    filter_places, AppConfig, Coordinates, FilterState, Place, SearchRequest,
};
use venuescout_places::PlacesClient;
use venuescout_vision::{merge_enrichment, Enricher, VisionClient};

/// Fallback search center (Istanbul) used when no coordinates are given,
/// matching the product's home market.
const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 41.015137,
    lng: 28.97953,
};

pub(crate) struct SearchArgs {
    pub query: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub category: Option<String>,
    pub page_token: Option<String>,
    pub no_enrich: bool,
    pub filters: Vec<(String, Vec<String>)>,
    pub main_categories: Vec<String>,
}

pub(crate) struct DiscoverArgs {
    pub categories: Vec<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    pub no_enrich: bool,
    pub filters: Vec<(String, Vec<String>)>,
    pub main_categories: Vec<String>,
}

/// Parses one `--filter GROUP=opt1,opt2` argument.
///
/// # Errors
///
/// Returns a description of the expected form when `=` is missing or the
/// option list is empty.
pub(crate) fn parse_filter(raw: &str) -> Result<(String, Vec<String>), String> {
    let (group, options) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected GROUP=opt1,opt2 but got '{raw}'"))?;
    let options: Vec<String> = options
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    if group.trim().is_empty() || options.is_empty() {
        return Err(format!("expected GROUP=opt1,opt2 but got '{raw}'"));
    }
    Ok((group.trim().to_string(), options))
}

/// Run a single routed search, enrich unless told not to, filter, print.
pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let client = places_client(config)?;

    let request = SearchRequest {
        query: args.query,
        center: resolve_center(args.lat, args.lng),
        radius_m: args.radius.unwrap_or(config.search_radius_m),
        category_type: args.category,
        page_token: args.page_token,
    };

    let result = venuescout_places::search(&client, &request).await?;
    if let Some(token) = &result.next_page_token {
        tracing::info!(token = %token, "more results available; pass --page-token");
    }

    let places = finish_places(config, &client, result.places, args.no_enrich).await;
    let filter = filter_state(args.main_categories, args.filters);
    print_places(&filter_places(&places, &filter))
}

/// Run a concurrent multi-category round, enrich, filter, print.
pub(crate) async fn run_discover(config: &AppConfig, args: DiscoverArgs) -> anyhow::Result<()> {
    let client = places_client(config)?;
    let center = resolve_center(args.lat, args.lng)
        .ok_or_else(|| anyhow::anyhow!("--lat and --lng must be given together"))?;
    let radius_m = args.radius.unwrap_or(config.search_radius_m);

    let merged =
        venuescout_places::search_all_categories(&client, &args.categories, center, radius_m)
            .await;
    if merged.is_empty() {
        tracing::info!("no results matched the requested categories");
    }

    let places = finish_places(config, &client, merged, args.no_enrich).await;
    let filter = filter_state(args.main_categories, args.filters);
    print_places(&filter_places(&places, &filter))
}

/// Fetch and print extended details for one place.
pub(crate) async fn run_details(config: &AppConfig, place_id: &str) -> anyhow::Result<()> {
    let client = places_client(config)?;
    let details = client.place_details(place_id).await?;
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

fn places_client(config: &AppConfig) -> anyhow::Result<PlacesClient> {
    let api_key = config.places_api_key.as_deref().unwrap_or_default();
    Ok(PlacesClient::new(api_key, config.places_timeout_secs)?)
}

/// Uses the given coordinates when both are present and the default center
/// when both are absent. Exactly one coordinate yields `None`, which the
/// router rejects as missing coordinates.
fn resolve_center(lat: Option<f64>, lng: Option<f64>) -> Option<Coordinates> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        (None, None) => {
            tracing::warn!(
                lat = DEFAULT_CENTER.lat,
                lng = DEFAULT_CENTER.lng,
                "no coordinates given; using the default center"
            );
            Some(DEFAULT_CENTER)
        }
        _ => None,
    }
}

async fn finish_places(
    config: &AppConfig,
    places_client: &PlacesClient,
    places: Vec<Place>,
    no_enrich: bool,
) -> Vec<Place> {
    if no_enrich || places.is_empty() {
        return places;
    }

    let Some(vision_key) = config.vision_api_key.as_deref() else {
        tracing::warn!("OPENAI_API_KEY is not set; returning unenriched places");
        return places;
    };
    let vision = match VisionClient::new(vision_key, config.vision_timeout_secs) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "vision client unavailable; returning unenriched places");
            return places;
        }
    };

    let enricher = Enricher::new(
        vision,
        config.system_prompt_path.clone(),
        config.photo_max_width,
    );
    let results = enricher.enrich(places_client, &places).await;
    tracing::info!(
        enriched = results.len(),
        total = places.len(),
        "enrichment pass finished"
    );
    merge_enrichment(places, &results)
}

fn filter_state(
    main_categories: Vec<String>,
    filters: Vec<(String, Vec<String>)>,
) -> FilterState {
    FilterState {
        main: main_categories,
        sub: filters.into_iter().collect::<HashMap<_, _>>(),
    }
}

fn print_places(places: &[Place]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(places)?);
    Ok(())
}
