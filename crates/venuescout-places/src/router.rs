//! Query routing between free-text and category search.
//!
//! The single-word-query-implies-category-search heuristic is a product
//! rule: provider category search is more precise for single-token,
//! category-like queries. It lives only here so it can be revisited without
//! touching aggregation or enrichment.

use venuescout_core::{SearchRequest, SearchResult};

use crate::client::PlacesClient;
use crate::error::PlacesError;

/// Which provider search mode a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    Text,
    Category(String),
}

/// Chooses the search mode for a request.
///
/// Pure function of (word count of the query, presence of a category type,
/// blankness of the query):
///
/// 1. exactly one word and a category type → category search;
/// 2. blank query and a category type → category search;
/// 3. non-blank query → text search;
/// 4. blank query, no category type → [`PlacesError::MissingQuery`].
///
/// # Errors
///
/// Returns [`PlacesError::MissingQuery`] when there is nothing to search by.
pub fn route(request: &SearchRequest) -> Result<SearchMode, PlacesError> {
    let word_count = request.query.split_whitespace().count();

    match (&request.category_type, word_count) {
        (Some(category), 0 | 1) => Ok(SearchMode::Category(category.clone())),
        (_, n) if n > 0 => Ok(SearchMode::Text),
        _ => Err(PlacesError::MissingQuery),
    }
}

/// Routes and executes one search request.
///
/// # Errors
///
/// Returns [`PlacesError::MissingCoordinates`] before any provider call if
/// the request has no center, [`PlacesError::MissingQuery`] if it has
/// nothing to search by, or any provider-call error from the client.
pub async fn search(
    client: &PlacesClient,
    request: &SearchRequest,
) -> Result<SearchResult, PlacesError> {
    let Some(center) = request.center else {
        return Err(PlacesError::MissingCoordinates);
    };

    match route(request)? {
        SearchMode::Category(place_type) => {
            client
                .category_search(
                    &place_type,
                    center,
                    request.radius_m,
                    request.page_token.as_deref(),
                )
                .await
        }
        SearchMode::Text => {
            client
                .text_search(
                    request.query.trim(),
                    center,
                    request.radius_m,
                    request.page_token.as_deref(),
                )
                .await
        }
    }
}
