//! Pure label/type filter engine.
//!
//! Evaluates user-selected category and sub-filter options against each
//! place's derived labels and provider types. No I/O, no async.

use std::collections::HashMap;

use crate::place::Place;

/// User-selected filter options, held by the caller for one search round.
///
/// `main` restricts on provider types only. `sub` maps a filter group name
/// to its selected option values: options within a group are OR'd, groups
/// are AND'd. An empty state passes every place.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub main: Vec<String>,
    pub sub: HashMap<String, Vec<String>>,
}

impl FilterState {
    /// True when no main category and no sub-filter option is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.sub.values().all(Vec::is_empty)
    }
}

/// Narrows `places` to those matching `filter`, preserving input order.
#[must_use]
pub fn filter_places(places: &[Place], filter: &FilterState) -> Vec<Place> {
    places
        .iter()
        .filter(|place| place_matches(place, filter))
        .cloned()
        .collect()
}

/// A place matches when its types intersect `main` (if any main category is
/// selected) and, for every group with at least one selected option, the
/// union of its labels and types intersects that group's options.
fn place_matches(place: &Place, filter: &FilterState) -> bool {
    if !filter.main.is_empty()
        && !filter.main.iter().any(|m| place.types.iter().any(|t| t == m))
    {
        return false;
    }

    filter.sub.values().filter(|options| !options.is_empty()).all(|options| {
        options.iter().any(|option| {
            place.labels.iter().any(|l| l == option) || place.types.iter().any(|t| t == option)
        })
    })
}
