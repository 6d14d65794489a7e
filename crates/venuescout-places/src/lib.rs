//! HTTP client, search router, and category aggregator for the places
//! provider.
//!
//! The provider speaks two response shapes (a legacy `results`/`geometry`
//! form and a newer `places`/`location` form); everything is normalized into
//! [`venuescout_core::Place`] at this boundary and errors are classified
//! once into the [`PlacesError`] taxonomy, never re-derived from message
//! text downstream.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod normalize;
pub mod router;
pub mod types;

pub use aggregate::search_all_categories;
pub use client::PlacesClient;
pub use error::PlacesError;
pub use router::{route, search, SearchMode};
