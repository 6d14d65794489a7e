//! AI photo enrichment for discovered places.
//!
//! Builds a deterministic multi-modal prompt (fixed instruction, fixed
//! few-shot exemplars, up to six photos per place), calls the vision-capable
//! responses endpoint, extracts the first JSON object from the free-form
//! reply, and maps it into the filterable label vocabulary. Per-place
//! failures are logged and skipped; the pipeline itself never fails.

pub mod client;
pub mod error;
pub mod extract;
pub mod labels;
pub mod pipeline;
pub mod prompt;

pub use client::{VisionClient, VISION_MODEL};
pub use error::VisionError;
pub use labels::AmbianceReport;
pub use pipeline::{merge_enrichment, Enricher};
