//! The model's structured output and the fixed label mapping.
//!
//! The AI reports ambiance as a small JSON object with optional fields;
//! [`AmbianceReport`] models it as an explicit optional-field record, and
//! [`to_record`] is the exhaustive pure mapping from that record to the
//! filterable label vocabulary. Every field has a defined mapping; a field
//! that is absent emits nothing, while seating and sea view emit explicit
//! negative labels when present but false.

use serde::Deserialize;
use venuescout_core::EnrichmentRecord;

/// Structured ambiance facts reported by the model for one place.
///
/// Serde names follow the model's output vocabulary, anchored by the
/// few-shot exemplars.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AmbianceReport {
    #[serde(default, rename = "mekan_isiklandirma")]
    pub lighting: Option<Lighting>,
    #[serde(default, rename = "ambiyans")]
    pub ambiance: Option<Ambiance>,
    #[serde(default, rename = "masada_priz_var_mi")]
    pub table_outlets: Option<bool>,
    #[serde(default, rename = "koltuk_var_mi")]
    pub has_seating: Option<bool>,
    #[serde(default, rename = "sigara_iciliyor")]
    pub smoking_allowed: Option<bool>,
    #[serde(default, rename = "sigara_alani")]
    pub smoking_areas: Option<Vec<SmokingArea>>,
    #[serde(default, rename = "deniz_manzarasi")]
    pub sea_view: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lighting {
    Los,
    Canli,
    Dogal,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ambiance {
    #[serde(default)]
    pub retro: bool,
    #[serde(default)]
    pub modern: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingArea {
    Acik,
    Kapali,
}

/// Maps one report into the enrichment record for `place_id`.
///
/// Labels come from the fixed rule table below; `tags` and `features` are
/// carried empty today and exist for append-only merging.
#[must_use]
pub fn to_record(place_id: &str, report: &AmbianceReport) -> EnrichmentRecord {
    EnrichmentRecord {
        place_id: place_id.to_string(),
        labels: derive_labels(report),
        features: Vec::new(),
        tags: Vec::new(),
    }
}

/// The fixed mapping from report fields to label strings.
#[must_use]
pub fn derive_labels(report: &AmbianceReport) -> Vec<String> {
    let mut labels: Vec<&str> = Vec::new();

    match report.lighting {
        Some(Lighting::Los) => labels.push("Los"),
        Some(Lighting::Canli) => labels.push("Canli"),
        Some(Lighting::Dogal) => labels.push("Dogal"),
        None => {}
    }

    if let Some(ambiance) = &report.ambiance {
        if ambiance.retro {
            labels.push("Retro");
        }
        if ambiance.modern {
            labels.push("Modern");
        }
    }

    if report.table_outlets == Some(true) {
        labels.push("Masada priz");
    }

    match report.has_seating {
        Some(true) => labels.push("Koltuk var"),
        Some(false) => labels.push("Koltuk yok"),
        None => {}
    }

    if report.smoking_allowed == Some(true) {
        labels.push("Sigara icilebilir");
        let enclosed = report
            .smoking_areas
            .as_ref()
            .is_some_and(|areas| areas.contains(&SmokingArea::Kapali));
        if enclosed {
            labels.push("Kapali alanda sigara icilebilir");
        }
    }

    match report.sea_view {
        Some(true) => labels.push("Deniz goruyor"),
        Some(false) => labels.push("Deniz gormuyor"),
        None => {}
    }

    labels.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AmbianceReport {
        serde_json::from_str(json).expect("report should parse")
    }

    #[test]
    fn lighting_variants_map_to_their_labels() {
        for (value, label) in [("los", "Los"), ("canli", "Canli"), ("dogal", "Dogal")] {
            let report = parse(&format!(r#"{{"mekan_isiklandirma": "{value}"}}"#));
            assert_eq!(derive_labels(&report), vec![label.to_string()]);
        }
    }

    #[test]
    fn ambiance_flags_emit_positive_labels_only() {
        let report = parse(r#"{"ambiyans": {"retro": true, "modern": false}}"#);
        assert_eq!(derive_labels(&report), vec!["Retro".to_string()]);

        let report = parse(r#"{"ambiyans": {"retro": true, "modern": true}}"#);
        assert_eq!(
            derive_labels(&report),
            vec!["Retro".to_string(), "Modern".to_string()]
        );
    }

    #[test]
    fn seating_emits_explicit_negative_when_present_false() {
        let report = parse(r#"{"koltuk_var_mi": false}"#);
        assert_eq!(derive_labels(&report), vec!["Koltuk yok".to_string()]);
    }

    #[test]
    fn absent_fields_emit_nothing() {
        assert!(derive_labels(&AmbianceReport::default()).is_empty());
    }

    #[test]
    fn sea_view_true_emits_positive_and_not_negative() {
        let report = parse(r#"{"deniz_manzarasi": true}"#);
        let labels = derive_labels(&report);
        assert!(labels.contains(&"Deniz goruyor".to_string()));
        assert!(!labels.contains(&"Deniz gormuyor".to_string()));
    }

    #[test]
    fn smoking_in_enclosed_area_adds_second_label() {
        let report = parse(r#"{"sigara_iciliyor": true, "sigara_alani": ["kapali"]}"#);
        assert_eq!(
            derive_labels(&report),
            vec![
                "Sigara icilebilir".to_string(),
                "Kapali alanda sigara icilebilir".to_string()
            ]
        );
    }

    #[test]
    fn open_air_smoking_does_not_add_enclosed_label() {
        let report = parse(r#"{"sigara_iciliyor": true, "sigara_alani": ["acik"]}"#);
        assert_eq!(derive_labels(&report), vec!["Sigara icilebilir".to_string()]);
    }

    #[test]
    fn smoking_area_without_smoking_flag_emits_nothing() {
        let report = parse(r#"{"sigara_alani": ["kapali"]}"#);
        assert!(derive_labels(&report).is_empty());
    }

    #[test]
    fn null_smoking_area_is_tolerated() {
        let report = parse(r#"{"sigara_iciliyor": true, "sigara_alani": null}"#);
        assert_eq!(derive_labels(&report), vec!["Sigara icilebilir".to_string()]);
    }

    #[test]
    fn full_exemplar_report_maps_completely() {
        let report = parse(
            r#"{
                "mekan_isiklandirma": "dogal",
                "ambiyans": { "retro": true, "modern": false },
                "masada_priz_var_mi": true,
                "koltuk_var_mi": true,
                "sigara_iciliyor": true,
                "sigara_alani": ["acik"],
                "deniz_manzarasi": true
            }"#,
        );
        assert_eq!(
            derive_labels(&report),
            vec![
                "Dogal".to_string(),
                "Retro".to_string(),
                "Masada priz".to_string(),
                "Koltuk var".to_string(),
                "Sigara icilebilir".to_string(),
                "Deniz goruyor".to_string(),
            ]
        );
    }

    #[test]
    fn record_carries_place_id_and_empty_tag_sets() {
        let report = parse(r#"{"deniz_manzarasi": false}"#);
        let record = to_record("places/p1", &report);
        assert_eq!(record.place_id, "places/p1");
        assert_eq!(record.labels, vec!["Deniz gormuyor".to_string()]);
        assert!(record.tags.is_empty());
        assert!(record.features.is_empty());
    }
}
