//! Multi-modal prompt construction.
//!
//! Every enrichment call sends the same frame: one system instruction
//! (loaded once per process, see [`SystemPromptLoader`]), the fixed few-shot
//! exemplar exchanges anchoring output format and vocabulary, then one user
//! turn carrying the target place's photo URLs.

use std::path::PathBuf;

use serde::Serialize;
use tokio::sync::OnceCell;

/// Substituted when the system prompt file is missing or empty.
pub const FALLBACK_SYSTEM_PROMPT: &str = "Sen bir mekan analiz uzmanısın.";

/// Instruction text attached to each few-shot exemplar's image set.
const EXEMPLAR_INSTRUCTION: &str =
    "Bu fotoğraf bir ÖĞRETİM örneğidir. Kurallara göre analiz et.";

/// The fixed few-shot exemplar set: instructional image URLs paired with
/// the canonical JSON answer. Hard-coded, never generated.
const FEW_SHOT_EXEMPLARS: &[(&[&str], &str)] = &[
    (
        &[
            "https://ibb.co/gZR4GN9B",
            "https://ibb.co/vxyjtkn4",
            "https://ibb.co/FL616hP1",
            "https://ibb.co/ZnjvVt4",
            "https://ibb.co/3yJz6HcY",
            "https://ibb.co/350kb2n1",
        ],
        r#"{
  "mekan_isiklandirma": "los",
  "ambiyans": { "retro": true, "modern": false },
  "sigara_iciliyor": true,
  "sigara_alani": ["kapali"],
  "deniz_manzarasi": false
}"#,
    ),
    (
        &[
            "https://ibb.co/s9nMvFMx",
            "https://ibb.co/ZpWGcP6g",
            "https://ibb.co/bg1SM1C7",
            "https://ibb.co/ksyMcsf4",
            "https://ibb.co/wFVDcQGQ",
            "https://ibb.co/4ZhbzpLf",
            "https://ibb.co/0ySFQWbQ",
        ],
        r#"{
  "mekan_isiklandirma": "canli",
  "ambiyans": { "retro": false, "modern": true },
  "masada_priz_var_mi": true,
  "sigara_iciliyor": true,
  "sigara_alani": ["acik"],
  "deniz_manzarasi": false
}"#,
    ),
    (
        &[
            "https://ibb.co/45Nr9kN",
            "https://ibb.co/8VTJvf7",
            "https://ibb.co/gbHvLW6x",
            "https://ibb.co/HjpRZQ8",
            "https://ibb.co/gb5wSXF2",
            "https://ibb.co/2YpzMGBP",
        ],
        r#"{
  "mekan_isiklandirma": "dogal",
  "ambiyans": { "retro": true, "modern": false },
  "masada_priz_var_mi": true,
  "koltuk_var_mi": true,
  "sigara_iciliyor": true,
  "sigara_alani": ["acik"],
  "deniz_manzarasi": true
}"#,
    ),
    (
        &[
            "https://ibb.co/Q3hV8mKp",
            "https://ibb.co/7nWcT2gd",
            "https://ibb.co/Lh1rJxVb",
            "https://ibb.co/9mZsCw4f",
            "https://ibb.co/XtGpR6Nq",
        ],
        r#"{
  "mekan_isiklandirma": "canli",
  "ambiyans": { "retro": false, "modern": true },
  "masada_priz_var_mi": false,
  "koltuk_var_mi": false,
  "sigara_iciliyor": false,
  "deniz_manzarasi": false
}"#,
    ),
];

/// One role-tagged message in the ordered `input` list.
#[derive(Debug, Clone, Serialize)]
pub struct InputMessage {
    pub role: &'static str,
    pub content: Vec<ContentPart>,
}

/// One part of a multi-part message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    InputText { text: String },
    InputImage { image_url: String },
    OutputText { text: String },
}

/// Single-flight cache for the system instruction text.
///
/// The first caller performs the file read; concurrent first-use callers
/// await that same in-flight load instead of issuing duplicate reads. Once
/// loaded the value is immutable for the loader's lifetime. A failed or
/// empty read caches the empty string; [`build_input`] substitutes the
/// fixed fallback instruction in that case.
pub struct SystemPromptLoader {
    path: PathBuf,
    cell: OnceCell<String>,
}

impl SystemPromptLoader {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cell: OnceCell::new(),
        }
    }

    pub async fn load(&self) -> &str {
        self.cell
            .get_or_init(|| async {
                match tokio::fs::read_to_string(&self.path).await {
                    Ok(text) => text.trim().to_string(),
                    Err(e) => {
                        tracing::warn!(
                            path = %self.path.display(),
                            error = %e,
                            "system prompt load failed; falling back to built-in instruction"
                        );
                        String::new()
                    }
                }
            })
            .await
    }
}

/// Builds the full ordered message list for one place.
///
/// Layout: system instruction, then the few-shot exemplar exchanges, then
/// one user turn with this place's photo URLs and an instruction sentence
/// naming the place. Deterministic for identical inputs.
#[must_use]
pub fn build_input(system_prompt: &str, place_name: &str, photo_urls: &[String]) -> Vec<InputMessage> {
    let system_text = if system_prompt.is_empty() {
        FALLBACK_SYSTEM_PROMPT
    } else {
        system_prompt
    };

    let mut messages = Vec::with_capacity(FEW_SHOT_EXEMPLARS.len() * 2 + 2);
    messages.push(InputMessage {
        role: "system",
        content: vec![ContentPart::InputText {
            text: system_text.to_string(),
        }],
    });

    for (images, answer) in FEW_SHOT_EXEMPLARS {
        let mut content: Vec<ContentPart> = images
            .iter()
            .map(|url| ContentPart::InputImage {
                image_url: (*url).to_string(),
            })
            .collect();
        content.push(ContentPart::InputText {
            text: EXEMPLAR_INSTRUCTION.to_string(),
        });
        messages.push(InputMessage {
            role: "user",
            content,
        });
        messages.push(InputMessage {
            role: "assistant",
            content: vec![ContentPart::OutputText {
                text: (*answer).to_string(),
            }],
        });
    }

    let mut content: Vec<ContentPart> = photo_urls
        .iter()
        .map(|url| ContentPart::InputImage {
            image_url: url.clone(),
        })
        .collect();
    content.push(ContentPart::InputText {
        text: format!(
            "Tüm fotoğraflar \"{place_name}\" mekanına aittir. Kurallara birebir uyarak analiz et."
        ),
    });
    messages.push(InputMessage {
        role: "user",
        content,
    });

    messages
}
