//! LocalAI model identifier mappings.
//!
//! LocalAI serves whatever model files the user dropped in its models
//! directory, so most ids are unknown. Unmatched ids get a fallback entry
//! whose label is derived from the raw id (filename artifacts stripped,
//! separators replaced with spaces).

use std::sync::OnceLock;

use crate::describe::{ModelDescription, ModelInterface, ModelMapping, resolve};
use crate::tables;

const DEFAULT_CONTEXT_WINDOW: u32 = 4096;

static LOCALAI_MODELS: OnceLock<Vec<ModelMapping>> = OnceLock::new();

/// Known LocalAI mappings. No catch-all: the fallback is derived per id.
pub fn mappings() -> &'static [ModelMapping] {
    LOCALAI_MODELS.get_or_init(|| {
        tables::load(
            include_str!("../../config/localai-models.json"),
            "localai-models.json",
        )
    })
}

/// Describe a model id from the LocalAI models listing. `context_hint` is the
/// context length the listing reported, when it reported one; it overrides
/// the table value since the server knows what it actually loaded.
pub fn model_description(id: &str, context_hint: Option<u32>) -> ModelDescription {
    let fallback = derived_fallback(id);
    let mut desc = resolve(mappings(), id, None, None, Some(&fallback));
    if let Some(ctx) = context_hint {
        desc.context_window = ctx;
    }
    desc
}

/// Human label from a raw model filename, e.g.
/// "ggml-vicuna-7b_q4.bin" -> "vicuna 7b q4".
fn derived_label(id: &str) -> String {
    let stem = id.strip_prefix("ggml-").unwrap_or(id);
    let stem = stem
        .strip_suffix(".bin")
        .or_else(|| stem.strip_suffix(".gguf"))
        .unwrap_or(stem);
    stem.replace(['-', '_'], " ").trim().to_string()
}

fn derived_fallback(id: &str) -> ModelMapping {
    ModelMapping {
        // The full id as prefix keeps the bracketed suffix off the label.
        id_prefix: id.to_string(),
        label: derived_label(id),
        description: "Local model".to_string(),
        context_window: DEFAULT_CONTEXT_WINDOW,
        max_completion_tokens: None,
        interfaces: vec![ModelInterface::Chat],
        chat_price: None,
        latest: false,
        hidden: false,
    }
}
