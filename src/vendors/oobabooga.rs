//! Oobabooga (text-generation-webui) model identifier mappings.
//!
//! The webui exposes whatever model the user loaded, including plenty of
//! base models that cannot hold a chat. Unmatched ids get a fallback entry
//! that is hidden when the id is a known non-chat model.

use std::sync::OnceLock;

use crate::describe::{ModelDescription, ModelInterface, ModelMapping, resolve};
use crate::tables;

const DEFAULT_CONTEXT_WINDOW: u32 = 4096;

/// Model names the webui ships or commonly loads that are not chat models.
const NON_CHAT_MODELS: &[&str] = &[
    "None",
    "gpt2",
    "opt-350m",
    "galactica-125m",
    "pythia-70m-deduped",
    "t5-small",
    "flan-t5-small",
];

static OOBABOOGA_MODELS: OnceLock<Vec<ModelMapping>> = OnceLock::new();

/// Known webui mappings. No catch-all: the fallback is derived per id.
pub fn mappings() -> &'static [ModelMapping] {
    OOBABOOGA_MODELS.get_or_init(|| {
        tables::load(
            include_str!("../../config/oobabooga-models.json"),
            "oobabooga-models.json",
        )
    })
}

/// Describe a model id from the webui models listing.
pub fn model_description(id: &str) -> ModelDescription {
    let fallback = derived_fallback(id);
    resolve(mappings(), id, None, None, Some(&fallback))
}

fn derived_fallback(id: &str) -> ModelMapping {
    ModelMapping {
        id_prefix: id.to_string(),
        label: id.replace('_', " ").trim().to_string(),
        description: "Locally loaded model".to_string(),
        context_window: DEFAULT_CONTEXT_WINDOW,
        max_completion_tokens: None,
        interfaces: vec![ModelInterface::Chat],
        chat_price: None,
        latest: false,
        hidden: NON_CHAT_MODELS.contains(&id),
    }
}
