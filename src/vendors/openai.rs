//! OpenAI model identifier mappings.

use std::sync::OnceLock;

use crate::describe::{ModelDescription, ModelMapping, resolve};
use crate::tables;

static OPENAI_MODELS: OnceLock<Vec<ModelMapping>> = OnceLock::new();

/// Known OpenAI mappings, most-specific prefix first, catch-all last.
pub fn mappings() -> &'static [ModelMapping] {
    OPENAI_MODELS.get_or_init(|| {
        tables::load(
            include_str!("../../config/openai-models.json"),
            "openai-models.json",
        )
    })
}

/// Describe a model id from the OpenAI models listing.
pub fn model_description(
    id: &str,
    created: Option<i64>,
    updated: Option<i64>,
) -> ModelDescription {
    resolve(mappings(), id, created, updated, None)
}
