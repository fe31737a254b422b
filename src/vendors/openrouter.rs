//! OpenRouter model identifier mappings and display ordering.
//!
//! OpenRouter re-exposes many vendors' models under a `vendor/model`
//! namespace, so listings mix families. [`compare_ids`] gives the display
//! order: by vendor family priority, then lexicographically within a family.

use std::cmp::Ordering;
use std::sync::OnceLock;

use crate::describe::{ModelDescription, ModelMapping, resolve};
use crate::tables;

/// Vendor families in display priority order. Ids matching none of these
/// sort after all that do.
const FAMILY_ORDER: &[&str] = &[
    "openai/",
    "anthropic/",
    "google/",
    "mistralai/",
    "meta-llama/",
];

static OPENROUTER_MODELS: OnceLock<Vec<ModelMapping>> = OnceLock::new();

/// Known OpenRouter mappings, most-specific prefix first, catch-all last.
pub fn mappings() -> &'static [ModelMapping] {
    OPENROUTER_MODELS.get_or_init(|| {
        tables::load(
            include_str!("../../config/openrouter-models.json"),
            "openrouter-models.json",
        )
    })
}

/// Describe a model id from the OpenRouter models listing.
pub fn model_description(
    id: &str,
    created: Option<i64>,
    updated: Option<i64>,
) -> ModelDescription {
    resolve(mappings(), id, created, updated, None)
}

fn family_rank(id: &str) -> usize {
    FAMILY_ORDER
        .iter()
        .position(|family| id.starts_with(family))
        .unwrap_or(FAMILY_ORDER.len())
}

/// Display ordering for OpenRouter ids: vendor family priority first,
/// lexicographic within a family.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    family_rank(a).cmp(&family_rank(b)).then_with(|| a.cmp(b))
}

/// Sort ids in place into display order.
pub fn sort_ids<S: AsRef<str>>(ids: &mut [S]) {
    ids.sort_by(|a, b| compare_ids(a.as_ref(), b.as_ref()));
}
