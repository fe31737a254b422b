//! Static model catalogs: raw vendor model identifiers resolved to
//! human-readable descriptions.
//!
//! Each supported backend (OpenAI, LocalAI, Oobabooga's text-generation
//! webui, the OpenRouter aggregator) ships a developer-curated table mapping
//! identifier prefixes to display metadata. [`describe::resolve`] scans a
//! table in order, picks the first matching prefix, and builds a
//! [`describe::ModelDescription`] with a decorated label; unknown ids fall
//! back to a catch-all or a per-vendor derived entry, so resolution never
//! fails on external input.
//!
//! Tables live in `config/*.json`, are embedded at compile time, and are
//! validated by the build script. Everything here is pure and read-only
//! after first access; calling from multiple threads needs no coordination.

pub mod describe;
mod tables;
pub mod vendors;

pub use describe::{
    ChatPrice, LATEST_MARKER, ModelDescription, ModelInterface, ModelMapping,
    filter_descriptions, resolve,
};
