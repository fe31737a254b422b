//! Per-vendor mapping tables and description wrappers.

pub mod localai;
pub mod oobabooga;
pub mod openai;
pub mod openrouter;
