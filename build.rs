//! Build script: validates the vendor mapping tables in config/ at compile time.

use std::path::PathBuf;

const TABLE_FILES: &[&str] = &[
    "openai-models.json",
    "localai-models.json",
    "oobabooga-models.json",
    "openrouter-models.json",
];

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[allow(dead_code)]
struct MappingEntry {
    id_prefix: String,
    label: String,
    #[serde(default)]
    description: String,
    context_window: u32,
    #[serde(default)]
    max_completion_tokens: Option<u32>,
    #[serde(default)]
    interfaces: Vec<String>,
    #[serde(default)]
    chat_price: Option<ChatPrice>,
    #[serde(default)]
    latest: bool,
    #[serde(default)]
    hidden: bool,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(dead_code)]
struct ChatPrice {
    input: f64,
    output: f64,
}

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    for file in TABLE_FILES {
        let config_path: PathBuf = [&manifest_dir, "config", file].iter().collect();
        println!("cargo::rerun-if-changed={}", config_path.display());
        let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
            panic!(
                "Failed to read {}: {}. {} must exist and be valid.",
                config_path.display(),
                e,
                file
            )
        });
        let entries: Vec<MappingEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
            panic!("{} is invalid JSON: {}. Fix the file and rebuild.", file, e)
        });
        validate_table(file, &entries);
    }
}

const INTERFACE_TAGS: &[&str] = &["chat", "completion", "function-calling", "vision"];

fn validate_table(file: &str, entries: &[MappingEntry]) {
    if entries.is_empty() {
        panic!("{} must contain at least one mapping entry.", file);
    }
    for (i, entry) in entries.iter().enumerate() {
        if entry.label.is_empty() {
            panic!("{}: entry {} has an empty label.", file, i);
        }
        for tag in &entry.interfaces {
            if !INTERFACE_TAGS.contains(&tag.as_str()) {
                panic!("{}: entry {} has unknown interface tag {:?}.", file, i, tag);
            }
        }
        // The empty-prefix catch-all matches everything; anything after it is dead.
        if entry.id_prefix.is_empty() && i + 1 != entries.len() {
            panic!(
                "{}: empty idPrefix catch-all at position {} must be the last entry.",
                file, i
            );
        }
    }
}
