//! Loading of the vendor mapping tables embedded from `config/`.

use crate::describe::ModelMapping;

/// Parse an embedded JSON table. The files are validated by build.rs, so a
/// parse failure here means the build and the embedded bytes disagree.
pub(crate) fn load(json: &str, file: &str) -> Vec<ModelMapping> {
    serde_json::from_str(json)
        .unwrap_or_else(|e| panic!("{} must be valid (checked at build time): {}", file, e))
}
