//! Model mapping tables and prefix-based description resolution.

use serde::{Deserialize, Serialize};

/// Marker prepended to the label of entries flagged as `latest`.
pub const LATEST_MARKER: &str = "🌟";

/// Interaction modes a model supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelInterface {
    Chat,
    Completion,
    FunctionCalling,
    Vision,
}

/// Chat pricing hint in USD per million tokens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatPrice {
    pub input: f64,
    pub output: f64,
}

/// A static table entry: maps a model identifier prefix to display metadata.
///
/// Tables are ordered most-specific prefix first; an empty-prefix catch-all,
/// if present, must be the last entry (build.rs enforces this for the
/// embedded tables).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModelMapping {
    pub id_prefix: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub context_window: u32,
    #[serde(default)]
    pub max_completion_tokens: Option<u32>,
    #[serde(default)]
    pub interfaces: Vec<ModelInterface>,
    #[serde(default)]
    pub chat_price: Option<ChatPrice>,
    #[serde(default)]
    pub latest: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// Normalized model description, built per call from a matched mapping.
///
/// `max_completion_tokens`, `chat_price` and `hidden` are omitted from the
/// serialized form when absent; `hidden` is only ever present as `true`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescription {
    pub id: String,
    pub label: String,
    pub created: i64,
    pub updated: i64,
    pub description: String,
    pub context_window: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    pub interfaces: Vec<ModelInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_price: Option<ChatPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// Resolve a raw vendor model id against a mapping table.
///
/// The first entry whose `id_prefix` is a string prefix of `id` wins. When
/// nothing matches, `fallback` is used if supplied, else the table's last
/// entry (by convention the empty-prefix catch-all). The returned `id` always
/// equals the input; the label is decorated with the [`LATEST_MARKER`] and a
/// bracketed suffix for the unmatched remainder of the id.
///
/// `created` defaults to 0 and `updated` to `created` when absent.
///
/// # Panics
///
/// Panics if `table` is empty and no `fallback` is given. That combination is
/// an author error, never a consequence of external input.
pub fn resolve(
    table: &[ModelMapping],
    id: &str,
    created: Option<i64>,
    updated: Option<i64>,
    fallback: Option<&ModelMapping>,
) -> ModelDescription {
    let matched = match table.iter().find(|m| id.starts_with(m.id_prefix.as_str())) {
        Some(m) => m,
        None => {
            log::debug!("No mapping prefix matches model id {:?}, using fallback", id);
            fallback
                .or_else(|| table.last())
                .expect("mapping table is empty and no fallback was given")
        }
    };

    // A supplied fallback's prefix need not actually prefix the id; the whole
    // id is the suffix then.
    let suffix = id.strip_prefix(matched.id_prefix.as_str()).unwrap_or(id).trim();
    let mut label = String::new();
    if matched.latest {
        label.push_str(LATEST_MARKER);
        label.push(' ');
    }
    label.push_str(&matched.label);
    if !suffix.is_empty() {
        label.push_str(" [");
        label.push_str(suffix.replace('-', " ").trim());
        label.push(']');
    }

    let created = created.unwrap_or(0);
    let updated = updated.unwrap_or(created);

    ModelDescription {
        id: id.to_string(),
        label,
        created,
        updated,
        description: matched.description.clone(),
        context_window: matched.context_window,
        max_completion_tokens: matched.max_completion_tokens,
        interfaces: matched.interfaces.clone(),
        chat_price: matched.chat_price,
        hidden: matched.hidden.then_some(true),
    }
}

/// Filter descriptions by query (case-insensitive match on id or label).
/// Returns all descriptions when query is empty.
pub fn filter_descriptions<'a>(
    models: &'a [ModelDescription],
    query: &str,
) -> Vec<&'a ModelDescription> {
    if query.is_empty() {
        return models.iter().collect();
    }
    let q = query.to_lowercase();
    models
        .iter()
        .filter(|m| m.id.to_lowercase().contains(&q) || m.label.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(id_prefix: &str, label: &str) -> ModelMapping {
        ModelMapping {
            id_prefix: id_prefix.to_string(),
            label: label.to_string(),
            description: String::new(),
            context_window: 4096,
            max_completion_tokens: None,
            interfaces: vec![ModelInterface::Chat],
            chat_price: None,
            latest: false,
            hidden: false,
        }
    }

    #[test]
    fn first_matching_prefix_wins() {
        let table = vec![mapping("gpt-4-32k", "GPT-4-32k"), mapping("gpt-4", "GPT-4")];
        let desc = resolve(&table, "gpt-4-32k-0613", None, None, None);
        assert_eq!(desc.label, "GPT-4-32k [0613]");
    }

    #[test]
    fn less_specific_prefix_still_matches() {
        let table = vec![mapping("gpt-4-32k", "GPT-4-32k"), mapping("gpt-4", "GPT-4")];
        let desc = resolve(&table, "gpt-4-0613", None, None, None);
        assert_eq!(desc.label, "GPT-4 [0613]");
    }

    #[test]
    fn exact_match_has_no_suffix() {
        let table = vec![mapping("gpt-4", "GPT-4")];
        let desc = resolve(&table, "gpt-4", None, None, None);
        assert_eq!(desc.label, "GPT-4");
    }

    #[test]
    fn suffix_hyphens_become_spaces() {
        let table = vec![mapping("gpt-3.5-turbo", "3.5-Turbo")];
        let desc = resolve(&table, "gpt-3.5-turbo-16k-0613", None, None, None);
        assert_eq!(desc.label, "3.5-Turbo [16k 0613]");
    }

    #[test]
    fn latest_entry_gets_marker() {
        let mut m = mapping("gpt-4-1106-preview", "4-Turbo (1106)");
        m.latest = true;
        let desc = resolve(&[m], "gpt-4-1106-preview", None, None, None);
        assert_eq!(desc.label, format!("{} 4-Turbo (1106)", LATEST_MARKER));
    }

    #[test]
    fn id_is_echoed_unmodified() {
        let table = vec![mapping("", "?")];
        let desc = resolve(&table, "some/weird id ", None, None, None);
        assert_eq!(desc.id, "some/weird id ");
    }

    #[test]
    fn no_match_uses_last_entry() {
        let table = vec![mapping("gpt-4", "GPT-4"), mapping("", "?")];
        let desc = resolve(&table, "davinci-002", None, None, None);
        assert_eq!(desc.label, "? [davinci 002]");
    }

    #[test]
    fn supplied_fallback_takes_priority_over_last_entry() {
        let table = vec![mapping("gpt-4", "GPT-4")];
        let fallback = mapping("davinci-002", "Davinci");
        let desc = resolve(&table, "davinci-002", None, None, Some(&fallback));
        assert_eq!(desc.label, "Davinci");
    }

    #[test]
    fn empty_id_matches_catch_all() {
        let table = vec![mapping("gpt-4", "GPT-4"), mapping("", "?")];
        let desc = resolve(&table, "", None, None, None);
        assert_eq!(desc.label, "?");
        assert_eq!(desc.id, "");
    }

    #[test]
    #[should_panic(expected = "mapping table is empty")]
    fn empty_table_without_fallback_panics() {
        resolve(&[], "gpt-4", None, None, None);
    }

    #[test]
    fn timestamps_default_to_zero() {
        let table = vec![mapping("gpt-4", "GPT-4")];
        let desc = resolve(&table, "gpt-4", None, None, None);
        assert_eq!(desc.created, 0);
        assert_eq!(desc.updated, 0);
    }

    #[test]
    fn updated_defaults_to_created() {
        let table = vec![mapping("gpt-4", "GPT-4")];
        let desc = resolve(&table, "gpt-4", Some(100), None, None);
        assert_eq!(desc.created, 100);
        assert_eq!(desc.updated, 100);
    }

    #[test]
    fn explicit_timestamps_are_kept() {
        let table = vec![mapping("gpt-4", "GPT-4")];
        let desc = resolve(&table, "gpt-4", Some(100), Some(200), None);
        assert_eq!(desc.created, 100);
        assert_eq!(desc.updated, 200);
    }

    #[test]
    fn hidden_false_is_absent_from_output() {
        let table = vec![mapping("gpt-4", "GPT-4")];
        let desc = resolve(&table, "gpt-4", None, None, None);
        assert_eq!(desc.hidden, None);
        assert_eq!(desc.max_completion_tokens, None);
    }

    #[test]
    fn hidden_true_is_carried_through() {
        let mut m = mapping("gpt-4-0314", "GPT-4 (0314)");
        m.hidden = true;
        let desc = resolve(&[m], "gpt-4-0314", None, None, None);
        assert_eq!(desc.hidden, Some(true));
    }

    #[test]
    fn filter_empty_query_returns_all() {
        let table = vec![mapping("gpt-4", "GPT-4"), mapping("gpt-3.5-turbo", "3.5-Turbo")];
        let descs: Vec<_> = table
            .iter()
            .map(|m| resolve(&table, &m.id_prefix, None, None, None))
            .collect();
        assert_eq!(filter_descriptions(&descs, "").len(), 2);
    }

    #[test]
    fn filter_matches_id_and_label_case_insensitive() {
        let table = vec![mapping("gpt-4", "GPT-4"), mapping("gpt-3.5-turbo", "3.5-Turbo")];
        let descs: Vec<_> = table
            .iter()
            .map(|m| resolve(&table, &m.id_prefix, None, None, None))
            .collect();
        let out = filter_descriptions(&descs, "TURBO");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "gpt-3.5-turbo");
    }
}
