//! Heuristic transformer suggestions based on a variable's name.

use std::sync::LazyLock;

use regex::Regex;

use crate::registry::TransformerRegistry;
use crate::types::TransformerApplication;

static DIGEST_EVENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^steps\..*\.events$").expect("digest pattern should compile"));

/// A group of name fragments and the transformers they suggest.
struct Rule {
    fragments: &'static [&'static str],
    transformers: &'static [&'static str],
}

const DATE_RULE: Rule = Rule {
    fragments: &["date", "time", "created", "updated", "timestamp"],
    transformers: &["date"],
};

const NUMBER_RULE: Rule = Rule {
    fragments: &["count", "amount", "total", "price", "quantity", "number", "sum"],
    transformers: &["round", "floor", "ceil", "plus", "minus"],
};

const COLLECTION_RULE: Rule = Rule {
    fragments: &["list", "array", "items", "events", "tags", "collection"],
    transformers: &["size", "first", "last", "join"],
};

const TEXT_RULE: Rule = Rule {
    fragments: &[
        "name",
        "title",
        "text",
        "label",
        "subject",
        "message",
        "description",
    ],
    transformers: &["capitalize", "upcase", "downcase"],
};

const DIGEST_TRANSFORMERS: &[&str] = &["digest", "size"];

/// Suggest transformers for a variable name.
///
/// Pure and deterministic. Rules are checked in a fixed order (digest
/// events, dates, numbers, collections, text) and their transformers are
/// concatenated without duplicates. Transformers already in `current`, or
/// missing from `registry`, are left out.
///
/// # Example
///
/// ```
/// use liquidvar::{TransformerRegistry, suggest_transformers};
///
/// let registry = TransformerRegistry::builtin();
/// let ids = suggest_transformers("payload.createdAt", &[], &registry);
/// assert_eq!(ids.first().map(String::as_str), Some("date"));
/// ```
pub fn suggest_transformers(
    name: &str,
    current: &[TransformerApplication],
    registry: &TransformerRegistry,
) -> Vec<String> {
    let name = name.trim();
    let lowered = name.to_lowercase();
    let mut candidates: Vec<&'static str> = Vec::new();

    if DIGEST_EVENTS.is_match(name) {
        candidates.extend_from_slice(DIGEST_TRANSFORMERS);
    }
    // `sentAt`, `deliveredAt` and friends name timestamps.
    if name.ends_with("At") && name.len() > 2 {
        candidates.extend_from_slice(DATE_RULE.transformers);
    }
    for rule in [&DATE_RULE, &NUMBER_RULE, &COLLECTION_RULE, &TEXT_RULE] {
        if rule.fragments.iter().any(|f| lowered.contains(f)) {
            candidates.extend_from_slice(rule.transformers);
        }
    }

    let mut suggestions: Vec<String> = Vec::new();
    for id in candidates {
        let applied = current.iter().any(|t| t.id == id);
        let listed = suggestions.iter().any(|s| s == id);
        if !applied && !listed && registry.contains(id) {
            suggestions.push(id.to_string());
        }
    }
    suggestions
}
