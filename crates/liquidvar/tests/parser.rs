//! Integration tests for variable expression parsing.

use liquidvar::{TemplateVariable, TransformerApplication, TransformerRegistry, parse_variable};

fn parse(raw: &str) -> TemplateVariable {
    parse_variable(raw, &TransformerRegistry::builtin())
}

// =============================================================================
// Names
// =============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), TemplateVariable::default());
    assert_eq!(parse("   "), TemplateVariable::default());
    assert_eq!(parse("{{}}"), TemplateVariable::default());
}

#[test]
fn test_name_without_pipes() {
    let v = parse("payload.amount");
    assert_eq!(v.name, "payload.amount");
    assert_eq!(v.default_value, "");
    assert!(v.transformers.is_empty());
}

#[test]
fn test_name_is_trimmed() {
    assert_eq!(parse("   subscriber.email  ").name, "subscriber.email");
}

#[test]
fn test_delimiters_are_stripped() {
    assert_eq!(parse("{{ subscriber.firstName }}").name, "subscriber.firstName");
    assert_eq!(parse("{{subscriber.firstName}}").name, "subscriber.firstName");
}

#[test]
fn test_name_never_contains_pipe() {
    let v = parse("a | b | c");
    assert_eq!(v.name, "a");
    assert!(!v.name.contains('|'));
}

// =============================================================================
// Default values
// =============================================================================

#[test]
fn test_default_single_quoted() {
    let v = parse("name | default: 'hello world'");
    assert_eq!(
        v,
        TemplateVariable {
            name: "name".into(),
            default_value: "hello world".into(),
            transformers: vec![],
        }
    );
}

#[test]
fn test_default_double_quoted() {
    assert_eq!(parse(r#"name | default: "hi there""#).default_value, "hi there");
}

#[test]
fn test_default_bare_token() {
    let v = parse("name | default: hello");
    assert_eq!(v.name, "name");
    assert_eq!(v.default_value, "hello");
}

#[test]
fn test_default_bare_token_stops_at_brace() {
    assert_eq!(parse("{{ name | default: hello}}").default_value, "hello");
    assert_eq!(parse("name default: hello}").default_value, "hello");
}

#[test]
fn test_default_bare_token_stops_at_whitespace() {
    assert_eq!(parse("name | default: hello world").default_value, "hello");
}

#[test]
fn test_default_inline_without_pipe() {
    let v = parse("name default: 'x'");
    assert_eq!(v.name, "name");
    assert_eq!(v.default_value, "x");
}

#[test]
fn test_default_inline_bare() {
    let v = parse("user.city default: Berlin | upcase");
    assert_eq!(v.name, "user.city");
    assert_eq!(v.default_value, "Berlin");
    assert_eq!(v.transformers, vec![TransformerApplication::new("upcase")]);
}

#[test]
fn test_default_escaped_single_quote() {
    assert_eq!(parse(r"name | default: 'it\'s here'").default_value, "it's here");
}

#[test]
fn test_default_missing_value_is_empty() {
    let v = parse("name | default:");
    assert_eq!(v.name, "name");
    assert_eq!(v.default_value, "");
    assert!(v.transformers.is_empty());
}

#[test]
fn test_default_first_piped_clause_wins() {
    assert_eq!(parse("name | default: 'a' | default: 'b'").default_value, "a");
}

#[test]
fn test_default_inline_wins_over_piped() {
    assert_eq!(parse("name default: 'a' | default: 'b'").default_value, "a");
}

#[test]
fn test_default_is_not_a_transformer() {
    let v = parse("name | upcase | default: 'x' | downcase");
    assert_eq!(v.default_value, "x");
    assert_eq!(
        v.transformers,
        vec![
            TransformerApplication::new("upcase"),
            TransformerApplication::new("downcase"),
        ]
    );
}

// =============================================================================
// Transformers
// =============================================================================

#[test]
fn test_transformer_without_params() {
    let v = parse("amount | round");
    assert_eq!(v.transformers, vec![TransformerApplication::new("round")]);
    assert_eq!(v.transformers[0].params, None);
}

#[test]
fn test_transformer_with_params() {
    let v = parse("name | truncate: 10, '...'");
    assert_eq!(
        v.transformers,
        vec![TransformerApplication::with_params("truncate", ["10", "..."])]
    );
}

#[test]
fn test_transformer_params_double_quoted() {
    let v = parse(r#"items | join: ", ""#);
    // The separator's comma splits the tail: the naive split is preserved.
    assert_eq!(v.transformers[0].params(), ["\"", "\""]);
}

#[test]
fn test_transformer_params_quoted_comma_is_split() {
    let v = parse("name | replace: 'a, b', 'c'");
    assert_eq!(v.transformers[0].params(), ["'a", "b'", "c"]);
}

#[test]
fn test_transformer_param_colon_kept() {
    let v = parse("createdAt | date: '%H:%M'");
    assert_eq!(
        v.transformers,
        vec![TransformerApplication::with_params("date", ["%H:%M"])]
    );
}

#[test]
fn test_multiple_transformers_keep_order() {
    let v = parse("{{ payload.title | strip | truncate: 20 | upcase | append: '!' }}");
    let ids: Vec<&str> = v.transformer_ids().collect();
    assert_eq!(ids, ["strip", "truncate", "upcase", "append"]);
    assert_eq!(v.transformers[1].params(), ["20"]);
    assert_eq!(v.transformers[3].params(), ["!"]);
}

#[test]
fn test_params_dropped_for_parameterless_transformer() {
    let v = parse("name | upcase: 3");
    assert_eq!(v.transformers, vec![TransformerApplication::new("upcase")]);
}

#[test]
fn test_empty_param_tail_means_no_params() {
    let v = parse("name | truncate:");
    assert_eq!(v.transformers, vec![TransformerApplication::new("truncate")]);
}

#[test]
fn test_unknown_transformer_is_dropped() {
    let v = parse("name | some_unknown_filter: 1");
    assert_eq!(v.name, "name");
    assert!(v.transformers.is_empty());
}

#[test]
fn test_unknown_transformer_between_known_ones() {
    let v = parse("name | upcase | shout | downcase");
    let ids: Vec<&str> = v.transformer_ids().collect();
    assert_eq!(ids, ["upcase", "downcase"]);
}

#[test]
fn test_empty_segments_are_ignored() {
    let v = parse("name | | upcase |");
    assert_eq!(v.transformers, vec![TransformerApplication::new("upcase")]);
}

#[test]
fn test_transformer_ids_are_case_sensitive() {
    assert!(parse("name | UPCASE").transformers.is_empty());
}

#[test]
fn test_digest_with_all_params() {
    let v = parse("{{ steps.digest.events | digest: 2, 'payload.name', ' & ' }}");
    assert_eq!(
        v.transformers,
        vec![TransformerApplication::with_params(
            "digest",
            ["2", "payload.name", " & "]
        )]
    );
}

// =============================================================================
// Registry injection
// =============================================================================

#[test]
fn test_fixture_registry_gates_transformers() {
    let registry = TransformerRegistry::from_json_str(
        r#"[{ "id": "shout", "label": "Shout", "paramSpecs": [{ "placeholder": "Times", "type": "number" }] }]"#,
    )
    .unwrap();
    let v = parse_variable("name | shout: 3 | upcase", &registry);
    assert_eq!(
        v.transformers,
        vec![TransformerApplication::with_params("shout", ["3"])]
    );
}

#[test]
fn test_empty_registry_drops_everything() {
    let v = parse_variable("name | upcase | default: 'x'", &TransformerRegistry::default());
    assert_eq!(v.name, "name");
    assert_eq!(v.default_value, "x");
    assert!(v.transformers.is_empty());
}
