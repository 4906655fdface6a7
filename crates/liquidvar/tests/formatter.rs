//! Integration tests for canonical formatting and the parse/format round trip.

use insta::assert_snapshot;
use liquidvar::{
    EditAction, TemplateVariable, TransformerApplication, TransformerRegistry, apply_action,
    format_variable, parse_variable,
};

fn format(variable: &TemplateVariable) -> String {
    format_variable(variable, &TransformerRegistry::builtin())
}

fn canonical(raw: &str) -> String {
    let registry = TransformerRegistry::builtin();
    format_variable(&parse_variable(raw, &registry), &registry)
}

// =============================================================================
// Canonical form
// =============================================================================

#[test]
fn test_name_only() {
    assert_snapshot!(format(&TemplateVariable::named("payload.amount")), @"{{ payload.amount }}");
}

#[test]
fn test_name_is_trimmed() {
    assert_eq!(format(&TemplateVariable::named("  name ")), "{{ name }}");
}

#[test]
fn test_default_is_single_quoted() {
    let v = TemplateVariable::builder()
        .name("name".to_string())
        .default_value("hello world".to_string())
        .build();
    assert_snapshot!(format(&v), @"{{ name | default: 'hello world' }}");
}

#[test]
fn test_default_quotes_are_escaped() {
    let v = TemplateVariable::builder()
        .name("name".to_string())
        .default_value("it's".to_string())
        .build();
    assert_eq!(format(&v), r"{{ name | default: 'it\'s' }}");
}

#[test]
fn test_empty_default_is_omitted() {
    let v = TemplateVariable::builder()
        .name("name".to_string())
        .transformers(vec![TransformerApplication::new("upcase")])
        .build();
    assert_eq!(format(&v), "{{ name | upcase }}");
}

#[test]
fn test_number_params_bare_string_params_quoted() {
    let v = TemplateVariable::builder()
        .name("title".to_string())
        .transformers(vec![TransformerApplication::with_params("truncate", ["10", "..."])])
        .build();
    assert_snapshot!(format(&v), @"{{ title | truncate: 10, '...' }}");
}

#[test]
fn test_string_params_are_escaped() {
    let v = TemplateVariable::builder()
        .name("title".to_string())
        .transformers(vec![TransformerApplication::with_params("append", ["'s"])])
        .build();
    assert_eq!(format(&v), r"{{ title | append: '\'s' }}");
}

#[test]
fn test_params_beyond_declared_are_quoted() {
    let v = TemplateVariable::builder()
        .name("n".to_string())
        .transformers(vec![TransformerApplication::with_params("round", ["2", "3"])])
        .build();
    assert_eq!(format(&v), "{{ n | round: 2, '3' }}");
}

#[test]
fn test_transformer_without_params_is_bare() {
    let v = TemplateVariable::builder()
        .name("amount".to_string())
        .transformers(vec![
            TransformerApplication::new("round"),
            TransformerApplication::with_params("truncate", Vec::<String>::new()),
        ])
        .build();
    assert_eq!(format(&v), "{{ amount | round | truncate }}");
}

#[test]
fn test_params_on_parameterless_transformer_are_not_written() {
    let v = TemplateVariable::builder()
        .name("name".to_string())
        .transformers(vec![TransformerApplication::with_params("upcase", ["x"])])
        .build();
    assert_eq!(format(&v), "{{ name | upcase }}");
}

#[test]
fn test_unknown_transformer_written_as_id() {
    let v = TemplateVariable::builder()
        .name("name".to_string())
        .transformers(vec![TransformerApplication::with_params("shout", ["3"])])
        .build();
    assert_eq!(format(&v), "{{ name | shout }}");
}

#[test]
fn test_full_expression() {
    let v = TemplateVariable::builder()
        .name("steps.digest.events".to_string())
        .default_value("nobody".to_string())
        .transformers(vec![
            TransformerApplication::with_params("digest", ["2", "payload.name", ", "]),
            TransformerApplication::new("capitalize"),
        ])
        .build();
    assert_snapshot!(
        format(&v),
        @"{{ steps.digest.events | default: 'nobody' | digest: 2, 'payload.name', ', ' | capitalize }}"
    );
}

// =============================================================================
// Round trip
// =============================================================================

fn samples() -> Vec<TemplateVariable> {
    vec![
        TemplateVariable::named("payload.amount"),
        TemplateVariable::builder()
            .name("subscriber.firstName".to_string())
            .default_value("there".to_string())
            .build(),
        TemplateVariable::builder()
            .name("payload.title".to_string())
            .default_value("it's untitled".to_string())
            .transformers(vec![
                TransformerApplication::new("strip"),
                TransformerApplication::with_params("truncate", ["25", "…"]),
                TransformerApplication::with_params("replace", ["-", "/"]),
            ])
            .build(),
        TemplateVariable::builder()
            .name("payload.total".to_string())
            .transformers(vec![
                TransformerApplication::with_params("times", ["1.2"]),
                TransformerApplication::with_params("round", ["-1"]),
                TransformerApplication::new("abs"),
            ])
            .build(),
        TemplateVariable::builder()
            .name("payload.createdAt".to_string())
            .default_value("{now}".to_string())
            .transformers(vec![TransformerApplication::with_params("date", ["%Y-%m-%d %H:%M"])])
            .build(),
        TemplateVariable::builder()
            .name("steps.digest-step.events".to_string())
            .transformers(vec![
                TransformerApplication::with_params("digest", ["3", "payload.user.name", " and "]),
                TransformerApplication::with_params("prepend", ["Hello "]),
            ])
            .build(),
    ]
}

#[test]
fn test_parse_inverts_format() {
    let registry = TransformerRegistry::builtin();
    for v in samples() {
        let raw = format_variable(&v, &registry);
        assert_eq!(parse_variable(&raw, &registry), v, "round trip of {raw}");
    }
}

#[test]
fn test_format_is_idempotent() {
    let registry = TransformerRegistry::builtin();
    for v in samples() {
        let once = format_variable(&v, &registry);
        let twice = format_variable(&parse_variable(&once, &registry), &registry);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_format_is_idempotent_after_numeric_coercion() {
    let registry = TransformerRegistry::builtin();
    let base = TemplateVariable::builder()
        .name("payload.total".to_string())
        .transformers(vec![
            TransformerApplication::new("round"),
            TransformerApplication::new("truncate"),
            TransformerApplication::new("plus"),
        ])
        .build();
    let edits = [
        EditAction::set_params(0, ["abc"]),
        EditAction::set_params(0, ["-"]),
        EditAction::set_params(1, ["x", "..."]),
        EditAction::set_params(1, ["x"]),
        EditAction::set_params(2, ["", ""]),
    ];

    for edit in &edits {
        let edited = apply_action(&base, edit, &registry).unwrap();
        let once = format_variable(&edited, &registry);
        let twice = format_variable(&parse_variable(&once, &registry), &registry);
        assert_eq!(once, twice, "after {edit:?}");
    }
}

#[test]
fn test_empty_number_params_are_not_written() {
    let registry = TransformerRegistry::builtin();
    let edited = apply_action(
        &TemplateVariable::builder()
            .name("payload.total".to_string())
            .transformers(vec![TransformerApplication::new("round")])
            .build(),
        &EditAction::set_params(0, ["abc"]),
        &registry,
    )
    .unwrap();
    assert_eq!(edited.transformers[0].params(), [""]);
    assert_eq!(format_variable(&edited, &registry), "{{ payload.total | round }}");
}

#[test]
fn test_renamed_variable_round_trips() {
    let registry = TransformerRegistry::builtin();
    let renamed = apply_action(
        &TemplateVariable::named("payload.title"),
        &EditAction::Rename { name: "payload.default:x".into() },
        &registry,
    )
    .unwrap();
    let raw = format_variable(&renamed, &registry);
    assert_eq!(raw, "{{ payload.x }}");
    assert_eq!(parse_variable(&raw, &registry), renamed);
}

#[test]
fn test_canonicalizes_hand_written_input() {
    assert_eq!(
        canonical("name|default:\"x\"|truncate:5,'..'|upcase"),
        "{{ name | default: 'x' | truncate: 5, '..' | upcase }}"
    );
    assert_eq!(canonical("name default: bob"), "{{ name | default: 'bob' }}");
}

#[test]
fn test_canonical_drops_unknown_transformers() {
    assert_eq!(canonical("name | some_unknown_filter: 1 | upcase"), "{{ name | upcase }}");
}
