//! Clause-level parsers using winnow.
//!
//! Handles the pieces between pipes:
//! - Default values: `default: 'x'`, `default: "x"`, `default: x`
//! - Transformer clauses: `id` or `id: p1, p2`
//! - Quoted parameter values

use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, none_of, rest, take_till, take_while};

/// Keyword introducing a default value.
pub(crate) const DEFAULT_KEYWORD: &str = "default:";

/// Extract a default value from text containing `default:`.
///
/// Alternatives are tried in a fixed order (single-quoted, double-quoted,
/// bare token). Each alternative is tried at every `default:` occurrence
/// before the next alternative is considered, so a later single-quoted value
/// wins over an earlier bare one.
pub(crate) fn extract_default(text: &str) -> Option<String> {
    let alternatives: [fn(&mut &str) -> ModalResult<String>; 3] =
        [single_quoted, double_quoted, bare_token];

    for alternative in alternatives {
        for (pos, _) in text.match_indices(DEFAULT_KEYWORD) {
            let mut remaining = &text[pos + DEFAULT_KEYWORD.len()..];
            if ws(&mut remaining).is_err() {
                continue;
            }
            if let Ok(value) = alternative(&mut remaining) {
                return Some(value);
            }
        }
    }
    None
}

/// Split a transformer clause into its id and raw parameter tail.
///
/// Splits on the first `:` only. The tail is `None` when no `:` is present.
pub(crate) fn split_transformer_clause(segment: &str) -> (&str, Option<&str>) {
    let mut input = segment;
    match transformer_clause(&mut input) {
        Ok((id, tail)) => (id.trim(), tail.map(str::trim)),
        Err(_) => (segment.trim(), None),
    }
}

/// Split a parameter tail on `,`, trimming each piece and removing one layer
/// of matching quotes.
///
/// Commas inside quotes are not respected: `'a, b'` becomes two params.
pub(crate) fn split_params(tail: &str) -> Vec<String> {
    tail.split(',').map(|p| unquote(p.trim())).collect()
}

/// Remove surrounding matching quotes from a parameter value.
fn unquote(value: &str) -> String {
    let mut input = value;
    match quoted_param(&mut input) {
        Ok(inner) if input.is_empty() => inner,
        _ => value.to_string(),
    }
}

fn transformer_clause<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    (take_till(0.., ':'), opt(preceded(':', rest))).parse_next(input)
}

fn quoted_param(input: &mut &str) -> ModalResult<String> {
    alt((single_quoted, double_quoted)).parse_next(input)
}

/// Parse `'...'` where `\x` escapes any character; `\'` is unescaped.
fn single_quoted(input: &mut &str) -> ModalResult<String> {
    delimited(
        '\'',
        repeat::<_, _, (), _, _>(
            0..,
            alt((preceded('\\', any).void(), none_of(['\'', '\\']).void())),
        )
        .take(),
        '\'',
    )
    .map(|body: &str| body.replace("\\'", "'"))
    .parse_next(input)
}

/// Parse `"..."` where `\x` escapes any character. The body is kept as is.
fn double_quoted(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat::<_, _, (), _, _>(
            0..,
            alt((preceded('\\', any).void(), none_of(['"', '\\']).void())),
        )
        .take(),
        '"',
    )
    .map(str::to_string)
    .parse_next(input)
}

/// Parse an unquoted token, ending at whitespace, `}` or `|`.
fn bare_token(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '}' && c != '|')
        .map(str::to_string)
        .parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alternatives_prefer_single_quotes() {
        assert_eq!(
            extract_default("default: x default: 'y'"),
            Some("y".to_string())
        );
    }

    #[test]
    fn default_double_quotes_keep_body() {
        assert_eq!(
            extract_default(r#"default: "a \"b\"""#),
            Some(r#"a \"b\""#.to_string())
        );
    }

    #[test]
    fn default_missing_value() {
        assert_eq!(extract_default("default:"), None);
        assert_eq!(extract_default("default:   "), None);
    }

    #[test]
    fn default_unterminated_quote_falls_back_to_bare() {
        assert_eq!(extract_default("default: 'abc"), Some("'abc".to_string()));
    }

    #[test]
    fn clause_without_colon() {
        assert_eq!(split_transformer_clause("upcase"), ("upcase", None));
    }

    #[test]
    fn clause_splits_on_first_colon_only() {
        assert_eq!(
            split_transformer_clause("date: '%H:%M'"),
            ("date", Some("'%H:%M'"))
        );
    }

    #[test]
    fn params_unquote_and_unescape() {
        assert_eq!(
            split_params(r#" 'it\'s', "two", 3 "#),
            vec!["it's".to_string(), "two".to_string(), "3".to_string()]
        );
    }

    #[test]
    fn params_mismatched_quotes_are_kept() {
        assert_eq!(split_params("'a\""), vec!["'a\"".to_string()]);
    }
}
