//! Locating variable expressions inside larger template bodies.

use std::ops::Range;

use serde::Serialize;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// One `{{ ... }}` occurrence in a template body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableToken {
    /// Byte range of the token in the body, delimiters included.
    pub span: Range<usize>,
    /// The token text, delimiters included.
    pub raw: String,
}

impl VariableToken {
    /// 1-based line and column of the token start within `body`.
    pub fn position(&self, body: &str) -> (usize, usize) {
        let consumed = &body[..self.span.start.min(body.len())];
        let line = consumed.chars().filter(|&c| c == '\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(pos) => consumed[pos + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        (line, column)
    }
}

/// Find every `{{ ... }}` token in `body`, in order.
///
/// Each token ends at the first `}}` after its opener. An opener without a
/// closer is ignored.
///
/// # Example
///
/// ```
/// use liquidvar::find_variables;
///
/// let tokens = find_variables("Hi {{ subscriber.firstName }}, you have {{ count }}");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1].raw, "{{ count }}");
/// ```
pub fn find_variables(body: &str) -> Vec<VariableToken> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while let Some(found) = body[offset..].find(OPEN) {
        let start = offset + found;
        let inner_start = start + OPEN.len();
        let Some(close) = body[inner_start..].find(CLOSE) else {
            break;
        };
        let end = inner_start + close + CLOSE.len();
        tokens.push(VariableToken {
            span: start..end,
            raw: body[start..end].to_string(),
        });
        offset = end;
    }

    tokens
}

/// Replace `token` in `body` with `replacement`.
///
/// The token must come from [`find_variables`] on the same body.
pub fn replace_variable(body: &str, token: &VariableToken, replacement: &str) -> String {
    let mut result = String::with_capacity(body.len() + replacement.len());
    result.push_str(&body[..token.span.start]);
    result.push_str(replacement);
    result.push_str(&body[token.span.end..]);
    result
}
