//! Built-in transformer catalog shared by the runtime registry and tooling.
//!
//! This crate holds the static table of known transformers so the library
//! and the CLI agree on ids, labels and parameter shapes. Table order is the
//! order transformers are offered in pickers.

/// The declared type of a positional transformer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Number,
}

/// One positional parameter declared by a transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamEntry {
    pub placeholder: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
}

/// A built-in transformer definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformerEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub example: Option<&'static str>,
    pub params: &'static [ParamEntry],
}

const fn string_param(placeholder: &'static str, description: &'static str) -> ParamEntry {
    ParamEntry {
        placeholder,
        description,
        kind: ParamKind::String,
    }
}

const fn number_param(placeholder: &'static str, description: &'static str) -> ParamEntry {
    ParamEntry {
        placeholder,
        description,
        kind: ParamKind::Number,
    }
}

const fn entry(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    example: &'static str,
    params: &'static [ParamEntry],
) -> TransformerEntry {
    TransformerEntry {
        id,
        label,
        description,
        example: Some(example),
        params,
    }
}

/// Every built-in transformer.
pub const TRANSFORMERS: &[TransformerEntry] = &[
    entry(
        "upcase",
        "Uppercase",
        "Convert text to uppercase",
        "\"hello\" | upcase → HELLO",
        &[],
    ),
    entry(
        "downcase",
        "Lowercase",
        "Convert text to lowercase",
        "\"HELLO\" | downcase → hello",
        &[],
    ),
    entry(
        "capitalize",
        "Capitalize",
        "Capitalize the first character and lowercase the rest",
        "\"hELLO\" | capitalize → Hello",
        &[],
    ),
    entry(
        "strip",
        "Trim",
        "Remove leading and trailing whitespace",
        "\"  hi  \" | strip → hi",
        &[],
    ),
    entry(
        "truncate",
        "Truncate",
        "Shorten text to a maximum number of characters",
        "\"Hello world\" | truncate: 8, '...' → Hello...",
        &[
            number_param("Max length", "Maximum number of characters, including the ending"),
            string_param("Ending", "Text appended when the value is cut (default '...')"),
        ],
    ),
    entry(
        "truncatewords",
        "Truncate words",
        "Shorten text to a maximum number of words",
        "\"one two three\" | truncatewords: 2 → one two...",
        &[
            number_param("Max words", "Maximum number of words to keep"),
            string_param("Ending", "Text appended when the value is cut (default '...')"),
        ],
    ),
    entry(
        "append",
        "Append",
        "Add text to the end of the value",
        "\"file\" | append: '.pdf' → file.pdf",
        &[string_param("Text to append", "Text added after the value")],
    ),
    entry(
        "prepend",
        "Prepend",
        "Add text to the beginning of the value",
        "\"world\" | prepend: 'hello ' → hello world",
        &[string_param("Text to prepend", "Text added before the value")],
    ),
    entry(
        "replace",
        "Replace",
        "Replace every occurrence of a text",
        "\"a-b-c\" | replace: '-', '/' → a/b/c",
        &[
            string_param("Search", "Text to search for"),
            string_param("Replace", "Replacement text"),
        ],
    ),
    entry(
        "remove",
        "Remove",
        "Remove every occurrence of a text",
        "\"a-b-c\" | remove: '-' → abc",
        &[string_param("Text to remove", "Text removed from the value")],
    ),
    entry(
        "split",
        "Split",
        "Split text into a list on a separator",
        "\"a,b\" | split: ',' → [a, b]",
        &[string_param("Separator", "Text to split on")],
    ),
    entry(
        "escape",
        "Escape HTML",
        "Escape HTML special characters",
        "\"<b>\" | escape → &lt;b&gt;",
        &[],
    ),
    entry(
        "date",
        "Format date",
        "Format a date using strftime syntax",
        "\"2024-01-20\" | date: '%b %d, %Y' → Jan 20, 2024",
        &[string_param("Format", "strftime format string, e.g. '%Y-%m-%d'")],
    ),
    entry(
        "plus",
        "Add",
        "Add a number to the value",
        "5 | plus: 3 → 8",
        &[number_param("Number", "Amount to add")],
    ),
    entry(
        "minus",
        "Subtract",
        "Subtract a number from the value",
        "5 | minus: 3 → 2",
        &[number_param("Number", "Amount to subtract")],
    ),
    entry(
        "times",
        "Multiply",
        "Multiply the value by a number",
        "5 | times: 3 → 15",
        &[number_param("Number", "Multiplier")],
    ),
    entry(
        "divided_by",
        "Divide",
        "Divide the value by a number",
        "10 | divided_by: 4 → 2.5",
        &[number_param("Number", "Divisor")],
    ),
    entry(
        "round",
        "Round",
        "Round to the given number of decimal places",
        "4.567 | round: 2 → 4.57",
        &[number_param("Decimal places", "Digits after the decimal point (default 0)")],
    ),
    entry(
        "floor",
        "Round down",
        "Round down to the nearest integer",
        "4.7 | floor → 4",
        &[],
    ),
    entry(
        "ceil",
        "Round up",
        "Round up to the nearest integer",
        "4.2 | ceil → 5",
        &[],
    ),
    entry(
        "abs",
        "Absolute value",
        "Remove the sign of a number",
        "-4 | abs → 4",
        &[],
    ),
    entry(
        "size",
        "Size",
        "Number of items in a list or characters in a text",
        "[a, b, c] | size → 3",
        &[],
    ),
    entry(
        "first",
        "First item",
        "First item of a list",
        "[a, b, c] | first → a",
        &[],
    ),
    entry(
        "last",
        "Last item",
        "Last item of a list",
        "[a, b, c] | last → c",
        &[],
    ),
    entry(
        "join",
        "Join",
        "Join list items into a text with a separator",
        "[a, b] | join: ', ' → a, b",
        &[string_param("Separator", "Text placed between items")],
    ),
    entry(
        "reverse",
        "Reverse",
        "Reverse the order of a list",
        "[a, b, c] | reverse → [c, b, a]",
        &[],
    ),
    entry(
        "sort",
        "Sort",
        "Sort list items",
        "[c, a, b] | sort → [a, b, c]",
        &[],
    ),
    entry(
        "uniq",
        "Unique",
        "Remove duplicate list items",
        "[a, a, b] | uniq → [a, b]",
        &[],
    ),
    entry(
        "compact",
        "Compact",
        "Remove empty items from a list",
        "[a, nil, b] | compact → [a, b]",
        &[],
    ),
    entry(
        "digest",
        "Digest",
        "Summarize digested events as a sentence of names",
        "events | digest: 2, 'name' → John, Jane and 3 others",
        &[
            number_param("Names to show", "Maximum number of names listed before 'others'"),
            string_param("Key path", "Object key path used as the name, e.g. 'payload.name'"),
            string_param("Separator", "Text placed between names (default ', ')"),
        ],
    ),
    entry(
        "toSentence",
        "To sentence",
        "Join list items into a readable sentence",
        "users | toSentence: 'name', 2, 'others' → Ann, Bob and 1 others",
        &[
            string_param("Key path", "Object key path used for each item"),
            number_param("Max items", "Maximum number of items listed"),
            string_param("Overflow suffix", "Word used for the remaining items"),
        ],
    ),
    entry(
        "pluralize",
        "Pluralize",
        "Choose a singular or plural word based on a count",
        "3 | pluralize: 'item', 'items' → 3 items",
        &[
            string_param("Singular", "Word used when the count is 1"),
            string_param("Plural", "Word used for every other count"),
        ],
    ),
    entry(
        "json",
        "To JSON",
        "Serialize the value as JSON",
        "{a: 1} | json → {\"a\":1}",
        &[],
    ),
];
