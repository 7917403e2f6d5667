//! Emptiness checks over [`Value`].

use kitbag_value::Value;

/// Reports whether a value is empty.
///
/// Empty means: null, a string that is blank after trimming whitespace, an
/// array or object without entries, or a zero-length binary buffer. Opaque
/// handles expose no entries and count as empty. Numbers and booleans are
/// never empty, including `0` and `false`.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => is_blank(s),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Binary(bytes) => bytes.is_empty(),
        Value::Opaque(_) => true,
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Whitespace and line terminators stripped by JavaScript's `trim`.
/// Differs from `char::is_whitespace`: includes U+FEFF, excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn is_blank(s: &str) -> bool {
    s.chars().all(is_js_whitespace)
}

/// Like [`is_empty`], treating an absent value as empty.
pub fn is_empty_or_missing(value: Option<&Value>) -> bool {
    value.map_or(true, is_empty)
}
