//! # JSON Text Rendering
//!
//! Downstream workflows and committed descriptor files were produced with
//! ASCII-only JSON: every non-ASCII character is written as a `\uXXXX`
//! escape (UTF-16 code units, lowercase hex) and inline arrays use `", "`
//! between items. These helpers reproduce that text from `serde_json`
//! output so regenerated files diff cleanly.

use std::fmt::Write;

use serde::Serialize;

/// Replace every non-ASCII character of already-serialized JSON text with
/// its `\uXXXX` escape.
///
/// Non-ASCII characters can only occur inside JSON strings, so escaping the
/// whole text is equivalent to escaping each string.
pub fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }
    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

/// Single-line JSON array of strings with `", "` separators.
///
/// ```
/// use sfmeta_core::json_text::inline_string_array;
///
/// let items = vec!["classes".to_string(), "lwc".to_string()];
/// assert_eq!(inline_string_array(&items), r#"["classes", "lwc"]"#);
/// ```
pub fn inline_string_array(items: &[String]) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| escape_non_ascii(&serde_json::Value::from(item.as_str()).to_string()))
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// Pretty JSON with two-space indentation and ASCII-only escapes.
pub fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value).map(|text| escape_non_ascii(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ascii_text_is_unchanged() {
        assert_eq!(escape_non_ascii(r#"{"a": "b"}"#), r#"{"a": "b"}"#);
    }

    #[test]
    fn non_ascii_is_escaped_lowercase() {
        assert_eq!(escape_non_ascii("\"caf\u{e9}\""), r#""caf\u00e9""#);
    }

    #[test]
    fn astral_characters_become_surrogate_pairs() {
        assert_eq!(escape_non_ascii("\"\u{1F600}\""), r#""\ud83d\ude00""#);
    }

    #[test]
    fn inline_array_matches_expected_layout() {
        assert_eq!(inline_string_array(&[]), "[]");
        assert_eq!(inline_string_array(&["one".to_string()]), r#"["one"]"#);
        assert_eq!(
            inline_string_array(&["a b".to_string(), "q\"uote".to_string()]),
            r#"["a b", "q\"uote"]"#
        );
    }

    #[test]
    fn pretty_uses_two_space_indent() {
        let text = pretty(&json!({"a": 1, "b": [true, null]})).unwrap();
        assert_eq!(
            text,
            "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn pretty_keeps_empty_containers_inline() {
        assert_eq!(pretty(&json!({})).unwrap(), "{}");
        assert_eq!(pretty(&json!({"x": []})).unwrap(), "{\n  \"x\": []\n}");
    }
}
