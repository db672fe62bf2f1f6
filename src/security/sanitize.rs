//! Output sanitization for report data that may be rendered as HTML.

use serde_json::Value;

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Recursively escapes every string leaf of a JSON value.
///
/// Keys are left alone; they come from our own struct field names, never
/// from provider data.
pub fn sanitize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(escape_html(s)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (key.clone(), sanitize_value(val)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("AT&T \"Wireless\""), "AT&amp;T &quot;Wireless&quot;");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_ampersand_escaped_first() {
        // Must not double-escape the output of other escapes
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_sanitize_value_recurses() {
        let value = json!({
            "org": "<b>Evil</b>",
            "nested": {"isp": "A&B"},
            "list": ["<i>", 42, true, null]
        });

        let clean = sanitize_value(&value);
        assert_eq!(clean["org"], "&lt;b&gt;Evil&lt;/b&gt;");
        assert_eq!(clean["nested"]["isp"], "A&amp;B");
        assert_eq!(clean["list"][0], "&lt;i&gt;");
        assert_eq!(clean["list"][1], 42);
        assert_eq!(clean["list"][3], Value::Null);
    }
}
