use std::borrow::Cow;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
#[test]
fn escape_is_ok() {
    assert!(matches!(escape("example.com"), Cow::Borrowed("example.com")));
    assert_eq!(
        escape(r#"v=spf1 "a" <b> & 'c'"#),
        "v=spf1 &quot;a&quot; &lt;b&gt; &amp; &#39;c&#39;"
    );
}
