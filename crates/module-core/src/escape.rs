//! HTML escaping for user-supplied text and attribute values.

/// Escapes text for element content.
pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(c),
        }
    }
    output
}

/// Escapes a value for a double- or single-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Escapes text and turns line breaks into `<br>`.
pub fn nl2br(text: &str) -> String {
    escape_html(text)
        .replace("\r\n", "\n")
        .replace('\n', "<br>\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_nl2br() {
        assert_eq!(nl2br("a\nb<c>"), "a<br>\nb&lt;c&gt;");
        assert_eq!(nl2br("a\r\nb"), "a<br>\nb");
    }
}
