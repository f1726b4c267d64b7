use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("static escape patterns are valid")
});

/// Escape XML special characters.
///
/// The same five entities are safe inside HTML text and attribute values, so
/// the web pages reuse this for user-supplied cell content.
///
/// # Examples
///
/// ```
/// use scenario_deck::common::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<foo & "bar" 'baz'>"#),
            "&lt;foo &amp; &quot;bar&quot; &apos;baz&apos;&gt;"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_xml("Crisis Scenario Overview"), "Crisis Scenario Overview");
    }

    #[test]
    fn test_escape_does_not_double_escape_once() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }
}
