use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so that "&amp;lt;" decodes to "&lt;" rather than "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters for use in text nodes and attribute values.
///
/// # Examples
///
/// ```
/// use govdeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Σ(score × weight) < 100"), "Σ(score × weight) &lt; 100");
/// assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities. Anything else is left unchanged.
///
/// # Examples
///
/// ```
/// use govdeck::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_unicode_alone() {
        assert_eq!(escape_xml("🛡️ MCP → Governance"), "🛡️ MCP → Governance");
    }

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<foo & "bar" 'baz'>"#),
            "&lt;foo &amp; &quot;bar&quot; &apos;baz&apos;&gt;"
        );
    }

    #[test]
    fn test_unescape_reverses_escape() {
        let text = r#"max(0, 100 - Σ penalties) & "more" <tags>"#;
        assert_eq!(unescape_xml(&escape_xml(text)), text);
    }
}
