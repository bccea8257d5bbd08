//! HTML sanitization for author-supplied markup.

use std::collections::HashSet;

/// Sanitize untrusted HTML.
///
/// Keeps plain text and safe formatting tags (`<b>`, `<i>`, `<a>`, `<p>`, ...) and
/// removes `<script>`/`<style>` elements together with their content, event handler
/// attributes and unsafe URL schemes. Applying it twice yields the same output.
pub fn sanitize_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Plain-text excerpt of sanitized markup, at most `max_chars` visible characters.
///
/// Every tag is dropped and the text stays entity-encoded, so the result is safe to
/// emit unescaped. An entity such as `&amp;` counts as one character and is never
/// split. A cut excerpt ends with `…`.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = ammonia::Builder::default()
        .tags(HashSet::new())
        .clean(html)
        .to_string();

    let mut visible = 0;
    let mut in_entity = false;
    for (idx, ch) in text.char_indices() {
        if in_entity {
            in_entity = ch != ';';
            continue;
        }
        if visible == max_chars {
            return format!("{}…", text[..idx].trim_end());
        }
        visible += 1;
        in_entity = ch == '&';
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_content_is_stripped() {
        let clean = sanitize_html("<script>x</script>hello");
        assert_eq!(clean, "hello");
        assert!(!clean.contains("<script"));
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(sanitize_html("just some words"), "just some words");
    }

    #[test]
    fn test_safe_formatting_survives() {
        assert_eq!(sanitize_html("<b>hi</b>"), "<b>hi</b>");
    }

    #[test]
    fn test_event_handlers_are_removed() {
        let clean = sanitize_html(r#"<img src="http://i/x.png" onerror="alert(1)">"#);
        assert!(!clean.contains("onerror"));
        assert!(clean.contains("http://i/x.png"));
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<script>x</script>hello",
            "<b>hi</b> & <i>bye</i>",
            r#"<a href="javascript:alert(1)" onclick="x()">link</a>"#,
            "<p>unclosed <em>tags",
        ];
        for input in inputs {
            let once = sanitize_html(input);
            assert_eq!(sanitize_html(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_excerpt_keeps_entities_encoded_once() {
        let stored = sanitize_html("Tom & Jerry");
        assert_eq!(stored, "Tom &amp; Jerry");
        assert_eq!(excerpt(&stored, 100), "Tom &amp; Jerry");
    }

    #[test]
    fn test_excerpt_drops_tags() {
        assert_eq!(excerpt("<b>good</b> <i>boy</i>", 100), "good boy");
    }

    #[test]
    fn test_excerpt_never_splits_an_entity() {
        assert_eq!(excerpt("a&amp;b", 2), "a&amp;…");
        assert_eq!(excerpt("ab&lt;c", 2), "ab…");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo…");
        assert_eq!(excerpt("short", 5), "short");
    }
}
