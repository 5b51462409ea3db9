//! Inline markup resolution for text runs.
//!
//! Applied to heading, paragraph, blockquote and list-item text at render
//! time. Code block content never passes through here, and code span
//! content is lifted out before the emphasis passes, so backticked text
//! keeps its markers literal.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use pastemark_core::ThemeStyles;

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`\n]*`").unwrap());
static STRONG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

/// Resolve inline markup in one text run, emitting themed HTML.
///
/// Unmatched markers and malformed syntax stay literal.
pub(crate) fn resolve(text: &str, styles: &ThemeStyles) -> String {
    let code_style = styles.inline_code.to_css();
    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;
    for span in CODE_SPAN.find_iter(text) {
        out.push_str(&resolve_plain(&text[last..span.start()], styles));
        out.push_str("<code style=\"");
        out.push_str(&code_style);
        out.push_str("\">");
        // The match is backtick + content + backtick.
        out.push_str(&text[span.start() + 1..span.end() - 1]);
        out.push_str("</code>");
        last = span.end();
    }
    out.push_str(&resolve_plain(&text[last..], styles));
    out
}

// Slots stand in for theme style strings until every pass has run: a
// declaration value may legally contain `*` or image-shaped text (e.g.
// `calc(1*2)`), which must never pair up with markup in the run. Theme
// validation rejects control characters, so a style value cannot itself
// contain a slot.
const STRONG_STYLE_SLOT: &str = "\u{1A}strong\u{1A}";
const IMAGE_STYLE_SLOT: &str = "\u{1A}image\u{1A}";

/// Strong before emphasis: a single-asterisk pass run first would split
/// every `**` pair in two.
fn resolve_plain(text: &str, styles: &ThemeStyles) -> String {
    if text.is_empty() {
        return String::new();
    }

    let strong = STRONG.replace_all(text, |caps: &Captures| {
        format!("<strong style=\"{STRONG_STYLE_SLOT}\">{}</strong>", &caps[1])
    });

    // Emphasis has no role of its own among the fourteen; it carries a
    // fixed declaration.
    let emphasized = EMPHASIS.replace_all(&strong, |caps: &Captures| {
        format!("<em style=\"font-style:italic\">{}</em>", &caps[1])
    });

    let resolved = IMAGE.replace_all(&emphasized, |caps: &Captures| {
        format!(
            "<img src=\"{}\" alt=\"{}\" style=\"{IMAGE_STYLE_SLOT}\" />",
            &caps[2], &caps[1]
        )
    });

    resolved
        .replace(STRONG_STYLE_SLOT, &styles.strong.to_css())
        .replace(IMAGE_STYLE_SLOT, &styles.image.to_css())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pastemark_core::StyleMap;

    fn styles() -> ThemeStyles {
        ThemeStyles {
            inline_code: StyleMap::from([("background", "#eee")]),
            strong: StyleMap::from([("color", "#c00")]),
            image: StyleMap::from([("maxWidth", "100%")]),
            ..ThemeStyles::default()
        }
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(resolve("hello", &styles()), "hello");
    }

    #[test]
    fn double_asterisks_resolve_to_a_single_strong() {
        assert_eq!(
            resolve("**bold**", &styles()),
            "<strong style=\"color: #c00\">bold</strong>"
        );
    }

    #[test]
    fn single_asterisks_resolve_to_emphasis() {
        assert_eq!(
            resolve("*it*", &styles()),
            "<em style=\"font-style:italic\">it</em>"
        );
    }

    #[test]
    fn strong_resolves_inside_emphasis() {
        assert_eq!(
            resolve("*a **b** c*", &styles()),
            "<em style=\"font-style:italic\">a <strong style=\"color: #c00\">b</strong> c</em>"
        );
    }

    #[test]
    fn lone_asterisk_stays_literal() {
        assert_eq!(resolve("a * b", &styles()), "a * b");
    }

    #[test]
    fn code_span_resolves_with_theme_style() {
        assert_eq!(
            resolve("`x`", &styles()),
            "<code style=\"background: #eee\">x</code>"
        );
    }

    #[test]
    fn code_span_content_is_exempt_from_emphasis() {
        assert_eq!(
            resolve("`**x**`", &styles()),
            "<code style=\"background: #eee\">**x**</code>"
        );
    }

    #[test]
    fn multiple_code_spans_resolve_independently() {
        assert_eq!(
            resolve("`a` and `b`", &styles()),
            "<code style=\"background: #eee\">a</code> and <code style=\"background: #eee\">b</code>"
        );
    }

    #[test]
    fn text_around_code_spans_still_resolves() {
        assert_eq!(
            resolve("**a** `b`", &styles()),
            "<strong style=\"color: #c00\">a</strong> <code style=\"background: #eee\">b</code>"
        );
    }

    #[test]
    fn inline_image_resolves_with_theme_style() {
        assert_eq!(
            resolve("see ![a](b.png) here", &styles()),
            "see <img src=\"b.png\" alt=\"a\" style=\"max-width: 100%\" /> here"
        );
    }

    #[test]
    fn malformed_image_syntax_stays_literal() {
        assert_eq!(resolve("![a](b", &styles()), "![a](b");
    }

    #[test]
    fn unterminated_backtick_stays_literal() {
        assert_eq!(resolve("a `b", &styles()), "a `b");
    }

    #[test]
    fn asterisk_in_strong_style_value_never_pairs_with_markup() {
        let mut styles = styles();
        styles.strong = StyleMap::from([("transform", "scale(calc(1*2))")]);
        assert_eq!(
            resolve("**bold** and *ital*", &styles),
            "<strong style=\"transform: scale(calc(1*2))\">bold</strong> and \
             <em style=\"font-style:italic\">ital</em>"
        );
    }

    #[test]
    fn image_shaped_strong_style_value_stays_inert() {
        let mut styles = styles();
        styles.strong = StyleMap::from([("content", "'![a](b)'")]);
        assert_eq!(
            resolve("**b** ![c](d.png)", &styles),
            "<strong style=\"content: '![a](b)'\">b</strong> \
             <img src=\"d.png\" alt=\"c\" style=\"max-width: 100%\" />"
        );
    }
}
