//! Markdown-lite renderer: raw model text to a safe HTML fragment.
//!
//! [`render`] is total: every input, including empty text, unbalanced
//! delimiters and raw markup, produces a fragment without panicking. The
//! stages run in a fixed order (escape, code fences, inline code, bold,
//! italic, block structure) and each consumes the previous stage's output.

mod block;
mod document;
mod inline;

pub use document::{render_document, wrap_document};
pub use inline::escape_html;

/// Render raw model output into an HTML fragment.
pub fn render(raw: &str) -> String {
    let text = inline::escape_html(raw);
    let text = inline::fence_code_blocks(&text);
    let text = inline::inline_code(&text);
    let text = inline::bold(&text);
    let text = inline::italic(&text);
    block::structure_blocks(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tags the renderer itself may emit.
    const RENDERER_TAGS: &[&str] = &[
        "<pre><code>",
        "</code></pre>",
        "<code>",
        "</code>",
        "<strong>",
        "</strong>",
        "<em>",
        "</em>",
        "<ol>",
        "</ol>",
        "<ul>",
        "</ul>",
        "<li>",
        "</li>",
        "<p>",
        "</p>",
    ];

    fn assert_no_raw_markup(html: &str) {
        let mut stripped = html.to_string();
        for tag in RENDERER_TAGS {
            stripped = stripped.replace(tag, "");
        }
        assert!(!stripped.contains('<'), "raw '<' in {html:?}");
        assert!(!stripped.contains('>'), "raw '>' in {html:?}");
        for (idx, _) in stripped.match_indices('&') {
            let rest = &stripped[idx..];
            assert!(
                rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;"),
                "raw '&' in {html:?}"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_markup_is_escaped() {
        let inputs = [
            "<script>alert('x')</script>",
            "a < b && c > d",
            "**<b>bold</b>**",
            "`<img src=x onerror=alert(1)>`",
            "```html\n<div class=\"x\">&nbsp;</div>\n```",
            "- <li>item</li>\n1. <ol>",
            "*<em>* & **<strong>**",
            "<pre><code>fake</code></pre>",
            "&amp; already",
        ];
        for input in inputs {
            assert_no_raw_markup(&render(input));
        }
    }

    #[test]
    fn test_literal_pre_marker_is_not_a_block() {
        assert_eq!(
            render("<pre><code>x</code></pre>"),
            "<p>&lt;pre&gt;&lt;code&gt;x&lt;/code&gt;&lt;/pre&gt;</p>"
        );
    }

    #[test]
    fn test_bold_and_italic() {
        let html = render("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
        assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(render("1. a\n2. b"), "<ol><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_star_bullets_are_not_italic() {
        assert_eq!(render("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_code_fence() {
        assert_eq!(
            render("```js\nconsole.log(1)\n```"),
            "<pre><code>console.log(1)</code></pre>"
        );
    }

    #[test]
    fn test_multiline_code_fence_keeps_lines() {
        assert_eq!(
            render("Run:\n```sh\ncd trip\n- ls\n```\nDone"),
            "<p>Run:</p><pre><code>cd trip\n- ls</code></pre><p>Done</p>"
        );
    }

    #[test]
    fn test_mixed_paragraph_and_list() {
        assert_eq!(
            render("para\n- item1\n- item2\nmore"),
            "<p>para</p><ul><li>item1</li><li>item2</li></ul><p>more</p>"
        );
    }

    #[test]
    fn test_inline_code_inside_list_item() {
        assert_eq!(
            render("1. Book `JAL 123`\n2. **Pack** light"),
            "<ol><li>Book <code>JAL 123</code></li><li><strong>Pack</strong> light</li></ol>"
        );
    }

    #[test]
    fn test_unbalanced_markers_are_literal() {
        assert_eq!(render("a lone * star"), "<p>a lone * star</p>");
        assert_eq!(render("**half bold"), "<p>**half bold</p>");
        assert_eq!(render("`tick"), "<p>`tick</p>");
    }

    #[test]
    fn test_unterminated_fence_does_not_hang() {
        let long = format!("```\n{}", "word * ".repeat(10_000));
        let html = render(&long);
        assert!(html.starts_with("<p>```</p>"));
    }

    #[test]
    fn test_itinerary_reply() {
        let reply = "Hello! Where would you like to go?\n\n**Day 1**\n1. Arrive in *Ubud*\n2. Visit the rice terraces\n\nEnjoy & travel safe!";
        assert_eq!(
            render(reply),
            "<p>Hello! Where would you like to go?</p><p><strong>Day 1</strong></p>\
             <ol><li>Arrive in <em>Ubud</em></li><li>Visit the rice terraces</li></ol>\
             <p>Enjoy &amp; travel safe!</p>"
        );
    }
}
