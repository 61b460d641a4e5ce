//! Standalone HTML page around rendered fragments.

use tripchat_types::config::Theme;

use super::inline::escape_html;

const STYLE: &str = "\
:root { --bg: #f7f7f8; --fg: #1f2328; --bubble: #ffffff; --user: #d7ecff; --code: #eef0f2; }
[data-theme=\"dark\"] { --bg: #16181c; --fg: #e6e6e6; --bubble: #23262d; --user: #1d3a57; --code: #2d3139; }
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
.message-row { display: flex; margin: 0.5rem 0; }
.message-row.user { justify-content: flex-end; }
.message { background: var(--bubble); border-radius: 0.75rem; padding: 0.5rem 0.9rem; max-width: 85%; }
.message.user { background: var(--user); white-space: pre-wrap; }
.message.notice { font-style: italic; opacity: 0.8; }
pre, code { background: var(--code); border-radius: 0.3rem; }
pre { padding: 0.6rem; overflow-x: auto; }
";

/// Wrap an HTML body in a complete page using the given theme.
///
/// `body_html` is inserted as-is; `title` is escaped.
pub fn wrap_document(body_html: &str, theme: Theme, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{STYLE}</style>\n</head>\n\
         <body>\n{body_html}\n</body>\n</html>\n",
        escape_html(title)
    )
}

/// Render raw text and wrap the fragment in a complete page.
pub fn render_document(raw: &str, theme: Theme, title: &str) -> String {
    wrap_document(&super::render(raw), theme, title)
}
