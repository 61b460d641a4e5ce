//! Character-level rendering stages: escaping, code fences, inline code,
//! bold and italic.
//!
//! Each stage takes the output of the previous one. Order matters: escaping
//! runs first so nothing a stage wraps can carry a raw tag, and bold runs
//! before italic so `**x**` is never read as two italic markers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Opening marker inserted around fenced code.
pub(crate) const PRE_OPEN: &str = "<pre><code>";

/// Closing marker inserted around fenced code.
pub(crate) const PRE_CLOSE: &str = "</code></pre>";

/// ```` ```lang\n ... ``` ````; the language tag is ASCII word characters and
/// is dropped. The body is lazy so the first closing fence wins.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_]*\n?(.*?)```").expect("valid regex"));

static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));

/// Bold spans never cross a line terminator.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]+?)\*\*").expect("valid regex")
});

/// Escape `&`, `<` and `>`.
///
/// `&` is replaced first so the entities produced for `<` and `>` are not
/// escaped twice.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Replace fenced code regions with `<pre><code>` blocks holding the trimmed
/// body. An unterminated fence is left untouched.
pub(crate) fn fence_code_blocks(text: &str) -> String {
    FENCE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{PRE_OPEN}{}{PRE_CLOSE}", caps[1].trim())
        })
        .into_owned()
}

pub(crate) fn inline_code(text: &str) -> String {
    INLINE_CODE_RE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

pub(crate) fn bold(text: &str) -> String {
    BOLD_RE
        .replace_all(text, "<strong>${1}</strong>")
        .into_owned()
}

/// Wrap single-asterisk spans in `<em>`.
///
/// A delimiter only counts when neither neighbour is another `*`, so leftover
/// pieces of bold markers are never paired. The span is lazy, needs at least
/// one character and stays on one line; a lone `*` stays literal.
pub(crate) fn italic(text: &str) -> String {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < chars.len() {
        if is_lone_star(&chars, i) {
            if let Some(close) = find_closing_star(&chars, i) {
                let open_at = chars[i].0;
                let close_at = chars[close].0;
                out.push_str(&text[copied..open_at]);
                out.push_str("<em>");
                out.push_str(&text[open_at + 1..close_at]);
                out.push_str("</em>");
                copied = close_at + 1;
                i = close + 1;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&text[copied..]);
    out
}

fn is_star(chars: &[(usize, char)], i: usize) -> bool {
    chars.get(i).is_some_and(|&(_, c)| c == '*')
}

fn is_lone_star(chars: &[(usize, char)], i: usize) -> bool {
    is_star(chars, i) && !(i > 0 && is_star(chars, i - 1)) && !is_star(chars, i + 1)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn find_closing_star(chars: &[(usize, char)], open: usize) -> Option<usize> {
    for j in open + 1..chars.len() {
        let c = chars[j].1;
        if is_line_terminator(c) {
            return None;
        }
        if j >= open + 2 && is_lone_star(chars, j) {
            return Some(j);
        }
    }
    None
}
