//! Line scanner that groups inline-rendered text into paragraphs and flat
//! lists.
//!
//! The scanner walks lines top to bottom with a single [`ListMode`]; at most
//! one list is open at any time, and it closes as soon as a non-item line,
//! a blank line or the end of input is reached.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::{PRE_CLOSE, PRE_OPEN};

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.*)").expect("valid regex"));

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)").expect("valid regex"));

/// Which list, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMode {
    None,
    Ordered,
    Unordered,
}

impl ListMode {
    fn open_tag(self) -> &'static str {
        match self {
            ListMode::None => "",
            ListMode::Ordered => "<ol>",
            ListMode::Unordered => "<ul>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListMode::None => "",
            ListMode::Ordered => "</ol>",
            ListMode::Unordered => "</ul>",
        }
    }
}

struct BlockWriter {
    html: String,
    mode: ListMode,
}

impl BlockWriter {
    fn new(capacity: usize) -> Self {
        Self {
            html: String::with_capacity(capacity),
            mode: ListMode::None,
        }
    }

    fn close_list(&mut self) {
        self.html.push_str(self.mode.close_tag());
        self.mode = ListMode::None;
    }

    /// Emit a list item, switching lists when the kind changes.
    fn item(&mut self, mode: ListMode, content: &str) {
        if self.mode != mode {
            self.close_list();
            self.html.push_str(mode.open_tag());
            self.mode = mode;
        }
        self.html.push_str("<li>");
        self.html.push_str(content);
        self.html.push_str("</li>");
    }

    fn paragraph(&mut self, content: &str) {
        self.close_list();
        self.html.push_str("<p>");
        self.html.push_str(content);
        self.html.push_str("</p>");
    }

    fn preformatted(&mut self, block: &str) {
        self.close_list();
        self.html.push_str(block);
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.html
    }
}

/// Net number of `<pre><code>` blocks a line leaves open.
fn pre_balance(line: &str) -> isize {
    line.matches(PRE_OPEN).count() as isize - line.matches(PRE_CLOSE).count() as isize
}

/// Group lines into `<p>`, `<ol>`, `<ul>` and preformatted blocks.
pub(crate) fn structure_blocks(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut writer = BlockWriter::new(text.len() + 32);
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();

        // Fenced code was turned into <pre><code> earlier; escaping guarantees
        // nothing else can produce that marker, so its lines pass through.
        if trimmed.starts_with(PRE_OPEN) {
            let start = i;
            let mut depth = pre_balance(lines[i]);
            while depth > 0 && i + 1 < lines.len() {
                i += 1;
                depth += pre_balance(lines[i]);
            }
            writer.preformatted(lines[start..=i].join("\n").trim());
            i += 1;
            continue;
        }

        if let Some(caps) = ORDERED_ITEM_RE.captures(trimmed) {
            writer.item(ListMode::Ordered, caps.get(1).map_or("", |m| m.as_str()));
        } else if let Some(caps) = UNORDERED_ITEM_RE.captures(trimmed) {
            writer.item(ListMode::Unordered, caps.get(1).map_or("", |m| m.as_str()));
        } else if trimmed.is_empty() {
            writer.close_list();
        } else {
            writer.paragraph(trimmed);
        }
        i += 1;
    }

    writer.finish()
}
