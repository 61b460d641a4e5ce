//! Display surface abstraction and the in-memory transcript surface.

use tripchat_types::config::Theme;

use crate::render::wrap_document;

use super::row::{MessageRow, RowState};

/// Where the controller shows rows and input state.
///
/// Rows are identified by [`MessageRow::id`]; `replace_row` receives a row
/// that was previously appended.
pub trait DisplaySurface {
    fn append_row(&mut self, row: &MessageRow);

    fn replace_row(&mut self, row: &MessageRow);

    fn set_input_enabled(&mut self, enabled: bool);

    fn focus_input(&mut self);

    fn scroll_to_latest(&mut self);
}

/// Records every row and input change in memory.
///
/// Used by tests and by the terminal front end to export a session as HTML.
#[derive(Debug, Clone)]
pub struct TranscriptSurface {
    rows: Vec<MessageRow>,
    input_enabled: bool,
    focus_requests: usize,
    scroll_requests: usize,
}

impl Default for TranscriptSurface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            input_enabled: true,
            focus_requests: 0,
            scroll_requests: 0,
        }
    }
}

impl TranscriptSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[MessageRow] {
        &self.rows
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// The transcript rows as HTML message bubbles.
    pub fn to_html_fragment(&self) -> String {
        let mut html = String::new();
        for row in &self.rows {
            let class = row.sender().css_class();
            let notice = match row.state() {
                RowState::Thinking | RowState::EmptyFallback | RowState::ErrorFallback { .. } => {
                    " notice"
                }
                _ => "",
            };
            html.push_str(&format!(
                "<div class=\"message-row {class}\"><div class=\"message {class}{notice}\">{}</div></div>\n",
                row.state().html()
            ));
        }
        html
    }

    /// The whole transcript as a standalone page.
    pub fn to_html_document(&self, theme: Theme, title: &str) -> String {
        wrap_document(&self.to_html_fragment(), theme, title)
    }
}

impl DisplaySurface for TranscriptSurface {
    fn append_row(&mut self, row: &MessageRow) {
        self.rows.push(row.clone());
    }

    fn replace_row(&mut self, row: &MessageRow) {
        if let Some(existing) = self.rows.iter_mut().find(|r| r.id() == row.id()) {
            *existing = row.clone();
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn focus_input(&mut self) {
        self.focus_requests += 1;
    }

    fn scroll_to_latest(&mut self) {
        self.scroll_requests += 1;
    }
}
