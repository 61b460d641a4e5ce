//! Terminal display surface.
//!
//! Shows a spinner while a reply is pending and prints the reply text when
//! the row resolves. Every row is also kept in a [`TranscriptSurface`] so the
//! session can be saved as HTML.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use tripchat_core::chat::row::{MessageRow, RowState};
use tripchat_core::chat::surface::{DisplaySurface, TranscriptSurface};

pub struct TerminalSurface {
    transcript: TranscriptSurface,
    spinner: Option<ProgressBar>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            transcript: TranscriptSurface::new(),
            spinner: None,
        }
    }

    pub fn transcript(&self) -> &TranscriptSurface {
        &self.transcript
    }

    fn start_spinner(&mut self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal text for a resolved bot row. User rows are already on screen
/// from the prompt, and pending rows show the spinner instead.
pub fn format_row(row: &MessageRow) -> Option<String> {
    let label = style("Trip >").cyan().bold();
    match row.state() {
        RowState::UserText(_) | RowState::Thinking => None,
        RowState::Rendered { text, .. } => {
            let body = text.trim().lines().collect::<Vec<_>>().join("\n         ");
            Some(format!("\n  {label} {body}\n"))
        }
        RowState::EmptyFallback => Some(format!(
            "\n  {label} {}\n",
            style(row.state().display_text()).yellow()
        )),
        RowState::ErrorFallback { reason } => Some(format!(
            "\n  {label} {}\n         {}\n",
            style(row.state().display_text()).red(),
            style(reason).dim()
        )),
    }
}

impl DisplaySurface for TerminalSurface {
    fn append_row(&mut self, row: &MessageRow) {
        self.transcript.append_row(row);
        if row.state().is_pending() {
            self.start_spinner();
        }
    }

    fn replace_row(&mut self, row: &MessageRow) {
        self.transcript.replace_row(row);
        self.stop_spinner();
        if let Some(text) = format_row(row) {
            println!("{text}");
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.transcript.set_input_enabled(enabled);
    }

    fn focus_input(&mut self) {
        self.transcript.focus_input();
    }

    fn scroll_to_latest(&mut self) {
        self.transcript.scroll_to_latest();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripchat_core::chat::row::{ERROR_NOTICE, RowResolution};

    #[test]
    fn test_user_and_pending_rows_print_nothing() {
        assert!(format_row(&MessageRow::user("hi")).is_none());
        assert!(format_row(&MessageRow::thinking()).is_none());
    }

    #[test]
    fn test_reply_rows_print_raw_text() {
        let mut row = MessageRow::thinking();
        row.resolve(RowResolution::Rendered {
            text: "Day 1\nDay 2\n".to_string(),
            html: "<p>Day 1</p><p>Day 2</p>".to_string(),
        })
        .unwrap();
        let text = console::strip_ansi_codes(&format_row(&row).unwrap()).to_string();
        assert!(text.contains("Trip > Day 1"));
        assert!(text.contains("Day 2"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_error_row_shows_notice_and_reason() {
        let mut row = MessageRow::thinking();
        row.resolve(RowResolution::Failed {
            reason: "server error 500: boom".to_string(),
        })
        .unwrap();
        let text = console::strip_ansi_codes(&format_row(&row).unwrap()).to_string();
        assert!(text.contains(ERROR_NOTICE));
        assert!(text.contains("server error 500: boom"));
    }

    #[test]
    fn test_surface_keeps_transcript() {
        let mut surface = TerminalSurface::new();
        let user = MessageRow::user("hello");
        surface.append_row(&user);
        surface.set_input_enabled(false);
        assert_eq!(surface.transcript().rows(), &[user]);
        assert!(!surface.transcript().input_enabled());
    }
}
