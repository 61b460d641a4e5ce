//! Message rows and the placeholder state machine.
//!
//! A bot row starts as `Thinking` and makes exactly one transition to
//! `Rendered`, `EmptyFallback` or `ErrorFallback`. User rows are created
//! final and never change.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use tripchat_types::error::RowError;

use crate::render::escape_html;

/// Placeholder text shown while a reply is pending.
pub const THINKING_NOTICE: &str = "Thinking...";

/// Shown when the collaborator answered without any text.
pub const EMPTY_REPLY_NOTICE: &str = "Sorry, no response received.";

/// Shown when the request failed.
pub const ERROR_NOTICE: &str = "Failed to get response from server.";

/// Who a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class used in exported HTML.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// What a row currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    /// Raw user text, displayed verbatim (never markdown-rendered).
    UserText(String),
    Thinking,
    /// A model reply: the raw text and its rendered fragment.
    Rendered { text: String, html: String },
    EmptyFallback,
    ErrorFallback { reason: String },
}

impl RowState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RowState::Thinking)
    }

    /// Plain-text view of the row.
    pub fn display_text(&self) -> &str {
        match self {
            RowState::UserText(text) => text,
            RowState::Thinking => THINKING_NOTICE,
            RowState::Rendered { text, .. } => text,
            RowState::EmptyFallback => EMPTY_REPLY_NOTICE,
            RowState::ErrorFallback { .. } => ERROR_NOTICE,
        }
    }

    /// HTML view of the row. Only `Rendered` carries markup; everything else
    /// is literal text and gets escaped.
    pub fn html(&self) -> String {
        match self {
            RowState::Rendered { html, .. } => html.clone(),
            other => escape_html(other.display_text()),
        }
    }
}

/// Terminal outcome for a pending row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowResolution {
    Rendered { text: String, html: String },
    Empty,
    Failed { reason: String },
}

/// One entry on the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    id: Uuid,
    sender: Sender,
    created_at: DateTime<Utc>,
    state: RowState,
}

impl MessageRow {
    fn new(sender: Sender, state: RowState) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender,
            created_at: Utc::now(),
            state,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, RowState::UserText(text.into()))
    }

    /// A bot row waiting for its reply.
    pub fn thinking() -> Self {
        Self::new(Sender::Bot, RowState::Thinking)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn state(&self) -> &RowState {
        &self.state
    }

    /// Move a pending row to its terminal state.
    pub fn resolve(&mut self, resolution: RowResolution) -> Result<(), RowError> {
        if !self.state.is_pending() {
            return Err(RowError::NotPending);
        }
        self.state = match resolution {
            RowResolution::Rendered { text, html } => RowState::Rendered { text, html },
            RowResolution::Empty => RowState::EmptyFallback,
            RowResolution::Failed { reason } => RowState::ErrorFallback { reason },
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_row_resolves_once() {
        let mut row = MessageRow::thinking();
        assert!(row.state().is_pending());
        assert_eq!(row.state().display_text(), THINKING_NOTICE);

        row.resolve(RowResolution::Rendered {
            text: "**hi**".to_string(),
            html: "<p><strong>hi</strong></p>".to_string(),
        })
        .unwrap();
        assert_eq!(row.state().html(), "<p><strong>hi</strong></p>");
        assert_eq!(row.state().display_text(), "**hi**");

        let again = row.resolve(RowResolution::Empty);
        assert_eq!(again, Err(RowError::NotPending));
        assert!(matches!(row.state(), RowState::Rendered { .. }));
    }

    #[test]
    fn test_user_row_cannot_be_resolved() {
        let mut row = MessageRow::user("hello");
        assert_eq!(row.sender(), Sender::User);
        assert_eq!(
            row.resolve(RowResolution::Failed {
                reason: "x".to_string()
            }),
            Err(RowError::NotPending)
        );
        assert_eq!(row.state(), &RowState::UserText("hello".to_string()));
    }

    #[test]
    fn test_fallback_notices() {
        let mut empty = MessageRow::thinking();
        empty.resolve(RowResolution::Empty).unwrap();
        assert_eq!(empty.state().display_text(), EMPTY_REPLY_NOTICE);

        let mut failed = MessageRow::thinking();
        failed
            .resolve(RowResolution::Failed {
                reason: "server error 500".to_string(),
            })
            .unwrap();
        assert_eq!(failed.state().display_text(), ERROR_NOTICE);
    }

    #[test]
    fn test_user_text_html_is_escaped() {
        let row = MessageRow::user("<b>**not markdown**</b>");
        assert_eq!(row.state().html(), "&lt;b&gt;**not markdown**&lt;/b&gt;");
    }

    #[test]
    fn test_row_ids_are_unique() {
        assert_ne!(MessageRow::thinking().id(), MessageRow::thinking().id());
    }
}
