//! Chat session controller.
//!
//! Owns the conversation history for one session, sends it to the
//! collaborator on every user turn, renders the reply and reports each step
//! to a [`DisplaySurface`].
//!
//! `submit_user_text` takes `&mut self`, so one controller can only have one
//! request in flight; the surface's input is disabled for the same span.

use tracing::{debug, info, warn};

use tripchat_types::chat::{ConversationHistory, ConversationTurn};
use tripchat_types::error::RelayError;

use crate::render::render;

use super::collaborator::BoxChatCollaborator;
use super::row::{MessageRow, RowResolution};
use super::surface::DisplaySurface;

/// Result of one `submit_user_text` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input or input disabled; nothing changed.
    Skipped,
    /// The reply was rendered and recorded as a model turn.
    Answered,
    /// The collaborator answered with no text; history unchanged.
    EmptyReply,
    /// The request failed; history unchanged.
    Failed(RelayError),
}

/// Drives one chat session.
pub struct ChatController<S: DisplaySurface> {
    collaborator: BoxChatCollaborator,
    history: ConversationHistory,
    rows: Vec<MessageRow>,
    form_disabled: bool,
    surface: S,
}

impl<S: DisplaySurface> ChatController<S> {
    pub fn new(collaborator: BoxChatCollaborator, surface: S) -> Self {
        Self {
            collaborator,
            history: ConversationHistory::new(),
            rows: Vec::new(),
            form_disabled: false,
            surface,
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn rows(&self) -> &[MessageRow] {
        &self.rows
    }

    pub fn form_disabled(&self) -> bool {
        self.form_disabled
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the controller and hand back its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Submit one user message and wait for the reply.
    ///
    /// Blank text is ignored. Otherwise the trimmed text is recorded as a user
    /// turn, shown as a user row, and a thinking row is shown until the
    /// collaborator answers. Failures are shown as a notice and never change
    /// the history beyond the user turn.
    #[tracing::instrument(
        name = "chat_turn",
        skip(self, text),
        fields(collaborator = self.collaborator.name())
    )]
    pub async fn submit_user_text(&mut self, text: &str) -> TurnOutcome {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank submission");
            return TurnOutcome::Skipped;
        }
        if self.form_disabled {
            debug!("ignoring submission while a reply is pending");
            return TurnOutcome::Skipped;
        }

        self.history.push(ConversationTurn::user(text));
        self.append_row(MessageRow::user(text));
        self.set_form_disabled(true);
        let placeholder = self.append_row(MessageRow::thinking());

        info!(turns = self.history.len(), "Requesting reply");

        let (resolution, outcome) = match self.request_reply().await {
            Ok(reply) => {
                let html = render(&reply);
                self.history.push(ConversationTurn::model(reply.clone()));
                (
                    RowResolution::Rendered { text: reply, html },
                    TurnOutcome::Answered,
                )
            }
            Err(RelayError::EmptyReply) => {
                warn!("Collaborator returned an empty reply");
                (RowResolution::Empty, TurnOutcome::EmptyReply)
            }
            Err(e) => {
                warn!(error = %e, "Chat request failed");
                (
                    RowResolution::Failed {
                        reason: e.to_string(),
                    },
                    TurnOutcome::Failed(e),
                )
            }
        };

        self.resolve_row(placeholder, resolution);
        self.set_form_disabled(false);
        self.surface.focus_input();
        self.surface.scroll_to_latest();

        outcome
    }

    /// Send the whole history, oldest turn first, to the collaborator.
    ///
    /// An empty or whitespace-only reply is reported as
    /// [`RelayError::EmptyReply`].
    pub async fn request_reply(&self) -> Result<String, RelayError> {
        let reply = self
            .collaborator
            .request_reply(self.history.as_slice())
            .await?;
        if reply.trim().is_empty() {
            return Err(RelayError::EmptyReply);
        }
        Ok(reply)
    }

    fn append_row(&mut self, row: MessageRow) -> usize {
        self.surface.append_row(&row);
        self.surface.scroll_to_latest();
        self.rows.push(row);
        self.rows.len() - 1
    }

    fn resolve_row(&mut self, index: usize, resolution: RowResolution) {
        let Some(row) = self.rows.get_mut(index) else {
            warn!(index, "placeholder row missing");
            return;
        };
        match row.resolve(resolution) {
            Ok(()) => self.surface.replace_row(row),
            Err(e) => warn!(error = %e, row_id = %row.id(), "Could not resolve row"),
        }
    }

    fn set_form_disabled(&mut self, disabled: bool) {
        self.form_disabled = disabled;
        self.surface.set_input_enabled(!disabled);
    }
}
