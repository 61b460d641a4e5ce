//! The terminal chat loop.

use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use tripchat_core::chat::collaborator::BoxChatCollaborator;
use tripchat_core::chat::controller::{ChatController, TurnOutcome};
use tripchat_core::chat::surface::TranscriptSurface;
use tripchat_types::chat::{ConversationHistory, TurnRole};
use tripchat_types::config::Theme;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::surface::TerminalSurface;

const TRANSCRIPT_TITLE: &str = "tripchat transcript";

/// Everything a terminal session needs.
pub struct ChatSession {
    pub collaborator: BoxChatCollaborator,
    /// Shown in the banner: the relay URL or the model name.
    pub via: String,
    pub transcript: Option<PathBuf>,
    pub theme: Theme,
}

pub async fn run_chat_loop(session: ChatSession) -> anyhow::Result<()> {
    let ChatSession {
        collaborator,
        via,
        transcript,
        mut theme,
    } = session;

    let transcript_label = transcript.as_ref().map(|p| p.display().to_string());
    print_welcome_banner(&via, transcript_label.as_deref());

    let mut controller = ChatController::new(collaborator, TerminalSurface::new());

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::History => {
                    println!();
                    for line in history_lines(controller.history()) {
                        println!("  {line}");
                    }
                    println!();
                }
                ChatCommand::Theme(choice) => {
                    theme = choice.unwrap_or(theme.toggled());
                    println!("\n  Transcript theme: {}\n", style(theme).cyan());
                }
                ChatCommand::Save(path) => match path.or_else(|| transcript.clone()) {
                    Some(path) => {
                        match save_transcript(controller.surface().transcript(), &path, theme).await {
                            Ok(()) => println!(
                                "\n  {} Saved transcript to {}\n",
                                style("*").cyan().bold(),
                                style(path.display()).dim()
                            ),
                            Err(e) => println!("\n  {} {e}\n", style("!").red().bold()),
                        }
                    }
                    None => println!(
                        "\n  {} No transcript path. Use /save PATH or --transcript.\n",
                        style("?").yellow().bold()
                    ),
                },
                ChatCommand::Unknown(name) => println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                ),
            }
            continue;
        }

        match controller.submit_user_text(&text).await {
            TurnOutcome::Skipped => {}
            outcome => debug!(?outcome, turns = controller.history().len(), "Turn finished"),
        }
    }

    chat_input.flush();

    if let Some(path) = &transcript {
        save_transcript(controller.surface().transcript(), path, theme).await?;
        println!(
            "  {} Transcript written to {}",
            style("*").cyan().bold(),
            style(path.display()).dim()
        );
    }

    Ok(())
}

/// One line per turn, long turns cut to a preview.
pub fn history_lines(history: &ConversationHistory) -> Vec<String> {
    history
        .iter()
        .map(|turn| {
            let label = match turn.role() {
                TurnRole::User => style("You").green().bold(),
                TurnRole::Model => style("Trip").cyan().bold(),
            };
            let text = turn.text().replace('\n', " ");
            let preview = if text.chars().count() > 100 {
                format!("{}...", text.chars().take(97).collect::<String>())
            } else {
                text
            };
            format!("{label} {preview}")
        })
        .collect()
}

/// Write the transcript as a themed HTML page.
pub async fn save_transcript(
    transcript: &TranscriptSurface,
    path: &Path,
    theme: Theme,
) -> anyhow::Result<()> {
    let html = transcript.to_html_document(theme, TRANSCRIPT_TITLE);
    tokio::fs::write(path, html)
        .await
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))
}
