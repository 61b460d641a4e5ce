//! Slash commands for the chat loop.
//!
//! Anything starting with `/` is a command and is never sent to the model.

use std::path::PathBuf;

use console::style;

use tripchat_types::config::Theme;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    Clear,
    Exit,
    /// Show the conversation so far.
    History,
    /// Switch the transcript theme; `None` toggles.
    Theme(Option<Theme>),
    /// Write the transcript now, optionally to a different path.
    Save(Option<PathBuf>),
    /// Unknown command, or a known one with a bad argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (trimmed, None),
    };

    match cmd.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/theme" => match arg.map(str::parse::<Theme>) {
            None => Some(ChatCommand::Theme(None)),
            Some(Ok(theme)) => Some(ChatCommand::Theme(Some(theme))),
            Some(Err(e)) => Some(ChatCommand::Unknown(e)),
        },
        "/save" => Some(ChatCommand::Save(arg.map(PathBuf::from))),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}           {}", style("/help").cyan(), "Show this help message");
    println!("  {}          {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}           {}", style("/exit").cyan(), "End the chat session");
    println!("  {}        {}", style("/history").cyan(), "Show the conversation so far");
    println!(
        "  {} {}",
        style("/theme [light|dark]").cyan(),
        "Switch the transcript theme"
    );
    println!("  {}    {}", style("/save [PATH]").cyan(), "Write the HTML transcript now");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("  /?  "), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/QUIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse("/theme"), Some(ChatCommand::Theme(None)));
        assert_eq!(parse("/theme dark"), Some(ChatCommand::Theme(Some(Theme::Dark))));
        assert_eq!(parse("/theme  Light "), Some(ChatCommand::Theme(Some(Theme::Light))));
        assert!(matches!(parse("/theme sepia"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_save() {
        assert_eq!(parse("/save"), Some(ChatCommand::Save(None)));
        assert_eq!(
            parse("/save trip.html"),
            Some(ChatCommand::Save(Some(PathBuf::from("trip.html"))))
        );
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("take me to /dev/null"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/fly"), Some(ChatCommand::Unknown("/fly".to_string())));
    }
}
