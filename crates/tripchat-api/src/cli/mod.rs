//! CLI command definitions for the `tripchat` binary.

pub mod chat;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use tripchat_types::config::Theme;

/// Travel-assistant chat: relay server, terminal client and renderer.
#[derive(Parser)]
#[command(name = "tripchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to $TRIPCHAT_CONFIG, then the user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay server (POST /api/chat).
    Serve {
        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Front-end directory to serve.
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Gemini API key.
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Export spans through OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Chat in the terminal.
    Chat {
        /// Relay server base URL.
        #[arg(long, conflicts_with = "direct")]
        server: Option<String>,

        /// Talk to Gemini directly instead of through a relay server.
        #[arg(long)]
        direct: bool,

        /// Gemini API key (only used with --direct).
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Write the session as an HTML page when it ends.
        #[arg(long)]
        transcript: Option<PathBuf>,

        /// Theme for the HTML transcript.
        #[arg(long)]
        theme: Option<Theme>,
    },

    /// Render markdown-lite text to HTML (reads stdin without FILE).
    Render {
        file: Option<PathBuf>,

        /// Emit a standalone HTML page instead of a fragment.
        #[arg(long)]
        document: bool,

        /// Page theme (with --document).
        #[arg(long)]
        theme: Option<Theme>,

        /// Page title (with --document).
        #[arg(long, default_value = "tripchat")]
        title: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chat_flags() {
        let cli = Cli::try_parse_from([
            "tripchat", "-vv", "chat", "--server", "http://host:3000", "--theme", "dark",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Chat {
                server,
                direct,
                theme,
                ..
            } => {
                assert_eq!(server.as_deref(), Some("http://host:3000"));
                assert!(!direct);
                assert_eq!(theme, Some(Theme::Dark));
            }
            _ => panic!("expected chat"),
        }
    }

    #[test]
    fn test_server_conflicts_with_direct() {
        assert!(Cli::try_parse_from(["tripchat", "chat", "--server", "http://x", "--direct"]).is_err());
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["tripchat", "render"]).unwrap();
        match cli.command {
            Commands::Render {
                file,
                document,
                title,
                ..
            } => {
                assert!(file.is_none());
                assert!(!document);
                assert_eq!(title, "tripchat");
            }
            _ => panic!("expected render"),
        }
    }
}
