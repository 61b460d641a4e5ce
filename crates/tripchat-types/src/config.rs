//! Configuration types for tripchat.
//!
//! `TripchatConfig` represents `config.toml`. Every field has a default, so
//! an empty file (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default model used by the relay.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default sampling temperature for every relayed request.
pub const DEFAULT_TEMPERATURE: f64 = 0.9;

/// Fixed instruction sent ahead of every conversation.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a travel assistant. Greet the user, ask where they want to go on holiday, then build an itinerary for the trip.";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripchatConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// `[server]` section: where the relay listens and what it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Front-end directory served as the router fallback when it exists.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "frontend".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// `[model]` section: how requests are forwarded to the generative backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model")]
    pub name: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
    /// Override the backend base URL (proxies, tests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_system_instruction() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
            temperature: default_temperature(),
            system_instruction: default_system_instruction(),
            base_url: None,
        }
    }
}

/// `[chat]` section: terminal front-end defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Relay endpoint base URL used by `tripchat chat`.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub theme: Theme,
}

fn default_server_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            theme: Theme::default(),
        }
    }
}

/// Color theme for exported HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("invalid theme: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = TripchatConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert!((config.model.temperature - 0.9).abs() < f64::EPSILON);
        assert!(config.model.base_url.is_none());
        assert_eq!(config.chat.theme, Theme::Light);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: TripchatConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.model.system_instruction, DEFAULT_SYSTEM_INSTRUCTION);
        assert_eq!(config.chat.server_url, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_config_deserialize_partial_sections() {
        let toml_str = r#"
[server]
port = 8080

[model]
name = "gemini-2.5-pro"
temperature = 0.2

[chat]
theme = "dark"
"#;
        let config: TripchatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.model.name, "gemini-2.5-pro");
        assert!((config.model.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.model.system_instruction, DEFAULT_SYSTEM_INSTRUCTION);
        assert_eq!(config.chat.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_roundtrip_and_toggle() {
        for theme in [Theme::Light, Theme::Dark] {
            let parsed: Theme = theme.to_string().parse().unwrap();
            assert_eq!(parsed, theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
