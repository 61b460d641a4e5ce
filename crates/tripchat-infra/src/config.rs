//! Config file loading.
//!
//! The file is optional: a missing file yields defaults, and a file that
//! cannot be read or parsed is logged and also yields defaults.

use std::path::{Path, PathBuf};

use tripchat_types::config::TripchatConfig;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "TRIPCHAT_CONFIG";

/// Pick the config file path.
///
/// Priority: `explicit` (from `--config`), then `$TRIPCHAT_CONFIG`, then
/// `<config dir>/tripchat/config.toml`. `None` when no config directory can
/// be determined.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_with_env(explicit, std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn resolve_with_env(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    dirs::config_dir().map(|dir| dir.join("tripchat").join("config.toml"))
}

/// Load the config from `path`.
pub async fn load_config(path: &Path) -> TripchatConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return TripchatConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return TripchatConfig::default();
        }
    };

    match toml::from_str::<TripchatConfig>(&content) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            TripchatConfig::default()
        }
    }
}
