//! Application configuration.
//!
//! The configuration is loaded from a JSON file at
//! `$XDG_CONFIG_HOME/hyprmon/config.json`.  Every field is optional — a
//! minimal `{}` file (or no file at all) is valid and falls back to the
//! compiled-in defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "monitors_conf": "/home/me/.config/hypr/hyprmon.conf",
//!   "hyprland_conf": "/home/me/.config/hypr/hyprland.conf",
//!   "source_line": "source=~/.config/hypr/hyprmon.conf"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the user's config base directory (`$XDG_CONFIG_HOME`, falling
/// back to `$HOME/.config`).
fn config_home() -> PathBuf {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(base) => PathBuf::from(base),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
            PathBuf::from(home).join(".config")
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The monitor config file hyprmon owns and rewrites on every apply.
    pub monitors_conf: PathBuf,

    /// The user's main Hyprland config; must already exist for the
    /// `source=` directive to be added.
    pub hyprland_conf: PathBuf,

    /// The exact `source=` directive line to ensure in the main config.
    pub source_line: String,

    /// Path for the editor command socket.  `None` uses
    /// `$XDG_RUNTIME_DIR/hyprmon.sock`.
    pub socket_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let hypr = config_home().join("hypr");
        Self {
            monitors_conf: hypr.join("hyprmon.conf"),
            hyprland_conf: hypr.join("hyprland.conf"),
            source_line: "source=~/.config/hypr/hyprmon.conf".into(),
            socket_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        let defaults = Config::default();
        assert_eq!(cfg.monitors_conf, defaults.monitors_conf);
        assert_eq!(cfg.hyprland_conf, defaults.hyprland_conf);
        assert_eq!(cfg.source_line, defaults.source_line);
        assert_eq!(cfg.socket_path, None);
    }

    #[test]
    fn deserialize_partial_override() {
        let json = r#"{ "monitors_conf": "/tmp/out.conf" }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.monitors_conf, PathBuf::from("/tmp/out.conf"));
        assert_eq!(cfg.source_line, Config::default().source_line);
    }

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "monitors_conf": "/tmp/hyprmon.conf",
            "hyprland_conf": "/tmp/hyprland.conf",
            "source_line": "source=/tmp/hyprmon.conf",
            "socket_path": "/tmp/hyprmon.sock"
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.hyprland_conf, PathBuf::from("/tmp/hyprland.conf"));
        assert_eq!(cfg.socket_path, Some(PathBuf::from("/tmp/hyprmon.sock")));
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "source_line": "source=x", "future_section": { "key": 42 } }"#;
        // Should not fail — unknown keys are silently ignored.
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }
}
