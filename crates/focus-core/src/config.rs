//! TOML-based application configuration.
//!
//! Stores user preferences: sound-cue volumes, UI defaults and keyboard
//! shortcut bindings. Stored at `~/.config/focus/config.toml`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::store::data_dir;

/// Sound-cue configuration. Volumes are 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_click_volume")]
    pub click_volume: u32,
    #[serde(default = "default_switch_volume")]
    pub switch_volume: u32,
    #[serde(default = "default_done_volume")]
    pub done_volume: u32,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start the interactive timer in zen (minimal) display.
    #[serde(default)]
    pub zen_default: bool,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

/// Keyboard shortcut overrides, action name to key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortcutsConfig {
    #[serde(default)]
    pub bindings: HashMap<String, String>,
}

/// Application configuration, serialized to/from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sounds: SoundsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub shortcuts: ShortcutsConfig,
}

fn default_true() -> bool {
    true
}
// Cue volumes mirror the browser build's player (0.5 / 0.3 / 0.6).
fn default_click_volume() -> u32 {
    50
}
fn default_switch_volume() -> u32 {
    30
}
fn default_done_volume() -> u32 {
    60
}
fn default_accent_color() -> String {
    "#06b6d4".into()
}

impl Default for SoundsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            click_volume: default_click_volume(),
            switch_volume: default_switch_volume(),
            done_volume: default_done_volume(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            zen_default: false,
            accent_color: default_accent_color(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/focus"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as a string by dot-separated key
    /// (e.g. `sounds.click_volume`).
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and save.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys, unparsable values, or a failed
    /// save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
                key: key.into(),
                message: e.to_string(),
            })?;
        set_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.into(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

/// Replace the leaf at a dot-separated path, keeping the existing value's
/// JSON type.
fn set_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<(), ConfigError> {
    let unknown = || ConfigError::UnknownKey(key.to_string());
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let mut parts = key.split('.').peekable();
    let mut current = root;
    while let Some(part) = parts.next() {
        if parts.peek().is_some() {
            current = current.get_mut(part).ok_or_else(unknown)?;
            continue;
        }
        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(part).ok_or_else(unknown)?;
        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => serde_json::Value::Number(
                value
                    .parse::<u64>()
                    .map_err(|e| invalid(e.to_string()))?
                    .into(),
            ),
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
            }
            _ => serde_json::Value::String(value.into()),
        };
        obj.insert(part.to_string(), new_value);
        return Ok(());
    }
    Err(unknown())
}
