//! JSON-based application configuration.
//!
//! Stores user preferences including:
//! - Default timer duration
//! - Which hooks run (focus mode, notifications)
//! - Apps to kill at start and reopen at the end
//! - Slack workspaces and the status to show while focusing
//! - Focusmate API key
//! - Shell commands to run at start and end
//!
//! Configuration is stored at `~/.pomox/config.json`. The file is meant to
//! be edited by hand, so loading is forgiving: the user's partial tree is
//! merged over the defaults, and anything unreadable falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::data_dir;
use super::merge::merged;
use crate::error::{ConfigError, Result};

/// A Slack workspace whose status follows the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackWorkspace {
    pub name: String,
    pub token: String,
    pub status_emoji: String,
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppsConfig {
    pub kill: Vec<String>,
    pub reopen: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    pub workspaces: Vec<SlackWorkspace>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusmateConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandsConfig {
    pub on_start: Vec<String>,
    pub on_end: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationsConfig {
    pub focus_mode: bool,
    pub notifications: bool,
    pub apps: AppsConfig,
    pub slack: SlackConfig,
    pub focusmate: FocusmateConfig,
    pub commands: CommandsConfig,
}

/// Application configuration.
///
/// Serialized to/from JSON at `~/.pomox/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default timer length in minutes.
    pub duration: u32,
    pub integrations: IntegrationsConfig,
}

fn default_apps() -> Vec<String> {
    vec!["Slack".to_string(), "Messages".to_string()]
}

impl Default for AppsConfig {
    fn default() -> Self {
        Self {
            kill: default_apps(),
            reopen: default_apps(),
        }
    }
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            focus_mode: true,
            notifications: true,
            apps: AppsConfig::default(),
            slack: SlackConfig::default(),
            focusmate: FocusmateConfig::default(),
            commands: CommandsConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: 25,
            integrations: IntegrationsConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown().into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)
                            .map_err(|e| invalid(format!("expected JSON: {e}")))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown().into())
    }

    /// `~/.pomox/config.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.json"))
    }

    /// Merge a user-supplied JSON document over the defaults.
    ///
    /// Never fails: invalid JSON, or a merged tree that no longer fits the
    /// schema, yields the defaults.
    pub fn from_json_str(content: &str) -> Self {
        let user: serde_json::Value = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };

        let defaults = match serde_json::to_value(Self::default()) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };

        serde_json::from_value(merged(defaults, user)).unwrap_or_else(|e| {
            warn!("config does not match the expected shape, using defaults: {e}");
            Self::default()
        })
    }

    /// Load from `path`, or return defaults if the file is missing.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_json_str(&content),
            Err(_) => Self::default(),
        }
    }

    /// Load from the default location, returning defaults on any error.
    /// This is a convenience method that never fails.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("could not resolve config path, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Persist to `path` as pretty JSON.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Persist to the default location.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, coercing `value` to the
    /// type already stored there. Does not save.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
