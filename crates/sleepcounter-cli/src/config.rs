//! TOML-based CLI configuration.
//!
//! Stores:
//! - The log level used when `SLEEPCOUNTER_LOG` is not set
//! - The list of special day events
//!
//! Configuration is stored at `~/.config/sleepcounter/config.toml`.

use serde::{Deserialize, Serialize};
use sleepcounter_core::{default_events, Calendar, CalendarError, Clock, ConfigError, EventConfig};
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter, e.g. "warn" or "sleepcounter_core=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Events in display priority order. Defaults to the stock diary.
    #[serde(default = "default_events")]
    pub events: Vec<EventConfig>,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            events: default_events(),
        }
    }
}

/// Returns `~/.config/sleepcounter[-dev]/` based on SLEEPCOUNTER_ENV.
///
/// Set SLEEPCOUNTER_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SLEEPCOUNTER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("sleepcounter-dev")
    } else {
        base_dir.join("sleepcounter")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
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
            current = match current {
                serde_json::Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }
        let optional_leaf = Self::is_optional_event_field(key);

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            let slot = match current {
                serde_json::Value::Array(items) => part
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get_mut(i)),
                serde_json::Value::Object(obj) => {
                    if is_leaf && optional_leaf {
                        Some(obj.entry(part).or_insert(serde_json::Value::Null))
                    } else {
                        obj.get_mut(part)
                    }
                }
                _ => None,
            };
            let slot = slot.ok_or_else(unknown)?;

            if parts.peek().is_none() {
                let new_value = match slot {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    // Unset year or sleeps of an event.
                    serde_json::Value::Null => serde_json::Value::Number(
                        value
                            .parse::<i64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                };
                *slot = new_value;
                return Ok(());
            }

            current = slot;
        }

        Err(unknown())
    }

    /// `events.<index>.year` and `events.<index>.sleeps` may be absent and
    /// can still be set.
    fn is_optional_event_field(key: &str) -> bool {
        let parts: Vec<&str> = key.split('.').collect();
        matches!(
            parts.as_slice(),
            ["events", index, "year" | "sleeps"] if index.parse::<usize>().is_ok()
        )
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    pub fn display_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Self::path()
    }

    /// Load from disk, writing the default config first if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::load_from(&Self::path()?)?)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(self.save_to(&Self::path()?)?)
    }

    /// Load from `path`, writing the default config there if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] for malformed TOML and
    /// [`ConfigError::LoadFailed`] for unreadable files.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config at {}, writing defaults", path.display());
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::SaveFailed`] if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key, e.g. `events.0.name`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// The result must still describe valid events.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the updated events are not valid dates.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        updated.validate().map_err(|e| invalid(e.to_string()))?;
        *self = updated;
        Ok(())
    }

    /// Check every configured event forms a valid date.
    ///
    /// # Errors
    ///
    /// Returns the first invalid event.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.calendar(sleepcounter_core::SystemClock).map(|_| ())
    }

    /// A calendar of the configured events on `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for the first invalid event.
    pub fn calendar<C: Clock>(&self, clock: C) -> Result<Calendar<C>, CalendarError> {
        Calendar::from_configs(clock, self.events.iter().cloned())
    }
}
