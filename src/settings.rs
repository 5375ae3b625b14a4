//! Game settings
//!
//! Read once at startup from a JSON file. Never written back.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_ENV: &str = "BRICK_BREAKER_CONFIG";
const CONFIG_FILE: &str = "brick-breaker.json";
const LOG_FILE: &str = "brick-breaker.log";
/// Keys already bound to movement or quit
const RESERVED_KEYS: [char; 3] = ['a', 'd', 'q'];

/// Where the settings came from
#[derive(Debug)]
pub enum Source {
    File(PathBuf),
    Missing(PathBuf),
    Invalid(PathBuf, serde_json::Error),
}

impl Source {
    pub fn log(&self) {
        match self {
            Source::File(path) => log::info!("loaded settings from {}", path.display()),
            Source::Missing(path) => {
                log::info!("no settings at {}, using defaults", path.display())
            }
            Source::Invalid(path, e) => log::warn!("ignoring {}: {}", path.display(), e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between simulation ticks, in milliseconds
    pub tick_ms: u64,
    /// How long a press keeps the paddle moving when the terminal
    /// does not report key releases
    pub key_hold_ms: u64,
    pub restart_key: char,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            key_hold_ms: 120,
            restart_key: 'k',
            log_file: std::env::temp_dir().join(LOG_FILE),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tick_ms = settings.tick_ms.max(1);
        settings.restart_key = settings.restart_key.to_ascii_lowercase();
        if RESERVED_KEYS.contains(&settings.restart_key) {
            return Err(serde::de::Error::custom(format!(
                "restart_key '{}' is already bound",
                settings.restart_key
            )));
        }
        Ok(settings)
    }

    /// Load from `$BRICK_BREAKER_CONFIG`, else `brick-breaker.json` next to
    /// the executable. Falls back to defaults if the file is missing or bad.
    ///
    /// Runs before the logger exists, so the outcome is returned for the
    /// caller to log.
    pub fn load() -> (Self, Source) {
        let path = Self::config_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(_) => return (Self::default(), Source::Missing(path)),
        };
        match Self::from_json(&json) {
            Ok(settings) => (settings, Source::File(path)),
            Err(e) => (Self::default(), Source::Invalid(path, e)),
        }
    }

    fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(CONFIG_FILE);
            }
        }
        PathBuf::from(CONFIG_FILE)
    }

    /// Whether `c` is the restart key, ignoring case
    pub fn is_restart_key(&self, c: char) -> bool {
        c.to_ascii_lowercase() == self.restart_key
    }
}
