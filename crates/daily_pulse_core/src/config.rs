//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve where the pulse store lives and how core logs.
//!
//! # Invariants
//! - Blank variables behave as unset.
//! - A configured log directory is always absolute.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "DAILY_PULSE_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "DAILY_PULSE_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "DAILY_PULSE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "daily_pulse.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{LOG_LEVEL_VAR}: {message}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "{LOG_DIR_VAR} must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    /// Normalized level: `trace|debug|info|warn|error`.
    pub log_level: &'static str,
    /// Rolling log directory; file logging is off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through `lookup`, which maps variable names to
    /// values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(path) = read(DB_PATH_VAR) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(level) = read(LOG_LEVEL_VAR) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(dir) = read(LOG_DIR_VAR) {
            let dir = PathBuf::from(dir);
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(dir);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> Result<CoreConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CoreConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert!(config.db_path.ends_with("daily_pulse.sqlite3"));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_behave_as_unset() {
        let config = resolve(&[(DB_PATH_VAR, "   "), (LOG_LEVEL_VAR, "")]).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn explicit_values_are_normalized() {
        let config = resolve(&[
            (DB_PATH_VAR, " /var/lib/pulse.db "),
            (LOG_LEVEL_VAR, "Warning"),
            (LOG_DIR_VAR, "/var/log/pulse"),
        ])
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/pulse.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/pulse")));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = resolve(&[(LOG_LEVEL_VAR, "loud")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));

        let err = resolve(&[(LOG_DIR_VAR, "logs")]).unwrap_err();
        assert_eq!(err, ConfigError::RelativeLogDir(PathBuf::from("logs")));
    }
}
