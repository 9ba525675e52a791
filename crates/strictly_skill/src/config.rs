//! Skill configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::ConfigError;

/// Application id this skill was registered under.
pub const DEFAULT_APPLICATION_ID: &str = "amzn1.ask.skill.8f6884d0-eea8-41ff-9b80-a9fe4377932c";

/// Environment variable overriding the expected application id.
pub const APPLICATION_ID_ENV: &str = "STRICTLY_SKILL_APPLICATION_ID";

/// Configuration for the skill handler.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Application id every event must carry.
    #[serde(default = "default_application_id")]
    application_id: String,
}

#[instrument]
fn default_application_id() -> String {
    DEFAULT_APPLICATION_ID.to_string()
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            application_id: default_application_id(),
        }
    }
}

impl SkillConfig {
    /// Creates a configuration expecting `application_id`.
    #[instrument(skip(application_id))]
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.application_id.trim().is_empty() {
            return Err(ConfigError::new("application_id must not be empty"));
        }

        info!(application_id = %config.application_id, "Config loaded successfully");
        Ok(config)
    }

    /// Reads the application id from [`APPLICATION_ID_ENV`], falling back to
    /// [`DEFAULT_APPLICATION_ID`].
    #[instrument]
    pub fn from_env() -> Self {
        match std::env::var(APPLICATION_ID_ENV) {
            Ok(id) if !id.trim().is_empty() => {
                debug!(application_id = %id, "Using application id from environment");
                Self::new(id)
            }
            _ => {
                debug!("Using built-in application id");
                Self::default()
            }
        }
    }

    /// Resolves configuration: an explicit file wins, then the environment,
    /// then the built-in default.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::from_env()),
        }
    }
}
