//! Config file loading and environment overrides

use super::types::{AgentSection, ConfigError, QueryServiceConfig, ReplyTexts};
use super::{find_config_file, get_config_dir, CONFIG_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level configuration (`vizagent.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agent: AgentSection,
    pub query_service: QueryServiceConfig,
    pub replies: ReplyTexts,
}

impl Config {
    /// Load configuration from file
    ///
    /// Searches for `vizagent.toml` in the following order:
    /// 1. Current directory (`./vizagent.toml`)
    /// 2. User config directory (`~/.config/vizagent/vizagent.toml`)
    ///
    /// If neither file exists, returns `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration as pretty TOML, creating parent directories
    pub fn save(&self, path: Option<&Path>) -> Result<(), ConfigError> {
        let target_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::user_config_path().ok_or_else(|| {
                ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                ))
            })?,
        };

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&target_path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn user_config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query_service.url.trim().is_empty() {
            return Err(ConfigError::Invalid("query_service.url must not be empty".to_string()));
        }
        if self.query_service.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "query_service.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// - `VIZAGENT_AGENT_KIND` → `agent.kind`
    /// - `VIZAGENT_AGENT_NAME` → `agent.name`
    /// - `VIZAGENT_QUERY_URL` → `query_service.url`
    /// - `VIZAGENT_TIMEOUT_SECS` → `query_service.timeout_secs`
    ///
    /// Invalid values are logged as warnings and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(kind) = env::var("VIZAGENT_AGENT_KIND") {
            match kind.parse() {
                Ok(kind) => self.agent.kind = kind,
                Err(e) => warn!("Invalid VIZAGENT_AGENT_KIND value: {}", e),
            }
        }

        if let Ok(name) = env::var("VIZAGENT_AGENT_NAME") {
            if !name.is_empty() {
                self.agent.name = name;
            }
        }

        if let Ok(url) = env::var("VIZAGENT_QUERY_URL") {
            if !url.trim().is_empty() {
                self.query_service.url = url;
            }
        }

        if let Ok(secs) = env::var("VIZAGENT_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => self.query_service.timeout_secs = Some(secs),
                _ => warn!("Invalid VIZAGENT_TIMEOUT_SECS value: {}", secs),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::factory::AgentKind;
    use crate::query::DEFAULT_QUERY_URL;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.agent.kind, AgentKind::Basic);
        assert_eq!(config.agent.name, "Agent");
        assert!(config.agent.avatar.is_none());
        assert_eq!(config.query_service.url, DEFAULT_QUERY_URL);
        assert!(config.query_service.timeout_secs.is_none());
        assert_eq!(config.replies.api_failure, "API call failed.");
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[agent]
kind = "basic"
name = "Mao"
avatar = "mao.png"

[query_service]
url = "http://planner:5000/api/query"
timeout_secs = 20

[replies]
no_answer = "Nothing found."
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agent.name, "Mao");
        assert_eq!(config.agent.avatar.as_deref(), Some("mao.png"));
        assert_eq!(config.query_service.url, "http://planner:5000/api/query");
        assert_eq!(config.query_service.timeout_secs, Some(20));
        assert_eq!(config.replies.no_answer, "Nothing found.");
        // untouched keys keep their defaults
        assert_eq!(config.replies.api_failure, "API call failed.");
    }

    #[test]
    fn test_unknown_agent_kind_rejected() {
        let toml_str = r#"
[agent]
kind = "llm"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.agent.name = "Hiyori".to_string();
        config.query_service.timeout_secs = Some(5);
        config.save(Some(&path)).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_empty_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[query_service]\nurl = \"\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_environment_variable_overrides() {
        env::set_var("VIZAGENT_AGENT_NAME", "Shizuku");
        env::set_var("VIZAGENT_QUERY_URL", "http://10.0.0.2:5000/api/query");
        env::set_var("VIZAGENT_TIMEOUT_SECS", "not-a-number");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.agent.name, "Shizuku");
        assert_eq!(config.query_service.url, "http://10.0.0.2:5000/api/query");
        assert!(config.query_service.timeout_secs.is_none());

        env::remove_var("VIZAGENT_AGENT_NAME");
        env::remove_var("VIZAGENT_QUERY_URL");
        env::remove_var("VIZAGENT_TIMEOUT_SECS");
    }
}
