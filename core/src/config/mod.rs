//! Configuration management
//!
//! All configuration types are exported from this module.

pub mod store;
pub mod types;

pub use store::Config;
pub use types::{AgentSection, ConfigError, QueryServiceConfig, ReplyTexts, DEFAULT_AGENT_NAME};

use std::path::PathBuf;

/// File name searched for in the working directory and the config directory
pub const CONFIG_FILE_NAME: &str = "vizagent.toml";

/// Find the configuration file in standard locations
pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(dir) = get_config_dir() {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Get the configuration directory path
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(dir) = dirs::config_dir() {
        return Some(dir.join("vizagent"));
    }

    dirs::home_dir().map(|home| home.join(".config").join("vizagent"))
}
