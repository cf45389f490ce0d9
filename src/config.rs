use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::TagPattern;
use crate::error::{ReleaseError, Result};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "patchrelease.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".patchrelease.toml";

/// Represents the complete configuration for patch-release.
///
/// Holds the default version line for a project and how new tags are named.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub version: VersionLineConfig,

    #[serde(default)]
    pub tagging: TaggingConfig,
}

/// Default version line, used when the command line does not give one.
///
/// Values are kept as written and validated together with command-line
/// values when the request is built, so `major = -1` is an invalid request
/// rather than an unreadable file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct VersionLineConfig {
    #[serde(default)]
    pub major: Option<toml::Value>,

    #[serde(default)]
    pub minor: Option<toml::Value>,
}

impl VersionLineConfig {
    /// The configured major component as request text
    pub fn major_text(&self) -> Option<String> {
        self.major.as_ref().map(value_text)
    }

    /// The configured minor component as request text
    pub fn minor_text(&self) -> Option<String> {
        self.minor.as_ref().map(value_text)
    }
}

fn value_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        other => other.to_string(),
    }
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Naming of tags created for a resolved version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaggingConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        TaggingConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl TaggingConfig {
    /// The configured pattern as a domain value
    pub fn tag_pattern(&self) -> TagPattern {
        TagPattern::new(self.pattern.clone())
    }
}

/// Parses configuration from TOML text and validates the tag pattern.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)
        .map_err(|e| ReleaseError::config(format!("Invalid configuration: {}", e)))?;
    config.tagging.tag_pattern().validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `patchrelease.toml` in current directory
/// 3. `.patchrelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Path::new(LOCAL_CONFIG_FILE).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            tracing::debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let contents = fs::read_to_string(&path)?;
    parse_config(&contents)
}
