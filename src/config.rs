use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default = "default_publicdir")]
    pub publicdir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: ListenConfig::default(),
            publicdir: default_publicdir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

fn default_port() -> String {
    std::env::var("PORT").unwrap_or_else(|_| "3030".to_string())
}

fn default_publicdir() -> String {
    "./public".to_string()
}

impl Config {
    /// Loads the YAML config file. A missing file is not an error; the
    /// defaults (including the PORT environment variable) apply.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    pub fn has_tls(&self) -> bool {
        self.listen.tlscert.is_some() && self.listen.tlskey.is_some()
    }

    /// Scheme used when rewriting cover image paths to absolute URLs.
    pub fn scheme(&self) -> &'static str {
        if self.has_tls() {
            "https"
        } else {
            "http"
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
