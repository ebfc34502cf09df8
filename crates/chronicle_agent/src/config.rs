//! Agent configuration.
//!
//! Tunables come from a TOML file; credentials come from the environment
//! (`.env` is honored via dotenvy). Missing credentials are fatal at startup
//! unless the mock publisher is selected.

use chronicle_error::{ChronicleResult, ConfigError};
use chronicle_models::GenerationParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the posting API bearer token.
pub const ACCESS_TOKEN_VAR: &str = "CHRONICLE_ACCESS_TOKEN";
/// Environment variable holding the posting account identifier.
pub const AUTHOR_ID_VAR: &str = "CHRONICLE_AUTHOR_ID";

/// Top-level agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model backend settings
    pub model: ModelConfig,
    /// Generation tunables
    pub generation: GenerationParams,
    /// Posting endpoint settings
    pub publisher: PublisherConfig,
    /// Data file locations
    pub storage: StorageConfig,
    /// Daily posting time, `HH:MM` local
    pub posting_time: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            generation: GenerationParams::default(),
            publisher: PublisherConfig::default(),
            storage: StorageConfig::default(),
            posting_time: "10:00".to_string(),
        }
    }
}

impl AgentConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ChronicleResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")).into())
    }

    /// Load from `path` when it exists, defaults otherwise.
    pub fn load(path: impl AsRef<Path>) -> ChronicleResult<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Model backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model name known to the Ollama server
    pub name: String,
    /// Ollama server URL
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "llama3.2".to_string(),
            base_url: "http://localhost:11434".to_string(),
        }
    }
}

/// Posting endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Posting API base URL
    pub base_url: String,
    /// Use the in-memory mock publisher instead of the network
    pub mock: bool,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.linkedin.com/v2".to_string(),
            mock: false,
        }
    }
}

/// Data file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Curriculum JSON file
    pub curriculum_path: PathBuf,
    /// History JSON file
    pub history_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            curriculum_path: PathBuf::from("data/curriculum.json"),
            history_path: PathBuf::from("data/history.json"),
        }
    }
}

/// Posting credentials, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Bearer token for the posting API
    pub access_token: String,
    /// Account identifier posts are attributed to
    pub author_id: String,
}

impl Credentials {
    /// Read credentials from the environment.
    ///
    /// Loads `.env` first so local setups work without exporting variables.
    /// Missing variables are a fatal configuration error; callers choosing
    /// the mock publisher skip this entirely.
    pub fn from_env() -> ChronicleResult<Self> {
        // A missing .env file is fine; real environments export directly.
        let _ = dotenvy::dotenv();

        let access_token = std::env::var(ACCESS_TOKEN_VAR)
            .map_err(|_| ConfigError::new(format!("{ACCESS_TOKEN_VAR} not set")))?;
        let author_id = std::env::var(AUTHOR_ID_VAR)
            .map_err(|_| ConfigError::new(format!("{AUTHOR_ID_VAR} not set")))?;

        Ok(Self {
            access_token,
            author_id,
        })
    }
}
