//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly by the loader; secret resolution
//! (API key, password) happens here so callers never read the
//! environment themselves.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion provider settings
    pub provider: FileProviderConfig,
    /// Password gate settings
    pub access: FileAccessConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// `[provider]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// API key written directly in the file. Prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Environment variable to read the key from
    pub api_key_env: String,
    /// Service base URL
    pub base_url: String,
    /// Model identifier sent with every completion request
    pub model: String,
    /// API version header value
    pub api_version: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-5".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: an explicit value wins, otherwise the
    /// environment variable named by `api_key_env`. Blank values count
    /// as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key
            && !key.trim().is_empty()
        {
            return Some(key.clone());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// `[access]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAccessConfig {
    /// Password written directly in the file. Prefer `password_env`.
    pub password: Option<String>,
    /// Environment variable to read the password from
    pub password_env: String,
}

impl Default for FileAccessConfig {
    fn default() -> Self {
        Self {
            password: None,
            password_env: "DECKSMITH_PASSWORD".to_string(),
        }
    }
}

impl FileAccessConfig {
    /// Resolve the gate password, if any is configured. `None` means
    /// the gate is disabled.
    pub fn resolve_password(&self) -> Option<String> {
        if let Some(password) = &self.password
            && !password.trim().is_empty()
        {
            return Some(password.clone());
        }
        std::env::var(&self.password_env)
            .ok()
            .filter(|password| !password.trim().is_empty())
    }
}

/// Output format choices, mirrored by the CLI `--output` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Deck list, strategy, and per-section detail
    #[default]
    Full,
    /// Deck list and completeness line only
    Summary,
    /// Machine-readable snapshot
    Json,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default output format when the CLI flag is absent
    pub format: FileOutputFormat,
    /// ANSI colors in terminal output
    pub color: bool,
    /// Append generation events to this JSONL file
    pub attempt_log: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: FileOutputFormat::default(),
            color: true,
            attempt_log: None,
        }
    }
}
