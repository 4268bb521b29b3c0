//! Layered configuration: a JSON file resolved from well-known locations,
//! with environment variables taking precedence for the API key.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Per-project configuration file name, looked up in the working directory.
pub const LOCAL_FILE: &str = "confab.json";

/// Environment variables that may carry the API key, highest priority first.
pub const KEY_VARS: [&str; 2] = ["CONFAB_API_KEY", "OPENAI_API_KEY"];

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Everything the chatbot can be configured with. Unknown fields are
/// rejected so a typoed key fails loudly instead of being ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            system_prompt: None,
            store_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from the first file that exists: the explicit path,
    /// `./confab.json`, then the user config directory. A missing file
    /// yields defaults; a missing *explicit* file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match Self::resolve_file(explicit)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        if let Some(key) = env_api_key() {
            settings.api_key = Some(key);
        }
        Ok(settings)
    }

    fn resolve_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Configuration file {} does not exist", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }
        let local = PathBuf::from(LOCAL_FILE);
        if local.exists() {
            return Ok(Some(local));
        }
        if let Some(config_dir) = dirs::config_dir() {
            let shared = config_dir.join("confab").join("config.json");
            if shared.exists() {
                return Ok(Some(shared));
            }
        }
        Ok(None)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("Configuration file {} is not valid", path.display()))?;
        Ok(settings)
    }

    /// The configured API key, or an actionable error naming both ways
    /// to set one.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => bail!(
                "No API key configured: set \"api_key\" in {} or export {}",
                LOCAL_FILE,
                KEY_VARS[0]
            ),
        }
    }

    /// Where transcripts live: the flag beats the file beats `./conversations`.
    pub fn resolve_store_dir(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(dir) = flag {
            return dir.to_path_buf();
        }
        self.store_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("conversations"))
    }
}

fn env_api_key() -> Option<String> {
    KEY_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}
