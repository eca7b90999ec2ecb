use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tipwell_gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// The only place the credential is read from.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipwellConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Override for the store file. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Default for TipwellConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            model: default_model(),
            base_url: default_base_url(),
            retry_delay_ms: default_retry_delay_ms(),
            store_path: None,
        }
    }
}

impl TipwellConfig {
    pub fn gemini_config(&self, api_key: Option<String>) -> GeminiConfig {
        GeminiConfig {
            api_key,
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    /// Where the key-value store lives: explicit override, config, then the
    /// platform data directory.
    pub fn resolve_store_path(&self, cli_override: Option<&Path>) -> eyre::Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
        Ok(base.join("tipwell").join("store.json"))
    }
}

/// The credential from the environment, if set and non-blank.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|k| !k.trim().is_empty())
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("tipwell"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from the platform config directory. A missing file
/// yields the defaults.
pub fn load_config() -> eyre::Result<TipwellConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<TipwellConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TipwellConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: TipwellConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update tipwell."
        ));
    }

    // Hand-written files carry no version; every field has a default.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    Ok(json)
}

pub fn save_config(config: &TipwellConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &TipwellConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Show enough of a key to recognise it without revealing it.
pub fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
