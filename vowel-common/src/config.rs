//! Configuration loading and TOML config file resolution
//!
//! Config file location priority:
//! 1. Explicit path (command-line argument or `VOWEL_COACH_CONFIG`)
//! 2. `<config_dir>/vowel-coach/config.toml`, then `/etc/vowel-coach/config.toml` (Linux)
//!
//! A missing config file is not an error: callers fall back to
//! [`CompiledDefaults`]. A config file that exists but cannot be read or
//! parsed is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::vowel::VowelLength;
use crate::{Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "VOWEL_COACH_CONFIG";

/// Directory name used under the platform config directory
const APP_DIR_NAME: &str = "vowel-coach";

/// Maximum upload accepted by the Whisper transcription endpoint
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub const DEFAULT_TRANSCRIPTION_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_TRANSCRIPTION_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Logging section of the TOML config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// CORS section of the TOML config
///
/// An empty list (or a list containing `"*"`) allows every origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// On-disk configuration file
///
/// Every field is optional so that older or partial files keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_addr: Option<SocketAddr>,

    /// OpenAI API key (the `OPENAI_API_KEY` environment variable takes precedence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription_timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_upload_bytes: Option<usize>,

    /// Directory for per-request temporary audio files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    /// Extra practice words (word → "long" | "short")
    #[serde(default)]
    pub expectations: BTreeMap<String, VowelLength>,
}

impl TomlConfig {
    /// Parse config file contents
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }
}

/// Compiled-in defaults used when neither CLI, environment nor TOML set a value
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub temp_dir: PathBuf,
    pub transcription_url: String,
    pub transcription_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            log_level: default_log_level(),
            temp_dir: std::env::temp_dir(),
            transcription_url: DEFAULT_TRANSCRIPTION_URL.to_string(),
            transcription_timeout_secs: DEFAULT_TRANSCRIPTION_TIMEOUT_SECS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Outcome of config file loading
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    /// Path the config was read from, `None` when defaults were used
    pub source: Option<PathBuf>,
}

/// Locate the config file
///
/// An explicit path is returned as-is (even if missing, so the caller can
/// report it). Otherwise `VOWEL_COACH_CONFIG`, then the platform locations.
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let user_config = dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc").join(APP_DIR_NAME).join("config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Read and parse a config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    TomlConfig::from_toml_str(&content)
}

/// Load the config file if there is one, otherwise defaults
///
/// Only an explicitly requested file is required to exist.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    match config_file_path(explicit) {
        Some(path) if path.exists() => {
            let config = load_toml_config(&path)?;
            Ok(LoadedConfig {
                config,
                source: Some(path),
            })
        }
        Some(path) if explicit.is_some() => Err(Error::Config(format!(
            "Config file not found: {}",
            path.display()
        ))),
        _ => Ok(LoadedConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.expectations.is_empty());
    }

    #[test]
    fn test_invalid_vowel_length_rejected() {
        let result = TomlConfig::from_toml_str("[expectations]\ncake = \"medium\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_compiled_defaults() {
        let defaults = CompiledDefaults::for_current_platform();
        assert_eq!(defaults.bind_addr.port(), 8000);
        assert_eq!(defaults.log_level, "info");
        assert_eq!(defaults.max_upload_bytes, 25 * 1024 * 1024);
        assert_eq!(defaults.transcription_timeout_secs, 30);
    }
}
