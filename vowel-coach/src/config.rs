//! Configuration resolution for vowel-coach
//!
//! Each setting resolves with priority: command line / environment (via clap)
//! → TOML config file → compiled default.

use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use vowel_common::config::{CompiledDefaults, TomlConfig};
use vowel_common::{Error, ExpectationTable, Result};

/// Environment variable holding the OpenAI API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Command-line arguments for vowel-coach
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "vowel-coach")]
#[command(about = "Long/short vowel practice backend")]
#[command(version)]
pub struct Args {
    /// Path to TOML config file
    #[arg(short, long, env = "VOWEL_COACH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on (e.g. 127.0.0.1:8000)
    #[arg(short, long, env = "VOWEL_COACH_BIND")]
    pub bind: Option<SocketAddr>,

    /// OpenAI API key used for Whisper transcription
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "VOWEL_COACH_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Cross-origin policy for the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, method and header; credentials allowed
    Permissive,
    /// Only the listed origins
    Origins(Vec<HeaderValue>),
}

impl CorsPolicy {
    /// Empty list or `"*"` means permissive
    pub fn from_origins(origins: &[String]) -> Result<Self> {
        if origins.is_empty() || origins.iter().any(|o| o.trim() == "*") {
            return Ok(CorsPolicy::Permissive);
        }

        let values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|e| Error::Config(format!("Invalid CORS origin '{}': {}", origin, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsPolicy::Origins(values))
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub openai_api_key: String,
    pub transcription_url: String,
    pub transcription_timeout: Duration,
    pub max_upload_bytes: usize,
    pub temp_dir: PathBuf,
    pub log_level: String,
    pub cors: CorsPolicy,
    pub expectations: ExpectationTable,
}

impl ServiceConfig {
    /// Merge CLI/env arguments, TOML file and compiled defaults
    ///
    /// Fails fast when no usable API key is configured.
    pub fn resolve(args: &Args, toml: &TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::for_current_platform();

        let openai_api_key = resolve_api_key(args.openai_api_key.as_deref(), toml)?;

        let timeout_secs = toml
            .transcription_timeout_secs
            .unwrap_or(defaults.transcription_timeout_secs);
        if timeout_secs == 0 {
            return Err(Error::Config(
                "transcription_timeout_secs must be greater than zero".to_string(),
            ));
        }

        let expectations = ExpectationTable::builtin().with_overrides(&toml.expectations);

        Ok(Self {
            bind_addr: args.bind.or(toml.bind_addr).unwrap_or(defaults.bind_addr),
            openai_api_key,
            transcription_url: toml
                .transcription_url
                .clone()
                .unwrap_or(defaults.transcription_url),
            transcription_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes: toml.max_upload_bytes.unwrap_or(defaults.max_upload_bytes),
            temp_dir: toml.temp_dir.clone().unwrap_or(defaults.temp_dir),
            log_level: args
                .log_level
                .clone()
                .unwrap_or_else(|| toml.logging.level.clone()),
            cors: CorsPolicy::from_origins(&toml.cors.allowed_origins)?,
            expectations,
        })
    }
}

/// Resolve the OpenAI API key
///
/// **Priority:** command line / `OPENAI_API_KEY` → TOML
pub fn resolve_api_key(cli_or_env: Option<&str>, toml: &TomlConfig) -> Result<String> {
    let toml_key = toml.openai_api_key.as_deref().filter(|k| is_valid_key(k));
    let arg_key = cli_or_env.filter(|k| is_valid_key(k));

    if arg_key.is_some() && toml_key.is_some() {
        warn!("OpenAI API key found in both environment/command line and TOML. Using environment/command line.");
    }

    if let Some(key) = arg_key {
        info!("OpenAI API key loaded from environment/command line");
        return Ok(key.trim().to_string());
    }

    if let Some(key) = toml_key {
        info!("OpenAI API key loaded from TOML config");
        return Ok(key.trim().to_string());
    }

    Err(Error::Config(format!(
        "OpenAI API key not configured. Please configure using one of:\n\
         1. Environment: {}=your-key-here\n\
         2. Command line: --openai-api-key your-key-here\n\
         3. TOML config: openai_api_key = \"your-key\"",
        API_KEY_ENV
    )))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
