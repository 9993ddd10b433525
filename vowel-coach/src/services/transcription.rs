//! Speech-to-text client
//!
//! The service is treated as an opaque, possibly failing dependency behind the
//! [`Transcriber`] trait. Production uses [`WhisperClient`] (OpenAI
//! `audio/transcriptions`, model `whisper-1`, plain-text response format).

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const WHISPER_MODEL: &str = "whisper-1";
const USER_AGENT: &str = concat!("vowel-coach/", env!("CARGO_PKG_VERSION"));

/// Transcription errors
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Transcription timed out after {0} seconds")]
    Timeout(u64),

    #[error("Failed to read audio file: {0}")]
    Io(#[from] std::io::Error),
}

/// Speech-to-text provider
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the recording stored at `audio_path`
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}

/// OpenAI error envelope: `{"error": {"message": "..."}}`
#[derive(Debug, Deserialize)]
struct OpenAIErrorBody {
    error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorDetail {
    message: String,
}

/// Prefer the provider's own message over the raw response body
fn error_message(body: &str) -> String {
    serde_json::from_str::<OpenAIErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// OpenAI Whisper API client
pub struct WhisperClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl WhisperClient {
    pub fn new(api_key: String, endpoint: String) -> Result<Self, TranscriptionError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TranscriptionError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(&self, audio: Vec<u8>, filename: String) -> Result<Form, TranscriptionError> {
        let audio_part = Part::bytes(audio)
            .file_name(filename)
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::Network(format!("Failed to create audio part: {}", e)))?;

        Ok(Form::new()
            .part("file", audio_part)
            .text("model", WHISPER_MODEL)
            .text("response_format", "text"))
    }
}

#[async_trait]
impl Transcriber for WhisperClient {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let audio = tokio::fs::read(audio_path).await?;
        let filename = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string();

        tracing::debug!(bytes = audio.len(), file = %filename, "Sending audio to Whisper");

        let form = self.build_form(audio, filename)?;

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranscriptionError::Network(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey(error_message(&body)));
        }

        if !status.is_success() {
            return Err(TranscriptionError::Api(status.as_u16(), error_message(&body)));
        }

        tracing::debug!(chars = body.len(), "Whisper transcription received");
        Ok(body)
    }
}
