//! Vowel length analysis of one recorded word
//!
//! Single linear pass per request:
//! store upload → transcribe → measure duration → classify → compare with
//! the expectation table. The stored upload is released on every exit path.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use vowel_common::{ExpectationTable, VowelLength};

use crate::models::AnalysisResult;
use crate::services::transcription::{Transcriber, TranscriptionError};
use crate::utils::{measure_duration, DurationError, TemporaryAudioFile};

/// Analysis errors
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to store uploaded audio: {0}")]
    Storage(#[source] std::io::Error),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Audio decode failed: {0}")]
    AudioDecode(#[from] DurationError),
}

/// Runs the analysis pipeline against shared, read-only dependencies
pub struct VowelAnalyzer {
    transcriber: Arc<dyn Transcriber>,
    expectations: Arc<ExpectationTable>,
    temp_dir: PathBuf,
    transcription_timeout: Duration,
}

impl VowelAnalyzer {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        expectations: ExpectationTable,
        temp_dir: PathBuf,
        transcription_timeout: Duration,
    ) -> Self {
        Self {
            transcriber,
            expectations: Arc::new(expectations),
            temp_dir,
            transcription_timeout,
        }
    }

    pub fn expectations(&self) -> &ExpectationTable {
        &self.expectations
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Analyze one recording of `word`
    ///
    /// Transcription failures are not retried. `word` is not validated; an
    /// unrecognized (or empty) word yields `expected_sound = unknown`.
    pub async fn analyze(&self, audio: &[u8], word: &str) -> Result<AnalysisResult, AnalysisError> {
        let recording =
            TemporaryAudioFile::create_in(&self.temp_dir, audio).map_err(AnalysisError::Storage)?;

        let transcript = self.transcribe(recording.path()).await?;

        let path = recording.path().to_path_buf();
        let duration = tokio::task::spawn_blocking(move || measure_duration(&path))
            .await
            .map_err(|e| DurationError::Worker(e.to_string()))??;

        let detected = VowelLength::from_duration(duration.duration_seconds);
        let expected = self.expectations.expected_for(word);
        if !expected.is_known() {
            debug!(word, "Word not in expectation table");
        }

        let result = AnalysisResult::new(word, &transcript, expected, detected);

        if let Err(e) = recording.release() {
            warn!(error = %e, "Failed to delete temporary audio file");
        }

        info!(
            word,
            duration_seconds = format!("{:.3}", duration.duration_seconds),
            detected = %detected,
            expected = %expected,
            matched = result.is_match,
            "Analyzed recording"
        );

        Ok(result)
    }

    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        match tokio::time::timeout(self.transcription_timeout, self.transcriber.transcribe(audio_path)).await {
            Ok(result) => result,
            Err(_) => Err(TranscriptionError::Timeout(self.transcription_timeout.as_secs())),
        }
    }
}
