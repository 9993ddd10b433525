//! Transcriber double that never touches the network

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use vowel_coach::services::{Transcriber, TranscriptionError};

/// Call observed by the stub
#[derive(Debug, Clone)]
pub struct SeenCall {
    pub path: PathBuf,
    /// Whether the stored upload existed while being transcribed
    pub existed: bool,
    pub bytes: usize,
}

pub struct StubTranscriber {
    outcome: Result<String, String>,
    calls: Mutex<Vec<SeenCall>>,
}

impl StubTranscriber {
    pub fn returning(transcript: &str) -> Self {
        Self {
            outcome: Ok(transcript.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SeenCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let bytes = std::fs::metadata(audio_path).map(|m| m.len() as usize).unwrap_or(0);
        self.calls.lock().unwrap().push(SeenCall {
            path: audio_path.to_path_buf(),
            existed: audio_path.exists(),
            bytes,
        });

        match &self.outcome {
            Ok(transcript) => Ok(transcript.clone()),
            Err(message) => Err(TranscriptionError::Network(message.clone())),
        }
    }
}
