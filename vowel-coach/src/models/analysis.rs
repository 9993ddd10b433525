//! Result of analyzing one recorded word

use serde::{Deserialize, Serialize};
use vowel_common::{ExpectedSound, VowelLength};

/// Analysis of one uploaded recording, created fresh per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Word as submitted (original casing)
    pub word: String,
    /// Transcription service output, whitespace-trimmed
    pub transcript: String,
    pub expected_sound: ExpectedSound,
    pub detected_sound: VowelLength,
    /// True only when the word is known and the lengths agree
    #[serde(rename = "match")]
    pub is_match: bool,
}

impl AnalysisResult {
    pub fn new(
        word: impl Into<String>,
        transcript: &str,
        expected_sound: ExpectedSound,
        detected_sound: VowelLength,
    ) -> Self {
        Self {
            word: word.into(),
            transcript: transcript.trim().to_string(),
            expected_sound,
            detected_sound,
            is_match: expected_sound.matches(detected_sound),
        }
    }
}
