//! Services for vowel-coach

pub mod analyzer;
pub mod transcription;

pub use analyzer::{AnalysisError, VowelAnalyzer};
pub use transcription::{Transcriber, TranscriptionError, WhisperClient};
