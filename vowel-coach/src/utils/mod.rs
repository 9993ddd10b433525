//! Utility modules for vowel-coach

pub mod audio_decoder;
pub mod temp_audio;

pub use audio_decoder::{measure_duration, AudioDuration, DurationError};
pub use temp_audio::TemporaryAudioFile;
