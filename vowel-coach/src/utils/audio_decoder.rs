//! Duration measurement for uploaded recordings
//!
//! **Purpose:** Decode a stored recording at its native sample rate and report
//! how long it plays for.
//!
//! Uses symphonia for format-agnostic decoding (WAV primarily, but MP3, FLAC,
//! OGG, etc. also work). Every packet is decoded rather than trusting the
//! container header, so truncated or corrupt uploads surface as errors.

use std::path::Path;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;

/// Audio decode errors
#[derive(Debug, Error)]
pub enum DurationError {
    #[error("Failed to open audio file: {0}")]
    Open(#[from] std::io::Error),

    #[error("Unsupported or unrecognized audio format: {0}")]
    Probe(String),

    #[error("No audio track found in file")]
    NoAudioTrack,

    #[error("Sample rate unknown")]
    UnknownSampleRate,

    #[error("Failed to decode audio: {0}")]
    Decode(String),

    #[error("Decoder worker failed: {0}")]
    Worker(String),
}

/// Measured recording length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioDuration {
    /// Decoded frames (samples per channel)
    pub frames: u64,
    /// Native sample rate in Hz
    pub sample_rate: u32,
    pub channels: usize,
    pub duration_seconds: f64,
}

/// Decode an audio file and compute its duration in seconds
///
/// **Algorithm:**
/// 1. Probe the container (file extension used as a hint)
/// 2. Pick the first decodable audio track
/// 3. Decode every packet, counting frames
/// 4. duration = frames / native sample rate
///
/// Blocking; call from `spawn_blocking` inside async code.
pub fn measure_duration(file_path: &Path) -> Result<AudioDuration, DurationError> {
    tracing::debug!(path = %file_path.display(), "Measuring audio duration");

    let file = std::fs::File::open(file_path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = file_path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| DurationError::Probe(e.to_string()))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DurationError::NoAudioTrack)?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DurationError::UnknownSampleRate)?;
    let channels = track
        .codec_params
        .channels
        .map(|c| c.count())
        .unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| DurationError::Decode(e.to_string()))?;

    let mut frames: u64 = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                // End of stream
                break;
            }
            Err(e) => return Err(DurationError::Decode(e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder
            .decode(&packet)
            .map_err(|e| DurationError::Decode(e.to_string()))?;
        frames += decoded.frames() as u64;
    }

    let duration_seconds = frames as f64 / sample_rate as f64;

    tracing::debug!(
        path = %file_path.display(),
        frames,
        sample_rate,
        channels,
        duration_seconds = format!("{:.3}", duration_seconds),
        "Audio duration measured"
    );

    Ok(AudioDuration {
        frames,
        sample_rate,
        channels,
        duration_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_tone(dir: &Path, name: &str, seconds: f64, sample_rate: u32, channels: u16) -> PathBuf {
        let path = dir.join(name);
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        let frames = (seconds * sample_rate as f64).round() as usize;
        for i in 0..frames {
            let t = i as f32 / sample_rate as f32;
            let sample = (0.3 * (2.0 * std::f32::consts::PI * 220.0 * t).sin() * i16::MAX as f32) as i16;
            for _ in 0..channels {
                writer.write_sample(sample).unwrap();
            }
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn test_short_mono_clip() {
        let dir = TempDir::new().unwrap();
        let path = write_tone(dir.path(), "short.wav", 0.3, 16_000, 1);

        let duration = measure_duration(&path).unwrap();

        assert_eq!(duration.frames, 4_800);
        assert_eq!(duration.sample_rate, 16_000);
        assert_eq!(duration.channels, 1);
        assert!((duration.duration_seconds - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_stereo_clip_counts_frames_not_samples() {
        let dir = TempDir::new().unwrap();
        let path = write_tone(dir.path(), "stereo.wav", 0.8, 44_100, 2);

        let duration = measure_duration(&path).unwrap();

        assert_eq!(duration.channels, 2);
        assert_eq!(duration.frames, 35_280);
        assert!((duration.duration_seconds - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_file_not_found() {
        let result = measure_duration(Path::new("/nonexistent/file.wav"));
        assert!(matches!(result, Err(DurationError::Open(_))));
    }

    #[test]
    fn test_garbage_bytes_fail_to_probe() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.wav");
        std::fs::write(&path, b"this is definitely not audio data").unwrap();

        let result = measure_duration(&path);
        assert!(result.is_err());
        assert!(!matches!(result, Err(DurationError::Open(_))));
    }
}
