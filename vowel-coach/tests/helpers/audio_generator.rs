//! In-memory WAV fixtures of a given length

/// 16-bit mono WAV containing a 440Hz tone of `seconds` length
pub fn tone_wav(seconds: f64, sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        let total_samples = (seconds * sample_rate as f64).round() as usize;
        for i in 0..total_samples {
            let t = i as f32 / sample_rate as f32;
            let amplitude = 0.3;
            let sample = (amplitude * (2.0 * std::f32::consts::PI * 440.0 * t).sin() * i16::MAX as f32) as i16;
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// Common case: 16kHz speech-rate recording
pub fn recording(seconds: f64) -> Vec<u8> {
    tone_wav(seconds, 16_000)
}
