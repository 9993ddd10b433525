//! Vowel length classification
//!
//! The classification rule is a single fixed duration threshold: a recording
//! strictly longer than [`LONG_VOWEL_THRESHOLD_SECONDS`] is heard as a long
//! vowel, anything else as a short one. There is no per-word calibration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Recordings longer than this (in seconds) are classified as long vowels
pub const LONG_VOWEL_THRESHOLD_SECONDS: f64 = 0.5;

/// Vowel length category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelLength {
    Long,
    Short,
}

impl VowelLength {
    /// Classify a measured recording duration
    ///
    /// Exactly 0.5s is short. A NaN duration never compares greater than the
    /// threshold and therefore classifies as short too.
    pub fn from_duration(duration_seconds: f64) -> Self {
        if duration_seconds > LONG_VOWEL_THRESHOLD_SECONDS {
            VowelLength::Long
        } else {
            VowelLength::Short
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VowelLength::Long => "long",
            VowelLength::Short => "short",
        }
    }
}

impl fmt::Display for VowelLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VowelLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(VowelLength::Long),
            "short" => Ok(VowelLength::Short),
            other => Err(Error::InvalidInput(format!(
                "unknown vowel length '{}' (expected 'long' or 'short')",
                other
            ))),
        }
    }
}

/// Expected vowel length for a word, or `Unknown` when the word is not in
/// the expectation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedSound {
    Long,
    Short,
    Unknown,
}

impl ExpectedSound {
    /// Whether a detected length matches this expectation
    ///
    /// `Unknown` never matches, whatever was detected.
    pub fn matches(&self, detected: VowelLength) -> bool {
        match self {
            ExpectedSound::Unknown => false,
            ExpectedSound::Long => detected == VowelLength::Long,
            ExpectedSound::Short => detected == VowelLength::Short,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ExpectedSound::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedSound::Long => "long",
            ExpectedSound::Short => "short",
            ExpectedSound::Unknown => "unknown",
        }
    }
}

impl From<VowelLength> for ExpectedSound {
    fn from(length: VowelLength) -> Self {
        match length {
            VowelLength::Long => ExpectedSound::Long,
            VowelLength::Short => ExpectedSound::Short,
        }
    }
}

impl From<Option<VowelLength>> for ExpectedSound {
    fn from(length: Option<VowelLength>) -> Self {
        length.map(ExpectedSound::from).unwrap_or(ExpectedSound::Unknown)
    }
}

impl fmt::Display for ExpectedSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_above_threshold_are_long() {
        for duration in [0.500_001, 0.51, 0.8, 1.0, 3.5, 60.0] {
            assert_eq!(VowelLength::from_duration(duration), VowelLength::Long, "{}", duration);
        }
    }

    #[test]
    fn test_durations_at_or_below_threshold_are_short() {
        for duration in [0.0, 0.1, 0.3, 0.499_999, 0.5] {
            assert_eq!(VowelLength::from_duration(duration), VowelLength::Short, "{}", duration);
        }
    }

    #[test]
    fn test_threshold_boundary_is_short() {
        assert_eq!(
            VowelLength::from_duration(LONG_VOWEL_THRESHOLD_SECONDS),
            VowelLength::Short
        );
    }

    #[test]
    fn test_nan_duration_is_short() {
        assert_eq!(VowelLength::from_duration(f64::NAN), VowelLength::Short);
    }

    #[test]
    fn test_unknown_never_matches() {
        assert!(!ExpectedSound::Unknown.matches(VowelLength::Long));
        assert!(!ExpectedSound::Unknown.matches(VowelLength::Short));
    }

    #[test]
    fn test_match_iff_known_and_equal() {
        assert!(ExpectedSound::Long.matches(VowelLength::Long));
        assert!(ExpectedSound::Short.matches(VowelLength::Short));
        assert!(!ExpectedSound::Long.matches(VowelLength::Short));
        assert!(!ExpectedSound::Short.matches(VowelLength::Long));
    }

    #[test]
    fn test_parse_vowel_length() {
        assert_eq!("long".parse::<VowelLength>().unwrap(), VowelLength::Long);
        assert_eq!(" Short ".parse::<VowelLength>().unwrap(), VowelLength::Short);
        assert!("medium".parse::<VowelLength>().is_err());
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(VowelLength::Long.to_string(), "long");
        assert_eq!(ExpectedSound::Unknown.to_string(), "unknown");
        assert_eq!(ExpectedSound::from(None), ExpectedSound::Unknown);
        assert_eq!(ExpectedSound::from(Some(VowelLength::Short)), ExpectedSound::Short);
    }
}
