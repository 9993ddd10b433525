//! # Vowel Coach Common Library
//!
//! Shared code for the Vowel Coach service and its tooling:
//! - Vowel length classification rule
//! - Expectation table (word → expected vowel length)
//! - TOML configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod expectations;
pub mod vowel;

pub use error::{Error, Result};
pub use expectations::ExpectationTable;
pub use vowel::{ExpectedSound, VowelLength, LONG_VOWEL_THRESHOLD_SECONDS};
