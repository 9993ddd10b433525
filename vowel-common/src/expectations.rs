//! Expectation table: the linguistically correct vowel length per practice word
//!
//! Built once at startup from the compiled-in word list plus any entries from
//! the `[expectations]` section of the TOML config, then shared read-only.

use std::collections::BTreeMap;

use crate::vowel::{ExpectedSound, VowelLength};

/// Words shipped with the service
const BUILTIN_EXPECTATIONS: &[(&str, VowelLength)] = &[
    ("cake", VowelLength::Long),
    ("cat", VowelLength::Short),
    ("bike", VowelLength::Long),
    ("bit", VowelLength::Short),
];

/// Immutable mapping from lowercase word to expected vowel length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationTable {
    entries: BTreeMap<String, VowelLength>,
}

impl ExpectationTable {
    /// Table containing only the compiled-in words
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_EXPECTATIONS
                .iter()
                .map(|(word, length)| (*word, *length)),
        )
    }

    /// Build a table from arbitrary entries; keys are lowercased
    ///
    /// Later entries win when two keys collide after lowercasing.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, VowelLength)>,
        K: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, length)| (normalize(word.as_ref()), length))
            .collect();
        Self { entries }
    }

    /// Extend (or override) this table with configured entries
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a VowelLength)>,
    {
        for (word, length) in overrides {
            self.entries.insert(normalize(word), *length);
        }
        self
    }

    /// Expected vowel length for `word`, case-insensitive
    ///
    /// The word is only lowercased, never trimmed: an empty or padded word is
    /// looked up as given and normally yields `Unknown`.
    pub fn expected_for(&self, word: &str) -> ExpectedSound {
        ExpectedSound::from(self.entries.get(&word.to_lowercase()).copied())
    }

    /// Words in the table (lowercase, sorted)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExpectationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(word: &str) -> String {
    word.to_lowercase()
}
