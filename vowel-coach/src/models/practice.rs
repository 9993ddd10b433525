//! Practice word listing

use serde::{Deserialize, Serialize};
use vowel_common::ExpectationTable;

/// Front-end page that records a word
const RECORD_PATH: &str = "/record?word=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeEntry {
    pub word: String,
    pub record_url: String,
}

impl PracticeEntry {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            record_url: format!("{}{}", RECORD_PATH, word),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeList {
    pub practice_words: Vec<PracticeEntry>,
}

impl PracticeList {
    /// One entry per table word, in table order
    pub fn from_table(table: &ExpectationTable) -> Self {
        Self {
            practice_words: table.words().map(PracticeEntry::new).collect(),
        }
    }
}
