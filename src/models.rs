use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseWritingSystemError;

/// A single vocabulary record. Entries have no identity beyond their position
/// in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub reading: String,
    pub meaning: String,
}

impl VocabularyEntry {
    pub fn new(word: &str, reading: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            reading: reading.to_string(),
            meaning: meaning.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub source: &'static str,
    pub reading: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WritingSystem {
    Hiragana,
    Katakana,
}

impl WritingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingSystem::Hiragana => "hiragana",
            WritingSystem::Katakana => "katakana",
        }
    }

    /// Tab label used by the chart screen
    pub fn title(&self) -> &'static str {
        match self {
            WritingSystem::Hiragana => "平仮名 (Hiragana)",
            WritingSystem::Katakana => "片仮名 (Katakana)",
        }
    }

    pub fn all() -> [WritingSystem; 2] {
        [WritingSystem::Hiragana, WritingSystem::Katakana]
    }
}

impl fmt::Display for WritingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritingSystem {
    type Err = ParseWritingSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiragana" => Ok(WritingSystem::Hiragana),
            "katakana" => Ok(WritingSystem::Katakana),
            other => Err(ParseWritingSystemError(other.to_string())),
        }
    }
}
