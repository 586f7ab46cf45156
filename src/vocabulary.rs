//! Session-scoped vocabulary list

use tracing::{debug, info};

use crate::errors::VocabularyError;
use crate::models::VocabularyEntry;

/// Seed words a fresh session starts with when starter words are enabled
const STARTER_WORDS: [(&str, &str, &str); 4] = [
    ("猫", "ねこ", "貓"),
    ("銅鑼焼き", "どらやき", "銅鑼燒"),
    ("竹蜻蜓", "たけこぷたー", "竹蜻蜓"),
    ("任意門", "どこでもどあ", "任意門"),
];

/// Ordered list of vocabulary entries. Duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_starter_words() -> Self {
        let entries = STARTER_WORDS
            .iter()
            .map(|(word, reading, meaning)| VocabularyEntry::new(word, reading, meaning))
            .collect();
        Self { entries }
    }

    /// Validate and push a new entry at the end of the list.
    ///
    /// `word` and `meaning` must be non-blank; `reading` may be empty. On
    /// failure nothing is stored.
    pub fn append(&mut self, entry: VocabularyEntry) -> Result<&VocabularyEntry, VocabularyError> {
        let missing_word = entry.word.trim().is_empty();
        let missing_meaning = entry.meaning.trim().is_empty();

        match (missing_word, missing_meaning) {
            (true, true) => return Err(VocabularyError::MissingWordAndMeaning),
            (true, false) => return Err(VocabularyError::MissingWord),
            (false, true) => return Err(VocabularyError::MissingMeaning),
            (false, false) => {}
        }

        info!("Adding vocabulary entry: {}", entry.word);
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace the whole list with the table contents. Rows are not
    /// re-validated, so partially filled rows are kept as they are.
    pub fn replace_all(&mut self, entries: Vec<VocabularyEntry>) {
        debug!(
            "Replacing vocabulary list ({} -> {} entries)",
            self.entries.len(),
            entries.len()
        );
        self.entries = entries;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn all(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&VocabularyEntry> {
        self.entries.get(index)
    }
}
