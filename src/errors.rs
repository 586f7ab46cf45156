//! Error types for the vocabulary pocket

use thiserror::Error;

/// Rejected vocabulary form submission. The store is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("Word is required")]
    MissingWord,

    #[error("Meaning is required")]
    MissingMeaning,

    #[error("Word and meaning are required")]
    MissingWordAndMeaning,
}

/// Illegal quiz transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("No words yet. Add some vocabulary before starting the quiz")]
    NoQuestion,

    #[error("Answer is already revealed. Press 'n' for the next question")]
    AlreadyRevealed,

    #[error("Reveal the answer before moving to the next question")]
    NotRevealed,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable {name} = '{value}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Log directory does not exist: {0}")]
    MissingLogDir(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown writing system '{0}' (expected hiragana or katakana)")]
pub struct ParseWritingSystemError(pub String);
