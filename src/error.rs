//! Error types for the lexicon.

use std::path::PathBuf;

/// Errors raised by the lexicon and its word-list loader.
///
/// Lookups never fail: a missing word or prefix is reported as `false`.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The empty string cannot be stored as a word.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// The word contains a character outside the alphabet.
    #[error("Word '{word}' contains invalid character {character:?}")]
    InvalidCharacter {
        word: String,
        character: char,
    },

    /// `remove` was asked for a word that is not stored.
    #[error("Word not found: {0}")]
    WordNotFound(String),

    #[error("Failed to read word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LexiconResult<T> = Result<T, LexiconError>;
