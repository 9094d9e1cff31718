use crate::error::{LexiconError, LexiconResult};

/// Folds a word into the single canonical (lowercase) case used by the trie.
pub fn normalize(s: &str) -> String {
    s.chars().flat_map(|c| c.to_lowercase()).collect()
}

pub fn is_letter(c: char) -> bool {
    !(c.is_whitespace() || c.is_control())
}

/// Rejects words the trie refuses to store: the empty word, and words with
/// whitespace or control characters in them.
pub fn validate(word: &str) -> LexiconResult<()> {
    if word.is_empty() {
        return Err(LexiconError::EmptyWord);
    }
    match word.chars().find(|&c| !is_letter(c)) {
        Some(character) => Err(LexiconError::InvalidCharacter {
            word: word.to_string(),
            character,
        }),
        None => Ok(()),
    }
}
