use serde::Serialize;
use typed_builder::TypedBuilder;

/// How `word_count` reacts to repeated adds and to removing non-words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountingPolicy {
    /// Counts distinct stored words. Re-adding a stored word leaves the count
    /// alone and removing a prefix that is not a word is `WordNotFound`.
    Distinct,
    /// Every `add` bumps the count, even for a word already stored, and
    /// `remove` decrements for any existing path (never below zero).
    Literal,
}

impl Default for CountingPolicy {
    fn default() -> Self {
        CountingPolicy::Distinct
    }
}

#[derive(TypedBuilder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieConfig {
    #[builder(default)]
    pub counting: CountingPolicy,
}

impl Default for TrieConfig {
    fn default() -> Self {
        TrieConfig::builder().build()
    }
}
