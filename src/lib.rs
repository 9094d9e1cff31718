//! An in-memory lexicon of words backed by a trie, answering word and prefix
//! queries in time proportional to the query length.

pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use error::{LexiconError, LexiconResult};
pub use wordlist::index::Index;
pub use wordlist::trie::{CountingPolicy, Trie, TrieConfig};
pub use wordlist::wordlist::{FileFormat, Wordlist};
