pub mod trie;
pub mod config;
pub mod node;
pub mod iterators;


pub use config::{CountingPolicy, TrieConfig};
pub use trie::Trie;
