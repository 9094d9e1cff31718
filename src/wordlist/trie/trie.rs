use std::fmt::{Debug, Formatter};

use tracing::{debug, trace};

use crate::alphabet::{normalize, validate};
use crate::error::{LexiconError, LexiconResult};
use crate::wordlist::index::Index;
use crate::wordlist::trie::config::{CountingPolicy, TrieConfig};
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::LexNode;

/// A lexicon of lowercase words.
///
/// Every query folds its input to lowercase first, so `contains("CAT")` finds a
/// word added as `"Cat"`. Nodes are never freed: removing a word only clears
/// its terminal flag, and its letters stay reachable as a prefix.
pub struct Trie {
    root: LexNode,
    word_count: usize,
    node_count: usize,
    config: TrieConfig,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::with_config(TrieConfig::default())
    }

    pub fn with_config(config: TrieConfig) -> Trie {
        Trie {
            root: Default::default(),
            word_count: 0,
            node_count: 0,
            config,
        }
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Number of stored words, as tracked by the configured `CountingPolicy`.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes allocated below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }

    /// True if some stored or removed word starts with `prefix`. The empty
    /// prefix always matches.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        Self::find(&self.root, &normalize(prefix)).is_some()
    }

    /// Clears the terminal flag of `word`. Its nodes stay in place.
    ///
    /// A word whose letters are not all in the trie is `WordNotFound` and
    /// nothing changes. Under `CountingPolicy::Distinct` the same holds for a
    /// path that exists but is not a word.
    pub fn remove(&mut self, word: &str) -> LexiconResult<()> {
        let word = normalize(word);
        if word.is_empty() {
            return Err(LexiconError::EmptyWord);
        }
        let node = match Self::find_mut(&mut self.root, &word) {
            Some(node) => node,
            None => {
                debug!(word = %word, "remove of missing word");
                return Err(LexiconError::WordNotFound(word));
            }
        };
        match self.config.counting {
            CountingPolicy::Distinct => {
                if !node.is_terminal() {
                    debug!(word = %word, "remove of prefix that is not a word");
                    return Err(LexiconError::WordNotFound(word));
                }
                node.set_is_terminal(false);
                self.word_count -= 1;
            }
            CountingPolicy::Literal => {
                node.set_is_terminal(false);
                self.word_count = self.word_count.saturating_sub(1);
            }
        }
        trace!(word = %word, word_count = self.word_count, "removed");
        Ok(())
    }

    /// All stored words in ascending order.
    pub fn words(&self) -> Words<'_> {
        Words::at(&self.root, String::new())
    }

    /// Stored words starting with `prefix`, in ascending order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let prefix = normalize(prefix);
        match Self::find(&self.root, &prefix) {
            Some(node) => Words::at(node, prefix),
            None => Words::empty(),
        }
    }

    fn find<'n>(root: &'n LexNode, word: &str) -> Option<&'n LexNode> {
        word.chars().try_fold(root, |node, c| node.get_child(c))
    }

    fn find_mut<'n>(root: &'n mut LexNode, word: &str) -> Option<&'n mut LexNode> {
        word.chars().try_fold(root, |node, c| node.get_child_mut(c))
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> LexiconResult<bool> {
        let word = normalize(word);
        validate(&word)?;

        let mut current = &mut self.root;
        for c in word.chars() {
            let (child, created) = current.get_or_create_child(c);
            if created {
                self.node_count += 1;
            }
            current = child;
        }

        let is_new = !current.is_terminal();
        current.set_is_terminal(true);
        if is_new || self.config.counting == CountingPolicy::Literal {
            self.word_count += 1;
        }
        if !is_new {
            trace!(word = %word, "word already stored");
        }
        Ok(is_new)
    }

    fn contains(&self, word: &str) -> bool {
        Self::find(&self.root, &normalize(word))
            .map(|x| x.is_terminal())
            .unwrap_or(false)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count)
            .field("counting", &self.config.counting)
            .field("words", &self.words().collect::<Vec<_>>())
            .finish()
    }
}
