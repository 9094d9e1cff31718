use std::fmt::{Debug, Formatter};

use derive_new::new;

/// One letter of the trie. Children are kept sorted by letter, at most one per
/// letter.
#[derive(new, Default)]
pub struct LexNode {
    pub(crate) letter: char,
    #[new(default)]
    pub(crate) is_terminal: bool,
    #[new(default)]
    pub(crate) children: Vec<LexNode>,
}

impl LexNode {
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn set_is_terminal(&mut self, b: bool) {
        self.is_terminal = b;
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    fn position(&self, c: char) -> Result<usize, usize> {
        self.children.binary_search_by(|child| child.letter.cmp(&c))
    }

    /// Adds a non-terminal child for `c`. Returns `None` if one already exists.
    pub fn insert_child(&mut self, c: char) -> Option<&mut LexNode> {
        match self.position(c) {
            Ok(_) => None,
            Err(idx) => {
                self.children.insert(idx, LexNode::new(c));
                Some(&mut self.children[idx])
            }
        }
    }

    pub fn get_child(&self, c: char) -> Option<&LexNode> {
        self.position(c).ok().map(|idx| &self.children[idx])
    }

    pub fn get_child_mut(&mut self, c: char) -> Option<&mut LexNode> {
        match self.position(c) {
            Ok(idx) => Some(&mut self.children[idx]),
            Err(_) => None,
        }
    }

    /// Follows the child for `c`, creating it first if needed. The flag is true
    /// when a node was allocated.
    pub(crate) fn get_or_create_child(&mut self, c: char) -> (&mut LexNode, bool) {
        let created = self.insert_child(c).is_some();
        // the child exists now, so the search always hits
        let idx = self.position(c).unwrap_or_else(|idx| idx);
        (&mut self.children[idx], created)
    }

    /// Detaches the child for `c` along with its whole subtree.
    pub fn remove_child(&mut self, c: char) -> Option<LexNode> {
        self.position(c).ok().map(|idx| self.children.remove(idx))
    }
}

// Tears the subtree down with an explicit stack. The derived drop recurses once
// per letter and overflows on very long words.
impl Drop for LexNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl Debug for LexNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
