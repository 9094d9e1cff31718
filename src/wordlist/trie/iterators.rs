use crate::wordlist::trie::node::LexNode;

#[derive(Debug)]
pub struct TrieCursor<'a> {
    idx: usize,
    node: &'a LexNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = &'a LexNode;

    fn next(&mut self) -> Option<Self::Item> {
        let rv = self.node.children.get(self.idx);
        if rv.is_some() {
            self.idx += 1;
        }
        rv
    }
}

impl<'a> IntoIterator for &'a LexNode {
    type Item = &'a LexNode;
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}

/// Depth-first walk yielding every terminal path from a node down, in ascending
/// order.
///
/// Each stack entry remembers the length of the prefix its parent ended at, so
/// popping a sibling rewinds the shared buffer before appending its letter.
#[derive(Debug)]
pub struct Words<'a> {
    pending: Option<String>,
    stack: Vec<(&'a LexNode, usize)>,
    prefix: String,
}

impl<'a> Words<'a> {
    /// Walks the words at and below `start`, where `prefix` spells the path
    /// from the root to `start`.
    pub(crate) fn at(start: &'a LexNode, prefix: String) -> Words<'a> {
        let pending = if start.is_terminal { Some(prefix.clone()) } else { None };
        let mut words = Words { pending, stack: vec![], prefix };
        words.push_children(start);
        words
    }

    pub(crate) fn empty() -> Words<'a> {
        Words { pending: None, stack: vec![], prefix: String::new() }
    }

    fn push_children(&mut self, node: &'a LexNode) {
        let len = self.prefix.len();
        // reversed, so the smallest letter is popped first
        self.stack.extend(node.children.iter().rev().map(|child| (child, len)));
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        while let Some((node, len)) = self.stack.pop() {
            self.prefix.truncate(len);
            self.prefix.push(node.letter);
            self.push_children(node);
            if node.is_terminal {
                return Some(self.prefix.clone());
            }
        }
        None
    }
}
