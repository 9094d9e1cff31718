use crate::error::LexiconResult;

pub trait Index {
    /// Stores `word`. Returns true when the word was not stored before.
    fn add(&mut self, word: &str) -> LexiconResult<bool>;
    fn contains(&self, word: &str) -> bool;

    /// Adds every item, stopping at the first rejected word. Returns how many
    /// of them were new.
    fn add_all<'a, I>(&mut self, items: I) -> LexiconResult<usize>
        where I: IntoIterator<Item = &'a str> {
        let mut added = 0;
        for item in items {
            if self.add(item)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
