use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use serde::Serialize;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::error::{LexiconError, LexiconResult};
use crate::wordlist::index::Index;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::{Trie, TrieConfig};

/// A trie filled from a word-list file, one entry per line.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a word-list file. By default every non-blank line is a word.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Splits lines into columns, e.g. `word<TAB>frequency`.
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    /// Column holding the word when `delimiter` is set.
    #[builder(default)]
    word_column: usize,
    /// Lines starting with this character are skipped.
    #[builder(default, setter(strip_option))]
    comment: Option<char>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let line = line.trim();
        if let Some(c) = self.comment {
            if line.starts_with(c) {
                return None;
            }
        }
        let word = match self.delimiter {
            None => Some(line),
            Some(d) => line.split(d).nth(self.word_column).map(str::trim),
        };
        word.filter(|w| !w.is_empty())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub words: usize,
    pub added: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    pub fn with_config(config: TrieConfig) -> Wordlist {
        Wordlist { trie: Trie::with_config(config) }
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        format: &FileFormat,
        config: TrieConfig,
    ) -> LexiconResult<Wordlist> {
        let mut wl = Wordlist::with_config(config);
        wl.load_file(path, format)?;
        Ok(wl)
    }

    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        format: &FileFormat,
    ) -> LexiconResult<LoadStats> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(BufReader::new(file), format).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Adds every word `reader` yields. Lines that are not valid UTF-8 or hold
    /// an invalid word are counted as rejected; other read errors abort.
    pub fn load<R: BufRead>(
        &mut self,
        reader: R,
        format: &FileFormat,
    ) -> std::io::Result<LoadStats> {
        let start = Instant::now();
        let mut stats = LoadStats::default();

        for (lineno, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("Line #{} - {}", lineno + 1, e);
                    stats.rejected += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            let word = match format.parse_line(&line) {
                Some(word) => word,
                None => continue,
            };
            stats.words += 1;
            match self.trie.add(word) {
                Ok(true) => stats.added += 1,
                Ok(false) => stats.duplicates += 1,
                Err(e) => {
                    debug!("Line #{} - {}", lineno + 1, e);
                    stats.rejected += 1;
                }
            }
        }

        info!(
            words = stats.words,
            added = stats.added,
            duplicates = stats.duplicates,
            rejected = stats.rejected,
            nodes = self.trie.node_count(),
            "Read word list in {:.3}s",
            start.elapsed().as_secs_f64()
        );
        Ok(stats)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn contains_prefix(&self, prefix: &str) -> bool;
            pub fn remove(&mut self, word: &str) -> LexiconResult<()>;
            pub fn words(&self) -> Words<'_>;
            pub fn words_with_prefix(&self, prefix: &str) -> Words<'_>;
            pub fn word_count(&self) -> usize;
            pub fn node_count(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }
}

impl Index for Wordlist {
    fn add(&mut self, word: &str) -> LexiconResult<bool> {
        self.trie.add(word)
    }

    fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use crate::error::LexiconError;
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::{CountingPolicy, TrieConfig};
    use crate::wordlist::wordlist::{FileFormat, LoadStats, Wordlist};

    fn write_words(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_one_word_per_line() {
        let file = write_words("Apple\nbanana\n\n  cherry  \nbanana\n");
        let wl = Wordlist::from_file(file.path(), &FileFormat::builder().build(),
                                     TrieConfig::default()).unwrap();
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["apple", "banana", "cherry"]);
        assert_eq!(wl.word_count(), 3);
        assert!(wl.contains("APPLE"));
        assert!(wl.contains_prefix("cher"));
    }

    #[test]
    fn reports_load_stats() {
        let mut wl = Wordlist::new();
        let stats = wl.load(Cursor::new("one\ntwo\none\nnot a word\n"),
                            &FileFormat::builder().build()).unwrap();
        assert_eq!(stats, LoadStats { words: 4, added: 2, duplicates: 1, rejected: 1 });
    }

    #[test]
    fn literal_policy_counts_duplicate_lines() {
        let config = TrieConfig::builder().counting(CountingPolicy::Literal).build();
        let mut wl = Wordlist::with_config(config);
        wl.load(Cursor::new("one\none\n"), &FileFormat::builder().build()).unwrap();
        assert_eq!(wl.word_count(), 2);
        assert_eq!(wl.words().count(), 1);
    }

    #[test]
    fn reads_delimited_columns() {
        let format = FileFormat::builder().delimiter('\t').word_column(1).comment('#').build();
        let mut wl = Wordlist::new();
        let stats = wl.load(Cursor::new("# rank\tword\n1\tthe\n2\tof\n3\n"), &format).unwrap();
        assert_eq!(stats.added, 2);
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["of", "the"]);
        assert!(!wl.contains("rank"));
    }

    #[test]
    fn skips_invalid_utf8_lines() {
        let mut wl = Wordlist::new();
        let bytes: &[u8] = b"good\n\xff\xfe\nfine\n";
        let stats = wl.load(Cursor::new(bytes), &FileFormat::builder().build()).unwrap();
        assert_eq!(stats.rejected, 1);
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["fine", "good"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let format = FileFormat::builder().build();
        let result = Wordlist::from_file(&path, &format, TrieConfig::default());
        match result {
            Err(LexiconError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn exposes_configured_trie() {
        let config = TrieConfig::builder().counting(CountingPolicy::Literal).build();
        let mut wl = Wordlist::with_config(config);
        wl.add("word").unwrap();
        assert_eq!(wl.trie().config(), &config);
        assert!(wl.trie().contains("WORD"));
    }

    #[test]
    fn remove_goes_through_to_trie() {
        let mut wl = Wordlist::new();
        wl.add_all(vec!["dog", "door"]).unwrap();
        wl.remove("dog").unwrap();
        assert!(!wl.contains("dog"));
        assert!(wl.contains_prefix("dog"));
        assert_eq!(wl.words_with_prefix("do").collect::<Vec<_>>(), vec!["door"]);
        assert_eq!(wl.node_count(), 5);
        assert!(!wl.is_empty());
    }
}
