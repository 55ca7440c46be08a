//! Arena trie over upper-cased words.

use std::fs;
use std::path::Path;

use lexgrid_core::PrefixIndex;
use smallvec::SmallVec;

use crate::error::DictError;

/// System word list read when no other path is given.
pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";

/// Index of the root node in the arena.
const ROOT: u32 = 0;

/// One trie node. Children are kept sorted by letter for binary search;
/// most nodes in an English word list have very few children, so four
/// fit inline.
#[derive(Clone, Debug, Default)]
struct Node {
    children: SmallVec<[(char, u32); 4]>,
    terminal: bool,
}

/// A set of words answering prefix and membership queries.
///
/// Words are normalized on insertion: surrounding whitespace is trimmed,
/// letters are upper-cased, and blank entries are skipped. Queries are
/// matched as given, so callers pass upper-case strings.
///
/// Every node except the root lies on the path to at least one word, so
/// a string is a prefix exactly when it can be walked from the root.
#[derive(Clone, Debug)]
pub struct Lexicon {
    nodes: Vec<Node>,
    words: usize,
}

impl Lexicon {
    /// An empty lexicon.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Build a lexicon from words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Load one word per line from `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected,
    /// since system word lists are not always clean. Returns
    /// `Err(DictError::Empty)` if no word survives normalization.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DictError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let lexicon = Self::from_words(text.lines());
        if lexicon.is_empty() {
            return Err(DictError::Empty {
                path: path.to_path_buf(),
            });
        }
        tracing::info!(
            path = %path.display(),
            words = lexicon.len(),
            nodes = lexicon.node_count(),
            "loaded word list"
        );
        Ok(lexicon)
    }

    /// Insert one word. Returns `true` if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        let mut node = ROOT;
        for ch in word.chars().flat_map(char::to_uppercase) {
            node = self.child_or_insert(node, ch);
        }
        let slot = &mut self.nodes[node as usize];
        if slot.terminal {
            return false;
        }
        slot.terminal = true;
        self.words += 1;
        true
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child(&self, node: u32, ch: char) -> Option<u32> {
        let children = &self.nodes[node as usize].children;
        children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| children[i].1)
    }

    fn child_or_insert(&mut self, node: u32, ch: char) -> u32 {
        let next = self.nodes.len() as u32;
        let children = &mut self.nodes[node as usize].children;
        match children.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(i) => children[i].1,
            Err(i) => {
                children.insert(i, (ch, next));
                self.nodes.push(Node::default());
                next
            }
        }
    }

    /// Follow `s` from the root; `None` if it falls off the trie.
    fn walk(&self, s: &str) -> Option<u32> {
        s.chars().try_fold(ROOT, |node, ch| self.child(node, ch))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex for Lexicon {
    fn is_prefix(&self, s: &str) -> bool {
        match self.walk(s) {
            Some(ROOT) => !self.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    fn is_word(&self, s: &str) -> bool {
        self.walk(s)
            .is_some_and(|node| self.nodes[node as usize].terminal)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
