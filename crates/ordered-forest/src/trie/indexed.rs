use std::collections::{BTreeMap, BTreeSet};

/// Node of an [`IndexedTrie`].
#[derive(Clone, Debug)]
pub struct IndexedTrieNode<S> {
    pub children: BTreeMap<S, u32>,
    pub terminal: bool,
    /// Indexes of every inserted sequence whose path runs through this node.
    pub indexes: BTreeSet<usize>,
}

impl<S> IndexedTrieNode<S> {
    fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            terminal: false,
            indexes: BTreeSet::new(),
        }
    }
}

/// Trie whose nodes remember which inserted sequences passed through them.
///
/// Built from all suffixes of a corpus ([`from_suffixes`](Self::from_suffixes)),
/// [`occurrences_of`](Self::occurrences_of) returns every start position of a
/// pattern in a single walk.
#[derive(Clone, Debug)]
pub struct IndexedTrie<S> {
    nodes: Vec<IndexedTrieNode<S>>,
}

const ROOT: u32 = 0;

impl<S: Ord + Clone> IndexedTrie<S> {
    pub fn new() -> Self {
        Self {
            nodes: vec![IndexedTrieNode::new()],
        }
    }

    /// Indexes every suffix `corpus[i..]` under `i`.
    pub fn from_suffixes(corpus: &[S]) -> Self {
        let mut trie = Self::new();
        for i in 0..corpus.len() {
            trie.insert_at(corpus[i..].iter().cloned(), i);
        }
        trie
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `seq`, recording `index` on every node of its path below the
    /// root.
    pub fn insert_at<I: IntoIterator<Item = S>>(&mut self, seq: I, index: usize) {
        let mut curr = ROOT;
        for symbol in seq {
            curr = match self.nodes[curr as usize].children.get(&symbol) {
                Some(&child) => child,
                None => {
                    self.nodes.push(IndexedTrieNode::new());
                    let child = (self.nodes.len() - 1) as u32;
                    self.nodes[curr as usize].children.insert(symbol, child);
                    child
                }
            };
            self.nodes[curr as usize].indexes.insert(index);
        }
        self.nodes[curr as usize].terminal = true;
    }

    fn walk<I: IntoIterator<Item = S>>(&self, seq: I) -> Option<u32> {
        let mut curr = ROOT;
        for symbol in seq {
            curr = *self.nodes[curr as usize].children.get(&symbol)?;
        }
        Some(curr)
    }

    pub fn contains<I: IntoIterator<Item = S>>(&self, seq: I, exact: bool) -> bool {
        self.walk(seq)
            .is_some_and(|n| !exact || self.nodes[n as usize].terminal)
    }

    /// Indexes of the inserted sequences that start with `prefix`.
    ///
    /// Empty when the walk is incomplete. The empty prefix is recorded on no
    /// node and yields the empty set.
    pub fn occurrences_of<I: IntoIterator<Item = S>>(&self, prefix: I) -> BTreeSet<usize> {
        self.walk(prefix)
            .map(|n| self.nodes[n as usize].indexes.clone())
            .unwrap_or_default()
    }
}

impl IndexedTrie<char> {
    /// Suffix trie over the chars of `text`. Indexes are char positions.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self::from_suffixes(&chars)
    }

    pub fn occurrences_of_str(&self, pattern: &str) -> BTreeSet<usize> {
        self.occurrences_of(pattern.chars())
    }
}

impl<S: Ord + Clone> Default for IndexedTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}
