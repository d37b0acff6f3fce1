use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::print::{print_tree, PrintChild, Printable};

/// Node of a [`Trie`]: outgoing edges keyed by symbol.
#[derive(Clone, Debug)]
pub struct TrieNode<S> {
    pub children: BTreeMap<S, u32>,
    /// Set iff at least one inserted sequence ends here.
    pub terminal: bool,
}

impl<S> TrieNode<S> {
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            terminal: false,
        }
    }
}

impl<S> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix tree keyed by sequences of `S` (chars, bytes, integer codes...).
///
/// Nodes live in an arena; slot 0 is the root. Slots vacated by
/// [`remove`](Trie::remove) are recycled by later inserts.
#[derive(Clone, Debug)]
pub struct Trie<S> {
    nodes: Vec<TrieNode<S>>,
    free: Vec<u32>,
    len: usize,
}

const ROOT: u32 = 0;

impl<S: Ord + Clone> Trie<S> {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of distinct sequences stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn node(&self, idx: u32) -> &TrieNode<S> {
        &self.nodes[idx as usize]
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ROOT as usize] = TrieNode::new();
        self.free.clear();
        self.len = 0;
    }

    fn alloc(&mut self) -> u32 {
        match self.free.pop() {
            Some(idx) => idx,
            None => {
                self.nodes.push(TrieNode::new());
                (self.nodes.len() - 1) as u32
            }
        }
    }

    /// Inserts `seq`, creating edges for missing symbols.
    ///
    /// Returns `false` when the sequence was already present.
    pub fn insert<I: IntoIterator<Item = S>>(&mut self, seq: I) -> bool {
        let mut curr = ROOT;
        for symbol in seq {
            curr = match self.nodes[curr as usize].children.get(&symbol) {
                Some(&child) => child,
                None => {
                    let child = self.alloc();
                    self.nodes[curr as usize].children.insert(symbol, child);
                    child
                }
            };
        }
        let node = &mut self.nodes[curr as usize];
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Node reached by following `seq` from the root, if the path exists.
    pub fn walk<I: IntoIterator<Item = S>>(&self, seq: I) -> Option<u32> {
        let mut curr = ROOT;
        for symbol in seq {
            curr = *self.nodes[curr as usize].children.get(&symbol)?;
        }
        Some(curr)
    }

    /// With `exact`, true iff `seq` was inserted. Otherwise true iff `seq`
    /// is a prefix of some inserted sequence.
    pub fn contains<I: IntoIterator<Item = S>>(&self, seq: I, exact: bool) -> bool {
        match self.walk(seq) {
            Some(node) => !exact || self.nodes[node as usize].terminal,
            None => false,
        }
    }

    pub fn starts_with<I: IntoIterator<Item = S>>(&self, prefix: I) -> bool {
        self.contains(prefix, false)
    }

    /// Removes `seq` and prunes nodes that no longer lead to a terminal.
    pub fn remove<I: IntoIterator<Item = S>>(&mut self, seq: I) -> bool {
        let mut path: Vec<(u32, S)> = Vec::new();
        let mut curr = ROOT;
        for symbol in seq {
            let Some(&child) = self.nodes[curr as usize].children.get(&symbol) else {
                return false;
            };
            path.push((curr, symbol));
            curr = child;
        }
        if !self.nodes[curr as usize].terminal {
            return false;
        }
        self.nodes[curr as usize].terminal = false;
        self.len -= 1;

        while let Some((parent, symbol)) = path.pop() {
            let node = &self.nodes[curr as usize];
            if node.terminal || !node.children.is_empty() {
                break;
            }
            self.nodes[parent as usize].children.remove(&symbol);
            self.free.push(curr);
            curr = parent;
        }
        true
    }

    fn count_terminals(&self, node: u32) -> usize {
        let n = &self.nodes[node as usize];
        usize::from(n.terminal)
            + n.children
                .values()
                .map(|&c| self.count_terminals(c))
                .sum::<usize>()
    }

    /// Number of stored sequences starting with `prefix`.
    pub fn count_with_prefix<I: IntoIterator<Item = S>>(&self, prefix: I) -> usize {
        self.walk(prefix).map_or(0, |node| self.count_terminals(node))
    }

    fn collect(&self, node: u32, buf: &mut Vec<S>, out: &mut Vec<Vec<S>>) {
        let n = &self.nodes[node as usize];
        if n.terminal {
            out.push(buf.clone());
        }
        for (symbol, &child) in &n.children {
            buf.push(symbol.clone());
            self.collect(child, buf, out);
            buf.pop();
        }
    }

    /// Stored sequences starting with `prefix`, in lexicographic order.
    pub fn sequences_with_prefix<I: IntoIterator<Item = S>>(&self, prefix: I) -> Vec<Vec<S>> {
        let mut buf: Vec<S> = Vec::new();
        let mut curr = ROOT;
        for symbol in prefix {
            match self.nodes[curr as usize].children.get(&symbol) {
                Some(&child) => curr = child,
                None => return Vec::new(),
            }
            buf.push(symbol);
        }
        let mut out = Vec::new();
        self.collect(curr, &mut buf, &mut out);
        out
    }
}

impl Trie<char> {
    pub fn insert_str(&mut self, s: &str) -> bool {
        self.insert(s.chars())
    }

    pub fn contains_str(&self, s: &str, exact: bool) -> bool {
        self.contains(s.chars(), exact)
    }

    pub fn remove_str(&mut self, s: &str) -> bool {
        self.remove(s.chars())
    }

    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.sequences_with_prefix(prefix.chars())
            .into_iter()
            .map(|w| w.into_iter().collect())
            .collect()
    }
}

impl<S: Ord + Clone> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord + Clone, I: IntoIterator<Item = S>> FromIterator<I> for Trie<S> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut trie = Trie::new();
        for seq in iter {
            trie.insert(seq);
        }
        trie
    }
}

impl<S: Debug> Trie<S> {
    fn print_node(&self, node: u32, tab: &str) -> String {
        let n = &self.nodes[node as usize];
        let children: Vec<Box<PrintChild<'_>>> = n
            .children
            .iter()
            .map(|(symbol, &child)| {
                Box::new(move |t: &str| {
                    let mark = if self.nodes[child as usize].terminal { " ✓" } else { "" };
                    format!("{symbol:?}{mark}{}", self.print_node(child, t))
                }) as Box<PrintChild<'_>>
            })
            .collect();
        let refs: Vec<Option<&PrintChild<'_>>> =
            children.iter().map(|c| Some(c.as_ref())).collect();
        print_tree(Some(tab), &refs)
    }
}

impl<S: Debug> Printable for Trie<S> {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        format!("Trie{}", self.print_node(ROOT, tab.unwrap_or("")))
    }
}
