/// Node of a [`LinkedTrie`]. Children form a singly linked list starting at
/// `first_child` and chained through `next_sibling`, sorted by symbol.
#[derive(Clone, Debug)]
pub struct LinkedTrieNode<S> {
    /// `None` only for the root.
    pub symbol: Option<S>,
    pub terminal: bool,
    pub first_child: Option<u32>,
    pub next_sibling: Option<u32>,
}

impl<S> LinkedTrieNode<S> {
    fn new(symbol: Option<S>) -> Self {
        Self {
            symbol,
            terminal: false,
            first_child: None,
            next_sibling: None,
        }
    }
}

/// Trie in first-child / next-sibling encoding.
///
/// Uses one node shape for every fan-out, at the cost of a linear scan of
/// the sibling chain per symbol.
#[derive(Clone, Debug)]
pub struct LinkedTrie<S> {
    nodes: Vec<LinkedTrieNode<S>>,
    len: usize,
}

const ROOT: u32 = 0;

impl<S: Ord + Clone> LinkedTrie<S> {
    pub fn new() -> Self {
        Self {
            nodes: vec![LinkedTrieNode::new(None)],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node(&self, idx: u32) -> &LinkedTrieNode<S> {
        &self.nodes[idx as usize]
    }

    /// Child of `parent` labelled `symbol`, or the sibling after which such a
    /// child would be linked (`Err(None)` means "at the head of the list").
    fn seek(&self, parent: u32, symbol: &S) -> Result<u32, Option<u32>> {
        let mut before = None;
        let mut curr = self.nodes[parent as usize].first_child;
        while let Some(i) = curr {
            let node = &self.nodes[i as usize];
            match node.symbol.as_ref() {
                Some(s) if s == symbol => return Ok(i),
                Some(s) if s > symbol => break,
                _ => {}
            }
            before = Some(i);
            curr = node.next_sibling;
        }
        Err(before)
    }

    pub fn insert<I: IntoIterator<Item = S>>(&mut self, seq: I) -> bool {
        let mut curr = ROOT;
        for symbol in seq {
            curr = match self.seek(curr, &symbol) {
                Ok(child) => child,
                Err(before) => {
                    self.nodes.push(LinkedTrieNode::new(Some(symbol)));
                    let child = (self.nodes.len() - 1) as u32;
                    let next = match before {
                        Some(b) => self.nodes[b as usize].next_sibling.replace(child),
                        None => self.nodes[curr as usize].first_child.replace(child),
                    };
                    self.nodes[child as usize].next_sibling = next;
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

    pub fn contains<I: IntoIterator<Item = S>>(&self, seq: I, exact: bool) -> bool {
        let mut curr = ROOT;
        for symbol in seq {
            match self.seek(curr, &symbol) {
                Ok(child) => curr = child,
                Err(_) => return false,
            }
        }
        !exact || self.nodes[curr as usize].terminal
    }

    /// Every stored sequence in lexicographic order.
    pub fn sequences(&self) -> Vec<Vec<S>> {
        let mut out = Vec::new();
        let mut buf = Vec::new();
        self.collect(ROOT, &mut buf, &mut out);
        out
    }

    fn collect(&self, node: u32, buf: &mut Vec<S>, out: &mut Vec<Vec<S>>) {
        if self.nodes[node as usize].terminal {
            out.push(buf.clone());
        }
        let mut child = self.nodes[node as usize].first_child;
        while let Some(c) = child {
            let n = &self.nodes[c as usize];
            if let Some(symbol) = &n.symbol {
                buf.push(symbol.clone());
                self.collect(c, buf, out);
                buf.pop();
            }
            child = n.next_sibling;
        }
    }
}

impl<S: Ord + Clone> Default for LinkedTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}
