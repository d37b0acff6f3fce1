use std::fmt::Debug;

use log::debug;

use crate::config::{DuplicatePolicy, TreeConfig};
use crate::error::{ForestError, Result};
use crate::node::TreeNode;
use crate::print::{print_node, Printable};
use crate::types::{default_comparator, KeyNode, NodeRef, OrderedContainer};
use crate::util::{
    self, check_links_and_order, first, insert_left, insert_right, last, next, prev, release,
    splice, swap_keys,
};

/// Binary search tree over [`TreeNode`]s.
///
/// No balancing is performed: a sorted insertion sequence produces a
/// linked list. Lookups, insertion and deletion are iterative, so even a
/// degenerate tree never recurses.
pub struct BstTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<TreeNode<K>>,
    root: Option<u32>,
    comparator: C,
    config: TreeConfig,
}

impl<K> BstTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for BstTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> BstTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config(comparator, TreeConfig::default())
    }

    pub fn with_config(comparator: C, config: TreeConfig) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            config,
        }
    }

    /// Adopts an existing node graph rooted at `root`.
    ///
    /// Every arena slot must be reachable from `root`, parent links must be
    /// consistent and the keys must be ordered under `comparator`.
    pub fn from_root(comparator: C, arena: Vec<TreeNode<K>>, root: Option<u32>) -> Result<Self> {
        let tree = Self {
            arena,
            root,
            comparator,
            config: TreeConfig::default().with_duplicates(DuplicatePolicy::Allow),
        };
        tree.assert_valid()?;
        Ok(tree)
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn arena(&self) -> &[TreeNode<K>] {
        &self.arena
    }

    pub fn node(&self, node: NodeRef) -> &TreeNode<K> {
        &self.arena[node as usize]
    }

    pub fn key(&self, node: NodeRef) -> &K {
        &self.arena[node as usize].k
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` at the first empty slot on its search path.
    ///
    /// Returns `Ok(None)` when the key is already present and duplicates are
    /// rejected, and [`ForestError::CapacityExhausted`] when the tree is full.
    pub fn try_insert(&mut self, key: K) -> Result<Option<NodeRef>> {
        let mut parent = None;
        let mut go_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = (self.comparator)(&key, &self.arena[i as usize].k);
            if cmp == 0 && self.config.duplicates == DuplicatePolicy::Reject {
                return Ok(None);
            }
            parent = Some(i);
            go_left = cmp < 0;
            curr = if go_left {
                self.arena[i as usize].l
            } else {
                self.arena[i as usize].r
            };
        }

        let capacity = self.config.max_nodes();
        if self.arena.len() >= capacity {
            debug!("bst insert rejected: capacity {capacity} reached");
            return Err(ForestError::CapacityExhausted { capacity });
        }

        self.arena.push(TreeNode::new(key));
        let node = (self.arena.len() - 1) as u32;
        match parent {
            None => self.root = Some(node),
            Some(p) if go_left => insert_left(&mut self.arena, node, p),
            Some(p) => insert_right(&mut self.arena, node, p),
        }
        Ok(Some(node))
    }

    /// Like [`try_insert`](Self::try_insert).
    ///
    /// # Panics
    ///
    /// Panics when the configured capacity is exhausted.
    pub fn insert(&mut self, key: K) -> Option<NodeRef> {
        match self.try_insert(key) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn find(&self, key: &K) -> Option<NodeRef> {
        util::find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes one node holding `key`.
    ///
    /// A node with two children takes over its in-order successor's key and
    /// the successor's slot is unlinked instead.
    pub fn delete(&mut self, key: &K) -> bool {
        let Some(node) = self.find(key) else {
            return false;
        };
        let n = &self.arena[node as usize];
        let target = match (n.l, n.r) {
            (Some(_), Some(r)) => {
                let successor = first(&self.arena, Some(r)).expect("right subtree is non-empty");
                swap_keys(&mut self.arena, node, successor);
                successor
            }
            _ => node,
        };
        self.root = splice(&mut self.arena, self.root, target);
        self.root = release(&mut self.arena, self.root, target);
        true
    }

    pub fn clear(&mut self) {
        debug!("bst clear: releasing {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    pub fn first(&self) -> Option<NodeRef> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<NodeRef> {
        last(&self.arena, self.root)
    }

    pub fn successor(&self, node: NodeRef) -> Option<NodeRef> {
        next(&self.arena, node)
    }

    pub fn predecessor(&self, node: NodeRef) -> Option<NodeRef> {
        prev(&self.arena, node)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(u32, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((i, depth)) = stack.pop() {
            best = best.max(depth);
            let n = &self.arena[i as usize];
            stack.extend(n.l.map(|l| (l, depth + 1)));
            stack.extend(n.r.map(|r| (r, depth + 1)));
        }
        best
    }

    /// Keys in order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut curr = self.first();
        while let Some(i) = curr {
            out.push(self.arena[i as usize].k.clone());
            curr = self.successor(i);
        }
        out
    }

    /// Checks ordering, parent links and that every slot is reachable.
    pub fn assert_valid(&self) -> Result<()> {
        let reachable = check_links_and_order(&self.arena, self.root, &self.comparator)?;
        if reachable != self.arena.len() {
            return Err(ForestError::InvalidTree(format!(
                "{reachable} reachable nodes but {} allocated",
                self.arena.len()
            )));
        }
        if self.config.duplicates == DuplicatePolicy::Reject {
            let mut curr = self.first();
            while let Some(i) = curr {
                let succ = self.successor(i);
                if let Some(s) = succ {
                    let (a, b) = (self.arena[i as usize].key(), self.arena[s as usize].key());
                    if (self.comparator)(a, b) == 0 {
                        return Err(ForestError::InvalidTree("Duplicate key".to_string()));
                    }
                }
                curr = succ;
            }
        }
        Ok(())
    }
}

impl<K, C> OrderedContainer<K> for BstTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn insert(&mut self, key: K) -> Option<NodeRef> {
        BstTree::insert(self, key)
    }

    fn delete(&mut self, key: &K) -> bool {
        BstTree::delete(self, key)
    }

    fn find(&self, key: &K) -> Option<NodeRef> {
        BstTree::find(self, key)
    }

    fn size(&self) -> usize {
        BstTree::size(self)
    }

    fn clear(&mut self) {
        BstTree::clear(self)
    }
}

impl<K: Debug, C> Printable for BstTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        match self.root {
            Some(root) => {
                let tab = format!("{}   ", tab.unwrap_or(""));
                let label = |_: u32, n: &TreeNode<K>| format!("{:?}", n.k);
                format!("BstTree\n└─ {}", print_node(&self.arena, root, &tab, &label))
            }
            None => "BstTree ∅".to_string(),
        }
    }
}
