use std::fmt::Debug;

use log::debug;

use crate::config::{DuplicatePolicy, TreeConfig};
use crate::error::{ForestError, Result};
use crate::node::RbNode;
use crate::print::Printable;
use crate::toolkit;
use crate::types::{default_comparator, Color, NodeRef, OrderedContainer};
use crate::util::{self, first, last, next, prev, release};

use super::util::{assert_red_black_tree, black_height, insert_left, insert_right, remove};

/// Red-black tree over [`RbNode`]s.
///
/// Height stays within `2·log2(size + 1)`. Deleting a node with two
/// children swaps it with its successor by topology, so the indices of all
/// other nodes survive a delete except the one moved by arena compaction.
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    comparator: C,
    config: TreeConfig,
}

impl<K> RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
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

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn arena(&self) -> &[RbNode<K>] {
        &self.arena
    }

    pub fn node(&self, node: NodeRef) -> &RbNode<K> {
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
            debug!("rb insert rejected: capacity {capacity} reached");
            return Err(ForestError::CapacityExhausted { capacity });
        }

        self.arena.push(RbNode::new(key));
        let node = (self.arena.len() - 1) as u32;
        self.root = match parent {
            None => {
                self.arena[node as usize].color = Color::Black;
                Some(node)
            }
            Some(p) if go_left => insert_left(&mut self.arena, self.root, node, p),
            Some(p) => insert_right(&mut self.arena, self.root, node, p),
        };
        Ok(Some(node))
    }

    /// Inserts `key`. Returns `None` for a rejected duplicate.
    ///
    /// Rebalancing relinks nodes without moving them between slots, so the
    /// returned index stays valid until the next delete.
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

    pub fn delete(&mut self, key: &K) -> bool {
        let Some(node) = self.find(key) else {
            return false;
        };
        self.root = remove(&mut self.arena, self.root, node);
        self.root = release(&mut self.arena, self.root, node);
        true
    }

    pub fn clear(&mut self) {
        debug!("rb clear: releasing {} nodes", self.arena.len());
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

    pub fn height(&self) -> usize {
        toolkit::height(&self.arena, self.root)
    }

    /// Black nodes on any root-to-nil path, root included.
    pub fn black_height(&self) -> usize {
        black_height(&self.arena, self.root)
            .unwrap_or_else(|err| panic!("corrupted red-black tree: {err}"))
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

    pub fn assert_valid(&self) -> Result<()> {
        assert_red_black_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = util::size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(ForestError::InvalidTree(format!(
                "{reachable} reachable nodes but {} allocated",
                self.arena.len()
            )));
        }
        Ok(())
    }
}

impl<K, C> OrderedContainer<K> for RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn insert(&mut self, key: K) -> Option<NodeRef> {
        RbTree::insert(self, key)
    }

    fn delete(&mut self, key: &K) -> bool {
        RbTree::delete(self, key)
    }

    fn find(&self, key: &K) -> Option<NodeRef> {
        RbTree::find(self, key)
    }

    fn size(&self) -> usize {
        RbTree::size(self)
    }

    fn clear(&mut self) {
        RbTree::clear(self)
    }
}

impl<K: Debug, C> Printable for RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        let tab = format!("{}   ", tab.unwrap_or(""));
        format!("RbTree\n└─ {}", super::print(&self.arena, self.root, &tab))
    }
}
