use crate::error::{ForestError, Result};
use crate::node::RankNode;
use crate::types::{default_comparator, NodeRef, OrderedContainer, Ranked};
use crate::util::{
    self, check_links_and_order, first, insert_left, insert_right, release, splice, swap_keys,
};

/// Order-statistics tree: a BST whose nodes count their left subtree.
///
/// Duplicates are kept; an equal key descends right, so every key in a
/// node's left subtree orders strictly before the node's key.
pub struct RankTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RankNode<K>>,
    root: Option<u32>,
    comparator: C,
}

impl<K> RankTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RankTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RankTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
        }
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub fn arena(&self) -> &[RankNode<K>] {
        &self.arena
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Inserts `key`, bumping `left_size` on every node passed on the left.
    pub fn insert(&mut self, key: K) -> NodeRef {
        let mut parent = None;
        let mut go_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            let n = &mut self.arena[i as usize];
            go_left = (self.comparator)(&key, &n.k) < 0;
            parent = Some(i);
            curr = if go_left {
                n.left_size += 1;
                n.l
            } else {
                n.r
            };
        }
        self.arena.push(RankNode::new(key));
        let node = (self.arena.len() - 1) as u32;
        match parent {
            None => self.root = Some(node),
            Some(p) if go_left => insert_left(&mut self.arena, node, p),
            Some(p) => insert_right(&mut self.arena, node, p),
        }
        node
    }

    pub fn find(&self, key: &K) -> Option<NodeRef> {
        util::find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Number of stored keys ordering strictly before `key`.
    pub fn rank(&self, key: &K) -> usize {
        let mut acc = 0;
        let mut curr = self.root;
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            if (self.comparator)(key, &n.k) <= 0 {
                curr = n.l;
            } else {
                acc += n.left_size + 1;
                curr = n.r;
            }
        }
        acc
    }

    /// The `k`-th smallest key, counting from zero.
    pub fn select(&self, mut k: usize) -> Option<&K> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            if k < n.left_size {
                curr = n.l;
            } else if k == n.left_size {
                return Some(&n.k);
            } else {
                k -= n.left_size + 1;
                curr = n.r;
            }
        }
        None
    }

    /// Removes one node holding `key`.
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

        let mut child = target;
        let mut parent = self.arena[target as usize].p;
        while let Some(p) = parent {
            let pn = &mut self.arena[p as usize];
            if pn.l == Some(child) {
                pn.left_size -= 1;
            }
            child = p;
            parent = pn.p;
        }

        self.root = splice(&mut self.arena, self.root, target);
        self.root = release(&mut self.arena, self.root, target);
        true
    }

    /// Keys in order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            out.push(self.arena[i as usize].k.clone());
            curr = util::next(&self.arena, i);
        }
        out
    }

    /// Checks ordering, parent links and every `left_size` counter.
    pub fn assert_valid(&self) -> Result<()> {
        check_links_and_order(&self.arena, self.root, &self.comparator)?;
        for (i, n) in self.arena.iter().enumerate() {
            let actual = util::size(&self.arena, n.l);
            if n.left_size() != actual {
                return Err(ForestError::InvalidTree(format!(
                    "node {i} records left_size {} but has {actual}",
                    n.left_size()
                )));
            }
        }
        Ok(())
    }
}

impl<K, C> OrderedContainer<K> for RankTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn insert(&mut self, key: K) -> Option<NodeRef> {
        Some(RankTree::insert(self, key))
    }

    fn delete(&mut self, key: &K) -> bool {
        RankTree::delete(self, key)
    }

    fn find(&self, key: &K) -> Option<NodeRef> {
        RankTree::find(self, key)
    }

    fn size(&self) -> usize {
        RankTree::size(self)
    }

    fn clear(&mut self) {
        RankTree::clear(self)
    }
}
