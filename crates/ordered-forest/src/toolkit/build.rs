//! Building and tearing down free-standing trees.

use std::collections::VecDeque;

use crate::node::TreeNode;
use crate::types::BinaryNode;

fn push_child<K>(arena: &mut Vec<TreeNode<K>>, key: K, parent: u32) -> u32 {
    let mut node = TreeNode::new(key);
    node.p = Some(parent);
    arena.push(node);
    (arena.len() - 1) as u32
}

/// Builds a tree from its breadth-first layout, `None` marking a missing
/// child. Children of missing nodes are not listed, so any shape can be
/// described; entries beyond the last parent are ignored.
///
/// ```
/// use ordered_forest::toolkit::{from_level_order, level_order};
///
/// let (arena, root) = from_level_order(&[Some(1), Some(2), Some(3), None, Some(4)]);
/// assert_eq!(level_order(&arena, root), vec![1, 2, 3, 4]);
/// assert_eq!(arena[3].p, Some(1));
/// ```
pub fn from_level_order<K: Clone>(layout: &[Option<K>]) -> (Vec<TreeNode<K>>, Option<u32>) {
    let mut arena = Vec::new();
    let Some(Some(first)) = layout.first() else {
        return (arena, None);
    };
    arena.push(TreeNode::new(first.clone()));
    let mut queue = VecDeque::from([0u32]);
    let mut slots = layout[1..].iter();
    while let Some(parent) = queue.pop_front() {
        let Some(left) = slots.next() else { break };
        if let Some(key) = left {
            let child = push_child(&mut arena, key.clone(), parent);
            arena[parent as usize].l = Some(child);
            queue.push_back(child);
        }
        let Some(right) = slots.next() else { break };
        if let Some(key) = right {
            let child = push_child(&mut arena, key.clone(), parent);
            arena[parent as usize].r = Some(child);
            queue.push_back(child);
        }
    }
    (arena, Some(0))
}

/// Minimal-height binary search tree over already sorted `keys`. The middle
/// key (upper middle for even lengths) becomes each subtree's root.
pub fn minimal_from_sorted<K: Clone>(keys: &[K]) -> (Vec<TreeNode<K>>, Option<u32>) {
    fn build<K: Clone>(
        arena: &mut Vec<TreeNode<K>>,
        keys: &[K],
        parent: Option<u32>,
    ) -> Option<u32> {
        if keys.is_empty() {
            return None;
        }
        let mid = keys.len() / 2;
        let mut node = TreeNode::new(keys[mid].clone());
        node.p = parent;
        arena.push(node);
        let idx = (arena.len() - 1) as u32;
        let l = build(arena, &keys[..mid], Some(idx));
        let r = build(arena, &keys[mid + 1..], Some(idx));
        arena[idx as usize].l = l;
        arena[idx as usize].r = r;
        Some(idx)
    }
    let mut arena = Vec::with_capacity(keys.len());
    let root = build(&mut arena, keys, None);
    (arena, root)
}

/// Detaches every node of the subtree under `root` from its children,
/// bottom-up, and returns the released indices in post-order.
///
/// The arena itself is left in place; the link into `root` from its parent
/// (if any) is the caller's to clear.
pub fn delete_tree<N: BinaryNode>(arena: &mut [N], root: Option<u32>) -> Vec<u32> {
    fn walk<N: BinaryNode>(arena: &mut [N], node: Option<u32>, out: &mut Vec<u32>) {
        let Some(i) = node else {
            return;
        };
        let (l, r) = (arena[i as usize].l(), arena[i as usize].r());
        walk(arena, l, out);
        walk(arena, r, out);
        let n = &mut arena[i as usize];
        n.set_l(None);
        n.set_r(None);
        out.push(i);
    }
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out
}
