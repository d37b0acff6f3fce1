//! Depth-first, breadth-first and column traversals.

use std::collections::{BTreeMap, VecDeque};

use crate::types::KeyNode;

fn key_of<K: Clone, N: KeyNode<K>>(arena: &[N], i: u32) -> K {
    arena[i as usize].key().clone()
}

pub fn in_order<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    fn walk<K: Clone, N: KeyNode<K>>(arena: &[N], node: Option<u32>, out: &mut Vec<K>) {
        if let Some(i) = node {
            walk(arena, arena[i as usize].l(), out);
            out.push(key_of(arena, i));
            walk(arena, arena[i as usize].r(), out);
        }
    }
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out
}

pub fn pre_order<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    fn walk<K: Clone, N: KeyNode<K>>(arena: &[N], node: Option<u32>, out: &mut Vec<K>) {
        if let Some(i) = node {
            out.push(key_of(arena, i));
            walk(arena, arena[i as usize].l(), out);
            walk(arena, arena[i as usize].r(), out);
        }
    }
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out
}

pub fn post_order<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    fn walk<K: Clone, N: KeyNode<K>>(arena: &[N], node: Option<u32>, out: &mut Vec<K>) {
        if let Some(i) = node {
            walk(arena, arena[i as usize].l(), out);
            walk(arena, arena[i as usize].r(), out);
            out.push(key_of(arena, i));
        }
    }
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out
}

/// Breadth-first order.
pub fn level_order<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    levels(arena, root).into_iter().flatten().collect()
}

/// Keys grouped by depth, each level read left to right.
pub fn levels<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<Vec<K>> {
    let mut out = Vec::new();
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while !queue.is_empty() {
        let mut level = Vec::with_capacity(queue.len());
        for _ in 0..queue.len() {
            let Some(i) = queue.pop_front() else { break };
            level.push(key_of(arena, i));
            queue.extend(arena[i as usize].l());
            queue.extend(arena[i as usize].r());
        }
        out.push(level);
    }
    out
}

/// Zigzag order: the root, then level 1 left to right, level 2 right to
/// left, and so on.
///
/// Two stacks alternate roles; the order in which children are pushed
/// decides the direction of the next level.
pub fn spiral_order<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    let mut out = Vec::new();
    let mut rtl: Vec<u32> = root.into_iter().collect();
    let mut ltr: Vec<u32> = Vec::new();
    while !rtl.is_empty() || !ltr.is_empty() {
        while let Some(i) = rtl.pop() {
            out.push(key_of(arena, i));
            ltr.extend(arena[i as usize].r());
            ltr.extend(arena[i as usize].l());
        }
        while let Some(i) = ltr.pop() {
            out.push(key_of(arena, i));
            rtl.extend(arena[i as usize].l());
            rtl.extend(arena[i as usize].r());
        }
    }
    out
}

/// Deepest level first, each level left to right.
pub fn reverse_level_order<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    let mut stack = Vec::new();
    while let Some(i) = queue.pop_front() {
        stack.push(i);
        queue.extend(arena[i as usize].r());
        queue.extend(arena[i as usize].l());
    }
    stack.into_iter().rev().map(|i| key_of(arena, i)).collect()
}

/// Keys by horizontal distance from the root (left child -1, right +1).
/// Within a column keys appear in pre-order.
pub fn vertical_order<K: Clone, N: KeyNode<K>>(
    arena: &[N],
    root: Option<u32>,
) -> BTreeMap<i64, Vec<K>> {
    fn walk<K: Clone, N: KeyNode<K>>(
        arena: &[N],
        node: Option<u32>,
        hd: i64,
        out: &mut BTreeMap<i64, Vec<K>>,
    ) {
        if let Some(i) = node {
            out.entry(hd).or_default().push(key_of(arena, i));
            walk(arena, arena[i as usize].l(), hd - 1, out);
            walk(arena, arena[i as usize].r(), hd + 1, out);
        }
    }
    let mut out = BTreeMap::new();
    walk(arena, root, 0, &mut out);
    out
}

/// First key of every level.
pub fn left_view<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    levels(arena, root)
        .into_iter()
        .filter_map(|level| level.into_iter().next())
        .collect()
}

/// Last key of every level.
pub fn right_view<K: Clone, N: KeyNode<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    levels(arena, root)
        .into_iter()
        .filter_map(|level| level.into_iter().last())
        .collect()
}

/// Callbacks of an Euler tour. Each node is met three times: before its
/// left subtree, between the subtrees and after its right subtree.
pub trait EulerVisitor<N> {
    fn on_left(&mut self, _arena: &[N], _node: u32) {}
    fn on_below(&mut self, _arena: &[N], _node: u32) {}
    fn on_right(&mut self, _arena: &[N], _node: u32) {}
}

/// Walks the tree as an Euler tour, driving `visitor`.
///
/// Pre-, in- and post-order are the three projections of this walk.
pub fn euler_tour<N, V>(arena: &[N], root: Option<u32>, visitor: &mut V)
where
    N: crate::types::BinaryNode,
    V: EulerVisitor<N>,
{
    let Some(i) = root else {
        return;
    };
    visitor.on_left(arena, i);
    euler_tour(arena, arena[i as usize].l(), visitor);
    visitor.on_below(arena, i);
    euler_tour(arena, arena[i as usize].r(), visitor);
    visitor.on_right(arena, i);
}
