//! Relational queries between nodes and between trees.
//!
//! Lowest common ancestor comes in three strategies with different
//! requirements; all of them return `None` unless both targets are in the
//! tree under `root`, and agree otherwise.

use std::fmt::Display;

use crate::types::{BinaryNode, HasParent, KeyNode};

use super::serialize::order_string;

/// Whether `target` is in the subtree rooted at `root`.
pub fn covers<N: BinaryNode>(arena: &[N], root: Option<u32>, target: u32) -> bool {
    match root {
        None => false,
        Some(i) if i == target => true,
        Some(i) => {
            let n = &arena[i as usize];
            covers(arena, n.l(), target) || covers(arena, n.r(), target)
        }
    }
}

/// Edges between `node` and the top of its tree, following parent links.
pub fn depth_of<N: HasParent>(arena: &[N], node: u32) -> usize {
    let mut depth = 0;
    let mut curr = arena[node as usize].p();
    while let Some(p) = curr {
        depth += 1;
        curr = arena[p as usize].p();
    }
    depth
}

/// LCA by parent links: lift the deeper node to the other's depth, then
/// climb in lockstep until the two meet.
///
/// Returns `None` when the nodes belong to different trees.
pub fn lca_parent_walk<N: HasParent>(arena: &[N], a: u32, b: u32) -> Option<u32> {
    let da = depth_of(arena, a);
    let db = depth_of(arena, b);
    let (mut deep, mut shallow, delta) = if da >= db { (a, b, da - db) } else { (b, a, db - da) };
    for _ in 0..delta {
        deep = arena[deep as usize].p()?;
    }
    while deep != shallow {
        deep = arena[deep as usize].p()?;
        shallow = arena[shallow as usize].p()?;
    }
    Some(deep)
}

/// LCA without parent links: descend from the root while both targets lie
/// on the same side.
pub fn lca_covers<N: BinaryNode>(arena: &[N], root: Option<u32>, a: u32, b: u32) -> Option<u32> {
    if !covers(arena, root, a) || !covers(arena, root, b) {
        return None;
    }
    let mut curr = root?;
    loop {
        if curr == a || curr == b {
            return Some(curr);
        }
        let l = arena[curr as usize].l();
        let a_left = covers(arena, l, a);
        if a_left != covers(arena, l, b) {
            return Some(curr);
        }
        curr = if a_left { l? } else { arena[curr as usize].r()? };
    }
}

/// LCA in one traversal: each call reports the node it found and whether
/// that node is already known to be the common ancestor.
pub fn lca_single_pass<N: BinaryNode>(
    arena: &[N],
    root: Option<u32>,
    a: u32,
    b: u32,
) -> Option<u32> {
    fn walk<N: BinaryNode>(arena: &[N], node: Option<u32>, a: u32, b: u32) -> (Option<u32>, bool) {
        let Some(i) = node else {
            return (None, false);
        };
        if i == a && i == b {
            return (Some(i), true);
        }
        let left = walk(arena, arena[i as usize].l(), a, b);
        if left.1 {
            return left;
        }
        let right = walk(arena, arena[i as usize].r(), a, b);
        if right.1 {
            return right;
        }
        if left.0.is_some() && right.0.is_some() {
            return (Some(i), true);
        }
        if i == a || i == b {
            return (Some(i), left.0.is_some() || right.0.is_some());
        }
        (left.0.or(right.0), false)
    }
    match walk(arena, root, a, b) {
        (node, true) => node,
        _ => None,
    }
}

/// Named LCA implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LcaStrategy {
    /// Needs parent links. Depth-equalize, then lockstep climb.
    ParentWalk,
    /// Repeated covers checks from the root.
    Covers,
    /// One recursive pass returning `(node, found)` pairs.
    SinglePass,
}

/// Lowest common ancestor of `a` and `b` in the tree rooted at `root`.
pub fn lca<N: HasParent>(
    strategy: LcaStrategy,
    arena: &[N],
    root: Option<u32>,
    a: u32,
    b: u32,
) -> Option<u32> {
    match strategy {
        LcaStrategy::ParentWalk => {
            // `root` may be a subtree root; the climb then meets at or below it.
            if !covers(arena, root, a) || !covers(arena, root, b) {
                return None;
            }
            lca_parent_walk(arena, a, b)
        }
        LcaStrategy::Covers => lca_covers(arena, root, a, b),
        LcaStrategy::SinglePass => lca_single_pass(arena, root, a, b),
    }
}

/// Edges from `from` down to `target`, if `target` is below it.
fn level_below<N: BinaryNode>(arena: &[N], from: Option<u32>, target: u32) -> Option<usize> {
    let i = from?;
    if i == target {
        return Some(0);
    }
    let n = &arena[i as usize];
    level_below(arena, n.l(), target)
        .or_else(|| level_below(arena, n.r(), target))
        .map(|d| d + 1)
}

/// Number of edges on the path between `a` and `b`.
pub fn distance_between<N: BinaryNode>(
    arena: &[N],
    root: Option<u32>,
    a: u32,
    b: u32,
) -> Option<usize> {
    let ancestor = lca_single_pass(arena, root, a, b)?;
    Some(level_below(arena, Some(ancestor), a)? + level_below(arena, Some(ancestor), b)?)
}

/// Nodes on the path from `root` down to `target`, root first, `target`
/// excluded. `None` when `target` is not in the tree.
pub fn ancestors<N: BinaryNode>(arena: &[N], root: Option<u32>, target: u32) -> Option<Vec<u32>> {
    fn walk<N: BinaryNode>(
        arena: &[N],
        node: Option<u32>,
        target: u32,
        path: &mut Vec<u32>,
    ) -> bool {
        let Some(i) = node else {
            return false;
        };
        if i == target {
            return true;
        }
        path.push(i);
        let n = &arena[i as usize];
        if walk(arena, n.l(), target, path) || walk(arena, n.r(), target, path) {
            return true;
        }
        path.pop();
        false
    }
    let mut path = Vec::new();
    walk(arena, root, target, &mut path).then_some(path)
}

/// The `k`-th node in in-order (1-based).
pub fn kth_smallest<N: BinaryNode>(arena: &[N], root: Option<u32>, k: usize) -> Option<u32> {
    fn walk<N: BinaryNode>(arena: &[N], node: Option<u32>, remaining: &mut usize) -> Option<u32> {
        let i = node?;
        if let Some(found) = walk(arena, arena[i as usize].l(), remaining) {
            return Some(found);
        }
        *remaining -= 1;
        if *remaining == 0 {
            return Some(i);
        }
        walk(arena, arena[i as usize].r(), remaining)
    }
    if k == 0 {
        return None;
    }
    let mut remaining = k;
    walk(arena, root, &mut remaining)
}

/// Same shape and same keys.
pub fn is_identical<K, N>(a: &[N], a_root: Option<u32>, b: &[N], b_root: Option<u32>) -> bool
where
    K: PartialEq,
    N: KeyNode<K>,
{
    match (a_root, b_root) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            let (nx, ny) = (&a[x as usize], &b[y as usize]);
            nx.key() == ny.key()
                && is_identical(a, nx.l(), b, ny.l())
                && is_identical(a, nx.r(), b, ny.r())
        }
        _ => false,
    }
}

/// Whether tree `b` is the mirror image of tree `a`.
pub fn is_mirror_of<K, N>(a: &[N], a_root: Option<u32>, b: &[N], b_root: Option<u32>) -> bool
where
    K: PartialEq,
    N: KeyNode<K>,
{
    match (a_root, b_root) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            let (nx, ny) = (&a[x as usize], &b[y as usize]);
            nx.key() == ny.key()
                && is_mirror_of(a, nx.l(), b, ny.r())
                && is_mirror_of(a, nx.r(), b, ny.l())
        }
        _ => false,
    }
}

/// Whether the tree is its own mirror image.
pub fn is_symmetric<K, N>(arena: &[N], root: Option<u32>) -> bool
where
    K: PartialEq,
    N: KeyNode<K>,
{
    root.map_or(true, |i| {
        let n = &arena[i as usize];
        is_mirror_of(arena, n.l(), arena, n.r())
    })
}

/// Same keys, with the children of any node allowed to be swapped.
pub fn is_isomorphic<K, N>(a: &[N], a_root: Option<u32>, b: &[N], b_root: Option<u32>) -> bool
where
    K: PartialEq,
    N: KeyNode<K>,
{
    match (a_root, b_root) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            let (nx, ny) = (&a[x as usize], &b[y as usize]);
            nx.key() == ny.key()
                && ((is_isomorphic(a, nx.l(), b, ny.l()) && is_isomorphic(a, nx.r(), b, ny.r()))
                    || (is_isomorphic(a, nx.l(), b, ny.r()) && is_isomorphic(a, nx.r(), b, ny.l())))
        }
        _ => false,
    }
}

/// Swaps the children of every node in place. Parent links stay correct.
pub fn mirror<N: BinaryNode>(arena: &mut [N], root: Option<u32>) {
    let Some(i) = root else {
        return;
    };
    let n = &mut arena[i as usize];
    let (l, r) = (n.l(), n.r());
    n.set_l(r);
    n.set_r(l);
    mirror(arena, l);
    mirror(arena, r);
}

/// Whether `small` occurs as a complete subtree of `big`.
///
/// Compares pre-order encodings with explicit nil markers, matched on
/// whole tokens.
pub fn is_subtree<K, N>(
    big: &[N],
    big_root: Option<u32>,
    small: &[N],
    small_root: Option<u32>,
) -> bool
where
    K: Display,
    N: KeyNode<K>,
{
    if small_root.is_none() {
        return true;
    }
    let haystack = format!(" {} ", order_string(big, big_root));
    let needle = format!(" {} ", order_string(small, small_root));
    haystack.contains(&needle)
}

/// Nodes exactly `k` edges below `root`, left to right.
pub fn nodes_at_distance<N: BinaryNode>(arena: &[N], root: Option<u32>, k: usize) -> Vec<u32> {
    fn walk<N: BinaryNode>(arena: &[N], node: Option<u32>, k: usize, out: &mut Vec<u32>) {
        let Some(i) = node else {
            return;
        };
        if k == 0 {
            out.push(i);
            return;
        }
        walk(arena, arena[i as usize].l(), k - 1, out);
        walk(arena, arena[i as usize].r(), k - 1, out);
    }
    let mut out = Vec::new();
    walk(arena, root, k, &mut out);
    out
}

/// Distinct nodes that sit exactly `k` edges above at least one leaf of
/// their own subtree, in the order they are first found.
pub fn nodes_k_from_leaf<N: BinaryNode>(arena: &[N], root: Option<u32>, k: usize) -> Vec<u32> {
    fn walk<N: BinaryNode>(
        arena: &[N],
        node: Option<u32>,
        k: usize,
        path: &mut Vec<u32>,
        out: &mut Vec<u32>,
    ) {
        let Some(i) = node else {
            return;
        };
        path.push(i);
        let n = &arena[i as usize];
        if n.l().is_none() && n.r().is_none() {
            if let Some(&ancestor) = path.len().checked_sub(k + 1).and_then(|at| path.get(at)) {
                if !out.contains(&ancestor) {
                    out.push(ancestor);
                }
            }
        } else {
            walk(arena, n.l(), k, path, out);
            walk(arena, n.r(), k, path, out);
        }
        path.pop();
    }
    let mut out = Vec::new();
    walk(arena, root, k, &mut Vec::new(), &mut out);
    out
}
