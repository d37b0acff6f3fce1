//! Shape queries: height, diameter, counts, balance and ordering checks.

use crate::types::{BinaryNode, KeyNode};

/// Height reported by [`is_balanced_fast`]'s helper for an unbalanced subtree.
pub const UNBALANCED: i64 = i64::MIN;

/// Nodes on the longest root-to-leaf path: 0 for an empty tree, 1 for a leaf.
pub fn height<N: BinaryNode>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => {
            let n = &arena[i as usize];
            1 + height(arena, n.l()).max(height(arena, n.r()))
        }
    }
}

/// Nodes on the shortest root-to-leaf path.
pub fn min_depth<N: BinaryNode>(arena: &[N], root: Option<u32>) -> usize {
    let Some(i) = root else {
        return 0;
    };
    let n = &arena[i as usize];
    match (n.l(), n.r()) {
        (None, None) => 1,
        (Some(l), None) => 1 + min_depth(arena, Some(l)),
        (None, Some(r)) => 1 + min_depth(arena, Some(r)),
        (l, r) => 1 + min_depth(arena, l).min(min_depth(arena, r)),
    }
}

/// Nodes on the longest path between any two nodes.
pub fn diameter<N: BinaryNode>(arena: &[N], root: Option<u32>) -> usize {
    // Returns the height and records the best path through each node.
    fn walk<N: BinaryNode>(arena: &[N], node: Option<u32>, best: &mut usize) -> usize {
        let Some(i) = node else {
            return 0;
        };
        let lh = walk(arena, arena[i as usize].l(), best);
        let rh = walk(arena, arena[i as usize].r(), best);
        *best = (*best).max(lh + rh + 1);
        1 + lh.max(rh)
    }
    let mut best = 0;
    walk(arena, root, &mut best);
    best
}

pub fn count_nodes<N: BinaryNode>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        let n = &arena[i as usize];
        1 + count_nodes(arena, n.l()) + count_nodes(arena, n.r())
    })
}

pub fn count_leaves<N: BinaryNode>(arena: &[N], root: Option<u32>) -> usize {
    let Some(i) = root else {
        return 0;
    };
    let n = &arena[i as usize];
    if n.l().is_none() && n.r().is_none() {
        return 1;
    }
    count_leaves(arena, n.l()) + count_leaves(arena, n.r())
}

/// Nodes with exactly two children.
pub fn count_full_nodes<N: BinaryNode>(arena: &[N], root: Option<u32>) -> usize {
    let Some(i) = root else {
        return 0;
    };
    let n = &arena[i as usize];
    usize::from(n.l().is_some() && n.r().is_some())
        + count_full_nodes(arena, n.l())
        + count_full_nodes(arena, n.r())
}

/// Every node's subtree heights differ by at most one.
///
/// Recomputes heights at every node: O(n log n) on balanced trees, O(n²)
/// in the worst case. See [`is_balanced_fast`].
pub fn is_balanced<N: BinaryNode>(arena: &[N], root: Option<u32>) -> bool {
    let Some(i) = root else {
        return true;
    };
    let n = &arena[i as usize];
    height(arena, n.l()).abs_diff(height(arena, n.r())) <= 1
        && is_balanced(arena, n.l())
        && is_balanced(arena, n.r())
}

/// Single-pass balance check.
///
/// Heights travel up the recursion; an unbalanced subtree reports
/// [`UNBALANCED`] and every ancestor passes it through untouched.
pub fn is_balanced_fast<N: BinaryNode>(arena: &[N], root: Option<u32>) -> bool {
    fn check<N: BinaryNode>(arena: &[N], node: Option<u32>) -> i64 {
        let Some(i) = node else {
            return 0;
        };
        let lh = check(arena, arena[i as usize].l());
        if lh == UNBALANCED {
            return UNBALANCED;
        }
        let rh = check(arena, arena[i as usize].r());
        if rh == UNBALANCED {
            return UNBALANCED;
        }
        if (lh - rh).abs() > 1 {
            return UNBALANCED;
        }
        lh.max(rh) + 1
    }
    check(arena, root) != UNBALANCED
}

/// Whether every key lies strictly inside the open interval inherited from
/// its ancestors. Equal keys therefore fail the check.
pub fn is_bst<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> bool
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    fn check<'a, K, N, C>(
        arena: &'a [N],
        node: Option<u32>,
        min: Option<&'a K>,
        max: Option<&'a K>,
        comparator: &C,
    ) -> bool
    where
        N: KeyNode<K>,
        C: Fn(&K, &K) -> i32,
    {
        let Some(i) = node else {
            return true;
        };
        let n = &arena[i as usize];
        let key = n.key();
        if min.is_some_and(|m| comparator(key, m) <= 0) {
            return false;
        }
        if max.is_some_and(|m| comparator(key, m) >= 0) {
            return false;
        }
        check(arena, n.l(), min, Some(key), comparator)
            && check(arena, n.r(), Some(key), max, comparator)
    }
    check(arena, root, None, None, comparator)
}
