//! Sums along tree paths. Keys are read as `i64`.

use std::collections::HashMap;

use crate::types::KeyNode;

fn value<K: Copy + Into<i64>, N: KeyNode<K>>(arena: &[N], i: u32) -> i64 {
    (*arena[i as usize].key()).into()
}

/// Whether some root-to-leaf path sums to `target`. Always false on an
/// empty tree.
pub fn has_path_sum<K, N>(arena: &[N], root: Option<u32>, target: i64) -> bool
where
    K: Copy + Into<i64>,
    N: KeyNode<K>,
{
    let Some(i) = root else {
        return false;
    };
    let n = &arena[i as usize];
    let rest = target - value(arena, i);
    if n.l().is_none() && n.r().is_none() {
        return rest == 0;
    }
    has_path_sum(arena, n.l(), rest) || has_path_sum(arena, n.r(), rest)
}

/// Keys of every root-to-leaf path summing to `target`, left to right.
pub fn root_to_leaf_paths_with_sum<K, N>(arena: &[N], root: Option<u32>, target: i64) -> Vec<Vec<K>>
where
    K: Copy + Into<i64>,
    N: KeyNode<K>,
{
    fn walk<K, N>(
        arena: &[N],
        node: Option<u32>,
        rest: i64,
        path: &mut Vec<K>,
        out: &mut Vec<Vec<K>>,
    )
    where
        K: Copy + Into<i64>,
        N: KeyNode<K>,
    {
        let Some(i) = node else {
            return;
        };
        let n = &arena[i as usize];
        let key = *n.key();
        let rest = rest - key.into();
        path.push(key);
        if n.l().is_none() && n.r().is_none() {
            if rest == 0 {
                out.push(path.clone());
            }
        } else {
            walk(arena, n.l(), rest, path, out);
            walk(arena, n.r(), rest, path, out);
        }
        path.pop();
    }
    let mut out = Vec::new();
    walk(arena, root, target, &mut Vec::new(), &mut out);
    out
}

/// Largest root-to-leaf sum.
pub fn max_root_to_leaf_sum<K, N>(arena: &[N], root: Option<u32>) -> Option<i64>
where
    K: Copy + Into<i64>,
    N: KeyNode<K>,
{
    let i = root?;
    let n = &arena[i as usize];
    let below = match (max_root_to_leaf_sum(arena, n.l()), max_root_to_leaf_sum(arena, n.r())) {
        (None, None) => 0,
        (Some(a), None) | (None, Some(a)) => a,
        (Some(a), Some(b)) => a.max(b),
    };
    Some(value(arena, i) + below)
}

/// Largest sum over any path of at least one node; a path may bend once at
/// its highest node.
pub fn max_path_sum<K, N>(arena: &[N], root: Option<u32>) -> Option<i64>
where
    K: Copy + Into<i64>,
    N: KeyNode<K>,
{
    // Returns the best sum of a path that starts at `node` and goes down.
    fn walk<K, N>(arena: &[N], node: Option<u32>, best: &mut Option<i64>) -> i64
    where
        K: Copy + Into<i64>,
        N: KeyNode<K>,
    {
        let Some(i) = node else {
            return 0;
        };
        let l = walk(arena, arena[i as usize].l(), best).max(0);
        let r = walk(arena, arena[i as usize].r(), best).max(0);
        let v = value(arena, i);
        let through = v + l + r;
        *best = Some(best.map_or(through, |b| b.max(through)));
        v + l.max(r)
    }
    let mut best = None;
    walk(arena, root, &mut best);
    best
}

/// Number of downward paths (starting at any node) whose keys sum to
/// `target`.
///
/// Keeps running prefix sums of the current root path in a map; a path
/// ending at the current node exists for every earlier prefix equal to
/// `sum - target`. Entries are added on the way down and removed on the way
/// back up.
pub fn count_paths_with_sum<K, N>(arena: &[N], root: Option<u32>, target: i64) -> usize
where
    K: Copy + Into<i64>,
    N: KeyNode<K>,
{
    fn walk<K, N>(
        arena: &[N],
        node: Option<u32>,
        target: i64,
        sum: i64,
        prefixes: &mut HashMap<i64, usize>,
    ) -> usize
    where
        K: Copy + Into<i64>,
        N: KeyNode<K>,
    {
        let Some(i) = node else {
            return 0;
        };
        let sum = sum + value(arena, i);
        let mut total = prefixes.get(&(sum - target)).copied().unwrap_or(0);
        *prefixes.entry(sum).or_insert(0) += 1;
        total += walk(arena, arena[i as usize].l(), target, sum, prefixes);
        total += walk(arena, arena[i as usize].r(), target, sum, prefixes);
        if let Some(count) = prefixes.get_mut(&sum) {
            *count -= 1;
            if *count == 0 {
                prefixes.remove(&sum);
            }
        }
        total
    }
    let mut prefixes = HashMap::from([(0, 1)]);
    walk(arena, root, target, 0, &mut prefixes)
}
