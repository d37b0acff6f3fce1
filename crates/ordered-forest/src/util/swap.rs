use std::mem;

use crate::types::{HasParent, KeyNode};

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Exchanges the tree positions of nodes `x` and `y`, keeping every key
/// attached to its own slot. The two may be adjacent or siblings.
///
/// Returns the new root.
pub fn swap<N: HasParent>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }
    // Every write below is driven by links read before the first mutation.
    let [xp, xl, xr] = links(arena, x);
    let [yp, yl, yr] = links(arena, y);
    let x_on_left = xp.is_some_and(|p| get_l(arena, p) == Some(x));
    let y_on_left = yp.is_some_and(|p| get_l(arena, p) == Some(y));
    let exchange = |link: Option<u32>| match link {
        Some(n) if n == x => Some(y),
        Some(n) if n == y => Some(x),
        other => other,
    };

    relink(arena, x, [exchange(yp), exchange(yl), exchange(yr)]);
    relink(arena, y, [exchange(xp), exchange(xl), exchange(xr)]);

    let mut root = root;
    for (node, parent, on_left) in [(y, xp, x_on_left), (x, yp, y_on_left)] {
        match parent {
            None => root = node,
            // Adjacent pair: the link was already rewritten by `relink`.
            Some(p) if p == x || p == y => {}
            Some(p) if on_left => set_l(arena, p, Some(node)),
            Some(p) => set_r(arena, p, Some(node)),
        }
    }
    root
}

#[inline]
fn links<N: HasParent>(arena: &[N], n: u32) -> [Option<u32>; 3] {
    [get_p(arena, n), get_l(arena, n), get_r(arena, n)]
}

/// Installs `[p, l, r]` on `n` and points both children back at it.
fn relink<N: HasParent>(arena: &mut [N], n: u32, [p, l, r]: [Option<u32>; 3]) {
    set_p(arena, n, p);
    set_l(arena, n, l);
    set_r(arena, n, r);
    for child in [l, r].into_iter().flatten() {
        set_p(arena, child, Some(n));
    }
}

/// Exchanges the keys stored in slots `a` and `b`, leaving links untouched.
pub fn swap_keys<K, N: KeyNode<K>>(arena: &mut [N], a: u32, b: u32) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    mem::swap(head[lo as usize].key_mut(), tail[0].key_mut());
}
