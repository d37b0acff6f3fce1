use log::trace;

use crate::error::{ForestError, Result};
use crate::types::{BinaryNode, Color, Colored, HasParent, KeyNode};
use crate::util::{
    check_links_and_order, first, get_l, get_p, get_r, replace_child, set_l, set_p, set_r, splice,
    swap,
};

/// Red-black node: keyed, parent-linked and colored.
pub trait RbNodeLike<K>: KeyNode<K> + HasParent + Colored {}

impl<K, N: KeyNode<K> + HasParent + Colored> RbNodeLike<K> for N {}

/// Nil leaves are black.
#[inline]
fn is_black<N: Colored>(arena: &[N], i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i as usize].is_black())
}

#[inline]
fn is_red<N: Colored>(arena: &[N], i: Option<u32>) -> bool {
    !is_black(arena, i)
}

#[inline]
fn paint<N: Colored>(arena: &mut [N], i: u32, color: Color) {
    arena[i as usize].set_color(color);
}

/// Rotates `n` down to the left; its right child takes its place.
///
/// Returns the new root.
///
/// # Panics
///
/// Panics if `n` has no right child.
pub fn rotate_left<N: HasParent>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let Some(y) = get_r(arena, n) else {
        panic!("rotate_left on node {n} without a right child");
    };
    trace!("rb rotate left at {n}");
    let p = get_p(arena, n);
    let yl = get_l(arena, y);

    set_r(arena, n, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(n));
    }
    set_p(arena, y, p);
    let root = replace_child(arena, root, p, n, Some(y));
    set_l(arena, y, Some(n));
    set_p(arena, n, Some(y));
    root
}

/// Rotates `n` down to the right; its left child takes its place.
///
/// Returns the new root.
///
/// # Panics
///
/// Panics if `n` has no left child.
pub fn rotate_right<N: HasParent>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let Some(y) = get_l(arena, n) else {
        panic!("rotate_right on node {n} without a left child");
    };
    trace!("rb rotate right at {n}");
    let p = get_p(arena, n);
    let yr = get_r(arena, y);

    set_l(arena, n, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(n));
    }
    set_p(arena, y, p);
    let root = replace_child(arena, root, p, n, Some(y));
    set_r(arena, y, Some(n));
    set_p(arena, n, Some(y));
    root
}

/// Inserts detached node `n` by descending with `comparator` (equal keys go
/// right) and rebalances. Returns the new root.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        paint(arena, n, Color::Black);
        return Some(n);
    };
    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        let next = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                return if cmp < 0 {
                    insert_left(arena, root, n, curr)
                } else {
                    insert_right(arena, root, n, curr)
                };
            }
        }
    }
}

/// Attaches `n` as the empty right child of `p` and rebalances.
pub fn insert_right<N>(arena: &mut [N], root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: HasParent + Colored,
{
    set_r(arena, p, Some(n));
    set_p(arena, n, Some(p));
    paint(arena, n, Color::Red);
    insert_fixup(arena, root, n)
}

/// Attaches `n` as the empty left child of `p` and rebalances.
pub fn insert_left<N>(arena: &mut [N], root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: HasParent + Colored,
{
    set_l(arena, p, Some(n));
    set_p(arena, n, Some(p));
    paint(arena, n, Color::Red);
    insert_fixup(arena, root, n)
}

/// Restores the coloring rules after red node `z` was attached.
fn insert_fixup<N>(arena: &mut [N], mut root: Option<u32>, mut z: u32) -> Option<u32>
where
    N: HasParent + Colored,
{
    while let Some(p) = get_p(arena, z).filter(|&p| arena[p as usize].is_red()) {
        let g = get_p(arena, p).expect("a red node is never the root");
        if get_l(arena, g) == Some(p) {
            let u = get_r(arena, g);
            if is_red(arena, u) {
                trace!("rb insert fixup at {z}: red uncle, recolor");
                paint(arena, p, Color::Black);
                paint(arena, u.expect("red uncle exists"), Color::Black);
                paint(arena, g, Color::Red);
                z = g;
                continue;
            }
            let mut p = p;
            if get_r(arena, p) == Some(z) {
                trace!("rb insert fixup at {z}: inner grandchild");
                z = p;
                root = rotate_left(arena, root, z);
                p = get_p(arena, z).expect("rotated node has a parent");
            }
            trace!("rb insert fixup at {z}: outer grandchild");
            paint(arena, p, Color::Black);
            paint(arena, g, Color::Red);
            root = rotate_right(arena, root, g);
        } else {
            let u = get_l(arena, g);
            if is_red(arena, u) {
                trace!("rb insert fixup at {z}: red uncle, recolor");
                paint(arena, p, Color::Black);
                paint(arena, u.expect("red uncle exists"), Color::Black);
                paint(arena, g, Color::Red);
                z = g;
                continue;
            }
            let mut p = p;
            if get_l(arena, p) == Some(z) {
                trace!("rb insert fixup at {z}: inner grandchild");
                z = p;
                root = rotate_right(arena, root, z);
                p = get_p(arena, z).expect("rotated node has a parent");
            }
            trace!("rb insert fixup at {z}: outer grandchild");
            paint(arena, p, Color::Black);
            paint(arena, g, Color::Red);
            root = rotate_left(arena, root, g);
        }
    }
    if let Some(r) = root {
        paint(arena, r, Color::Black);
    }
    root
}

/// Unlinks node `z` from the tree and rebalances. Returns the new root.
///
/// A node with two children first trades places (and colors) with its
/// in-order successor, so `z` always leaves from a slot with at most one
/// child. Its arena slot stays allocated and fully detached.
pub fn remove<N>(arena: &mut [N], mut root: Option<u32>, z: u32) -> Option<u32>
where
    N: HasParent + Colored,
{
    if let (Some(_), Some(r)) = (get_l(arena, z), get_r(arena, z)) {
        let successor = first(arena, Some(r)).expect("right subtree is non-empty");
        let z_color = arena[z as usize].color();
        let s_color = arena[successor as usize].color();
        let root_idx = root.expect("tree holding z has a root");
        root = Some(swap(arena, root_idx, z, successor));
        paint(arena, z, s_color);
        paint(arena, successor, z_color);
    }

    let child = get_l(arena, z).or(get_r(arena, z));
    let parent = get_p(arena, z);
    let removed_black = arena[z as usize].is_black();
    root = splice(arena, root, z);

    if removed_black {
        match child {
            Some(c) if arena[c as usize].is_red() => paint(arena, c, Color::Black),
            _ => root = delete_fixup(arena, root, child, parent),
        }
    }
    root
}

/// Resolves the double-black deficiency carried by `x` (possibly nil) whose
/// parent is `parent`.
fn delete_fixup<N>(
    arena: &mut [N],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> Option<u32>
where
    N: HasParent + Colored,
{
    while x != root && is_black(arena, x) {
        let Some(p) = parent else {
            break;
        };
        if get_l(arena, p) == x {
            let mut w = get_r(arena, p).expect("double-black node has a sibling");
            if arena[w as usize].is_red() {
                trace!("rb delete fixup under {p}: red sibling");
                paint(arena, w, Color::Black);
                paint(arena, p, Color::Red);
                root = rotate_left(arena, root, p);
                w = get_r(arena, p).expect("double-black node has a sibling");
            }
            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                trace!("rb delete fixup under {p}: black sibling, black nephews");
                paint(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if is_black(arena, get_r(arena, w)) {
                trace!("rb delete fixup under {p}: inner red nephew");
                paint(arena, get_l(arena, w).expect("red nephew exists"), Color::Black);
                paint(arena, w, Color::Red);
                root = rotate_right(arena, root, w);
                w = get_r(arena, p).expect("double-black node has a sibling");
            }
            trace!("rb delete fixup under {p}: outer red nephew");
            let p_color = arena[p as usize].color();
            paint(arena, w, p_color);
            paint(arena, p, Color::Black);
            paint(arena, get_r(arena, w).expect("red nephew exists"), Color::Black);
            root = rotate_left(arena, root, p);
        } else {
            let mut w = get_l(arena, p).expect("double-black node has a sibling");
            if arena[w as usize].is_red() {
                trace!("rb delete fixup under {p}: red sibling");
                paint(arena, w, Color::Black);
                paint(arena, p, Color::Red);
                root = rotate_right(arena, root, p);
                w = get_l(arena, p).expect("double-black node has a sibling");
            }
            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                trace!("rb delete fixup under {p}: black sibling, black nephews");
                paint(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if is_black(arena, get_l(arena, w)) {
                trace!("rb delete fixup under {p}: inner red nephew");
                paint(arena, get_r(arena, w).expect("red nephew exists"), Color::Black);
                paint(arena, w, Color::Red);
                root = rotate_left(arena, root, w);
                w = get_l(arena, p).expect("double-black node has a sibling");
            }
            trace!("rb delete fixup under {p}: outer red nephew");
            let p_color = arena[p as usize].color();
            paint(arena, w, p_color);
            paint(arena, p, Color::Black);
            paint(arena, get_l(arena, w).expect("red nephew exists"), Color::Black);
            root = rotate_right(arena, root, p);
        }
        x = root;
        break;
    }
    if let Some(x) = x {
        paint(arena, x, Color::Black);
    }
    root
}

/// Black nodes on every path from `node` down to a nil leaf, counting
/// `node` itself. Fails if two paths disagree or a red node has a red child.
pub fn black_height<N>(arena: &[N], node: Option<u32>) -> std::result::Result<usize, String>
where
    N: BinaryNode + Colored,
{
    let Some(node) = node else {
        return Ok(0);
    };

    let l = get_l(arena, node);
    let r = get_r(arena, node);

    if arena[node as usize].is_red() {
        if is_red(arena, l) {
            return Err(format!("Red node {node} has red left child"));
        }
        if is_red(arena, r) {
            return Err(format!("Red node {node} has red right child"));
        }
    }

    let lh = black_height(arena, l)?;
    let rh = black_height(arena, r)?;
    if lh != rh {
        return Err(format!("Black height mismatch under node {node}: {lh} vs {rh}"));
    }

    Ok(lh + usize::from(arena[node as usize].is_black()))
}

/// Validates every red-black invariant plus parent links and key order.
pub fn assert_red_black_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<()>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root_idx) = root else {
        return Ok(());
    };
    if !arena[root_idx as usize].is_black() {
        return Err(ForestError::InvalidTree("Root is not black".to_string()));
    }
    check_links_and_order::<K, N, C>(arena, root, comparator)?;
    black_height(arena, root)?;
    Ok(())
}
