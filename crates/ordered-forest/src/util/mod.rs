//! Arena helpers shared by every parent-linked tree.
//!
//! `find` takes a comparator so it serves both the plain BST and the
//! balanced variants.

pub mod swap;

use log::debug;

use crate::types::{BinaryNode, HasParent, KeyNode};

pub use swap::{swap, swap_keys};

#[inline]
pub(crate) fn get_p<N: HasParent>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: BinaryNode>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: BinaryNode>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: HasParent>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: BinaryNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: BinaryNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points `parent`'s link that currently holds `old` at `new`.
///
/// With no parent, `old` was the root and `new` becomes it.
#[inline]
pub(crate) fn replace_child<N: HasParent>(
    arena: &mut [N],
    root: Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    match parent {
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
        None => new,
    }
}

/// Leftmost node.
pub fn first<N: BinaryNode>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node.
pub fn last<N: BinaryNode>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: HasParent>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: HasParent>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: BinaryNode>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Finds a node by key.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Attaches detached `node` as the left child of `parent`.
pub fn insert_left<N: HasParent>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_l(arena, parent).is_none(), "left slot is occupied");
    set_l(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Attaches detached `node` as the right child of `parent`.
pub fn insert_right<N: HasParent>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_r(arena, parent).is_none(), "right slot is occupied");
    set_r(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Unlinks `node`, which must have at most one child, replacing it with that
/// child. Returns the new root.
pub fn splice<N: HasParent>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    assert!(
        l.is_none() || r.is_none(),
        "splice requires a node with at most one child"
    );
    let child = l.or(r);
    let p = get_p(arena, node);
    if let Some(c) = child {
        set_p(arena, c, p);
    }
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    replace_child(arena, root, p, node, child)
}

/// Frees the slot of a detached node by moving the last arena node into it
/// and patching the moved node's neighbours. Returns the new root.
///
/// Indices of every node other than the moved one stay valid.
pub fn release<N: HasParent>(arena: &mut Vec<N>, root: Option<u32>, node: u32) -> Option<u32> {
    let last = (arena.len() - 1) as u32;
    arena.swap_remove(node as usize);
    if node == last {
        return root;
    }
    debug!("arena compaction: node {last} moved into slot {node}");
    let p = get_p(arena, node);
    if let Some(p) = p {
        if get_l(arena, p) == Some(last) {
            set_l(arena, p, Some(node));
        } else {
            set_r(arena, p, Some(node));
        }
    }
    if let Some(l) = get_l(arena, node) {
        set_p(arena, l, Some(node));
    }
    if let Some(r) = get_r(arena, node) {
        set_p(arena, r, Some(node));
    }
    if root == Some(last) {
        Some(node)
    } else {
        root
    }
}

/// Checks parent back-references and in-order ordering of a parent-linked
/// tree. Used by the container validators.
pub(crate) fn check_links_and_order<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<usize, String>
where
    N: KeyNode<K> + HasParent,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(0);
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    let mut stack = vec![root];
    let mut count = 0;
    while let Some(i) = stack.pop() {
        count += 1;
        for child in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            if get_p(arena, child) != Some(i) {
                return Err(format!("Broken parent link on child {child} of {i}"));
            }
            stack.push(child);
        }
    }
    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) > 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }
    Ok(count)
}
