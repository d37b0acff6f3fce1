//! Node capability traits.
//!
//! Nodes live in a [`Vec`]-backed arena owned by their container. Every
//! link is an `Option<u32>` index into that arena, so the parent link is a
//! plain back-reference and never a second owner. Algorithms take the arena
//! as a slice and work with indices.

/// Index of a node inside its container's arena.
///
/// Valid until the next mutation of the owning container.
pub type NodeRef = u32;

/// Child links (`l`, `r`).
pub trait BinaryNode {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Non-owning parent link (`p`).
pub trait HasParent: BinaryNode {
    fn p(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
}

/// Node carrying an ordered key.
pub trait KeyNode<K>: BinaryNode {
    fn key(&self) -> &K;
    fn key_mut(&mut self) -> &mut K;

    fn set_key(&mut self, key: K) {
        *self.key_mut() = key;
    }
}

/// Node color of a red-black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Black,
}

/// Red-black coloring.
pub trait Colored {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }
}

/// Left-subtree size counter of an order-statistics node.
pub trait Ranked {
    fn left_size(&self) -> usize;
    fn set_left_size(&mut self, n: usize);
}

/// Comparator used when none is supplied.
///
/// Incomparable values (e.g. `NaN`) order after everything else.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Common surface of the ordered containers in this crate.
pub trait OrderedContainer<K> {
    /// Inserts `key`, returning its node unless the key was rejected.
    fn insert(&mut self, key: K) -> Option<NodeRef>;
    /// Removes one node holding `key`. Returns `false` when absent.
    fn delete(&mut self, key: &K) -> bool;
    fn find(&self, key: &K) -> Option<NodeRef>;
    fn size(&self) -> usize;
    fn clear(&mut self);

    fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
