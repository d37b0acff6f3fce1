//! Concrete node shapes.

use crate::types::{BinaryNode, Color, Colored, HasParent, KeyNode, Ranked};

macro_rules! impl_child_links {
    ($ty:ident) => {
        impl<K> BinaryNode for $ty<K> {
            fn l(&self) -> Option<u32> {
                self.l
            }

            fn r(&self) -> Option<u32> {
                self.r
            }

            fn set_l(&mut self, v: Option<u32>) {
                self.l = v;
            }

            fn set_r(&mut self, v: Option<u32>) {
                self.r = v;
            }
        }

        impl<K> KeyNode<K> for $ty<K> {
            fn key(&self) -> &K {
                &self.k
            }

            fn key_mut(&mut self) -> &mut K {
                &mut self.k
            }
        }
    };
}

macro_rules! impl_parent_link {
    ($ty:ident) => {
        impl<K> HasParent for $ty<K> {
            fn p(&self) -> Option<u32> {
                self.p
            }

            fn set_p(&mut self, v: Option<u32>) {
                self.p = v;
            }
        }
    };
}

/// Binary node without a parent link.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryTreeNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
}

impl<K> BinaryTreeNode<K> {
    pub fn new(k: K) -> Self {
        Self { l: None, r: None, k }
    }
}

impl_child_links!(BinaryTreeNode);

/// Binary node with a back-reference to its parent.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
}

impl<K> TreeNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }
}

impl_child_links!(TreeNode);
impl_parent_link!(TreeNode);

impl<K> From<TreeNode<K>> for BinaryTreeNode<K> {
    fn from(node: TreeNode<K>) -> Self {
        Self {
            l: node.l,
            r: node.r,
            k: node.k,
        }
    }
}

/// Red-black tree node. Starts out red.
#[derive(Clone, Debug, PartialEq)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub color: Color,
}

impl<K> RbNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            color: Color::Red,
        }
    }
}

impl_child_links!(RbNode);
impl_parent_link!(RbNode);

impl<K> Colored for RbNode<K> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Order-statistics node: `left_size` counts the nodes of the left subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct RankNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub left_size: usize,
}

impl<K> RankNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            left_size: 0,
        }
    }
}

impl_child_links!(RankNode);
impl_parent_link!(RankNode);

impl<K> Ranked for RankNode<K> {
    fn left_size(&self) -> usize {
        self.left_size
    }

    fn set_left_size(&mut self, n: usize) {
        self.left_size = n;
    }
}
