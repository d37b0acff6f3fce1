//! Arena-backed ordered trees.
//!
//! Binary search trees, red-black trees, an order-statistics tree and three
//! trie layouts, plus a toolkit of classic tree algorithms that runs over any
//! of their node types.
//!
//! There are no raw pointers: every container owns a `Vec<N>` arena and all
//! links (`l`, `r`, `p`) are `Option<u32>` indices into it. The parent link
//! is therefore a non-owning back-reference, and deleting a node compacts
//! the arena so that its length always equals the container's size.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | Node capability traits, [`Color`], comparator convention |
//! [`node`] | [`TreeNode`], [`RbNode`], [`RankNode`], [`BinaryTreeNode`] |
//! [`util`] | Shared BST primitives: `first`, `next`, `find`, `insert`, `splice`, `release` |
//! [`bst`] | [`BstTree`] and the order-statistics [`RankTree`] |
//! [`red_black`] | [`RbTree`], rotations, fix-ups and the invariant checker |
//! [`trie`] | [`Trie`], [`LinkedTrie`], [`IndexedTrie`] |
//! [`toolkit`] | Traversals, structural and relational queries, path sums, encodings |
//! [`print`] | Box-drawing tree printer |
//! [`config`] | [`TreeConfig`] and [`DuplicatePolicy`] |
//! [`error`] | [`ForestError`] |
//!
//! ```
//! use ordered_forest::RbTree;
//!
//! let mut tree = RbTree::new();
//! for k in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(k);
//! }
//! tree.delete(&30);
//! assert_eq!(tree.keys(), vec![20, 40, 50, 60, 70, 80]);
//! tree.assert_valid().unwrap();
//! ```

pub mod bst;
pub mod config;
pub mod error;
pub mod node;
pub mod print;
pub mod red_black;
pub mod toolkit;
pub mod trie;
pub mod types;
pub mod util;

pub use bst::{BstTree, RankTree};
pub use config::{DuplicatePolicy, TreeConfig};
pub use error::{ForestError, Result};
pub use node::{BinaryTreeNode, RankNode, RbNode, TreeNode};
pub use print::Printable;
pub use red_black::RbTree;
pub use trie::{IndexedTrie, LinkedTrie, Trie};
pub use types::{
    default_comparator, BinaryNode, Color, Colored, HasParent, KeyNode, NodeRef, OrderedContainer,
    Ranked,
};
