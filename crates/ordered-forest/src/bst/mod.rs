//! Unbalanced ordered trees over parent-linked nodes.
//!
//! - [`BstTree`]: binary search tree with a configurable duplicate policy.
//! - [`RankTree`]: order-statistics tree answering `rank` / `select`.

pub mod rank;
pub mod tree;

pub use rank::RankTree;
pub use tree::BstTree;
