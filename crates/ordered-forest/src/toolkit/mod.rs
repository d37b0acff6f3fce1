//! Stateless tree algorithms.
//!
//! Every function takes an arena slice plus a root (or target) index and
//! returns owned results. Only [`relation::mirror`] and
//! [`build::delete_tree`] mutate, and they say so in their signatures by
//! taking `&mut [N]`.
//!
//! Functions that only need child links accept any [`BinaryNode`]; the
//! parent-walk LCA additionally needs [`HasParent`].
//!
//! [`BinaryNode`]: crate::types::BinaryNode
//! [`HasParent`]: crate::types::HasParent

pub mod build;
pub mod path;
pub mod relation;
pub mod serialize;
pub mod structure;
pub mod traversal;

pub use build::{delete_tree, from_level_order, minimal_from_sorted};
pub use path::{
    count_paths_with_sum, has_path_sum, max_path_sum, max_root_to_leaf_sum,
    root_to_leaf_paths_with_sum,
};
pub use relation::{
    ancestors, covers, depth_of, distance_between, is_identical, is_isomorphic, is_mirror_of,
    is_subtree, is_symmetric, kth_smallest, lca, lca_covers, lca_parent_walk, lca_single_pass,
    mirror, nodes_at_distance, nodes_k_from_leaf, LcaStrategy,
};
pub use serialize::{from_parenthetic, order_string, to_parenthetic};
pub use structure::{
    count_full_nodes, count_leaves, count_nodes, diameter, height, is_balanced, is_balanced_fast,
    is_bst, min_depth, UNBALANCED,
};
pub use traversal::{
    euler_tour, in_order, left_view, level_order, levels, post_order, pre_order,
    reverse_level_order, right_view, spiral_order, vertical_order, EulerVisitor,
};
