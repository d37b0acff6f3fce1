//! Red-black balancing layer.
//!
//! [`util`] holds the arena-level primitives (rotations, insert and delete
//! fix-up, validator); [`RbTree`] wraps them in an ordered container.

pub mod print;
pub mod tree;
pub mod util;

pub use crate::node::RbNode;
pub use print::print;
pub use tree::RbTree;
pub use util::{
    assert_red_black_tree, black_height, insert, insert_left, insert_right, remove, rotate_left,
    rotate_right,
};
