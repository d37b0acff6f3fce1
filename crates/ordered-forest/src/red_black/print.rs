use std::fmt::Debug;

use crate::print::print_node;
use crate::types::{Colored, KeyNode};

/// Debug printer for red-black trees: one line per node with its slot,
/// color and key.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: KeyNode<K> + Colored,
{
    match node {
        None => "∅".to_string(),
        Some(i) => print_node(arena, i, tab, &|idx, n: &N| {
            let color = if n.is_black() { "black" } else { "red" };
            format!("Node[{idx}] {color} {:?}", n.key())
        }),
    }
}
