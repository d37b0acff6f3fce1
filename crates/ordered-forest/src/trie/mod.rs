//! Prefix trees over symbol sequences.
//!
//! Three encodings share the same walk-and-mark contract:
//!
//! | Type | Encoding | Extra query |
//! |------|----------|-------------|
//! | [`Trie`] | child map keyed by symbol | prefix enumeration, removal |
//! | [`LinkedTrie`] | first-child / next-sibling links | none |
//! | [`IndexedTrie`] | child map plus per-node index sets | [`IndexedTrie::occurrences_of`] |
//!
//! Depth equals sequence length; nothing is rebalanced.

pub mod indexed;
pub mod linked;
#[allow(clippy::module_inception)]
pub mod trie;

pub use indexed::{IndexedTrie, IndexedTrieNode};
pub use linked::{LinkedTrie, LinkedTrieNode};
pub use trie::{Trie, TrieNode};
