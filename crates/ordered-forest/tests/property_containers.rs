use std::collections::BTreeSet;

use ordered_forest::{BstTree, OrderedContainer, RankTree, RbTree, Trie};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Delete(i16),
    Find(i16),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // A narrow key range keeps hits and duplicate inserts frequent.
    let key = -64i16..64;
    let op = prop_oneof![
        50 => key.clone().prop_map(Op::Insert),
        30 => key.clone().prop_map(Op::Delete),
        20 => key.prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..=400)
}

/// Replays `ops` against `container` and a `BTreeSet`, checking agreement
/// and running `validate` after every mutation.
fn replay<C, V>(mut container: C, ops: Vec<Op>, validate: V) -> Result<C, TestCaseError>
where
    C: OrderedContainer<i16>,
    V: Fn(&C) -> ordered_forest::Result<()>,
{
    let mut model = BTreeSet::new();
    for op in ops {
        match op {
            Op::Insert(k) => {
                let inserted = container.insert(k).is_some();
                prop_assert_eq!(inserted, model.insert(k));
            }
            Op::Delete(k) => {
                prop_assert_eq!(container.delete(&k), model.remove(&k));
            }
            Op::Find(k) => {
                prop_assert_eq!(container.contains(&k), model.contains(&k));
            }
        }
        prop_assert_eq!(container.size(), model.len());
        if let Err(err) = validate(&container) {
            return Err(TestCaseError::fail(format!("{err}")));
        }
    }
    Ok(container)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_bst_matches_btreeset(ops in ops_strategy()) {
        let model: BTreeSet<i16> = ops.iter().fold(BTreeSet::new(), |mut m, op| {
            match op {
                Op::Insert(k) => { m.insert(*k); }
                Op::Delete(k) => { m.remove(k); }
                Op::Find(_) => {}
            }
            m
        });
        let tree = replay(BstTree::new(), ops, BstTree::assert_valid)?;
        prop_assert_eq!(tree.keys(), model.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(tree.arena().len(), tree.size());
    }

    #[test]
    fn prop_rb_tree_matches_btreeset_and_stays_balanced(ops in ops_strategy()) {
        let tree = replay(RbTree::new(), ops, RbTree::assert_valid)?;
        let bound = 2.0 * ((tree.size() + 1) as f64).log2();
        prop_assert!(tree.height() as f64 <= bound, "height {} over {}", tree.height(), bound);
        let keys = tree.keys();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_absent_delete_is_a_no_op(
        keys in prop::collection::btree_set(0i16..1000, 0..64),
        absent in 1000i16..2000,
    ) {
        let mut tree = RbTree::new();
        for &k in &keys {
            tree.insert(k);
        }
        let before = tree.keys();
        prop_assert!(!tree.delete(&absent));
        prop_assert_eq!(tree.keys(), before);
        prop_assert_eq!(tree.size(), keys.len());
    }

    #[test]
    fn prop_rank_select_agree_with_sorted_vec(
        keys in prop::collection::vec(-50i32..50, 0..120),
        query in -60i32..60,
    ) {
        let mut tree = RankTree::new();
        for &k in &keys {
            tree.insert(k);
        }
        tree.assert_valid().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut sorted = keys.clone();
        sorted.sort();
        for (i, k) in sorted.iter().enumerate() {
            prop_assert_eq!(tree.select(i), Some(k));
        }
        prop_assert_eq!(tree.rank(&query), sorted.iter().filter(|&&k| k < query).count());

        for k in keys.iter().step_by(2) {
            prop_assert!(tree.delete(k));
            let pos = sorted.binary_search(k).unwrap();
            sorted.remove(pos);
        }
        tree.assert_valid().map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tree.keys(), sorted);
    }

    #[test]
    fn prop_trie_round_trip(
        words in prop::collection::btree_set("[a-d]{0,6}", 0..40),
        lookups in prop::collection::vec("[a-d]{0,6}", 0..20),
    ) {
        let mut trie = Trie::new();
        for w in &words {
            prop_assert!(trie.insert_str(w));
        }
        prop_assert_eq!(trie.len(), words.len());
        for w in &words {
            prop_assert!(trie.contains_str(w, true));
        }
        for p in &lookups {
            prop_assert_eq!(trie.contains_str(p, true), words.contains(p));
            let prefixed = words.iter().any(|w| w.starts_with(p.as_str()));
            prop_assert_eq!(trie.contains_str(p, false), prefixed);
        }
        prop_assert_eq!(trie.words_with_prefix(""), words.iter().cloned().collect::<Vec<_>>());

        for w in words.iter().step_by(2) {
            prop_assert!(trie.remove_str(w));
        }
        for (i, w) in words.iter().enumerate() {
            prop_assert_eq!(trie.contains_str(w, true), i % 2 == 1);
        }
    }
}
