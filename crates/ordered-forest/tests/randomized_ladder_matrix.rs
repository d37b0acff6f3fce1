use std::collections::BTreeSet;

use ordered_forest::{BstTree, RankTree, RbTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 4] = [1, 7, 42, 2024];

#[test]
fn rb_tree_random_ladder_matrix() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();
        for step in 0..2_000 {
            let k: u16 = rng.gen_range(0..500);
            if rng.gen_bool(0.6) {
                assert_eq!(tree.insert(k).is_some(), model.insert(k));
            } else {
                assert_eq!(tree.delete(&k), model.remove(&k));
            }
            if step % 50 == 0 {
                if let Err(err) = tree.assert_valid() {
                    panic!("seed {seed}, step {step}: {err}");
                }
            }
        }
        tree.assert_valid().unwrap();
        assert_eq!(tree.keys(), model.iter().copied().collect::<Vec<_>>());
        let bound = 2.0 * ((tree.size() + 1) as f64).log2();
        assert!(tree.height() as f64 <= bound, "seed {seed}");
    }
}

#[test]
fn bst_and_rank_tree_random_ladder_matrix() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut bst = BstTree::new();
        let mut ranked = RankTree::new();
        let mut model = BTreeSet::new();
        for _ in 0..1_000 {
            let k: i32 = rng.gen_range(-300..300);
            if rng.gen_bool(0.55) {
                if model.insert(k) {
                    assert!(bst.insert(k).is_some());
                    ranked.insert(k);
                }
            } else if model.remove(&k) {
                assert!(bst.delete(&k));
                assert!(ranked.delete(&k));
            } else {
                assert!(!bst.delete(&k));
                assert!(!ranked.delete(&k));
            }
        }
        bst.assert_valid().unwrap();
        ranked.assert_valid().unwrap();
        let expected: Vec<i32> = model.iter().copied().collect();
        assert_eq!(bst.keys(), expected);
        assert_eq!(ranked.keys(), expected);
        for (i, k) in expected.iter().enumerate() {
            assert_eq!(ranked.rank(k), i);
        }
    }
}
