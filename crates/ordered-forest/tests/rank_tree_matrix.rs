use ordered_forest::types::Ranked;
use ordered_forest::RankTree;

fn checked(keys: &[i32]) -> RankTree<i32> {
    let mut tree = RankTree::new();
    for &k in keys {
        tree.insert(k);
        if let Err(err) = tree.assert_valid() {
            panic!("invalid rank tree after insert({k}): {err}");
        }
    }
    tree
}

#[test]
fn rank_and_select_matrix() {
    let tree = checked(&[50, 30, 70, 20, 40, 60, 80]);
    let sorted = [20, 30, 40, 50, 60, 70, 80];
    for (i, k) in sorted.iter().enumerate() {
        assert_eq!(tree.rank(k), i);
        assert_eq!(tree.select(i), Some(k));
    }
    assert_eq!(tree.select(7), None);
    assert_eq!(tree.rank(&0), 0);
    assert_eq!(tree.rank(&45), 3);
    assert_eq!(tree.rank(&100), 7);

    let root = tree.root().unwrap();
    assert_eq!(tree.arena()[root as usize].left_size(), 3);
}

#[test]
fn rank_with_duplicates_matrix() {
    let tree = checked(&[5, 5, 1, 5, 9]);
    assert_eq!(tree.keys(), vec![1, 5, 5, 5, 9]);
    assert_eq!(tree.rank(&5), 1);
    assert_eq!(tree.rank(&6), 4);
    assert_eq!(tree.select(3), Some(&5));
    assert_eq!(tree.select(4), Some(&9));
}

#[test]
fn rank_delete_keeps_counters_matrix() {
    let mut tree = checked(&[50, 30, 70, 20, 40, 60, 80, 35, 45]);
    for k in [30, 50, 20, 45, 99] {
        let had = tree.contains(&k);
        assert_eq!(tree.delete(&k), had);
        if let Err(err) = tree.assert_valid() {
            panic!("invalid rank tree after delete({k}): {err}");
        }
    }
    let keys = tree.keys();
    assert_eq!(keys, vec![35, 40, 60, 70, 80]);
    for (i, k) in keys.iter().enumerate() {
        assert_eq!(tree.rank(k), i);
        assert_eq!(tree.select(i), Some(k));
    }
    assert_eq!(tree.size(), 5);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.select(0), None);
}
