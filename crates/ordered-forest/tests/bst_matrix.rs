use ordered_forest::config::{DuplicatePolicy, TreeConfig};
use ordered_forest::node::TreeNode;
use ordered_forest::types::default_comparator;
use ordered_forest::util::{
    find, first, insert_left, insert_right, last, next, prev, size, splice, swap, swap_keys,
};
use ordered_forest::{BstTree, ForestError, OrderedContainer, Printable};

fn cmp_i32(a: &i32, b: &i32) -> i32 {
    default_comparator(a, b)
}

fn build(keys: &[i32]) -> BstTree<i32> {
    let mut tree = BstTree::new();
    for &k in keys {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    tree
}

#[test]
fn bst_insert_find_and_order_matrix() {
    let tree = build(&[50, 30, 70, 20, 40, 60, 80]);
    assert_eq!(tree.size(), 7);
    assert_eq!(tree.keys(), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.key(tree.root().unwrap()), &50);
    assert_eq!(tree.key(tree.first().unwrap()), &20);
    assert_eq!(tree.key(tree.last().unwrap()), &80);

    for k in [20, 30, 40, 50, 60, 70, 80] {
        let node = tree.find(&k).unwrap();
        assert_eq!(tree.key(node), &k);
    }
    for k in [0, 25, 55, 90] {
        assert!(tree.find(&k).is_none());
        assert!(!tree.contains(&k));
    }

    let forty = tree.find(&40).unwrap();
    assert_eq!(tree.key(tree.successor(forty).unwrap()), &50);
    assert_eq!(tree.key(tree.predecessor(forty).unwrap()), &30);
    let eighty = tree.find(&80).unwrap();
    assert!(tree.successor(eighty).is_none());
}

#[test]
fn bst_duplicate_policy_matrix() {
    let mut tree = build(&[5, 3, 8]);
    assert_eq!(tree.insert(5), None);
    assert_eq!(tree.size(), 3);

    let mut multi = BstTree::with_config(
        cmp_i32 as fn(&i32, &i32) -> i32,
        TreeConfig::default().with_duplicates(DuplicatePolicy::Allow),
    );
    for k in [5, 3, 5, 8, 5] {
        assert!(multi.insert(k).is_some());
        multi.assert_valid().unwrap();
    }
    assert_eq!(multi.keys(), vec![3, 5, 5, 5, 8]);
    assert!(multi.delete(&5));
    assert!(multi.delete(&5));
    multi.assert_valid().unwrap();
    assert_eq!(multi.keys(), vec![3, 5, 8]);

    tree.delete(&5);
    assert_eq!(tree.keys(), vec![3, 8]);
}

#[test]
fn bst_delete_cases_matrix() {
    // Leaf, one child, two children, root.
    let mut tree = build(&[50, 30, 70, 20, 40, 60, 80, 65]);

    assert!(tree.delete(&20));
    tree.assert_valid().unwrap();
    assert_eq!(tree.keys(), vec![30, 40, 50, 60, 65, 70, 80]);

    assert!(tree.delete(&60));
    tree.assert_valid().unwrap();
    assert_eq!(tree.keys(), vec![30, 40, 50, 65, 70, 80]);

    assert!(tree.delete(&70));
    tree.assert_valid().unwrap();
    assert_eq!(tree.keys(), vec![30, 40, 50, 65, 80]);

    assert!(tree.delete(&50));
    tree.assert_valid().unwrap();
    assert_eq!(tree.keys(), vec![30, 40, 65, 80]);
    assert_eq!(tree.key(tree.root().unwrap()), &65);

    assert!(!tree.delete(&50));
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.arena().len(), 4);

    for k in [30, 40, 65, 80] {
        assert!(tree.delete(&k));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert!(tree.root().is_none());
}

#[test]
fn bst_sorted_input_degenerates_without_recursion_matrix() {
    let keys: Vec<i32> = (0..5_000).collect();
    let mut tree = BstTree::new();
    for &k in &keys {
        tree.insert(k);
    }
    assert_eq!(tree.height(), keys.len());
    assert_eq!(tree.keys(), keys);
    assert!(tree.contains(&4_999));
    for k in (0..5_000).step_by(2) {
        assert!(tree.delete(&k));
    }
    assert_eq!(tree.size(), 2_500);
    assert_eq!(tree.keys(), (1..5_000).step_by(2).collect::<Vec<_>>());
}

#[test]
fn bst_capacity_matrix() {
    let mut tree = BstTree::with_config(
        cmp_i32 as fn(&i32, &i32) -> i32,
        TreeConfig::default().with_capacity(2),
    );
    assert!(tree.try_insert(1).unwrap().is_some());
    assert!(tree.try_insert(2).unwrap().is_some());
    assert_eq!(tree.try_insert(2), Ok(None));
    assert_eq!(
        tree.try_insert(3),
        Err(ForestError::CapacityExhausted { capacity: 2 })
    );
    tree.delete(&1);
    assert!(tree.try_insert(3).unwrap().is_some());
    assert_eq!(tree.keys(), vec![2, 3]);
}

#[test]
#[should_panic(expected = "capacity of 1 nodes reached")]
fn bst_insert_panics_when_full_matrix() {
    let mut tree = BstTree::with_config(
        cmp_i32 as fn(&i32, &i32) -> i32,
        TreeConfig::default().with_capacity(1),
    );
    tree.insert(1);
    tree.insert(2);
}

#[test]
fn bst_custom_comparator_matrix() {
    let mut tree = BstTree::with_comparator(|a: &i32, b: &i32| default_comparator(b, a));
    for k in [1, 5, 3, 4, 2] {
        tree.insert(k);
    }
    tree.assert_valid().unwrap();
    assert_eq!(tree.keys(), vec![5, 4, 3, 2, 1]);

    let mut words = BstTree::with_comparator(|a: &&str, b: &&str| a.len() as i32 - b.len() as i32);
    words.insert("ccc");
    words.insert("a");
    words.insert("bb");
    assert_eq!(words.insert("zz"), None);
    assert_eq!(words.keys(), vec!["a", "bb", "ccc"]);
}

#[test]
fn bst_ordered_container_trait_matrix() {
    fn fill<C: OrderedContainer<i32>>(c: &mut C) {
        for k in [3, 1, 2] {
            c.insert(k);
        }
    }
    let mut tree = BstTree::new();
    fill(&mut tree);
    assert_eq!(OrderedContainer::size(&tree), 3);
    assert!(OrderedContainer::contains(&tree, &2));
    assert!(OrderedContainer::delete(&mut tree, &2));
    assert!(!OrderedContainer::contains(&tree, &2));
    OrderedContainer::clear(&mut tree);
    assert!(OrderedContainer::is_empty(&tree));
}

#[test]
fn bst_from_root_validation_matrix() {
    let mut arena = vec![TreeNode::new(2), TreeNode::new(1), TreeNode::new(3)];
    arena[0].l = Some(1);
    arena[0].r = Some(2);
    arena[1].p = Some(0);
    arena[2].p = Some(0);
    let cmp = cmp_i32 as fn(&i32, &i32) -> i32;
    let tree = BstTree::from_root(cmp, arena.clone(), Some(0)).unwrap();
    assert_eq!(tree.keys(), vec![1, 2, 3]);

    let mut broken = arena.clone();
    broken[2].p = None;
    assert!(matches!(
        BstTree::from_root(cmp_i32 as fn(&i32, &i32) -> i32, broken, Some(0)),
        Err(ForestError::InvalidTree(_))
    ));

    let mut misordered = arena.clone();
    misordered[1].k = 9;
    assert!(BstTree::from_root(cmp_i32 as fn(&i32, &i32) -> i32, misordered, Some(0)).is_err());

    let mut orphan = arena;
    orphan.push(TreeNode::new(7));
    assert!(BstTree::from_root(cmp_i32 as fn(&i32, &i32) -> i32, orphan, Some(0)).is_err());
}

#[test]
fn bst_clear_and_reuse_matrix() {
    let mut tree = build(&[2, 1, 3]);
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.first().is_none());
    tree.insert(10);
    assert_eq!(tree.keys(), vec![10]);
}

#[test]
fn bst_print_matrix() {
    let tree = build(&[2, 1, 3]);
    let out = tree.to_string_with_tab(None);
    assert!(out.starts_with("BstTree\n└─ 2"));
    assert!(out.contains("← 1"));
    assert!(out.contains("→ 3"));
    assert_eq!(BstTree::<i32>::new().to_string_with_tab(None), "BstTree ∅");
}

#[test]
fn util_navigation_matrix() {
    let tree = build(&[8, 4, 12, 2, 6, 10, 14]);
    let arena = tree.arena();
    let root = tree.root();

    let mut forward = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        forward.push(arena[i as usize].k);
        curr = next(arena, i);
    }
    assert_eq!(forward, vec![2, 4, 6, 8, 10, 12, 14]);

    let mut backward = Vec::new();
    let mut curr = last(arena, root);
    while let Some(i) = curr {
        backward.push(arena[i as usize].k);
        curr = prev(arena, i);
    }
    assert_eq!(backward, vec![14, 12, 10, 8, 6, 4, 2]);

    assert_eq!(size(arena, root), 7);
    assert_eq!(find(arena, root, &7, &cmp_i32), None);
    assert_eq!(find(arena, root, &10, &cmp_i32).map(|i| arena[i as usize].k), Some(10));
}

#[test]
fn util_swap_adjacent_and_distant_matrix() {
    let tree = build(&[8, 4, 12, 2, 6, 10, 14]);
    let mut arena = tree.arena().to_vec();
    let root = tree.root().unwrap();
    let four = tree.find(&4).unwrap();
    let six = tree.find(&6).unwrap();

    // Parent and child.
    let root = swap(&mut arena, root, four, six);
    assert_eq!(arena[six as usize].p, Some(root));
    assert_eq!(arena[six as usize].r, Some(four));
    assert_eq!(arena[four as usize].p, Some(six));
    // Back again, through the root.
    let root = swap(&mut arena, root, six, four);
    let root = swap(&mut arena, root, root, four);
    assert_eq!(root, four);
    assert_eq!(arena[four as usize].p, None);
    assert_eq!(size(&arena, Some(root)), 7);
}

#[test]
fn util_swap_siblings_matrix() {
    let tree = build(&[8, 4, 12, 2, 6, 10, 14]);
    let mut arena = tree.arena().to_vec();
    let root = tree.root().unwrap();
    let four = tree.find(&4).unwrap();
    let twelve = tree.find(&12).unwrap();
    let two = tree.find(&2).unwrap();
    let ten = tree.find(&10).unwrap();

    let root = swap(&mut arena, root, four, twelve);
    assert_eq!(arena[root as usize].l, Some(twelve));
    assert_eq!(arena[root as usize].r, Some(four));
    assert_eq!(arena[twelve as usize].p, Some(root));
    assert_eq!(arena[four as usize].p, Some(root));
    // Subtrees stay with their positions, not with the moved nodes.
    assert_eq!(arena[twelve as usize].l, Some(two));
    assert_eq!(arena[two as usize].p, Some(twelve));
    assert_eq!(arena[four as usize].l, Some(ten));
    assert_eq!(arena[ten as usize].p, Some(four));

    // Trading keys as well restores the search order.
    swap_keys(&mut arena, four, twelve);
    let cmp = cmp_i32 as fn(&i32, &i32) -> i32;
    let restored = BstTree::from_root(cmp, arena.clone(), Some(root)).unwrap();
    assert_eq!(restored.keys(), vec![2, 4, 6, 8, 10, 12, 14]);

    // Leaf siblings under a non-root parent.
    let left_leaf = arena[twelve as usize].l.unwrap();
    let right_leaf = arena[twelve as usize].r.unwrap();
    let root = swap(&mut arena, root, left_leaf, right_leaf);
    assert_eq!(arena[twelve as usize].l, Some(right_leaf));
    assert_eq!(arena[twelve as usize].r, Some(left_leaf));
    assert_eq!(size(&arena, Some(root)), 7);
}

#[test]
fn util_attach_and_splice_matrix() {
    let mut arena: Vec<TreeNode<i32>> = [5, 2, 8, 2, 9].into_iter().map(TreeNode::new).collect();
    insert_left(&mut arena, 1, 0);
    insert_right(&mut arena, 2, 0);
    insert_right(&mut arena, 3, 1);
    insert_right(&mut arena, 4, 2);
    let root = Some(0);
    assert_eq!(arena[1].r, Some(3));
    assert_eq!(arena[3].p, Some(1));
    let tree = BstTree::from_root(cmp_i32 as fn(&i32, &i32) -> i32, arena.clone(), root).unwrap();
    assert_eq!(tree.keys(), vec![2, 2, 5, 8, 9]);

    let eight = find(&arena, root, &8, &cmp_i32).unwrap();
    let root = splice(&mut arena, root, eight);
    assert_eq!(arena[0].r, Some(4));
    assert_eq!(arena[4].p, Some(0));
    assert_eq!(arena[eight as usize].p, None);
    assert_eq!(size(&arena, root), 4);
}

#[test]
#[should_panic(expected = "at most one child")]
fn util_splice_rejects_two_children_matrix() {
    let tree = build(&[2, 1, 3]);
    let mut arena = tree.arena().to_vec();
    splice(&mut arena, tree.root(), tree.root().unwrap());
}
