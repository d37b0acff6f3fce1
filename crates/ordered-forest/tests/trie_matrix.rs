use std::collections::BTreeSet;

use ordered_forest::{IndexedTrie, LinkedTrie, Printable, Trie};

#[test]
fn trie_exact_and_prefix_lookup_matrix() {
    let mut trie = Trie::new();
    for word in ["cat", "car", "dog"] {
        assert!(trie.insert_str(word));
    }
    assert_eq!(trie.len(), 3);

    assert!(trie.contains_str("ca", false));
    assert!(!trie.contains_str("ca", true));
    assert!(trie.contains_str("car", true));
    assert!(trie.contains_str("cat", true));
    assert!(trie.contains_str("dog", true));
    assert!(!trie.contains_str("cow", false));
    assert!(!trie.contains_str("cats", false));
    assert!(trie.contains_str("", false));
    assert!(!trie.contains_str("", true));

    assert!(!trie.insert_str("cat"));
    assert_eq!(trie.len(), 3);
    // root, c, a, t, r, d, o, g
    assert_eq!(trie.node_count(), 8);
}

#[test]
fn trie_prefix_enumeration_matrix() {
    let trie: Trie<char> = ["tea", "ten", "to", "inn", "in", "tea"]
        .iter()
        .map(|w| w.chars())
        .collect();
    assert_eq!(trie.len(), 5);
    assert!(trie.starts_with("te".chars()));
    assert_eq!(trie.count_with_prefix("t".chars()), 3);
    assert_eq!(trie.count_with_prefix("in".chars()), 2);
    assert_eq!(trie.count_with_prefix("x".chars()), 0);
    assert_eq!(trie.count_with_prefix("".chars()), 5);
    assert_eq!(trie.words_with_prefix("t"), vec!["tea", "ten", "to"]);
    assert_eq!(trie.words_with_prefix(""), vec!["in", "inn", "tea", "ten", "to"]);
    assert!(trie.words_with_prefix("z").is_empty());
}

#[test]
fn trie_remove_prunes_and_recycles_matrix() {
    let mut trie = Trie::new();
    trie.insert_str("in");
    trie.insert_str("inn");
    trie.insert_str("tea");
    let before = trie.node_count();

    assert!(!trie.remove_str("te"));
    assert!(!trie.remove_str("x"));
    assert!(trie.remove_str("inn"));
    assert!(!trie.contains_str("inn", true));
    assert!(trie.contains_str("in", true));
    assert_eq!(trie.node_count(), before - 1);

    assert!(trie.remove_str("tea"));
    assert!(!trie.contains_str("t", false));
    assert_eq!(trie.node_count(), before - 4);
    assert_eq!(trie.len(), 1);

    // Freed slots are reused before the arena grows.
    trie.insert_str("top");
    assert_eq!(trie.node_count(), before - 1);
    assert!(trie.contains_str("top", true));

    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    assert!(!trie.contains_str("in", false));
}

#[test]
fn trie_generic_symbols_matrix() {
    let mut trie: Trie<u8> = Trie::new();
    trie.insert(b"GATTACA".iter().copied());
    trie.insert(b"GAT".iter().copied());
    trie.insert(Vec::<u8>::new());
    assert_eq!(trie.len(), 3);
    assert!(trie.contains(Vec::<u8>::new(), true));
    assert!(trie.contains(b"GATT".iter().copied(), false));
    assert_eq!(
        trie.sequences_with_prefix(b"GA".iter().copied()),
        vec![b"GAT".to_vec(), b"GATTACA".to_vec()]
    );
    assert!(trie.walk(b"GX".iter().copied()).is_none());
}

#[test]
fn trie_print_matrix() {
    let mut trie = Trie::new();
    trie.insert_str("ab");
    trie.insert_str("b");
    let out = trie.to_string_with_tab(None);
    assert!(out.starts_with("Trie"));
    assert!(out.contains("├─ 'a'"));
    assert!(out.contains("'b' ✓"));
}

#[test]
fn linked_trie_matrix() {
    let mut trie = LinkedTrie::new();
    for word in ["cat", "car", "dog", "ca"] {
        assert!(trie.insert(word.chars()));
    }
    assert!(!trie.insert("car".chars()));
    assert_eq!(trie.len(), 4);

    assert!(trie.contains("ca".chars(), true));
    assert!(trie.contains("do".chars(), false));
    assert!(!trie.contains("do".chars(), true));
    assert!(!trie.contains("cab".chars(), false));

    let words: Vec<String> = trie
        .sequences()
        .into_iter()
        .map(|w| w.into_iter().collect())
        .collect();
    assert_eq!(words, vec!["ca", "car", "cat", "dog"]);

    // Siblings stay sorted whatever the insertion order.
    let root = trie.node(0);
    let c = root.first_child.unwrap();
    assert_eq!(trie.node(c).symbol, Some('c'));
    let d = trie.node(c).next_sibling.unwrap();
    assert_eq!(trie.node(d).symbol, Some('d'));
    assert!(trie.node(d).next_sibling.is_none());
}

#[test]
fn indexed_trie_occurrences_matrix() {
    let trie = IndexedTrie::from_text("bananas");
    assert_eq!(trie.occurrences_of_str("ana"), BTreeSet::from([1, 3]));
    assert_eq!(trie.occurrences_of_str("nas"), BTreeSet::from([4]));
    assert_eq!(trie.occurrences_of_str("a"), BTreeSet::from([1, 3, 5]));
    assert_eq!(trie.occurrences_of_str("bananas"), BTreeSet::from([0]));
    assert!(trie.occurrences_of_str("nab").is_empty());
    assert!(trie.occurrences_of_str("").is_empty());
    assert!(trie.contains("nas".chars(), true));
    assert!(!trie.contains("na".chars(), true));
    assert!(trie.contains("na".chars(), false));

    let mut words = IndexedTrie::new();
    words.insert_at("apple".chars(), 10);
    words.insert_at("apply".chars(), 20);
    words.insert_at("bat".chars(), 30);
    assert_eq!(words.occurrences_of("appl".chars()), BTreeSet::from([10, 20]));
    assert_eq!(words.occurrences_of("b".chars()), BTreeSet::from([30]));
    assert_eq!(words.node_count(), 1 + 6 + 3);
}
