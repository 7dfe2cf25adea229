//! Fixed merge scenarios checked end to end through the public API.
#![allow(clippy::expect_used)]

use upforest_core::{SetId, UnionFind, UnionFindError};

fn forest(n: usize) -> UnionFind {
    UnionFind::new(n).expect("small forest allocates")
}

#[test]
fn chained_pairs_join_transitively() {
    let mut uf = forest(5);
    uf.union(0, 1).expect("0 and 1 merge");
    uf.union(2, 3).expect("2 and 3 merge");
    uf.union(1, 2).expect("the two pairs merge");

    assert_eq!(uf.find(0).expect("in range"), uf.find(3).expect("in range"));
    assert_ne!(uf.find(4).expect("in range"), uf.find(0).expect("in range"));
    assert_eq!(uf.set_count(), 2);
}

#[test]
fn second_identical_union_fails_and_changes_nothing() {
    let mut uf = forest(3);
    uf.union(0, 1).expect("first union succeeds");
    let nodes = uf.nodes().to_vec();
    let sets = uf.set_records().to_vec();

    let err = uf.union(0, 1).expect_err("second union fails");
    assert!(matches!(err, UnionFindError::AlreadySamePartition { .. }));
    assert_eq!(uf.nodes(), nodes.as_slice());
    assert_eq!(uf.set_records(), sets.as_slice());
}

#[test]
fn out_of_range_union_and_find_fail() {
    let mut uf = forest(2);
    assert!(uf.union(0, 5).is_err());
    assert_eq!(
        uf.find(5),
        Err(UnionFindError::InvalidIndex { index: 5, len: 2 })
    );
    assert_eq!(uf.set_count(), 2);
}

#[test]
fn sizes_accumulate_across_merges() {
    let mut uf = forest(5);
    uf.union(0, 1).expect("merge");
    uf.union(0, 2).expect("merge");
    uf.union(3, 4).expect("merge");
    let big = uf.find(0).expect("in range");
    let small = uf.find(3).expect("in range");
    assert_eq!(uf.set_size(big).expect("in range"), 3);
    assert_eq!(uf.set_size(small).expect("in range"), 2);

    let merged = uf.union(2, 4).expect("merge");
    assert_eq!(merged, big);
    assert_eq!(uf.set_size(merged).expect("in range"), 5);
    assert_eq!(uf.set_size(small).expect("in range"), 0);
    assert!(uf.record(small).expect("in range").is_retired());
}

#[test]
fn retired_identifier_is_never_revived() {
    let mut uf = forest(4);
    uf.union(0, 1).expect("merge");
    let retired = SetId::new(1);
    uf.union(2, 3).expect("merge");
    uf.union(3, 1).expect("merge");

    assert_eq!(uf.set_size(retired).expect("in range"), 0);
    for i in 0..4 {
        assert_ne!(uf.find(i).expect("in range"), retired);
    }
    assert_eq!(uf.find(0).expect("in range"), SetId::new(2));
}
