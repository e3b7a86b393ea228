//! distinct / union / concat / except / intersect

use lazyq_operators::IntoSeq;

#[test]
fn test_distinct() {
    let out = vec![1, 2, 2, 3, 3, 4].into_seq().distinct().to_list();
    assert_eq!(out, vec![1, 2, 3, 4]);
}

#[test]
fn test_union_and_concat_lengths() {
    let a = vec![1, 2, 3];
    let b = vec![3, 4, 5];
    let concat = a.clone().into_seq().concat(b.clone()).to_list();
    assert_eq!(concat, vec![1, 2, 3, 3, 4, 5]);
    assert_eq!(concat.len(), a.len() + b.len());

    let union = a.into_seq().union(b).to_list();
    assert_eq!(union, vec![1, 2, 3, 4, 5]);
    assert!(union.len() <= concat.len());
    let unique = union.clone().into_seq().distinct().count();
    assert_eq!(unique, union.len());
}

#[test]
fn test_union_removes_duplicates_within_one_side() {
    let out = vec![1, 1, 2].into_seq().union(vec![2, 2, 3]).to_list();
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn test_except() {
    let out = vec![1, 2, 3, 4].into_seq().except(vec![3, 4]).to_list();
    assert_eq!(out, vec![1, 2]);

    // Set semantics: duplicates on the left come out once.
    let out = vec![1, 1, 2, 5].into_seq().except(vec![5]).to_list();
    assert_eq!(out, vec![1, 2]);
}

#[test]
fn test_intersect() {
    let out = vec![1, 2, 3, 4]
        .into_seq()
        .intersect(vec![3, 4, 5])
        .to_list();
    assert_eq!(out, vec![3, 4]);

    let out = vec![4, 3, 4, 3].into_seq().intersect(vec![3, 4]).to_list();
    assert_eq!(out, vec![4, 3]);
}

#[test]
fn test_set_ops_on_strings() {
    let left = vec!["Laptop", "Desk", "Chair"];
    let right = vec!["Desk", "Lamp"];
    let only_left = left.clone().into_seq().except(right.clone()).to_list();
    assert_eq!(only_left, vec!["Laptop", "Chair"]);
    let both = left.into_seq().intersect(right).to_list();
    assert_eq!(both, vec!["Desk"]);
}
