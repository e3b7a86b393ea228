//! count / sum / min / max / average / all / any / contains / aggregate

mod test_data_gen;

use lazyq_core::error::QueryError;
use lazyq_operators::{empty, IntoSeq};
use test_data_gen::full_catalog;

#[test]
fn test_price_aggregates() {
    let products = full_catalog();
    let prices = || products.iter().into_seq().map(|p| p.price);
    assert_eq!(prices().count(), 8);
    assert_eq!(prices().max(), Ok(1200.0));
    assert_eq!(prices().min(), Ok(5.0));
    assert_eq!(prices().average(), Ok(413.125));
    assert_eq!(prices().sum::<f64>(), 3305.0);
}

#[test]
fn test_selector_aggregates() {
    let products = full_catalog();
    let seq = || products.iter().into_seq();
    assert_eq!(seq().max_of(|p| p.price), Ok(1200.0));
    assert_eq!(seq().min_of(|p| p.id), Ok(products[0].id));
    assert_eq!(seq().sum_of(|p| p.price), 3305.0);
    assert_eq!(seq().average_of(|p| p.id.get()), Ok(4.5));
    assert_eq!(seq().count_where(|p| p.category == "Furniture"), 2);
}

#[test]
fn test_count_and_sum_never_fail() {
    assert_eq!(empty::<i32>().count(), 0);
    assert_eq!(empty::<i32>().sum::<i32>(), 0);
}

#[test]
fn test_empty_aggregates_fail() {
    assert_eq!(empty::<f64>().max(), Err(QueryError::EmptySequence("max")));
    assert_eq!(empty::<f64>().min(), Err(QueryError::EmptySequence("min")));
    assert_eq!(
        empty::<i32>().average(),
        Err(QueryError::EmptySequence("average"))
    );
    assert_eq!(
        empty::<String>().aggregate(|a, b| a + &b),
        Err(QueryError::EmptySequence("aggregate"))
    );
}

#[test]
fn test_max_keeps_first_of_ties() {
    // 0.0 and -0.0 compare equal but keep their sign bit.
    let best = vec![0.0_f64, -0.0].into_seq().max().unwrap();
    assert!(!best.is_sign_negative());
    let best = vec![-0.0_f64, 0.0].into_seq().max().unwrap();
    assert!(best.is_sign_negative());
    let least = vec![-0.0_f64, 0.0].into_seq().min().unwrap();
    assert!(least.is_sign_negative());

    let pairs = vec![(1, 'a'), (3, 'b'), (3, 'c')];
    let best = pairs.into_seq().max_of(|p| p.0).unwrap();
    assert_eq!(best, 3);
}

#[test]
fn test_all_and_any() {
    let products = full_catalog();
    assert!(!products.iter().into_seq().all(|p| p.price > 100.0));
    assert!(products
        .iter()
        .into_seq()
        .any(|p| p.category == "Furniture"));

    // Vacuous truth on empty input.
    assert!(empty::<i32>().all(|_| false));
    assert!(!empty::<i32>().any(|_| true));
}

#[test]
fn test_contains() {
    let products = full_catalog();
    let names = || products.iter().into_seq().map(|p| p.name.clone());
    assert!(names().contains("Laptop"));
    assert!(!names().contains("Sofa"));
    assert!(vec![1, 2, 3].into_seq().contains(&2));
}

#[test]
fn test_aggregate_without_seed() {
    let products = full_catalog();
    let joined = products
        .iter()
        .into_seq()
        .take(3)
        .map(|p| p.name.clone())
        .aggregate(|acc, next| format!("{}/ {}", acc, next))
        .unwrap();
    assert_eq!(joined, "Laptop/ Smartphone/ Desk");

    assert_eq!(vec![7].into_seq().aggregate(|a, b| a * b), Ok(7));
}

#[test]
fn test_aggregate_seeded() {
    let total = vec![1, 2, 3, 4]
        .into_seq()
        .aggregate_seeded(10, |acc, n| acc + n);
    assert_eq!(total, 20);
    assert_eq!(empty::<i32>().aggregate_seeded(10, |acc, n| acc + n), 10);
}
