use criterion::{criterion_group, criterion_main, Criterion};
use lazyq::prelude::*;

fn make_products(rows: usize) -> Vec<Product> {
    (0..rows)
        .map(|i| {
            Product::new(
                i as i64,
                format!("product-{}", i),
                format!("category-{}", i % 4),
                (i % 997) as f64 * 1.5,
            )
        })
        .collect()
}

fn bench_filter_sort_pipeline(c: &mut Criterion) {
    let products = make_products(10_000);
    c.bench_function("filter_sort_take", |b| {
        b.iter(|| {
            let top = products
                .iter()
                .into_seq()
                .filter(|p| p.price > 100.0)
                .sort_by_descending(|p| p.price)
                .then_by(|p| p.id)
                .take(10)
                .to_list();
            criterion::black_box(top);
        })
    });
}

fn bench_group_by(c: &mut Criterion) {
    let products = make_products(10_000);
    c.bench_function("group_by_category", |b| {
        b.iter(|| {
            let totals = products
                .iter()
                .into_seq()
                .group_by(|p| p.category.clone())
                .map(|g| {
                    let total: f64 = g.iter().map(|p| p.price).sum();
                    (g.key().clone(), total)
                })
                .to_list();
            criterion::black_box(totals);
        })
    });
}

fn bench_join(c: &mut Criterion) {
    let products = make_products(10_000);
    let categories: Vec<String> = (0..4).map(|i| format!("category-{}", i)).collect();
    c.bench_function("join_categories", |b| {
        b.iter(|| {
            let n = categories
                .iter()
                .into_seq()
                .join(
                    products.iter(),
                    |c| c.to_string(),
                    |p| p.category.clone(),
                    |c, p| (c.len(), p.id),
                )
                .count();
            criterion::black_box(n);
        })
    });
}

criterion_group!(
    benches,
    bench_filter_sort_pipeline,
    bench_group_by,
    bench_join
);
criterion_main!(benches);
