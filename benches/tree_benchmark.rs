use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tinybtree::BTree;

const SEED: u64 = 42;

fn generate_keys(size: usize, shuffled: bool) -> Vec<String> {
    let mut keys: Vec<String> = (0..size).map(|i| format!("{:08}", i)).collect();
    if shuffled {
        let mut rng = StdRng::seed_from_u64(SEED);
        keys.shuffle(&mut rng);
    }
    keys
}

fn build_tree(keys: &[String]) -> BTree<usize> {
    let mut tree = BTree::new();
    for (i, key) in keys.iter().enumerate() {
        tree.set(key.clone(), i);
    }
    tree
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    group.sample_size(50);

    for size in [1000, 10_000, 100_000].iter() {
        let random_keys = generate_keys(*size, true);
        let sequential_keys = generate_keys(*size, false);

        group.bench_with_input(BenchmarkId::new("random", size), size, |b, _| {
            b.iter(|| black_box(build_tree(&random_keys)))
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| black_box(build_tree(&sequential_keys)))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1000, 10_000, 100_000].iter() {
        let keys = generate_keys(*size, true);
        let tree = build_tree(&keys);

        group.bench_with_input(BenchmarkId::new("hit", size), size, |b, _| {
            b.iter(|| {
                for key in keys.iter().step_by(7) {
                    black_box(tree.get(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("miss", size), size, |b, _| {
            b.iter(|| {
                for key in keys.iter().step_by(7) {
                    black_box(tree.get(&format!("{}x", key)));
                }
            })
        });
    }
    group.finish();
}

fn bench_deletion(c: &mut Criterion) {
    let mut group = c.benchmark_group("deletion");
    group.sample_size(30);

    for size in [1000, 10_000].iter() {
        let keys = generate_keys(*size, true);

        group.bench_with_input(BenchmarkId::new("drain", size), size, |b, _| {
            b.iter(|| {
                let mut tree = build_tree(&keys);
                for key in &keys {
                    black_box(tree.delete(key));
                }
                tree
            })
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [10_000, 100_000].iter() {
        let keys = generate_keys(*size, true);
        let tree = build_tree(&keys);
        let pivot = format!("{:08}", size / 2);

        group.bench_with_input(BenchmarkId::new("scan", size), size, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                tree.scan(|_, _| {
                    count += 1;
                    true
                });
                black_box(count)
            })
        });

        group.bench_with_input(BenchmarkId::new("ascend_from_middle", size), size, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                tree.ascend(&pivot, |_, _| {
                    count += 1;
                    true
                });
                black_box(count)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_lookup,
    bench_deletion,
    bench_traversal
);
criterion_main!(benches);
