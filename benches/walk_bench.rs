// Commit graph walk benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use repodescribe::describe::{CommitGraphWalker, DefaultPriority, TagFilter, TagIndex};
use repodescribe::{DescribeConfig, DescribeEngine, VcsBinding};

mod common;

fn bench_walk_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_linear");
    for size in [1_000, 10_000, 100_000] {
        let (repo, tip) = common::linear_history(size);
        let filter = TagFilter::from_config(&DescribeConfig::default()).unwrap();
        let index = TagIndex::build(repo.list_tags().unwrap(), &filter, &DefaultPriority);
        let start = repo.commit(&tip).unwrap().clone();

        group.bench_with_input(BenchmarkId::new("commits", size), &size, |b, _| {
            b.iter(|| {
                let outcome = CommitGraphWalker::new(&repo, &index).walk(&start).unwrap();
                black_box(outcome)
            });
        });
    }
    group.finish();
}

fn bench_walk_merges(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_merges");
    for branches in [100, 1_000] {
        let (repo, tip) = common::merge_history(branches, 10);
        let filter = TagFilter::from_config(&DescribeConfig::default()).unwrap();
        let index = TagIndex::build(repo.list_tags().unwrap(), &filter, &DefaultPriority);
        let start = repo.commit(&tip).unwrap().clone();

        group.bench_with_input(BenchmarkId::new("branches", branches), &branches, |b, _| {
            b.iter(|| {
                let outcome = CommitGraphWalker::new(&repo, &index).walk(&start).unwrap();
                black_box(outcome)
            });
        });
    }
    group.finish();
}

fn bench_describe_end_to_end(c: &mut Criterion) {
    let (repo, _) = common::linear_history(10_000);
    let engine = DescribeEngine::new();
    let config = DescribeConfig::default();

    c.bench_function("describe_head_10k", |b| {
        b.iter(|| black_box(engine.describe_ref(&repo, "HEAD", &config).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_walk_linear,
    bench_walk_merges,
    bench_describe_end_to_end,
);
criterion_main!(benches);
