mod common;

use std::hint::black_box;

use common::{generate_csv_datasets, generate_sources};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use futures::io::Cursor;
use tally::prelude::*;
use tokio::runtime::Runtime;

/// In-memory sources: measures pairing and the seedless fold alone
fn bench_in_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_in_memory");
    let runtime = Runtime::new().unwrap();

    for size in [1_000, 10_000, 100_000] {
        let (transactions, confirmations) = generate_sources(size, 2);
        let summarizer = ConfirmedTransactionSummarizer::new(transactions, confirmations);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.to_async(&runtime).iter(|| async {
                black_box(summarizer.summarize_confirmed_transactions().await.unwrap())
            });
        });
    }

    group.finish();
}

/// CSV sources: includes async CSV parsing of both inputs
fn bench_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_csv");
    let runtime = Runtime::new().unwrap();

    for size in [1_000, 10_000] {
        let (transactions, confirmations) = generate_csv_datasets(size, 3);
        let transactions: &'static str = Box::leak(transactions.into_boxed_str());
        let confirmations: &'static str = Box::leak(confirmations.into_boxed_str());

        let summarizer = ConfirmedTransactionSummarizer::new(
            from_fn(move || CsvTransactionStream::new(Cursor::new(transactions.as_bytes()))),
            from_fn(move || CsvConfirmationStream::new(Cursor::new(confirmations.as_bytes()))),
        );

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.to_async(&runtime).iter(|| async {
                black_box(summarizer.summarize().await.unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_in_memory, bench_csv);
criterion_main!(benches);
