//! Criterion benchmark untuk Ring Buffer dan Either chaining
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use valkit::{Either, Failure, Maybe, RingBuffer, Success};

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    // Push ke buffer penuh: setiap push menimpa elemen paling lama
    group.bench_function("push_overwrite", |b| {
        let mut rb: RingBuffer<u64, 4096> = RingBuffer::new();
        rb.extend(0..4096);
        let mut i = 0u64;
        b.iter(|| {
            rb.push(black_box(i));
            i = i.wrapping_add(1);
        });
    });

    // Benchmark pop
    group.bench_function("front_pop", |b| {
        let mut rb: RingBuffer<u64, 4096> = RingBuffer::new();
        // Pre-fill
        rb.extend(0..2048);
        b.iter(|| {
            if let Some(&v) = rb.front() {
                rb.pop();
                rb.push(black_box(v));
            }
        });
    });

    // Benchmark push+pop cycle
    group.bench_function("push_pop_cycle", |b| {
        let mut rb: RingBuffer<u64, 4096> = RingBuffer::new();
        let mut i = 0u64;
        b.iter(|| {
            rb.push(black_box(i));
            black_box(rb.front());
            rb.pop();
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    // Batch operations, batch > kapasitas memaksa overwrite
    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("batch_{}", batch_size), |b| {
            let mut rb: RingBuffer<u64, 4096> = RingBuffer::new();
            b.iter(|| {
                for i in 0..*batch_size {
                    rb.push(black_box(i as u64));
                }
                while let Some(v) = rb.front() {
                    black_box(*v);
                    rb.pop();
                }
            });
        });
    }

    group.finish();
}

fn bench_value_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_types");
    group.throughput(Throughput::Elements(1));

    group.bench_function("either_chain_success", |b| {
        b.iter(|| {
            let start: Either<u64, &str> = Success(black_box(7)).into();
            let out: Either<u64, &str> = start
                .and_then(|v| Success(v + 1).into())
                .or_else(|e| Failure(e).into());
            black_box(out)
        });
    });

    group.bench_function("either_chain_failure", |b| {
        b.iter(|| {
            let start: Either<u64, &str> = Failure(black_box("bad")).into();
            let out: Either<u64, &str> = start
                .and_then(|v| Success(v + 1).into())
                .or_else(|e| Failure(e).into());
            black_box(out)
        });
    });

    group.bench_function("maybe_swap", |b| {
        let mut lhs: Maybe<u64> = 1.into();
        let mut rhs: Maybe<u64> = Maybe::Nothing;
        b.iter(|| {
            lhs.swap(black_box(&mut rhs));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_throughput, bench_value_types);
criterion_main!(benches);
