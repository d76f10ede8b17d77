//! Valkit Demo - Quick Benchmark & Walkthrough
//!
//! Menjalankan:
//! - Micro-benchmark ring buffer (push, pop, overwrite)
//! - Micro-benchmark chaining `Either`
//! - Walkthrough `Maybe` (take, swap, reset)
//!
//! Usage:
//!   cargo run --release --features demo --bin valkit_demo -- [OPTIONS]
//!   RUST_LOG=trace cargo run --features demo --bin valkit_demo -- --skip-bench

use std::hint::black_box;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use valkit::{Either, Failure, Maybe, RingBuffer, Success};

const WINDOW: usize = 8;

/// Demo configuration
#[derive(Parser, Debug)]
#[command(name = "valkit_demo", about = "Valkit value types demo and micro-benchmark")]
struct DemoConfig {
    /// Operasi per benchmark
    #[arg(long, default_value_t = 1_000_000)]
    iterations: usize,

    /// Jumlah sample yang di-push ke window ring buffer (kapasitas 8)
    #[arg(long, default_value_t = 20)]
    window: u32,

    /// Lewati benchmark, hanya jalankan walkthrough
    #[arg(long)]
    skip_bench: bool,

    /// Log level debug (diabaikan jika RUST_LOG di-set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let config = DemoConfig::parse();
    init_tracing(config.verbose);

    info!("Valkit demo starting");
    debug!(?config, "configuration");

    walkthrough_ring_buffer(config.window)?;
    walkthrough_either()?;
    walkthrough_maybe()?;

    if !config.skip_bench {
        ensure!(config.iterations > 0, "--iterations must be greater than 0");
        benchmark_ring_buffer(config.iterations);
        benchmark_either(config.iterations);
    }

    info!("All done");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn walkthrough_ring_buffer(samples: u32) -> Result<()> {
    let mut window: RingBuffer<u32, WINDOW> = RingBuffer::new();
    window.extend(0..samples);

    info!(
        pushed = samples,
        len = window.len(),
        capacity = window.capacity(),
        "ring buffer window filled"
    );

    let expected_oldest = samples.saturating_sub(WINDOW as u32);
    if samples > 0 {
        let oldest = *window.front().context("window should not be empty")?;
        ensure!(
            oldest == expected_oldest,
            "oldest sample {oldest}, expected {expected_oldest}"
        );
    }

    let mut drained = Vec::with_capacity(window.len());
    while let Some(sample) = window.front() {
        drained.push(*sample);
        window.pop();
    }
    info!(?drained, "window drained oldest-first");

    Ok(())
}

fn parse_port(raw: &str) -> Either<u16, String> {
    match raw.parse::<u16>() {
        Ok(port) => Success(port).into(),
        Err(err) => Failure(format!("invalid port {raw:?}: {err}")).into(),
    }
}

fn walkthrough_either() -> Result<()> {
    for raw in ["9999", "http"] {
        let result: Either<u16, String> = parse_port(raw)
            .and_then(|port| {
                if port >= 1024 {
                    Success(port).into()
                } else {
                    Failure(format!("port {port} is privileged")).into()
                }
            })
            .or_else(|err| Failure(format!("Error: {err}")).into());

        match result.as_ref().into_result() {
            Ok(port) => info!(raw, port, "port accepted"),
            Err(err) => info!(raw, %err, "port rejected"),
        }
    }

    let good = parse_port("8080");
    let port = good.value().context("8080 should parse")?;
    ensure!(*port == 8080, "unexpected port {port}");

    Ok(())
}

fn walkthrough_maybe() -> Result<()> {
    let mut cached: Maybe<String> = "session-a".to_string().into();
    let mut spare: Maybe<String> = Maybe::Nothing;

    cached.swap(&mut spare);
    info!(cached = cached.has_value(), spare = spare.has_value(), "after swap");

    let taken = spare.take_value().context("spare should hold the session")?;
    ensure!(!spare.has_value(), "take_value must clear the source");
    info!(%taken, "session moved out");

    cached.reset();
    cached.reset();
    ensure!(!cached.has_value(), "reset must leave Maybe empty");

    Ok(())
}

fn benchmark_ring_buffer(iterations: usize) {
    info!("Ring Buffer Benchmark (overwrite-on-full)");

    let mut rb: RingBuffer<u64, 65536> = RingBuffer::new();

    // Warm up
    for i in 0..1000 {
        rb.push(i);
    }
    for _ in 0..1000 {
        rb.pop();
    }

    // Push, termasuk overwrite saat penuh
    let start = Instant::now();
    for i in 0..iterations {
        rb.push(black_box(i as u64));
    }
    let push_duration = start.elapsed();

    // Pop sampai kosong
    let drained = rb.len();
    let start = Instant::now();
    while let Some(v) = rb.front() {
        black_box(*v);
        rb.pop();
    }
    let pop_duration = start.elapsed();

    let push_ns = push_duration.as_nanos() as f64 / iterations as f64;
    let pop_ns = pop_duration.as_nanos() as f64 / drained.max(1) as f64;

    info!(
        operations = iterations,
        push_ns,
        pop_ns,
        throughput_mops = iterations as f64 / push_duration.as_secs_f64() / 1_000_000.0,
        "ring buffer latency (ns/op)"
    );
}

fn benchmark_either(iterations: usize) {
    info!("Either Benchmark (and_then/or_else chain)");

    let start = Instant::now();
    let mut accepted = 0usize;
    for i in 0..iterations {
        let start_value: Either<u64, &'static str> = if i % 4 == 0 {
            Failure("rejected").into()
        } else {
            Success(i as u64).into()
        };

        let result: Either<u64, &str> = start_value
            .and_then(|v| Success(v.wrapping_mul(31)).into())
            .or_else(|_| Failure("still rejected").into());

        if black_box(result).has_value() {
            accepted += 1;
        }
    }
    let duration = start.elapsed();

    info!(
        operations = iterations,
        accepted,
        chain_ns = duration.as_nanos() as f64 / iterations as f64,
        "either chain latency (ns/op)"
    );
}
