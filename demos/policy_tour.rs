//! Runs the same access trace through every eviction policy and prints what
//! each one keeps.
//!
//! Run with: cargo run --example policy_tour
//! Show evictions: RUST_LOG=evictkit=trace cargo run --example policy_tour

use evictkit::builder::{CacheBuilder, CachePolicy};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Capacity 4. Keys 1 and 2 are read repeatedly; 10..=15 are a one-pass scan.
const TRACE: &[Op] = &[
    Op::Put(1),
    Op::Put(2),
    Op::Put(3),
    Op::Get(1),
    Op::Get(2),
    Op::Get(1),
    Op::Put(4),
    Op::Put(10),
    Op::Put(11),
    Op::Get(1),
    Op::Put(12),
    Op::Put(13),
    Op::Get(2),
    Op::Put(14),
    Op::Put(15),
    Op::Get(1),
    Op::Get(2),
];

#[derive(Clone, Copy)]
enum Op {
    Get(u32),
    Put(u32),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() {
    init_logging();

    println!("=== Policy Tour (capacity 4) ===\n");
    println!(
        "{:<12} {:>5} {:>6} {:>9}  survivors",
        "policy", "hits", "misses", "evictions"
    );

    for policy in CachePolicy::all() {
        let policy = match policy {
            CachePolicy::Random { .. } => CachePolicy::Random { seed: Some(7) },
            other => other,
        };
        let mut cache = match CacheBuilder::new(4).build::<u32, String>(policy) {
            Ok(cache) => cache,
            Err(err) => {
                eprintln!("{policy}: {err}");
                continue;
            },
        };

        for op in TRACE {
            match *op {
                Op::Put(key) => {
                    cache.put(key, format!("value-{key}"));
                },
                Op::Get(key) => {
                    cache.get(&key);
                },
            }
        }

        let survivors: Vec<u32> = (0..=20).filter(|k| cache.contains(k)).collect();
        let m = cache.metrics();
        println!(
            "{:<12} {:>5} {:>6} {:>9}  {:?}",
            policy.name(),
            m.get_hits,
            m.get_misses,
            m.evicted_entries,
            survivors
        );
    }
}

// Expected output (the random row depends on its seed):
// === Policy Tour (capacity 4) ===
//
// policy        hits misses evictions  survivors
// lru              4      3         6  [12, 13, 14, 15]
// lfu              7      0         6  [1, 2, 14, 15]
// fifo             3      4         6  [12, 13, 14, 15]
// lifo             7      0         6  [1, 2, 3, 15]
// mru              5      2         6  [3, 11, 13, 15]
// random           ?      ?         6  [...]
// round-robin      3      4         6  [12, 13, 14, 15]
// 2q               7      0         6  [1, 2, 14, 15]
