//! Example sharing one cache between threads.
//!
//! Run with: cargo run --example concurrent
//! Show evictions: RUST_LOG=evictkit=trace cargo run --example concurrent

use std::sync::{Arc, Barrier};
use std::thread;

use evictkit::builder::{CacheBuilder, CachePolicy};
use evictkit::sync::ConcurrentCache;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const THREADS: u64 = 4;
const OPS_PER_THREAD: u64 = 10_000;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let cache = CacheBuilder::new(256)
        .build::<u64, u64>(CachePolicy::Lfu)
        .map(ConcurrentCache::from_cache)
        .expect("valid capacity");
    let barrier = Arc::new(Barrier::new(THREADS as usize));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = cache.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..OPS_PER_THREAD {
                    // every thread shares hot keys 0..32, plus its own cold keys
                    let key = if i % 2 == 0 { i % 32 } else { 1_000 * (t + 1) + i };
                    if cache.get(&key).is_none() {
                        cache.put(key, i);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let m = cache.metrics();
    println!("=== Concurrent LFU Cache ===\n");
    println!("threads: {THREADS}, ops per thread: {OPS_PER_THREAD}");
    println!("len: {} / {}", m.cache_len, m.capacity);
    println!("gets: {} (hit rate {:.2})", m.get_calls, m.hit_rate());
    println!("evictions: {}", m.evicted_entries);

    let hot_resident = (0..32).filter(|k| cache.contains(k)).count();
    println!("hot keys resident: {hot_resident}/32");

    let consistent = cache.with(|c| c.check_invariants().is_ok());
    println!("storage and policy agree: {consistent}");
}

// Expected output (counts vary between runs):
// === Concurrent LFU Cache ===
//
// threads: 4, ops per thread: 10000
// len: 256 / 256
// gets: 40000 (hit rate 0.50)
// evictions: ...
// hot keys resident: 32/32
// storage and policy agree: true
