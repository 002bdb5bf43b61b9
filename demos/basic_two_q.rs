//! Example demonstrating the 2Q (Two-Queue) cache policy.
//!
//! 2Q keeps new keys in a small probation FIFO (A1in). A key read while on
//! probation is promoted to the protected LRU queue (Am). Keys evicted from
//! probation are remembered as ghosts (A1out); a ghost that is inserted again
//! goes straight to the protected queue.
//!
//! Run with: cargo run --example basic_two_q

use evictkit::cache::Cache;
use evictkit::policy::two_q::TwoQPolicy;

fn main() {
    println!("=== 2Q Cache Example ===\n");

    // Capacity 10 with default ratios:
    // - probation bound: 2 (25%)
    // - ghost bound: 5 (50%)
    let mut cache = Cache::new(10, TwoQPolicy::new(10)).expect("valid capacity");

    println!(
        "Created 2Q cache: capacity={}, probation bound={}, ghost bound={}\n",
        cache.capacity(),
        cache.policy().probation_bound(),
        cache.policy().ghost_bound()
    );

    // Insert items (all start in probation queue)
    for i in 1..=5 {
        cache.put(i, format!("value-{}", i));
    }
    println!("Inserted keys 1-5 (all in probation queue)");
    println!("  probation: {}", cache.policy().probation_len());

    // Access keys 1 and 2 to promote them from probation to protected
    cache.get(&1);
    cache.get(&2);
    println!("\nAccessed keys 1 and 2 (promoted to protected queue)");
    println!("  protected: {}", cache.policy().protected_len());

    // Insert more items to fill the cache
    for i in 6..=10 {
        cache.put(i, format!("value-{}", i));
    }
    println!("Inserted keys 6-10");
    println!("  len: {}", cache.len());

    // Probation is over its bound, so its oldest keys go first
    cache.put(11, "value-11".to_string());
    cache.put(12, "value-12".to_string());

    println!("\nAfter inserting keys 11, 12:");
    println!("  contains 1? {} (protected)", cache.contains(&1));
    println!("  contains 3? {} (evicted from probation)", cache.contains(&3));
    println!("  3 is a ghost? {}", cache.policy().is_ghost(&3));

    // A ghost coming back skips probation
    cache.put(3, "value-3".to_string());
    println!("\nRe-inserted key 3:");
    println!("  3 protected? {}", cache.policy().in_protected(&3));
    println!("  ghosts: {}", cache.policy().ghost_len());

    // Demonstrate scan resistance
    println!("\n=== Scan Resistance Demo ===\n");

    let mut cache = Cache::new(10, TwoQPolicy::new(10)).expect("valid capacity");

    // Insert "hot" items and access them to promote to protected queue
    for i in 1..=3 {
        cache.put(i, format!("hot-{}", i));
        cache.get(&i);
    }
    println!("Inserted and promoted hot items: 1, 2, 3");

    // A scan of one-time insertions only cycles through probation
    println!("Simulating scan with items 100-120...");
    for i in 100..=120 {
        cache.put(i, format!("scan-{}", i));
    }

    println!("\nAfter scan (21 one-time insertions):");
    println!("  contains hot-1? {}", cache.contains(&1));
    println!("  contains hot-2? {}", cache.contains(&2));
    println!("  contains hot-3? {}", cache.contains(&3));
    println!("  len: {}", cache.len());

    let scan_items_remaining: Vec<_> = (100..=120).filter(|&i| cache.contains(&i)).collect();
    println!("  scan items remaining: {:?}", scan_items_remaining);

    match cache.check_invariants() {
        Ok(()) => println!("  invariants: ok"),
        Err(err) => println!("  invariants: {err}"),
    }
}

// Expected output:
// === 2Q Cache Example ===
//
// Created 2Q cache: capacity=10, probation bound=2, ghost bound=5
//
// Inserted keys 1-5 (all in probation queue)
//   probation: 5
//
// Accessed keys 1 and 2 (promoted to protected queue)
//   protected: 2
// Inserted keys 6-10
//   len: 10
//
// After inserting keys 11, 12:
//   contains 1? true (protected)
//   contains 3? false (evicted from probation)
//   3 is a ghost? true
//
// Re-inserted key 3:
//   3 protected? true
//   ghosts: 2
//
// === Scan Resistance Demo ===
//
// Inserted and promoted hot items: 1, 2, 3
// Simulating scan with items 100-120...
//
// After scan (21 one-time insertions):
//   contains hot-1? true
//   contains hot-2? true
//   contains hot-3? true
//   len: 10
//   scan items remaining: [114, 115, 116, 117, 118, 119, 120]
//   invariants: ok
