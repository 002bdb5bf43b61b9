//! Example demonstrating runtime policy selection with CacheBuilder.
//!
//! Run with: cargo run --example basic_builder

use evictkit::builder::{CacheBuilder, CachePolicy};

fn main() {
    println!("=== CacheBuilder Examples ===\n");

    // Example 1: LRU Cache
    println!("1. LRU Cache");
    let mut lru = CacheBuilder::new(3)
        .build::<u64, String>(CachePolicy::Lru)
        .expect("valid capacity");

    lru.put(1, "one".to_string());
    lru.put(2, "two".to_string());
    lru.put(3, "three".to_string());

    // Access key 1 to make it most recent
    lru.get(&1);

    // Insert key 4, evicts LRU (key 2)
    lru.put(4, "four".to_string());

    println!("   contains 1? {} (was accessed)", lru.contains(&1));
    println!("   contains 2? {} (evicted as LRU)", lru.contains(&2));
    println!("   contains 4? {} (just inserted)", lru.contains(&4));
    println!();

    // Example 2: FIFO and LIFO ignore reads
    println!("2. FIFO vs LIFO");
    for policy in [CachePolicy::Fifo, CachePolicy::Lifo] {
        let mut cache = CacheBuilder::new(3)
            .build::<u64, String>(policy)
            .expect("valid capacity");
        for i in 1..=3 {
            cache.put(i, format!("value-{i}"));
        }
        cache.get(&1);
        cache.put(4, "four".to_string());
        let evicted: Vec<u64> = (1..=3).filter(|k| !cache.contains(k)).collect();
        println!("   {policy}: evicted {evicted:?}");
    }
    println!();

    // Example 3: LFU Cache
    println!("3. LFU Cache");
    let mut lfu = CacheBuilder::new(3)
        .build::<u64, String>(CachePolicy::Lfu)
        .expect("valid capacity");

    lfu.put(1, "one".to_string());
    lfu.put(2, "two".to_string());
    lfu.put(3, "three".to_string());

    // Access key 1 multiple times
    lfu.get(&1);
    lfu.get(&1);
    lfu.get(&1);

    // Keys 2 and 3 tie at one access; the older one (2) goes
    lfu.put(4, "four".to_string());

    println!("   contains 1? {} (highest frequency)", lfu.contains(&1));
    println!("   contains 2? {} (oldest of the least used)", lfu.contains(&2));
    println!();

    // Example 4: MRU Cache
    println!("4. MRU Cache");
    let mut mru = CacheBuilder::new(3)
        .build::<u64, String>(CachePolicy::Mru)
        .expect("valid capacity");
    for i in 1..=3 {
        mru.put(i, format!("value-{i}"));
    }
    mru.get(&1);
    mru.put(4, "four".to_string());
    println!("   contains 1? {} (most recently used)", mru.contains(&1));
    println!();

    // Example 5: Round-Robin Cache
    println!("5. Round-Robin Cache");
    let mut rr = CacheBuilder::new(3)
        .build::<u64, String>(CachePolicy::RoundRobin)
        .expect("valid capacity");
    for i in 1..=5 {
        rr.put(i, format!("value-{i}"));
    }
    let kept: Vec<u64> = (1..=5).filter(|k| rr.contains(k)).collect();
    println!("   kept after 5 inserts: {kept:?}");
    println!();

    // Example 6: Seeded Random Cache
    println!("6. Random Cache (seeded)");
    let mut random = CacheBuilder::new(3)
        .build::<u64, String>(CachePolicy::Random { seed: Some(42) })
        .expect("valid capacity");
    for i in 1..=10 {
        random.put(i, format!("value-{i}"));
    }
    println!("   len: {} (victims drawn uniformly)", random.len());
    println!();

    // Example 7: Parsing a policy name
    println!("7. Policy From Name");
    for name in ["lru", "rr", "two-q", "arc"] {
        match name.parse::<CachePolicy>() {
            Ok(policy) => println!("   {name:>6} -> {policy}"),
            Err(err) => println!("   {name:>6} -> error: {err}"),
        }
    }
    println!();

    // Example 8: Common operations
    println!("8. Common Operations");
    let mut cache = CacheBuilder::new(10)
        .build::<u64, String>(CachePolicy::two_q())
        .expect("valid capacity");

    cache.put(1, "original".to_string());
    let old = cache.put(1, "updated".to_string());
    println!("   put returned previous: {:?}", old);

    if let Some(value) = cache.get(&1) {
        println!("   get(&1): {}", value);
    }
    println!("   peek(&99): {:?}", cache.peek(&99));

    if let Some(meta) = cache.metadata(&1) {
        println!("   access_count(&1): {}", meta.access_count);
    }

    let m = cache.metrics();
    println!("   hits: {}, hit rate: {:.2}", m.get_hits, m.hit_rate());

    println!("   removed: {:?}", cache.remove(&1));
    println!(
        "   len: {}, capacity: {}, is_empty: {}",
        cache.len(),
        cache.capacity(),
        cache.is_empty()
    );

    match CacheBuilder::new(0).build::<u64, String>(CachePolicy::Lru) {
        Ok(_) => println!("   zero capacity accepted?"),
        Err(err) => println!("   zero capacity: {err}"),
    }
}

// Expected output:
// === CacheBuilder Examples ===
//
// 1. LRU Cache
//    contains 1? true (was accessed)
//    contains 2? false (evicted as LRU)
//    contains 4? true (just inserted)
//
// 2. FIFO vs LIFO
//    fifo: evicted [1]
//    lifo: evicted [3]
//
// 3. LFU Cache
//    contains 1? true (highest frequency)
//    contains 2? false (oldest of the least used)
//
// 4. MRU Cache
//    contains 1? false (most recently used)
//
// 5. Round-Robin Cache
//    kept after 5 inserts: [3, 4, 5]
//
// 6. Random Cache (seeded)
//    len: 3 (victims drawn uniformly)
//
// 7. Policy From Name
//       lru -> lru
//        rr -> round-robin
//     two-q -> 2q
//       arc -> error: unknown cache policy `arc`
//
// 8. Common Operations
//    put returned previous: Some("original")
//    get(&1): updated
//    peek(&99): None
//    access_count(&1): 2
//    hits: 1, hit rate: 1.00
//    removed: Some("updated")
//    len: 0, capacity: 10, is_empty: true
//    zero capacity: capacity must be at least 1
