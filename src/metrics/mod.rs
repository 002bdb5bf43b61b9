//! Hit/miss and eviction counters for [`Cache`](crate::cache::Cache).
//!
//! Recording ([`CoreMetricsRecorder`]) is separate from reading
//! ([`CacheMetricsSnapshot`]) so the cache only ever bumps counters and
//! callers only ever see a copied-out snapshot.

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::CacheMetrics;
pub use snapshot::CacheMetricsSnapshot;
pub use traits::CoreMetricsRecorder;
