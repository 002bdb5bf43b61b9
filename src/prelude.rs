pub use crate::builder::{CacheBuilder, CachePolicy};
pub use crate::cache::{Cache, EntryMetadata};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::metrics::CacheMetricsSnapshot;
pub use crate::policy::fifo::FifoPolicy;
pub use crate::policy::lfu::LfuPolicy;
pub use crate::policy::lifo::LifoPolicy;
pub use crate::policy::lru::LruPolicy;
pub use crate::policy::mru::MruPolicy;
pub use crate::policy::random::RandomPolicy;
pub use crate::policy::round_robin::RoundRobinPolicy;
pub use crate::policy::two_q::TwoQPolicy;
pub use crate::sync::ConcurrentCache;
pub use crate::traits::{DynPolicy, EvictionPolicy, ReadOnlyCache};
