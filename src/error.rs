//! Error types for evictkit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: a cache or policy was configured with invalid
//!   parameters (zero capacity, out-of-range 2Q ratios, unknown policy name).
//! - [`InvariantError`]: `check_invariants` found storage and policy
//!   bookkeeping out of step.
//!
//! A cache miss is not an error; `get` returns `None`.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::builder::{CacheBuilder, CachePolicy};
//! use evictkit::error::ConfigError;
//!
//! let err: ConfigError = CacheBuilder::new(0)
//!     .build::<u32, String>(CachePolicy::Lru)
//!     .unwrap_err();
//! assert!(err.message().contains("capacity"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`Cache::new`](crate::cache::Cache::new),
/// [`CacheBuilder::build`](crate::builder::CacheBuilder::build), the
/// fallible 2Q constructor and `CachePolicy::from_str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Error for a capacity below one.
    pub(crate) fn zero_capacity() -> Self {
        Self::new("capacity must be at least 1")
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when storage and policy bookkeeping disagree.
///
/// Produced by [`Cache::check_invariants`](crate::cache::Cache::check_invariants)
/// and the `check_invariants` methods of policies that own several internal
/// structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
