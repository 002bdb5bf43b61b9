//! Eviction policies.
//!
//! Each module holds one independent [`EvictionPolicy`](crate::traits::EvictionPolicy)
//! implementation. Policies track keys only; values live in
//! [`Cache`](crate::cache::Cache).
//!
//! | Policy        | Victim                                   | Reads affect order |
//! |---------------|------------------------------------------|--------------------|
//! | [`lru`]       | least recently read or written           | yes                |
//! | [`lfu`]       | lowest access count, oldest within ties  | yes                |
//! | [`fifo`]      | oldest insertion                         | no                 |
//! | [`lifo`]      | newest insertion                         | no                 |
//! | [`mru`]       | most recently read or written            | yes                |
//! | [`random`]    | uniform random                           | no                 |
//! | [`round_robin`] | key under a rotating cursor            | no                 |
//! | [`two_q`]     | probation FIFO head, else protected LRU  | yes                |

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;
pub mod random;
pub mod round_robin;
pub mod two_q;
