//! Multi-threaded hashing of independent inputs.
//!
//! A single message is an inherently sequential block chain, so parallelism
//! only exists across inputs.

#![forbid(unsafe_code)]

mod error;
pub mod parallel;

pub use error::BatchError;
pub use parallel::{hash_all, hash_all_with_threads, HashedInput};
