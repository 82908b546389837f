//! Order-preserving parallel hashing on rayon.

#![forbid(unsafe_code)]

use crate::BatchError;
use rayon::prelude::*;
use sha1hex_digest::hash;

/// Digest of one batch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedInput {
    /// Position of the input in the batch
    pub index: usize,
    /// 40-char lowercase hex digest
    pub hex: String,
}

/// Hash every input on the global rayon pool.
///
/// Results come back in input order. The first failing input aborts the batch.
pub fn hash_all<T>(inputs: &[T]) -> Result<Vec<HashedInput>, BatchError>
where
    T: AsRef<[u8]> + Sync,
{
    let hashed = inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| hash(input).map(|hex| HashedInput { index, hex }))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(hashed)
}

/// Like [`hash_all`], but on a dedicated pool of `threads` workers.
///
/// `threads == 0` lets rayon pick (one per logical CPU).
pub fn hash_all_with_threads<T>(
    inputs: &[T],
    threads: usize,
) -> Result<Vec<HashedInput>, BatchError>
where
    T: AsRef<[u8]> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("sha1hex-worker-{}", i))
        .build()?;

    pool.install(|| hash_all(inputs))
}
