//! Fixed-size parallel work distribution.

use crate::core::targets;
use crate::error::PoolError;
use rayon::prelude::*;

/// A fixed pool of worker threads exposing a single barrier operation:
/// [`WorkerPool::dispatch`] fans independent per-item work out across the
/// pool and blocks the caller until every item has completed.
///
/// Task-to-thread assignment is arbitrary. Tasks must be independent of each
/// other; there is no cancellation, and a panicking task propagates to the
/// caller of `dispatch` once the rest of the batch has finished (via
/// `rayon`'s `panic_fuse`, so one panic doesn't strand the others).
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    pub fn new(num_threads: usize) -> Result<Self, PoolError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|source| PoolError::Build { requested: num_threads, source })?;
        tracing::debug!(target: targets::POOL, num_threads, "built worker pool");
        Ok(Self { pool })
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `f(i, item)` for every `(i, item)` in `items`, in parallel, and
    /// blocks until all have completed.
    ///
    /// Each item is consumed by exactly one call to `f`, so this is the
    /// mechanism by which per-row mutable state (e.g. a disjoint row slice
    /// of the image's sample scratch buffer) is handed to exactly one
    /// worker: there is no other shared mutable state for `f` to race on.
    pub fn dispatch<T: Send, F: Fn(usize, T) + Sync>(&self, items: Vec<T>, f: F) {
        self.pool.install(|| {
            items.into_par_iter().enumerate().for_each(|(i, item)| f(i, item));
        });
    }
}
