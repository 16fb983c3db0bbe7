//! Fixed worker set draining a shared task queue.
//!
//! Unlike [`par_add`](crate::par_add), where the split is decided up front,
//! a [`WorkerPool`] balances dynamically: workers pop tasks from a guarded
//! queue until it drains, so a slow task never leaves the other workers
//! idle while work remains.

use std::collections::VecDeque;

use parking_lot::Mutex;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::JoinResult;
use crate::group::fork_join;
use crate::parallelism::Parallelism;

/// Runs batches of tasks over a bounded set of workers.
///
/// Results come back as `(index, value)` pairs in completion order; the
/// index is the task's position in the submitted batch, so callers that
/// need submission order can sort by it.
///
/// # Examples
///
/// ```
/// use joinx::{Parallelism, WorkerPool};
///
/// let pool = WorkerPool::new(Parallelism::default());
/// let tasks: Vec<_> = (0..8u64).map(|i| move || i * i).collect();
///
/// let mut results = pool.run(tasks).unwrap();
/// results.sort_by_key(|&(index, _)| index);
///
/// assert_eq!(results[3], (3, 9));
/// assert_eq!(results.len(), 8);
/// ```
pub struct WorkerPool {
    parallelism: Parallelism,
}

impl WorkerPool {
    /// Create a pool with the given worker budget.
    pub fn new(parallelism: Parallelism) -> Self {
        Self { parallelism }
    }

    /// Run every task and collect `(index, value)` pairs.
    ///
    /// Spawns `min(budget, tasks.len())` workers, so a short batch never
    /// starts idle threads; an empty batch spawns none and returns an empty
    /// vector. The call blocks until the queue is drained and every worker
    /// has joined. A panicking task surfaces as
    /// [`WorkerPanicked`](crate::JoinError::WorkerPanicked) after the
    /// remaining workers finish the queue.
    pub fn run<F, R>(&self, tasks: Vec<F>) -> JoinResult<Vec<(usize, R)>>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let task_count = tasks.len();
        let workers = self.parallelism.workers().get().min(task_count);

        #[cfg(feature = "tracing")]
        debug!(task_count, workers, "draining task queue");

        let queue: Mutex<VecDeque<(usize, F)>> =
            Mutex::new(tasks.into_iter().enumerate().collect());
        let results: Mutex<Vec<(usize, R)>> = Mutex::new(Vec::with_capacity(task_count));

        fork_join(workers, |_worker_id| loop {
            // Pop under the lock, run outside it.
            let next = queue.lock().pop_front();
            match next {
                Some((index, task)) => {
                    let value = task();
                    results.lock().push((index, value));
                }
                None => break,
            }
        })?;

        Ok(results.into_inner())
    }
}
