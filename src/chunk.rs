//! Contiguous chunk partitioning and in-place parallel add.
//!
//! A [`ChunkPlan`] divides `len` elements among `worker_count` workers:
//! `base = len / worker_count` elements each, with the first
//! `residue = len % worker_count` chunks taking one extra element. The
//! chunks are contiguous, ordered, pairwise disjoint, and cover the whole
//! sequence exactly once, so workers need no synchronization at all:
//! disjoint ownership is the synchronization.
//!
//! [`par_add`] applies the plan to a mutable slice with one scoped worker
//! per chunk. The result is indistinguishable from [`seq_add`] over the
//! whole slice; parallelism must not change a pure elementwise map.

use std::num::NonZeroUsize;
use std::ops::{AddAssign, Range};

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::JoinResult;
use crate::group::join_all;
use crate::parallelism::Parallelism;

/// A partition of `len` contiguous elements into near-equal chunks.
///
/// The worker count is clamped to `len`: there is never an empty chunk and
/// never more workers than elements.
///
/// # Examples
///
/// ```
/// use joinx::ChunkPlan;
/// use std::num::NonZeroUsize;
///
/// // 17 elements over 5 workers: 17 = 3*5 + 2, so two chunks of 4 and
/// // three of 3.
/// let plan = ChunkPlan::new(17, NonZeroUsize::new(5).unwrap());
/// assert_eq!(plan.worker_count(), 5);
/// assert_eq!(plan.chunk_lens().collect::<Vec<_>>(), [4, 4, 3, 3, 3]);
/// assert_eq!(
///     plan.ranges().collect::<Vec<_>>(),
///     [0..4, 4..8, 8..11, 11..14, 14..17],
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    len: usize,
    workers: usize,
    base: usize,
    residue: usize,
}

impl ChunkPlan {
    /// Plan a partition of `len` elements over at most `workers` workers.
    ///
    /// `len == 0` yields an empty plan: zero workers, no ranges.
    pub fn new(len: usize, workers: NonZeroUsize) -> Self {
        let workers = workers.get().min(len);
        if workers == 0 {
            return Self {
                len: 0,
                workers: 0,
                base: 0,
                residue: 0,
            };
        }
        Self {
            len,
            workers,
            base: len / workers,
            residue: len % workers,
        }
    }

    /// Total number of elements covered by the plan.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the plan covers no elements (and spawns no workers).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks, one worker each.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// The short chunk length, `len / worker_count`.
    pub fn base(&self) -> usize {
        self.base
    }

    /// How many leading chunks carry one extra element,
    /// `len % worker_count`.
    pub fn residue(&self) -> usize {
        self.residue
    }

    /// Length of the chunk assigned to `worker`.
    ///
    /// `worker` must be below [`worker_count`](Self::worker_count).
    pub fn chunk_len(&self, worker: usize) -> usize {
        debug_assert!(worker < self.workers);
        self.base + usize::from(worker < self.residue)
    }

    /// Chunk lengths in worker order. Their sum is exactly `len`.
    pub fn chunk_lens(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.workers).map(|worker| self.chunk_len(worker))
    }

    /// Ordered, contiguous, disjoint index ranges partitioning `0..len`.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.chunk_lens().scan(0, |start, len| {
            let range = *start..*start + len;
            *start += len;
            Some(range)
        })
    }
}

/// Add `n` to every element, in place, on the calling thread.
///
/// The sequential reference path: [`par_add`] must produce exactly this
/// result.
///
/// # Examples
///
/// ```
/// use joinx::seq_add;
///
/// let mut values = vec![10, 2, 3];
/// seq_add(&mut values, 10);
/// assert_eq!(values, [20, 12, 13]);
/// ```
pub fn seq_add<T>(values: &mut [T], n: T)
where
    T: AddAssign + Copy,
{
    for value in values {
        *value += n;
    }
}

/// Add `n` to every element in place, one worker per chunk.
///
/// The slice is partitioned by a [`ChunkPlan`] built from
/// `parallelism.workers()` and split with `split_at_mut`, so each worker
/// exclusively owns its chunk; there is no shared mutable state and no
/// locking. The call blocks until every worker has joined.
///
/// An empty slice returns immediately without spawning anything.
///
/// # Examples
///
/// ```
/// use joinx::{par_add, Parallelism};
///
/// let mut values = vec![10, 2, 3, 8, 5, 2, 0, -1, 8, 3, 4, 5, 6, 2, 3, 4, 0];
/// par_add(&mut values, 8, Parallelism::default()).unwrap();
/// assert_eq!(values[0], 18);
/// assert_eq!(values[16], 8);
/// ```
pub fn par_add<T>(values: &mut [T], n: T, parallelism: Parallelism) -> JoinResult<()>
where
    T: AddAssign + Copy + Send,
{
    if values.is_empty() {
        return Ok(());
    }

    let plan = ChunkPlan::new(values.len(), parallelism.workers());

    #[cfg(feature = "tracing")]
    debug!(
        len = plan.len(),
        workers = plan.worker_count(),
        base = plan.base(),
        residue = plan.residue(),
        "partitioned slice"
    );

    let mut chunks = Vec::with_capacity(plan.worker_count());
    let mut tail = values;
    for chunk_len in plan.chunk_lens() {
        let (chunk, rest) = std::mem::take(&mut tail).split_at_mut(chunk_len);
        chunks.push(chunk);
        tail = rest;
    }

    join_all(chunks.into_iter().map(|chunk| move || seq_add(chunk, n)))
}
