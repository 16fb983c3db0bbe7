//! Structured fork-join over OS threads.
//!
//! Provides the "spawn N workers, wait for all" primitive the rest of the
//! crate is built on. Workers run on scoped threads, so they may borrow from
//! the caller's stack, and every worker is joined before the call returns.
//! A panicking worker does not crash the process: its payload is captured at
//! the join boundary and surfaced as [`JoinError::WorkerPanicked`].

use std::any::Any;
use std::thread;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::error::{JoinError, JoinResult};

/// Spawn one OS thread per task and join every one of them.
///
/// Tasks start in iteration order, but no ordering is guaranteed among their
/// effects; the only guarantee is that all of them have completed when this
/// function returns. If one or more workers panic, the remaining workers are
/// still joined and the first panic (in spawn order) is returned as
/// [`JoinError::WorkerPanicked`]. An empty task list spawns nothing and
/// returns `Ok(())`.
///
/// There is no timeout or cancellation: a worker that never finishes stalls
/// the call indefinitely.
///
/// # Examples
///
/// ```
/// use joinx::join_all;
///
/// let mut left = vec![1, 2];
/// let mut right = vec![3, 4];
///
/// let tasks = [&mut left, &mut right].map(|half| move || half.reverse());
/// join_all(tasks).unwrap();
///
/// assert_eq!(left, [2, 1]);
/// assert_eq!(right, [4, 3]);
/// ```
pub fn join_all<F>(tasks: impl IntoIterator<Item = F>) -> JoinResult<()>
where
    F: FnOnce() + Send,
{
    thread::scope(|scope| {
        let handles: Vec<_> = tasks.into_iter().map(|task| scope.spawn(task)).collect();

        #[cfg(feature = "tracing")]
        debug!(worker_count = handles.len(), "joining worker group");

        let mut first_error = None;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(()) => {
                    #[cfg(feature = "tracing")]
                    trace!(worker_id, "worker joined");
                }
                Err(payload) => {
                    let panic_message = payload_message(payload);

                    #[cfg(feature = "tracing")]
                    trace!(worker_id, panic_message = %panic_message, "worker panicked");

                    if first_error.is_none() {
                        first_error = Some(JoinError::WorkerPanicked {
                            worker_id,
                            panic_message,
                        });
                    }
                }
            }
        }

        match first_error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    })
}

/// Spawn `workers` OS threads, each running `f(worker_id)`, and join them all.
///
/// Worker ids are `0..workers`. Same join and error semantics as
/// [`join_all`]; `workers == 0` spawns nothing and returns `Ok(())`.
///
/// # Examples
///
/// ```
/// use joinx::fork_join;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let hits = AtomicUsize::new(0);
/// fork_join(4, |_worker_id| {
///     hits.fetch_add(1, Ordering::SeqCst);
/// })
/// .unwrap();
///
/// assert_eq!(hits.load(Ordering::SeqCst), 4);
/// ```
pub fn fork_join<F>(workers: usize, f: F) -> JoinResult<()>
where
    F: Fn(usize) + Sync,
{
    let f = &f;
    join_all((0..workers).map(move |worker_id| move || f(worker_id)))
}

// Panic payloads are almost always &str (panic!("...")) or String
// (panic!("{}", x)); anything else has no portable representation.
fn payload_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
