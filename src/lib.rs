//! Structured Fork-Join for OS Threads
//!
//! A minimal toolkit for the classic fork-join exercises: spawn a group of
//! OS threads, wait for every one of them, and either share one guarded
//! value or share nothing at all.
//!
//! # Features
//!
//! - **Explicit fork-join boundary**: [`join_all`] and [`fork_join`] spawn
//!   scoped workers and always join every one of them before returning.
//!   There is no detached thread anywhere in the crate.
//! - **Failures propagate**: a panicking worker becomes
//!   [`JoinError::WorkerPanicked`] at the join boundary instead of being
//!   silently dropped. The process keeps running.
//! - **Borrow, don't move**: workers run on scoped threads, so they can
//!   borrow directly from the caller's stack; no `Arc` choreography for
//!   plain fork-join work.
//! - **Injected parallelism**: worker counts are a [`Parallelism`] parameter
//!   defaulting to the runtime-queried hardware concurrency, so tests pin
//!   deterministic counts instead of depending on the executing machine.
//! - **Share-nothing partitioning**: [`ChunkPlan`] and [`par_add`] split a
//!   slice into disjoint contiguous chunks, one worker each, with zero
//!   cross-worker synchronization.
//! - **Lock-everything counting**: [`GuardedCounter`] and [`TrialRunner`]
//!   serialize every write through one mutex and verify the total across
//!   repeated trials, reporting mismatches without aborting.
//!
//! # Quick Start
//!
//! Add a scalar to every element of a slice, in place, across all available
//! cores:
//!
//! ```
//! use joinx::{par_add, Parallelism};
//!
//! let mut values = vec![10, 2, 3, 8, 5];
//! par_add(&mut values, 10, Parallelism::default()).unwrap();
//! assert_eq!(values, [20, 12, 13, 18, 15]);
//! ```
//!
//! Run the guarded-counter exercise: 10 workers × 100 increments per trial,
//! every trial checked against the expected 1000:
//!
//! ```
//! use joinx::{TrialConfig, TrialRunner};
//!
//! let runner = TrialRunner::new(TrialConfig::default());
//! let report = runner.run_trials(25).unwrap();
//!
//! assert_eq!(report.expected, 1000);
//! assert!(report.is_clean());
//! ```
//!
//! # Two Synchronization Styles
//!
//! The two core exercises are deliberate opposites:
//!
//! - The **counter** shares one mutable value and serializes all access
//!   through a single lock. Correctness comes from mutual exclusion.
//! - The **chunked add** shares nothing: the slice is partitioned into
//!   disjoint `split_at_mut` chunks before any thread starts. Correctness
//!   comes from exclusive ownership, and no lock exists to contend on.
//!
//! Both are purely join-based: the caller blocks until every worker
//! completes. There is no cancellation and no partial result; a stalled
//! worker stalls the whole operation.
//!
//! # Panic Semantics
//!
//! Worker panics are caught at the join boundary and converted to
//! [`JoinError::WorkerPanicked`], carrying the worker's spawn-order id and
//! the panic payload rendered as a string. When several workers panic, the
//! first by spawn order wins; the rest are still joined. Thread-spawn
//! failure itself is treated as unrecoverable and aborts by panicking.
//!
//! # Beyond the Core Exercises
//!
//! - [`WorkerPool`] runs a batch of heterogeneous tasks over a fixed worker
//!   set draining a shared queue, for work that doesn't split evenly.
//! - [`BoundedBuffer`] is a blocking bounded FIFO with close semantics for
//!   producer/consumer pipelines.
//!
//! # Optional Tracing Support
//!
//! Observability through the `tracing` crate is available behind the
//! `tracing` cargo feature and compiled out entirely by default:
//!
//! ```toml
//! [dependencies]
//! joinx = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! - **DEBUG**: group sizes, chunk plans, trial configurations
//! - **TRACE**: individual worker joins
//! - **WARN**: counter trial mismatches
//!
//! When the feature is disabled the instrumentation is removed at compile
//! time via `#[cfg(feature = "tracing")]` and the `tracing` crate is not
//! even linked.

// Module declarations
mod buffer;
mod chunk;
mod counter;
mod error;
mod group;
mod parallelism;
mod pool;

// Public re-exports
pub use buffer::BoundedBuffer;
pub use chunk::{par_add, seq_add, ChunkPlan};
pub use counter::{GuardedCounter, Mismatch, TrialConfig, TrialReport, TrialRunner};
pub use error::{JoinError, JoinResult};
pub use group::{fork_join, join_all};
pub use parallelism::Parallelism;
pub use pool::WorkerPool;
