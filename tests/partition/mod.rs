//! Partition tests
//!
//! Chunk-plan arithmetic and the par/seq equivalence the partition exists
//! to preserve.

mod parallel_add;
mod plan_properties;
