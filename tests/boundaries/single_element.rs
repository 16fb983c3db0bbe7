//! Tests for one-element inputs: exactly one worker, one chunk of size 1

use std::num::NonZeroUsize;

use joinx::{par_add, ChunkPlan, Parallelism};

#[test]
fn test_single_element_plan() {
    let plan = ChunkPlan::new(1, NonZeroUsize::new(32).unwrap());

    assert_eq!(plan.worker_count(), 1);
    assert_eq!(plan.base(), 1);
    assert_eq!(plan.residue(), 0);
    assert_eq!(plan.ranges().collect::<Vec<_>>(), [0..1]);
}

#[test]
fn test_single_element_par_add() {
    let mut values = vec![41];
    par_add(&mut values, 1, Parallelism::default()).unwrap();
    assert_eq!(values, [42]);
}

#[test]
fn test_single_worker_budget() {
    // Pinning the budget to one worker degrades to sequential, same result
    let mut values = vec![3, 1, 4, 1, 5];
    par_add(&mut values, 2, Parallelism::Fixed(NonZeroUsize::new(1).unwrap())).unwrap();
    assert_eq!(values, [5, 3, 6, 3, 7]);
}
