//! Worker-pool batches in the shape of the original demo: N tasks, W workers

use std::num::NonZeroUsize;

use joinx::{Parallelism, WorkerPool};

#[test]
fn test_ten_tasks_four_workers() {
    let pool = WorkerPool::new(Parallelism::Fixed(NonZeroUsize::new(4).unwrap()));
    let tasks: Vec<_> = (0..10u64)
        .map(|task_id| move || task_id * task_id)
        .collect();

    let mut results = pool.run(tasks).unwrap();
    results.sort_by_key(|&(task_id, _)| task_id);

    let expected: Vec<_> = (0..10u64)
        .map(|task_id| (task_id as usize, task_id * task_id))
        .collect();
    assert_eq!(results, expected);
}

#[test]
fn test_uneven_task_durations_still_complete() {
    // Wildly different task costs: the shared queue hands the cheap ones
    // to whichever worker frees up first, and every task completes once.
    let pool = WorkerPool::new(Parallelism::Fixed(NonZeroUsize::new(3).unwrap()));
    let tasks: Vec<_> = (0..12u64)
        .map(|task_id| {
            move || {
                let rounds = if task_id % 4 == 0 { 200_000 } else { 100 };
                (0..rounds).fold(task_id, |acc, _| acc.wrapping_mul(31).wrapping_add(7))
            }
        })
        .collect();

    let results = pool.run(tasks).unwrap();
    assert_eq!(results.len(), 12);

    let mut indices: Vec<_> = results.iter().map(|&(index, _)| index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());
}

#[test]
fn test_pool_reuse_across_batches() {
    let pool = WorkerPool::new(Parallelism::Fixed(NonZeroUsize::new(2).unwrap()));

    for batch in 0..4u64 {
        let tasks: Vec<_> = (0..6u64).map(|i| move || batch * 100 + i).collect();
        let mut results = pool.run(tasks).unwrap();
        results.sort_by_key(|&(index, _)| index);

        assert_eq!(results.len(), 6);
        assert_eq!(results[5], (5, batch * 100 + 5));
    }
}
