//! Structural properties of every reachable chunk plan

use std::num::NonZeroUsize;

use joinx::ChunkPlan;

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_ranges_partition_the_sequence_exactly() {
    for len in 0..=128 {
        for max_workers in 1..=16 {
            let plan = ChunkPlan::new(len, workers(max_workers));

            // Contiguous, ordered, disjoint, covering 0..len
            let mut cursor = 0;
            for range in plan.ranges() {
                assert_eq!(range.start, cursor);
                assert!(range.end > range.start);
                cursor = range.end;
            }
            assert_eq!(cursor, len);
        }
    }
}

#[test]
fn test_chunk_size_distribution() {
    for len in 1..=128usize {
        for max_workers in 1..=16 {
            let plan = ChunkPlan::new(len, workers(max_workers));
            let w = plan.worker_count();

            assert_eq!(plan.base(), len / w);
            assert_eq!(plan.residue(), len % w);

            // Exactly (len mod w) chunks of size base+1, the rest base
            let longer = plan
                .chunk_lens()
                .filter(|&chunk_len| chunk_len == plan.base() + 1)
                .count();
            let shorter = plan
                .chunk_lens()
                .filter(|&chunk_len| chunk_len == plan.base())
                .count();

            if plan.residue() == 0 {
                assert_eq!(shorter, w);
            } else {
                assert_eq!(longer, plan.residue());
                assert_eq!(shorter, w - plan.residue());
            }
        }
    }
}

#[test]
fn test_worker_count_clamps_to_length() {
    for len in 0..=32 {
        for max_workers in 1..=48 {
            let plan = ChunkPlan::new(len, workers(max_workers));
            assert_eq!(plan.worker_count(), len.min(max_workers));
        }
    }
}

#[test]
fn test_longer_chunks_come_first() {
    let plan = ChunkPlan::new(23, workers(5));
    let lens: Vec<_> = plan.chunk_lens().collect();

    // 23 = 4*5 + 3: the three longer chunks lead
    assert_eq!(lens, [5, 5, 5, 4, 4]);
    let mut sorted = lens.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(lens, sorted);
}
