//! End-to-end parallel add: parallelism must not change the result

use std::num::NonZeroUsize;

use joinx::{par_add, seq_add, Parallelism};

fn pinned(n: usize) -> Parallelism {
    Parallelism::Fixed(NonZeroUsize::new(n).unwrap())
}

#[test]
fn test_sequential_reference_scenario() {
    // S = [10, 2, 3], n = 10
    let mut values = vec![10, 2, 3];
    seq_add(&mut values, 10);
    assert_eq!(values, [20, 12, 13]);
}

#[test]
fn test_seventeen_element_scenario_host_parallelism() {
    // S has length 17, n = 8; whatever worker count the host yields, every
    // element gains exactly 8
    let original = vec![10, 2, 3, 8, 5, 2, 0, -1, 8, 3, 4, 5, 6, 2, 3, 4, 0];
    let mut values = original.clone();

    par_add(&mut values, 8, Parallelism::default()).unwrap();

    assert_eq!(values.len(), original.len());
    for (i, (after, before)) in values.iter().zip(&original).enumerate() {
        assert_eq!(*after, before + 8, "element {}", i);
    }
}

#[test]
fn test_seventeen_element_scenario_every_pinned_count() {
    let original = vec![10, 2, 3, 8, 5, 2, 0, -1, 8, 3, 4, 5, 6, 2, 3, 4, 0];

    for max_workers in 1..=17 {
        let mut values = original.clone();
        par_add(&mut values, 8, pinned(max_workers)).unwrap();

        let expected: Vec<_> = original.iter().map(|v| v + 8).collect();
        assert_eq!(values, expected, "workers={}", max_workers);
    }
}

#[test]
fn test_par_matches_seq_across_shapes() {
    for len in [0usize, 1, 2, 5, 8, 13, 31, 64, 257] {
        for max_workers in [1usize, 2, 3, 4, 7, 12] {
            let original: Vec<i64> = (0..len as i64).map(|i| i * i - 50).collect();

            let mut sequential = original.clone();
            seq_add(&mut sequential, -3);

            let mut parallel = original;
            par_add(&mut parallel, -3, pinned(max_workers)).unwrap();

            assert_eq!(parallel, sequential, "len={} workers={}", len, max_workers);
        }
    }
}

#[test]
fn test_negative_and_zero_scalars() {
    let original = vec![5i32, -5, 0, 100];

    let mut values = original.clone();
    par_add(&mut values, 0, pinned(2)).unwrap();
    assert_eq!(values, original);

    par_add(&mut values, -10, pinned(3)).unwrap();
    assert_eq!(values, [-5, -15, -10, 90]);
}
