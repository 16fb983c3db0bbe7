//! # Chunked Add: Share-Nothing Parallelism
//!
//! Splits a 17-element sequence into contiguous chunks, one worker per
//! chunk, and adds 8 to every element in place. The partition is printed
//! so you can see the base/residue arithmetic for your machine's
//! parallelism.
//!
//! ## Running This Demo
//! ```bash
//! cargo run --example chunked_add
//! ```

use joinx::{par_add, ChunkPlan, Parallelism};

fn main() {
    let mut values = vec![10, 2, 3, 8, 5, 2, 0, -1, 8, 3, 4, 5, 6, 2, 3, 4, 0];
    println!("before: {:?}", values);

    let parallelism = Parallelism::default();
    let plan = ChunkPlan::new(values.len(), parallelism.workers());
    println!(
        "plan: {} elements, {} workers, base chunk {}, residue {}",
        plan.len(),
        plan.worker_count(),
        plan.base(),
        plan.residue()
    );

    par_add(&mut values, 8, parallelism).expect("a worker panicked");

    println!("after:  {:?}", values);
}
