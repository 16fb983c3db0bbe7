//! # Pipeline: Producers and Consumers Over a Bounded Buffer
//!
//! Two producers push 25 items each through a buffer of capacity 5 while
//! three consumers drain it. The last producer to finish closes the
//! buffer; consumers drain what remains and stop.
//!
//! ## Running This Demo
//! ```bash
//! cargo run --example pipeline
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use joinx::{join_all, BoundedBuffer};

const PRODUCERS: usize = 2;
const CONSUMERS: usize = 3;
const ITEMS_PER_PRODUCER: usize = 25;

fn main() {
    let buffer = BoundedBuffer::new(5);
    let live_producers = AtomicUsize::new(PRODUCERS);
    let per_consumer = Mutex::new(vec![0usize; CONSUMERS]);

    let mut tasks: Vec<Box<dyn FnOnce() + Send + '_>> = Vec::new();

    for producer_id in 0..PRODUCERS {
        let buffer = &buffer;
        let live_producers = &live_producers;
        tasks.push(Box::new(move || {
            for seq in 0..ITEMS_PER_PRODUCER {
                buffer.push((producer_id, seq)).expect("buffer closed early");
            }
            if live_producers.fetch_sub(1, Ordering::SeqCst) == 1 {
                buffer.close();
            }
        }));
    }

    for consumer_id in 0..CONSUMERS {
        let buffer = &buffer;
        let per_consumer = &per_consumer;
        tasks.push(Box::new(move || {
            while buffer.pop().is_some() {
                per_consumer.lock()[consumer_id] += 1;
            }
        }));
    }

    join_all(tasks).expect("a worker panicked");

    let per_consumer = per_consumer.into_inner();
    let total: usize = per_consumer.iter().sum();
    for (consumer_id, count) in per_consumer.iter().enumerate() {
        println!("consumer {} drained {} items", consumer_id, count);
    }
    println!(
        "total {} items from {} producers",
        total,
        PRODUCERS
    );
    assert_eq!(total, PRODUCERS * ITEMS_PER_PRODUCER);
}
