//! Blocking bounded FIFO for producer/consumer pipelines.
//!
//! A [`BoundedBuffer`] holds at most `capacity` items. Producers block in
//! [`push`](BoundedBuffer::push) while the buffer is full; consumers block
//! in [`pop`](BoundedBuffer::pop) while it is empty.
//! [`close`](BoundedBuffer::close) ends the pipeline: blocked producers get
//! their item back, and consumers drain whatever is left before seeing
//! `None`.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};

struct State<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// A mutex-and-condvar bounded queue.
///
/// Items come out in the order one producer pushed them; interleaving
/// between producers is unspecified.
///
/// # Examples
///
/// ```
/// use joinx::BoundedBuffer;
///
/// let buffer = BoundedBuffer::new(4);
/// buffer.push(1).unwrap();
/// buffer.push(2).unwrap();
/// buffer.close();
///
/// // Remaining items still drain after close.
/// assert_eq!(buffer.pop(), Some(1));
/// assert_eq!(buffer.pop(), Some(2));
/// assert_eq!(buffer.pop(), None);
///
/// // Pushing after close hands the item back.
/// assert_eq!(buffer.push(3), Err(3));
/// ```
pub struct BoundedBuffer<T> {
    state: Mutex<State<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    /// Create a buffer holding at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "bounded buffer capacity must be at least 1");
        Self {
            state: Mutex::new(State {
                items: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// The fixed capacity this buffer was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently buffered.
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// True when nothing is currently buffered.
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    /// True once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Append an item, blocking while the buffer is full.
    ///
    /// Returns the item back as `Err` if the buffer is (or becomes, while
    /// waiting) closed.
    pub fn push(&self, item: T) -> Result<(), T> {
        let mut state = self.state.lock();
        while state.items.len() == self.capacity && !state.closed {
            self.not_full.wait(&mut state);
        }
        if state.closed {
            return Err(item);
        }
        state.items.push_back(item);
        drop(state);

        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove the oldest item, blocking while the buffer is empty and open.
    ///
    /// Returns `None` only once the buffer is closed AND drained; items
    /// pushed before the close are always delivered.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.state.lock();
        while state.items.is_empty() && !state.closed {
            self.not_empty.wait(&mut state);
        }
        match state.items.pop_front() {
            Some(item) => {
                drop(state);
                self.not_full.notify_one();
                Some(item)
            }
            None => None,
        }
    }

    /// Close the buffer. Idempotent; wakes every blocked producer and
    /// consumer.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        drop(state);

        self.not_full.notify_all();
        self.not_empty.notify_all();
    }
}
