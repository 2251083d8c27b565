// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Next-tick work queue.
//!
//! Work pushed onto a [`TickQueue`] runs on a later turn of the host's event
//! loop, never inside the call that queued it. Items run in FIFO order, and a
//! queued item cannot be cancelled.
//!
//! ```
//! use understory_carousel::ticks::TickQueue;
//!
//! let mut queue = TickQueue::new();
//! queue.push("a");
//! queue.push("b");
//!
//! let mut tick = queue.take_tick();
//! assert_eq!(tick.next(), Some("a"));
//! // Work queued while a tick runs waits for the following tick.
//! queue.push("c");
//! assert_eq!(tick.next(), Some("b"));
//! assert_eq!(tick.next(), None);
//! assert_eq!(queue.len(), 1);
//! ```

use alloc::collections::VecDeque;
use alloc::collections::vec_deque::IntoIter;

/// FIFO queue of work deferred to the next tick.
#[derive(Clone, Debug)]
pub struct TickQueue<T> {
    pending: VecDeque<T>,
}

impl<T> Default for TickQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> TickQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defers `item` to the next tick.
    pub fn push(&mut self, item: T) {
        self.pending.push_back(item);
    }

    /// Defers `item` unless an equal item is already waiting.
    ///
    /// Returns `true` if the item was queued.
    pub fn push_unique(&mut self, item: T) -> bool
    where
        T: PartialEq,
    {
        if self.pending.contains(&item) {
            return false;
        }
        self.pending.push_back(item);
        true
    }

    /// Removes everything queued so far, in order.
    ///
    /// Items pushed after this call belong to the next tick.
    pub fn take_tick(&mut self) -> IntoIter<T> {
        core::mem::take(&mut self.pending).into_iter()
    }

    /// Number of items waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TickQueue;

    #[test]
    fn new_queue_is_empty() {
        let mut queue = TickQueue::<u32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.take_tick().count(), 0);
    }

    #[test]
    fn ticks_preserve_fifo_order() {
        let mut queue = TickQueue::new();
        for i in 0..5 {
            queue.push(i);
        }
        assert_eq!(queue.take_tick().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn items_pushed_during_a_tick_wait_for_the_next() {
        let mut queue = TickQueue::new();
        queue.push(1);
        queue.push(2);

        let mut seen = Vec::new();
        for item in queue.take_tick() {
            seen.push(item);
            queue.push(item * 10);
        }
        assert_eq!(seen, [1, 2]);
        assert_eq!(queue.take_tick().collect::<Vec<_>>(), [10, 20]);
    }

    #[test]
    fn push_unique_coalesces_waiting_items() {
        let mut queue = TickQueue::new();
        assert!(queue.push_unique('x'));
        assert!(!queue.push_unique('x'));
        assert!(queue.push_unique('y'));
        assert_eq!(queue.len(), 2);

        let _ = queue.take_tick();
        assert!(queue.push_unique('x'));
    }
}
