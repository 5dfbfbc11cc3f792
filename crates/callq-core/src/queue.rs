//! FIFO container for pending calls

use std::collections::VecDeque;

use crate::error::EmptyContainer;

/// Generic first-in-first-out queue.
///
/// Elements dequeue in exactly the order they were enqueued. Backed by a
/// `VecDeque`, so enqueue and dequeue are O(1) amortized.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new empty queue
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the tail
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head element
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop_front().ok_or(EmptyContainer)
    }

    /// Return the head element without removing it
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer`] if the queue is empty.
    pub fn peek_front(&self) -> Result<&T, EmptyContainer> {
        self.items.front().ok_or(EmptyContainer)
    }

    /// Get the number of elements in the queue
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the queue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
