//! LIFO container for answered calls

use crate::error::EmptyContainer;

/// Generic last-in-first-out stack.
///
/// Implemented as a vector whose top is at the end, so push and pop are
/// O(1).
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create a new empty stack
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Place an item on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.items.pop().ok_or(EmptyContainer)
    }

    /// Return the top element without removing it
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainer`] if the stack is empty.
    pub fn peek_top(&self) -> Result<&T, EmptyContainer> {
        self.items.last().ok_or(EmptyContainer)
    }

    /// Get the number of elements on the stack
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
