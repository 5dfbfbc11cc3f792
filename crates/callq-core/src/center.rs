//! Call-center state and operations

use crate::call::{CallId, CallRecord};
use crate::error::{Error, Result};
use crate::queue::Queue;
use crate::stack::Stack;

/// The call center: a FIFO queue of pending calls and a LIFO stack of
/// answered calls.
///
/// Owns both containers and every record they hold; dropping the center
/// releases everything. Counts are derived from container lengths, so
/// they cannot drift from the actual contents.
#[derive(Debug)]
pub struct CallCenter {
    pending: Queue<CallRecord>,
    answered: Stack<CallRecord>,
    next_id: u64,
}

impl CallCenter {
    /// Create a new call center with no pending or answered calls
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Queue::new(),
            answered: Stack::new(),
            next_id: 1,
        }
    }

    /// Receive a new call: assign it the next ID and enqueue it
    ///
    /// Both strings are trimmed before validation. Returns a copy of the
    /// enqueued record for display; the queue keeps ownership of the
    /// canonical one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the caller name or reason is
    /// empty after trimming. The ID counter is not consumed in that case.
    pub fn receive_call(&mut self, caller_name: &str, reason: &str) -> Result<CallRecord> {
        let caller_name = caller_name.trim();
        let reason = reason.trim();

        if caller_name.is_empty() {
            return Err(Error::InvalidInput {
                field: "caller name",
            });
        }
        if reason.is_empty() {
            return Err(Error::InvalidInput {
                field: "call reason",
            });
        }

        let id = CallId::new(self.next_id);
        self.next_id += 1;

        let record = CallRecord::new(id, caller_name.to_string(), reason.to_string());
        tracing::debug!(%id, caller = %record.caller_name, "call received");
        self.pending.enqueue(record.clone());
        Ok(record)
    }

    /// Answer the oldest pending call, moving it onto the answered stack
    ///
    /// Returns the record now on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPendingCalls`] if nothing is pending; neither
    /// count changes in that case.
    pub fn answer_call(&mut self) -> Result<&CallRecord> {
        let record = self.pending.dequeue().map_err(|_| Error::NoPendingCalls)?;
        tracing::debug!(id = %record.id, "call answered");
        self.answered.push(record);
        // Just pushed, so the stack cannot be empty.
        self.answered.peek_top().map_err(|_| Error::NoAnsweredCalls)
    }

    /// Get the most recently answered call without removing it
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAnsweredCalls`] if no call has been answered.
    pub fn peek_last_answered(&self) -> Result<&CallRecord> {
        self.answered.peek_top().map_err(|_| Error::NoAnsweredCalls)
    }

    /// Get the next call to be answered without removing it
    ///
    /// Returns `None` when nothing is pending; that is a normal state,
    /// not an error.
    #[must_use]
    pub fn peek_next_pending(&self) -> Option<&CallRecord> {
        self.pending.peek_front().ok()
    }

    /// Number of calls waiting to be answered
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of calls answered so far
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    /// Tear down the call center, releasing all held records
    pub fn shutdown(self) {
        tracing::debug!(
            pending = self.pending_count(),
            answered = self.answered_count(),
            "call center shut down"
        );
    }
}

impl Default for CallCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receive_then_answer_scenario() -> Result<()> {
        let mut center = CallCenter::new();

        let alice = center.receive_call("Alice", "billing")?;
        assert_eq!(alice.id, CallId::new(1));

        center.receive_call("Bob", "tech support")?;
        assert_eq!(center.pending_count(), 2);
        assert_eq!(center.answered_count(), 0);

        let answered = center.answer_call()?;
        assert_eq!(answered.id, CallId::new(1));
        assert_eq!(answered.caller_name, "Alice");
        assert_eq!(answered.reason, "billing");
        assert_eq!(center.pending_count(), 1);
        assert_eq!(center.answered_count(), 1);

        assert_eq!(center.peek_last_answered()?.id, CallId::new(1));

        let answered = center.answer_call()?;
        assert_eq!(answered.id, CallId::new(2));
        assert_eq!(answered.caller_name, "Bob");
        assert_eq!(center.pending_count(), 0);
        assert_eq!(center.answered_count(), 2);

        assert_eq!(center.answer_call(), Err(Error::NoPendingCalls));
        Ok(())
    }

    #[test]
    fn answer_on_empty_queue_fails_without_changing_counts() {
        let mut center = CallCenter::new();

        assert_eq!(center.answer_call(), Err(Error::NoPendingCalls));
        assert_eq!(center.pending_count(), 0);
        assert_eq!(center.answered_count(), 0);
    }

    #[test]
    fn peek_last_answered_on_empty_stack_fails() {
        let center = CallCenter::new();
        assert_eq!(center.peek_last_answered(), Err(Error::NoAnsweredCalls));
    }

    #[test]
    fn peek_next_pending_is_none_when_empty() {
        let center = CallCenter::new();
        assert!(center.peek_next_pending().is_none());
    }

    #[test]
    fn peek_next_pending_does_not_remove() -> Result<()> {
        let mut center = CallCenter::new();
        center.receive_call("Alice", "billing")?;

        let first = center.peek_next_pending().map(|r| r.id);
        let second = center.peek_next_pending().map(|r| r.id);
        assert_eq!(first, Some(CallId::new(1)));
        assert_eq!(first, second);
        assert_eq!(center.pending_count(), 1);
        Ok(())
    }

    #[test]
    fn repeated_peek_returns_same_record_until_next_answer() -> Result<()> {
        let mut center = CallCenter::new();
        center.receive_call("Alice", "billing")?;
        center.receive_call("Bob", "tech support")?;

        center.answer_call()?;
        assert_eq!(center.peek_last_answered()?.id, CallId::new(1));
        assert_eq!(center.peek_last_answered()?.id, CallId::new(1));

        center.answer_call()?;
        assert_eq!(center.peek_last_answered()?.id, CallId::new(2));
        Ok(())
    }

    #[test]
    fn rejects_empty_caller_name() {
        let mut center = CallCenter::new();
        assert_eq!(
            center.receive_call("", "billing"),
            Err(Error::InvalidInput {
                field: "caller name"
            })
        );
        assert_eq!(
            center.receive_call("   ", "billing"),
            Err(Error::InvalidInput {
                field: "caller name"
            })
        );
        assert_eq!(center.pending_count(), 0);
    }

    #[test]
    fn rejects_empty_reason() {
        let mut center = CallCenter::new();
        assert_eq!(
            center.receive_call("Alice", "  "),
            Err(Error::InvalidInput {
                field: "call reason"
            })
        );
        assert_eq!(center.pending_count(), 0);
    }

    #[test]
    fn rejected_input_does_not_consume_an_id() -> Result<()> {
        let mut center = CallCenter::new();
        assert!(center.receive_call("", "billing").is_err());

        let record = center.receive_call("Alice", "billing")?;
        assert_eq!(record.id, CallId::new(1));
        Ok(())
    }

    #[test]
    fn ids_are_never_reused_after_answering() -> Result<()> {
        let mut center = CallCenter::new();
        center.receive_call("Alice", "billing")?;
        center.answer_call()?;

        let record = center.receive_call("Bob", "tech support")?;
        assert_eq!(record.id, CallId::new(2));
        Ok(())
    }

    #[test]
    fn names_with_spaces_are_kept_whole() -> Result<()> {
        let mut center = CallCenter::new();
        let record = center.receive_call("Mary Jane Watson", "account locked out")?;
        assert_eq!(record.caller_name, "Mary Jane Watson");
        assert_eq!(record.reason, "account locked out");
        Ok(())
    }
}
