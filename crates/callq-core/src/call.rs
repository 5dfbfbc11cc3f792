//! Call record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique call identifier
///
/// Assigned sequentially starting at 1 and never reused within one
/// [`CallCenter`](crate::CallCenter) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallId(u64);

impl CallId {
    /// Create a new call ID
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single call held by the call center
///
/// Immutable after creation. Owned by the pending queue from receipt
/// until answered, then by the answered stack; moved, never copied,
/// between the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Unique identifier
    pub id: CallId,
    /// Caller name
    pub caller_name: String,
    /// Why the caller is calling
    pub reason: String,
    /// When the call was received
    pub received_at: DateTime<Utc>,
}

impl CallRecord {
    /// Create a new call record, stamped with the current time
    #[must_use]
    pub fn new(id: CallId, caller_name: String, reason: String) -> Self {
        Self {
            id,
            caller_name,
            reason,
            received_at: Utc::now(),
        }
    }
}
