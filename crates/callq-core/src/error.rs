//! Error types for callq-core

use thiserror::Error;

/// Raised by [`Queue`](crate::Queue) and [`Stack`](crate::Stack) when a
/// read or remove is attempted on an empty container.
///
/// Never surfaces past the call center, which converts it to the
/// domain-specific [`Error`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("container is empty")]
pub struct EmptyContainer;

/// Core error type for call-center operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Answer requested while the pending queue is empty
    #[error("No calls are waiting to be answered")]
    NoPendingCalls,

    /// Last-answered report requested while the answered stack is empty
    #[error("No calls have been answered yet")]
    NoAnsweredCalls,

    /// Caller name or call reason was empty
    #[error("Invalid input: {field} must not be empty")]
    InvalidInput {
        /// Which field failed validation
        field: &'static str,
    },
}

/// Result type alias for callq-core operations
pub type Result<T> = std::result::Result<T, Error>;
