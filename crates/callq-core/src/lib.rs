//! Callq-core - Call-center containers and logic
//!
//! This crate provides:
//! - A generic FIFO queue for pending calls
//! - A generic LIFO stack for answered calls
//! - The call record type
//! - The call center that composes the two containers

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod call;
pub mod center;
pub mod error;
pub mod queue;
pub mod stack;

pub use call::{CallId, CallRecord};
pub use center::CallCenter;
pub use error::{EmptyContainer, Error, Result};
pub use queue::Queue;
pub use stack::Stack;
