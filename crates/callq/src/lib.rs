//! Callq - interactive call-center simulator
//!
//! Callers go into a FIFO waiting queue and are answered in order;
//! answered calls land on a LIFO history stack.

pub mod cli;
pub mod menu;
