//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod memory;
pub mod ports;
pub mod random;
