//! End-to-end tests through the envelope API.
//!
//! These tests build a complete `App` over `InMemoryRepository` and drive it
//! only through `FightApi`, then read the stored characters back to check
//! what was persisted.

mod e2e_helpers;

pub use e2e_helpers::*;
