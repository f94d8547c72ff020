//! Domain Events
//!
//! Return types from combat operations, communicating what happened when
//! character state was modified.

pub mod combat_events;

pub use combat_events::*;
