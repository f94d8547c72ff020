//! API layer - envelope-returning entry points.

pub mod error_sanitizer;
pub mod fight;

pub use fight::FightApi;
