//! Arena Engine library.
//!
//! Turn-resolution combat for role-playing characters, behind a service
//! boundary that answers every call with a success/failure envelope.
//!
//! ## Structure
//!
//! - `use_cases/` - Attack, fight, highscore and skill orchestration
//! - `infrastructure/` - Port traits plus in-memory and random adapters
//! - `api/` - Envelope-returning entry points
//! - `app` - Application composition
//! - `config` - Environment-driven settings

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests against the in-memory repository.
#[cfg(test)]
mod e2e_tests;

pub use api::FightApi;
pub use app::App;
pub use config::ArenaConfig;
