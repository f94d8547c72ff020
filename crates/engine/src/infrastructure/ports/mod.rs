//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Character and skill storage (owned by the surrounding system)
//! - Randomness (for reproducible tests)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{CharacterRepo, SkillRepo};
pub use testing::RandomPort;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCharacterRepo, MockSkillRepo};
