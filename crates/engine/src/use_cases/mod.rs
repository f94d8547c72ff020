//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases load characters through the repository ports, hand them to the
//! combat core, and write back whatever changed.

pub mod fight;
pub mod skills;

pub use fight::{FightError, FightUseCases};
pub use skills::{SkillError, SkillUseCases};
