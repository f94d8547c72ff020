//! Arena Domain - combat core.
//!
//! Pure, synchronous resolution of attacks and battles over fully hydrated
//! character snapshots. Storage, transport, and randomness all live outside:
//! callers pass characters in, inject a [`combat::Dice`], and persist the
//! [`CombatStateUpdate`]s that come back.

pub mod combat;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;

pub use entities::{
    Character, CharacterSkill, RpgClass, Skill, Weapon, DEFAULT_ATTRIBUTE, FULL_HIT_POINTS,
};

pub use error::{CombatError, DomainError};

pub use events::{AttackOutcome, BattleLog, CombatStateUpdate, FightOutcome};

// Re-export ID types
pub use ids::{CharacterId, SkillId, WeaponId};
