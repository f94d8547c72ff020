//! Domain entities
//!
//! Plain data records for combatants and their equipment.

pub mod character;
pub mod skill;
pub mod weapon;

pub use character::{Character, RpgClass, DEFAULT_ATTRIBUTE, FULL_HIT_POINTS};
pub use skill::{CharacterSkill, Skill};
pub use weapon::Weapon;
