//! Combat resolution
//!
//! - `dice` - injected randomness and guarded draws
//! - `damage` - weapon and skill damage formulas
//! - `attack` - one attack between two characters
//! - `battle` - multi-character battles run to a single victor
//! - `highscore` - ranking of characters by their fight record

pub mod attack;
pub mod battle;
pub mod damage;
pub mod dice;
pub mod highscore;

pub use attack::{skill_attack, weapon_attack};
pub use battle::{Arena, Battle, BattlePhase, DEFAULT_MAX_ROUNDS};
pub use damage::{resolve_skill_damage, resolve_weapon_damage};
pub use dice::Dice;
pub use highscore::rank;
