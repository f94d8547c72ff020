//! Arena Shared - boundary types for the arena service
//!
//! This crate contains the types exchanged with whatever sits in front of the engine:
//! - Request payloads (`requests`)
//! - Response DTOs (`dto`)
//! - The generic `ServiceResponse` envelope (`responses`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Pure data types and conversions
//! 3. **No domain IDs** - raw integers in DTOs

pub mod dto;
pub mod requests;
pub mod responses;

pub use dto::{AttackResultDto, CharacterDto, FightResultDto, HighscoreDto, SkillDto, WeaponDto};
pub use requests::{AddCharacterSkillDto, FightRequestDto, SkillAttackDto, WeaponAttackDto};
pub use responses::ServiceResponse;
