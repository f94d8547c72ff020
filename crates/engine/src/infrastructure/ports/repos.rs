//! Repository port traits for character storage.
//!
//! The combat core never touches storage. These are the narrow read/write
//! capabilities the use cases need from whatever owns the characters.

use arena_domain::{Character, CharacterId, CombatStateUpdate, Skill, SkillId};
use async_trait::async_trait;

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Fetch one fully hydrated character (weapon and skills included).
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;

    /// Fetch every character among `ids` that exists, in any order.
    async fn get_many(&self, ids: &[CharacterId]) -> Result<Vec<Character>, RepoError>;

    /// Write back hit points and the fight record.
    async fn save_combat_state(&self, update: &CombatStateUpdate) -> Result<(), RepoError>;

    /// Write back every participant of one fight as a single unit.
    ///
    /// Either all updates are applied or none are.
    async fn save_combat_states(&self, updates: &[CombatStateUpdate]) -> Result<(), RepoError>;

    /// Characters with at least one fight on record.
    async fn list_with_fights(&self) -> Result<Vec<Character>, RepoError>;

    /// Record that a character has learned a skill.
    async fn add_skill(&self, character_id: CharacterId, skill_id: SkillId)
        -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepo: Send + Sync {
    async fn get(&self, id: SkillId) -> Result<Option<Skill>, RepoError>;
}
