//! In-memory character and skill store.
//!
//! Backs the demo binary and end-to-end tests. Each character lives in its own
//! `DashMap` shard entry, so fights over disjoint characters never contend.

use arena_domain::{Character, CharacterId, CharacterSkill, CombatStateUpdate, Skill, SkillId};
use async_trait::async_trait;
use dashmap::DashMap;

use crate::infrastructure::ports::{CharacterRepo, RepoError, SkillRepo};

#[derive(Default)]
pub struct InMemoryRepository {
    characters: DashMap<CharacterId, Character>,
    skills: DashMap<SkillId, Skill>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a character. Its learned skills are registered too.
    pub fn insert_character(&self, character: Character) {
        for skill in character.learned_skills() {
            self.skills.entry(skill.id).or_insert_with(|| skill.clone());
        }
        self.characters.insert(character.id, character);
    }

    pub fn insert_skill(&self, skill: Skill) {
        self.skills.insert(skill.id, skill);
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryRepository {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_many(&self, ids: &[CharacterId]) -> Result<Vec<Character>, RepoError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.characters.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn save_combat_state(&self, update: &CombatStateUpdate) -> Result<(), RepoError> {
        let mut character = self
            .characters
            .get_mut(&update.id)
            .ok_or_else(|| RepoError::not_found("Character", update.id))?;
        apply(&mut character, update);
        Ok(())
    }

    async fn save_combat_states(&self, updates: &[CombatStateUpdate]) -> Result<(), RepoError> {
        // Characters are never removed, so a full check up front means no write can fail midway.
        if let Some(missing) = updates
            .iter()
            .find(|update| !self.characters.contains_key(&update.id))
        {
            return Err(RepoError::not_found("Character", missing.id));
        }
        for update in updates {
            if let Some(mut character) = self.characters.get_mut(&update.id) {
                apply(&mut character, update);
            }
        }
        Ok(())
    }

    async fn list_with_fights(&self) -> Result<Vec<Character>, RepoError> {
        let mut characters: Vec<Character> = self
            .characters
            .iter()
            .filter(|entry| entry.fights > 0)
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order is arbitrary; keep ties in the ranking stable.
        characters.sort_by_key(|character| character.id);
        Ok(characters)
    }

    async fn add_skill(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<(), RepoError> {
        let skill = self
            .skills
            .get(&skill_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepoError::not_found("Skill", skill_id))?;
        let mut character = self
            .characters
            .get_mut(&character_id)
            .ok_or_else(|| RepoError::not_found("Character", character_id))?;
        if !character.knows_skill(skill_id) {
            character.skills.push(CharacterSkill::new(character_id, skill));
        }
        Ok(())
    }
}

fn apply(character: &mut Character, update: &CombatStateUpdate) {
    character.hit_points = update.hit_points;
    character.fights = update.fights;
    character.victories = update.victories;
    character.defeats = update.defeats;
}

#[async_trait]
impl SkillRepo for InMemoryRepository {
    async fn get(&self, id: SkillId) -> Result<Option<Skill>, RepoError> {
        Ok(self.skills.get(&id).map(|entry| entry.value().clone()))
    }
}
