//! Skill use cases.

use std::sync::Arc;

use arena_domain::{Character, CharacterId, DomainError, SkillId};

use crate::infrastructure::ports::{CharacterRepo, RepoError, SkillRepo};

/// Container for skill use cases.
pub struct SkillUseCases {
    pub learn: Arc<LearnSkill>,
}

impl SkillUseCases {
    pub fn new(learn: Arc<LearnSkill>) -> Self {
        Self { learn }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("Character not found.")]
    CharacterNotFound(CharacterId),
    #[error("Skill not found.")]
    SkillNotFound(SkillId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Teach a character a skill from the catalogue.
pub struct LearnSkill {
    characters: Arc<dyn CharacterRepo>,
    skills: Arc<dyn SkillRepo>,
}

impl LearnSkill {
    pub fn new(characters: Arc<dyn CharacterRepo>, skills: Arc<dyn SkillRepo>) -> Self {
        Self { characters, skills }
    }

    /// Returns the character with the new skill attached.
    pub async fn execute(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<Character, SkillError> {
        let mut character = self
            .characters
            .get(character_id)
            .await?
            .ok_or(SkillError::CharacterNotFound(character_id))?;

        let skill = self
            .skills
            .get(skill_id)
            .await?
            .ok_or(SkillError::SkillNotFound(skill_id))?;
        let skill_name = skill.name.clone();

        character.learn_skill(skill)?;
        self.characters.add_skill(character_id, skill_id).await?;

        tracing::info!(
            character_id = %character_id,
            skill = %skill_name,
            "Character learned skill"
        );
        Ok(character)
    }
}
