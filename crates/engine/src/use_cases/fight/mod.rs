//! Fight use cases.
//!
//! Each use case follows the same flow:
//! 1. Hydrate the characters involved from the repository
//! 2. Seed one generator for this call and resolve the combat in the domain
//! 3. Write back the changed combat state

use std::sync::Arc;

use arena_domain::{Character, CharacterId, CombatError};

mod attack;
mod battle;
mod highscore;

pub use attack::{SkillAttack, WeaponAttack};
pub use battle::RunFight;
pub use highscore::GetHighscore;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// Container for fight use cases.
pub struct FightUseCases {
    pub weapon_attack: Arc<WeaponAttack>,
    pub skill_attack: Arc<SkillAttack>,
    pub fight: Arc<RunFight>,
    pub highscore: Arc<GetHighscore>,
}

impl FightUseCases {
    pub fn new(
        weapon_attack: Arc<WeaponAttack>,
        skill_attack: Arc<SkillAttack>,
        fight: Arc<RunFight>,
        highscore: Arc<GetHighscore>,
    ) -> Self {
        Self {
            weapon_attack,
            skill_attack,
            fight,
            highscore,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FightError {
    #[error(transparent)]
    Combat(#[from] CombatError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Load one character or fail with `CharacterNotFound`.
pub(crate) async fn load_character(
    repo: &dyn CharacterRepo,
    id: CharacterId,
) -> Result<Character, FightError> {
    match repo.get(id).await? {
        Some(character) => Ok(character),
        None => {
            tracing::warn!(character_id = %id, "Character not found");
            Err(CombatError::CharacterNotFound { id }.into())
        }
    }
}
