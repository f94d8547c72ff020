use std::sync::Arc;

use arena_domain::combat::rank;
use arena_domain::Character;

use super::FightError;
use crate::infrastructure::ports::CharacterRepo;

/// Characters that have fought, best record first.
pub struct GetHighscore {
    characters: Arc<dyn CharacterRepo>,
}

impl GetHighscore {
    pub fn new(characters: Arc<dyn CharacterRepo>) -> Self {
        Self { characters }
    }

    pub async fn execute(&self) -> Result<Vec<Character>, FightError> {
        let fighters = self.characters.list_with_fights().await?;
        let ranked = rank(&fighters);
        tracing::debug!(entries = ranked.len(), "Highscore computed");
        Ok(ranked)
    }
}
