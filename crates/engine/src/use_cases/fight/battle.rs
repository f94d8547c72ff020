//! Full free-for-all fight between two or more characters.

use std::sync::Arc;

use arena_domain::combat::Arena;
use arena_domain::{Character, CharacterId, CombatError, FightOutcome};

use super::FightError;
use crate::infrastructure::ports::{CharacterRepo, RandomPort};
use crate::infrastructure::random::seeded_dice;

/// Run a battle to completion and write back every participant's record.
pub struct RunFight {
    characters: Arc<dyn CharacterRepo>,
    random: Arc<dyn RandomPort>,
    arena: Arena,
}

impl RunFight {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        random: Arc<dyn RandomPort>,
        max_rounds: u32,
    ) -> Self {
        Self {
            characters,
            random,
            arena: Arena::new(max_rounds),
        }
    }

    /// Repeated ids are collapsed, keeping the first occurrence's position.
    /// Participants attack in request order.
    pub async fn execute(&self, character_ids: &[CharacterId]) -> Result<FightOutcome, FightError> {
        let ids = dedupe(character_ids);
        if ids.len() < 2 {
            return Err(CombatError::invalid_request(
                "A fight needs at least two distinct characters.",
            )
            .into());
        }

        let participants = self.load_in_order(&ids).await?;

        let result = {
            let mut dice = seeded_dice(self.random.next_seed());
            let mut reported = 0;
            self.arena
                .fight_observed(participants, &mut dice, |battle| {
                    let lines = battle.log().lines();
                    for line in lines.get(reported..).unwrap_or_default() {
                        tracing::debug!(round = battle.rounds(), "{}", line);
                    }
                    reported = battle.log().len();
                    tracing::trace!(phase = ?battle.phase(), "Round played");
                })
        };
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err @ CombatError::BattleStalemate { .. }) => {
                tracing::warn!(
                    participants = ids.len(),
                    max_rounds = self.arena.max_rounds(),
                    "Fight hit the round cap without a winner"
                );
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        self.characters.save_combat_states(&outcome.updates()).await?;

        tracing::info!(
            winner = %outcome.winner,
            loser = %outcome.loser,
            rounds = outcome.rounds,
            participants = outcome.participants.len(),
            "Fight finished"
        );
        Ok(outcome)
    }

    async fn load_in_order(&self, ids: &[CharacterId]) -> Result<Vec<Character>, FightError> {
        let mut found = self.characters.get_many(ids).await?;
        let mut ordered = Vec::with_capacity(ids.len());
        for &id in ids {
            let Some(index) = found.iter().position(|character| character.id == id) else {
                tracing::warn!(character_id = %id, "Character not found for fight");
                return Err(CombatError::CharacterNotFound { id }.into());
            };
            ordered.push(found.swap_remove(index));
        }
        Ok(ordered)
    }
}

fn dedupe(ids: &[CharacterId]) -> Vec<CharacterId> {
    let mut unique = Vec::with_capacity(ids.len());
    for &id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
