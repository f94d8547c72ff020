//! Single-attack use cases: one weapon or skill attack between two characters.

use std::sync::Arc;

use arena_domain::combat;
use arena_domain::{AttackOutcome, Character, CharacterId, CombatError, SkillId};

use super::{load_character, FightError};
use crate::infrastructure::ports::{CharacterRepo, RandomPort};
use crate::infrastructure::random::seeded_dice;

/// Attack with the equipped weapon.
pub struct WeaponAttack {
    characters: Arc<dyn CharacterRepo>,
    random: Arc<dyn RandomPort>,
}

impl WeaponAttack {
    pub fn new(characters: Arc<dyn CharacterRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self { characters, random }
    }

    /// Resolve the attack and persist the opponent's new hit points.
    pub async fn execute(
        &self,
        attacker_id: CharacterId,
        opponent_id: CharacterId,
    ) -> Result<AttackOutcome, FightError> {
        let (attacker, mut opponent) =
            load_pair(self.characters.as_ref(), attacker_id, opponent_id).await?;

        let outcome = {
            let mut dice = seeded_dice(self.random.next_seed());
            combat::weapon_attack(&attacker, &mut opponent, &mut dice)?
        };

        persist_opponent(self.characters.as_ref(), &opponent, &outcome).await?;
        Ok(outcome)
    }
}

/// Attack with one of the attacker's learned skills.
pub struct SkillAttack {
    characters: Arc<dyn CharacterRepo>,
    random: Arc<dyn RandomPort>,
}

impl SkillAttack {
    pub fn new(characters: Arc<dyn CharacterRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self { characters, random }
    }

    /// Resolve the attack and persist the opponent's new hit points.
    ///
    /// Nothing is written when the attacker doesn't know the skill.
    pub async fn execute(
        &self,
        attacker_id: CharacterId,
        opponent_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<AttackOutcome, FightError> {
        let (attacker, mut opponent) =
            load_pair(self.characters.as_ref(), attacker_id, opponent_id).await?;

        let outcome = {
            let mut dice = seeded_dice(self.random.next_seed());
            combat::skill_attack(&attacker, &mut opponent, skill_id, &mut dice)?
        };

        persist_opponent(self.characters.as_ref(), &opponent, &outcome).await?;
        Ok(outcome)
    }
}

async fn load_pair(
    repo: &dyn CharacterRepo,
    attacker_id: CharacterId,
    opponent_id: CharacterId,
) -> Result<(Character, Character), FightError> {
    if attacker_id == opponent_id {
        return Err(CombatError::invalid_request("A character cannot attack itself.").into());
    }
    let attacker = load_character(repo, attacker_id).await?;
    let opponent = load_character(repo, opponent_id).await?;
    Ok((attacker, opponent))
}

async fn persist_opponent(
    repo: &dyn CharacterRepo,
    opponent: &Character,
    outcome: &AttackOutcome,
) -> Result<(), FightError> {
    repo.save_combat_state(&opponent.combat_state()).await?;

    tracing::debug!(
        attacker = %outcome.attacker,
        opponent = %outcome.opponent,
        action = %outcome.action,
        damage = outcome.damage,
        opponent_hp = outcome.opponent_hp,
        "Attack resolved"
    );
    if outcome.opponent_defeated() {
        tracing::info!(opponent_id = %opponent.id, "{}", outcome.summary());
    }
    Ok(())
}
