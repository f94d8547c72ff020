//! Free-for-all battles between two or more characters.
//!
//! Each round walks the participants in their fixed order. Every attacker
//! picks a random opponent among the others, flips a coin between weapon and
//! skill, and strikes. The first character driven to zero hit points or below
//! ends the battle: the striker wins, the struck character loses, and every
//! participant has its fight count bumped and hit points restored.
//!
//! Bystanders in a 3+ way battle only get the fight count; victories and
//! defeats go to the two characters involved in the final blow.
//!
//! ```text
//! Idle --play_round--> RoundInProgress --(defeat)--> Resolved
//!                        ^          |
//!                        +----------+ (no defeat yet)
//! ```

use std::collections::HashSet;

use crate::combat::damage::{resolve_skill_damage, resolve_weapon_damage};
use crate::combat::dice::{coin, pick, Dice};
use crate::entities::{Character, Skill};
use crate::error::CombatError;
use crate::events::{attack_line, defeated_line, wins_line, BattleLog, FightOutcome};
use crate::ids::CharacterId;

/// Round cap applied when none is configured.
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

/// Where a battle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Idle,
    RoundInProgress { round: u32 },
    Resolved {
        winner: CharacterId,
        loser: CharacterId,
    },
}

/// Chosen attack for one turn.
enum Action {
    Weapon,
    Skill(Skill),
}

/// A battle in progress. Use [`Arena::fight`] to run one to completion.
#[derive(Debug)]
pub struct Battle {
    participants: Vec<Character>,
    log: BattleLog,
    phase: BattlePhase,
    rounds: u32,
    /// (winner index, loser index) once someone is down
    resolution: Option<(usize, usize)>,
}

impl Battle {
    /// Validate the participants and set up an idle battle.
    ///
    /// Requires at least two distinct characters, each with a weapon or at
    /// least one learned skill.
    pub fn new(participants: Vec<Character>) -> Result<Self, CombatError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = participants.iter().find(|c| !seen.insert(c.id)) {
            return Err(CombatError::invalid_request(format!(
                "{} appears more than once.",
                duplicate.name
            )));
        }
        if participants.len() < 2 {
            return Err(CombatError::invalid_request(
                "A fight needs at least two distinct characters.",
            ));
        }
        if let Some(unarmed) = participants.iter().find(|c| !c.can_attack()) {
            return Err(CombatError::missing_weapon(unarmed.name.clone()));
        }

        Ok(Self {
            participants,
            log: BattleLog::new(),
            phase: BattlePhase::Idle,
            rounds: 0,
            resolution: None,
        })
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Let every participant attack once, stopping at the first defeat.
    ///
    /// Does nothing once the battle is resolved.
    pub fn play_round(&mut self, dice: &mut impl Dice) -> Result<BattlePhase, CombatError> {
        if matches!(self.phase, BattlePhase::Resolved { .. }) {
            return Ok(self.phase);
        }

        self.rounds += 1;
        self.phase = BattlePhase::RoundInProgress { round: self.rounds };

        for attacker in 0..self.participants.len() {
            let candidates: Vec<usize> = (0..self.participants.len())
                .filter(|&index| index != attacker)
                .collect();
            let Some(&opponent) = pick(dice, &candidates) else {
                continue;
            };

            if self.strike(attacker, opponent, dice)? {
                self.resolve(attacker, opponent);
                break;
            }
        }

        Ok(self.phase)
    }

    /// Consume the battle, producing its outcome.
    ///
    /// An unresolved battle is reported as a stalemate.
    pub fn finish(self) -> Result<FightOutcome, CombatError> {
        match (self.phase, self.resolution) {
            (BattlePhase::Resolved { winner, loser }, Some(_)) => Ok(FightOutcome {
                log: self.log,
                winner,
                loser,
                rounds: self.rounds,
                participants: self.participants,
            }),
            _ => Err(CombatError::BattleStalemate {
                rounds: self.rounds,
            }),
        }
    }

    /// Resolve one attack. Returns whether the opponent went down.
    fn strike(
        &mut self,
        attacker: usize,
        opponent: usize,
        dice: &mut impl Dice,
    ) -> Result<bool, CombatError> {
        let action = choose_action(&self.participants[attacker], dice);
        let (striker, target) = pair_mut(&mut self.participants, attacker, opponent);

        let (damage, action_name) = match action {
            Action::Weapon => {
                let damage = resolve_weapon_damage(striker, target, dice)?;
                let name = striker
                    .weapon
                    .as_ref()
                    .map(|weapon| weapon.name.clone())
                    .unwrap_or_default();
                (damage, name)
            }
            Action::Skill(skill) => {
                let damage = resolve_skill_damage(striker, target, &skill, dice);
                (damage, skill.name)
            }
        };

        self.log
            .push(attack_line(&striker.name, &target.name, &action_name, damage));
        Ok(target.is_defeated())
    }

    fn resolve(&mut self, winner: usize, loser: usize) {
        let winner_name = self.participants[winner].name.clone();
        let loser_name = self.participants[loser].name.clone();
        self.log.push(defeated_line(&loser_name));
        self.log.push(wins_line(&winner_name));

        self.participants[winner].victories += 1;
        self.participants[loser].defeats += 1;
        for participant in &mut self.participants {
            participant.fights += 1;
            participant.restore_hit_points();
        }

        self.phase = BattlePhase::Resolved {
            winner: self.participants[winner].id,
            loser: self.participants[loser].id,
        };
        self.resolution = Some((winner, loser));
    }
}

/// Coin flip between weapon and skill.
///
/// A skill pick with no learned skills falls back to the weapon; a weapon
/// pick while unarmed falls back to a random learned skill.
fn choose_action(attacker: &Character, dice: &mut impl Dice) -> Action {
    let wants_weapon = coin(dice);
    let skills: Vec<&Skill> = attacker.learned_skills().collect();

    let use_skill = !skills.is_empty() && (!wants_weapon || !attacker.has_weapon());
    if !use_skill {
        return Action::Weapon;
    }
    match pick(dice, &skills) {
        Some(skill) => Action::Skill((*skill).clone()),
        None => Action::Weapon,
    }
}

/// Borrow the attacker immutably and the opponent mutably from one slice.
fn pair_mut(
    participants: &mut [Character],
    attacker: usize,
    opponent: usize,
) -> (&Character, &mut Character) {
    if attacker < opponent {
        let (left, right) = participants.split_at_mut(opponent);
        (&left[attacker], &mut right[0])
    } else {
        let (left, right) = participants.split_at_mut(attacker);
        (&right[0], &mut left[opponent])
    }
}

/// Runs battles to completion under a round cap.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    max_rounds: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

impl Arena {
    /// A cap of zero is raised to one round.
    pub fn new(max_rounds: u32) -> Self {
        Self {
            max_rounds: max_rounds.max(1),
        }
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Fight until one character is defeated or the round cap runs out.
    ///
    /// `participants` are attacked in the given order each round. On
    /// stalemate no bookkeeping is applied and
    /// [`CombatError::BattleStalemate`] is returned.
    pub fn fight(
        &self,
        participants: Vec<Character>,
        dice: &mut impl Dice,
    ) -> Result<FightOutcome, CombatError> {
        self.fight_observed(participants, dice, |_| {})
    }

    /// Like [`Arena::fight`], calling `on_round` after every played round.
    pub fn fight_observed(
        &self,
        participants: Vec<Character>,
        dice: &mut impl Dice,
        mut on_round: impl FnMut(&Battle),
    ) -> Result<FightOutcome, CombatError> {
        let mut battle = Battle::new(participants)?;
        while battle.rounds() < self.max_rounds {
            let phase = battle.play_round(dice)?;
            on_round(&battle);
            if let BattlePhase::Resolved { .. } = phase {
                break;
            }
        }
        battle.finish()
    }
}
