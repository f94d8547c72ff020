//! Combat-related domain events
//!
//! These types communicate what happened during an attack or a battle,
//! allowing callers to report it and persist the resulting state.

use serde::{Deserialize, Serialize};

use crate::entities::Character;
use crate::ids::CharacterId;

/// Damage as shown to players: negative rolls read as zero.
pub fn reported_damage(damage: i32) -> i32 {
    damage.max(0)
}

/// `"{attacker} attacks {opponent} using {action} with {damage}"`
pub fn attack_line(attacker: &str, opponent: &str, action: &str, damage: i32) -> String {
    format!(
        "{} attacks {} using {} with {}",
        attacker,
        opponent,
        action,
        reported_damage(damage)
    )
}

pub fn defeated_line(name: &str) -> String {
    format!("{} has been defeated!", name)
}

pub fn wins_line(name: &str) -> String {
    format!("{} wins!", name)
}

/// Result of one resolved attack.
///
/// `damage` keeps the true signed value; hit points were only reduced when it
/// was strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackOutcome {
    pub attacker: String,
    pub attacker_hp: i32,
    pub opponent: String,
    pub opponent_hp: i32,
    pub damage: i32,
    /// Weapon or skill name used for the attack
    pub action: String,
}

impl AttackOutcome {
    pub fn opponent_defeated(&self) -> bool {
        self.opponent_hp <= 0
    }

    /// The defeat message when the opponent went down, otherwise the attack line.
    pub fn summary(&self) -> String {
        if self.opponent_defeated() {
            defeated_line(&self.opponent)
        } else {
            attack_line(&self.attacker, &self.opponent, &self.action, self.damage)
        }
    }
}

/// Append-only, human-readable record of one battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog(Vec<String>);

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.0
    }
}

/// Fields of a character that changed during combat and must be written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStateUpdate {
    pub id: CharacterId,
    pub hit_points: i32,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

/// Everything a finished battle produced.
#[derive(Debug, Clone)]
pub struct FightOutcome {
    pub log: BattleLog,
    pub winner: CharacterId,
    pub loser: CharacterId,
    /// Rounds started, including the one in which the defeat happened
    pub rounds: u32,
    /// Every participant after bookkeeping, in fight order
    pub participants: Vec<Character>,
}

impl FightOutcome {
    /// Write-back requests for every participant.
    pub fn updates(&self) -> Vec<CombatStateUpdate> {
        self.participants.iter().map(Character::combat_state).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(opponent_hp: i32, damage: i32) -> AttackOutcome {
        AttackOutcome {
            attacker: "Frodo".into(),
            attacker_hp: 100,
            opponent: "Sam".into(),
            opponent_hp,
            damage,
            action: "Sting".into(),
        }
    }

    #[test]
    fn negative_damage_is_reported_as_zero() {
        let result = outcome(100, -6);
        assert_eq!(result.damage, -6);
        assert_eq!(reported_damage(result.damage), 0);
        assert_eq!(result.summary(), "Frodo attacks Sam using Sting with 0");
    }

    #[test]
    fn summary_prefers_defeat_message() {
        let result = outcome(-3, 20);
        assert!(result.opponent_defeated());
        assert_eq!(result.summary(), "Sam has been defeated!");
    }

    #[test]
    fn battle_log_keeps_insertion_order() {
        let mut log = BattleLog::new();
        log.push(attack_line("A", "B", "Sword", 3));
        log.push(defeated_line("B"));
        log.push(wins_line("A"));
        assert_eq!(
            log.lines(),
            ["A attacks B using Sword with 3", "B has been defeated!", "A wins!"]
        );
        assert_eq!(serde_json::to_value(&log).expect("serialize").as_array().map(Vec::len), Some(3));
    }
}
