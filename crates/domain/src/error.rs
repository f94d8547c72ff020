//! Unified error types for the domain layer
//!
//! `DomainError` covers entity invariants (learning a skill twice), while
//! `CombatError` covers every way an attack or battle can be refused. Neither is
//! ever raised as a panic: the service boundary turns both into failure envelopes.

use thiserror::Error;

use crate::ids::{CharacterId, SkillId};

/// Unified error type for entity operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

/// Reasons an attack or a battle cannot be resolved.
///
/// Display strings are the human-readable messages placed in failure envelopes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombatError {
    /// Attacker or opponent id did not resolve to a character
    #[error("Character not found.")]
    CharacterNotFound { id: CharacterId },

    /// Skill id is not among the attacker's learned skills
    #[error("{character} doesn't know that skill.")]
    UnknownSkill { character: String, skill_id: SkillId },

    /// Weapon attack requested but nothing is equipped
    #[error("{character} has no weapon equipped.")]
    MissingWeapon { character: String },

    /// Fewer than two distinct combatants, or an otherwise malformed request
    #[error("Invalid fight request: {0}")]
    InvalidFightRequest(String),

    /// The round cap ran out before anyone was defeated
    #[error("The battle ended in a stalemate after {rounds} rounds.")]
    BattleStalemate { rounds: u32 },
}

impl CombatError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidFightRequest(msg.into())
    }

    pub fn missing_weapon(character: impl Into<String>) -> Self {
        Self::MissingWeapon {
            character: character.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("Gandalf already knows Fireball");
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(
            err.to_string(),
            "Constraint violation: Gandalf already knows Fireball"
        );
    }

    #[test]
    fn test_unknown_skill_message() {
        let err = CombatError::UnknownSkill {
            character: "Frodo".to_string(),
            skill_id: SkillId::new(3),
        };
        assert_eq!(err.to_string(), "Frodo doesn't know that skill.");
    }

    #[test]
    fn test_stalemate_message() {
        let err = CombatError::BattleStalemate { rounds: 50 };
        assert!(err.to_string().contains("stalemate after 50 rounds"));
    }

    #[test]
    fn test_character_not_found_message() {
        let err = CombatError::CharacterNotFound {
            id: CharacterId::new(9),
        };
        assert_eq!(err.to_string(), "Character not found.");
    }
}
