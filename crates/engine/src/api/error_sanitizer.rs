//! Error sanitization for caller-facing messages.
//!
//! Combat refusals are already written for the caller and pass through as-is.
//! Storage failures are logged in full and replaced by a generic message.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::{FightError, SkillError};

/// Sanitize a repository error.
pub fn sanitize_repo_error(error: &RepoError, operation: &str) -> String {
    tracing::error!(
        error = %error,
        operation = operation,
        "Repository error"
    );

    format!("Failed to {} - please try again.", operation)
}

pub fn fight_error_message(error: &FightError, operation: &str) -> String {
    match error {
        FightError::Repo(repo) => sanitize_repo_error(repo, operation),
        other => other.to_string(),
    }
}

pub fn skill_error_message(error: &SkillError, operation: &str) -> String {
    match error {
        SkillError::Repo(repo) => sanitize_repo_error(repo, operation),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::{CharacterId, CombatError};

    #[test]
    fn repo_details_are_hidden() {
        let err = FightError::Repo(RepoError::database("save_combat_state", "disk full"));
        let message = fight_error_message(&err, "run the fight");
        assert_eq!(message, "Failed to run the fight - please try again.");
        assert!(!message.contains("disk full"));
    }

    #[test]
    fn combat_refusals_pass_through() {
        let err = FightError::Combat(CombatError::CharacterNotFound {
            id: CharacterId::new(4),
        });
        assert_eq!(fight_error_message(&err, "attack"), "Character not found.");
    }
}
