//! Request payloads accepted by the arena service boundary.
//!
//! Ids are raw integers; the engine converts them to domain ids.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAttackDto {
    pub attacker_id: i32,
    pub opponent_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAttackDto {
    pub attacker_id: i32,
    pub opponent_id: i32,
    pub skill_id: i32,
}

/// Characters to throw into one free-for-all, in attack order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightRequestDto {
    pub character_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCharacterSkillDto {
    pub character_id: i32,
    pub skill_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fight_request_reads_camel_case() {
        let request: FightRequestDto =
            serde_json::from_str(r#"{"characterIds":[3,1,2]}"#).expect("deserialize");
        assert_eq!(request.character_ids, vec![3, 1, 2]);
    }

    #[test]
    fn skill_attack_reads_camel_case() {
        let request: SkillAttackDto =
            serde_json::from_str(r#"{"attackerId":1,"opponentId":2,"skillId":5}"#)
                .expect("deserialize");
        assert_eq!(request.skill_id, 5);
    }
}
