//! Response DTOs built from domain records.

use arena_domain::{AttackOutcome, Character, Skill, Weapon};
use serde::{Deserialize, Serialize};

/// One resolved attack, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackResultDto {
    pub attacker: String,
    pub attacker_hp: i32,
    pub opponent: String,
    pub opponent_hp: i32,
    /// Signed damage; may be zero or negative when the defender shrugged it off
    pub damage: i32,
}

impl From<&AttackOutcome> for AttackResultDto {
    fn from(outcome: &AttackOutcome) -> Self {
        Self {
            attacker: outcome.attacker.clone(),
            attacker_hp: outcome.attacker_hp,
            opponent: outcome.opponent.clone(),
            opponent_hp: outcome.opponent_hp,
            damage: outcome.damage,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightResultDto {
    pub log: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighscoreDto {
    pub id: i32,
    pub name: String,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl From<&Character> for HighscoreDto {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.get(),
            name: character.name.clone(),
            fights: character.fights,
            victories: character.victories,
            defeats: character.defeats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDto {
    pub name: String,
    pub damage: i32,
}

impl From<&Weapon> for WeaponDto {
    fn from(weapon: &Weapon) -> Self {
        Self {
            name: weapon.name.clone(),
            damage: weapon.damage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDto {
    pub name: String,
    pub damage: i32,
}

impl From<&Skill> for SkillDto {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            damage: skill.damage,
        }
    }
}

/// Full character view returned after learning a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub class: String,
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<WeaponDto>,
    pub skills: Vec<SkillDto>,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl From<&Character> for CharacterDto {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.get(),
            name: character.name.clone(),
            class: character.class.display_name().to_string(),
            hit_points: character.hit_points,
            strength: character.strength,
            defense: character.defense,
            intelligence: character.intelligence,
            weapon: character.weapon.as_ref().map(WeaponDto::from),
            skills: character.learned_skills().map(SkillDto::from).collect(),
            fights: character.fights,
            victories: character.victories,
            defeats: character.defeats,
        }
    }
}
