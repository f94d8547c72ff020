//! Skill entity and the link that teaches it to a character
//!
//! Skills are shared: the same skill may be learned by many characters, so a
//! character holds `CharacterSkill` links rather than owning the skill itself.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, SkillId};

/// A skill that characters can use in place of their weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Base damage before the intelligence/defense rolls
    pub damage: i32,
}

impl Skill {
    pub fn new(id: SkillId, name: impl Into<String>, damage: i32) -> Self {
        Self {
            id,
            name: name.into(),
            damage,
        }
    }
}

/// Many-to-many link between a character and a skill it has learned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSkill {
    pub character_id: CharacterId,
    pub skill: Skill,
}

impl CharacterSkill {
    pub fn new(character_id: CharacterId, skill: Skill) -> Self {
        Self {
            character_id,
            skill,
        }
    }
}
