//! Character entity - the snapshot every combat operation works on
//!
//! A `Character` arrives fully hydrated (weapon and learned skills included)
//! from whatever store owns it. Combat code mutates a copy and hands back
//! `CombatStateUpdate`s describing what needs to be written back.

use serde::{Deserialize, Serialize};

use crate::entities::{CharacterSkill, Skill, Weapon};
use crate::error::DomainError;
use crate::events::CombatStateUpdate;
use crate::ids::{CharacterId, SkillId};

/// Hit points every character is restored to after a battle.
pub const FULL_HIT_POINTS: i32 = 100;

/// Base value for strength, intelligence, and defense on a fresh character.
pub const DEFAULT_ATTRIBUTE: i32 = 10;

/// Character class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpgClass {
    #[default]
    Knight,
    Mage,
    Cleric,
}

impl RpgClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Knight => "Knight",
            Self::Mage => "Mage",
            Self::Cleric => "Cleric",
        }
    }
}

/// A combatant with its attributes, equipment, and fight record.
///
/// # Invariants
///
/// - `fights`, `victories`, and `defeats` never go negative (unsigned)
/// - `hit_points` may drop to zero or below mid-battle; `restore_hit_points`
///   brings it back to [`FULL_HIT_POINTS`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub class: RpgClass,

    // Combat attributes
    pub hit_points: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,

    // Equipment
    #[serde(default)]
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub skills: Vec<CharacterSkill>,

    // Fight record
    #[serde(default)]
    pub fights: u32,
    #[serde(default)]
    pub victories: u32,
    #[serde(default)]
    pub defeats: u32,
}

impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            class: RpgClass::default(),
            hit_points: FULL_HIT_POINTS,
            strength: DEFAULT_ATTRIBUTE,
            defense: DEFAULT_ATTRIBUTE,
            intelligence: DEFAULT_ATTRIBUTE,
            weapon: None,
            skills: Vec::new(),
            fights: 0,
            victories: 0,
            defeats: 0,
        }
    }

    pub fn with_class(mut self, class: RpgClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_attributes(mut self, strength: i32, intelligence: i32, defense: i32) -> Self {
        self.strength = strength;
        self.intelligence = intelligence;
        self.defense = defense;
        self
    }

    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(CharacterSkill::new(self.id, skill));
        self
    }

    pub fn with_record(mut self, fights: u32, victories: u32, defeats: u32) -> Self {
        self.fights = fights;
        self.victories = victories;
        self.defeats = defeats;
        self
    }

    /// Look up a learned skill by id.
    pub fn skill(&self, skill_id: SkillId) -> Option<&Skill> {
        self.skills
            .iter()
            .map(|link| &link.skill)
            .find(|skill| skill.id == skill_id)
    }

    pub fn knows_skill(&self, skill_id: SkillId) -> bool {
        self.skill(skill_id).is_some()
    }

    pub fn learned_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().map(|link| &link.skill)
    }

    pub fn has_weapon(&self) -> bool {
        self.weapon.is_some()
    }

    /// Whether this character has anything to attack with.
    pub fn can_attack(&self) -> bool {
        self.has_weapon() || !self.skills.is_empty()
    }

    pub fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }

    /// Apply a computed damage value. Zero or negative damage never heals.
    pub fn take_damage(&mut self, damage: i32) {
        if damage > 0 {
            self.hit_points = self.hit_points.saturating_sub(damage);
        }
    }

    pub fn restore_hit_points(&mut self) {
        self.hit_points = FULL_HIT_POINTS;
    }

    /// Teach this character a skill.
    ///
    /// Returns an error if the skill is already known.
    pub fn learn_skill(&mut self, skill: Skill) -> Result<(), DomainError> {
        if self.knows_skill(skill.id) {
            return Err(DomainError::constraint(format!(
                "{} already knows {}",
                self.name, skill.name
            )));
        }
        self.skills.push(CharacterSkill::new(self.id, skill));
        Ok(())
    }

    /// The persisted combat fields, as a write-back request.
    pub fn combat_state(&self) -> CombatStateUpdate {
        CombatStateUpdate {
            id: self.id,
            hit_points: self.hit_points,
            fights: self.fights,
            victories: self.victories,
            defeats: self.defeats,
        }
    }
}
