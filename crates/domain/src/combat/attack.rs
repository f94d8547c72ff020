//! Single attacks between two characters.

use crate::combat::damage::{resolve_skill_damage, resolve_weapon_damage};
use crate::combat::dice::Dice;
use crate::entities::Character;
use crate::error::CombatError;
use crate::events::AttackOutcome;
use crate::ids::SkillId;

/// Attack `opponent` with the attacker's equipped weapon.
pub fn weapon_attack(
    attacker: &Character,
    opponent: &mut Character,
    dice: &mut impl Dice,
) -> Result<AttackOutcome, CombatError> {
    let damage = resolve_weapon_damage(attacker, opponent, dice)?;
    let action = attacker
        .weapon
        .as_ref()
        .map(|weapon| weapon.name.clone())
        .unwrap_or_default();

    Ok(outcome(attacker, opponent, damage, action))
}

/// Attack `opponent` with one of the attacker's learned skills.
///
/// Fails with [`CombatError::UnknownSkill`] before any roll if the attacker
/// has not learned `skill_id`.
pub fn skill_attack(
    attacker: &Character,
    opponent: &mut Character,
    skill_id: SkillId,
    dice: &mut impl Dice,
) -> Result<AttackOutcome, CombatError> {
    let skill = attacker
        .skill(skill_id)
        .ok_or_else(|| CombatError::UnknownSkill {
            character: attacker.name.clone(),
            skill_id,
        })?;

    let damage = resolve_skill_damage(attacker, opponent, skill, dice);
    Ok(outcome(attacker, opponent, damage, skill.name.clone()))
}

fn outcome(attacker: &Character, opponent: &Character, damage: i32, action: String) -> AttackOutcome {
    AttackOutcome {
        attacker: attacker.name.clone(),
        attacker_hp: attacker.hit_points,
        opponent: opponent.name.clone(),
        opponent_hp: opponent.hit_points,
        damage,
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Skill, Weapon};
    use crate::ids::{CharacterId, WeaponId};

    fn gimli() -> Character {
        Character::new(CharacterId::new(1), "Gimli")
            .with_attributes(18, 6, 14)
            .with_weapon(Weapon::new(WeaponId::new(1), "Axe", 25))
            .with_skill(Skill::new(SkillId::new(2), "Battle Cry", 12))
    }

    fn orc(hit_points: i32) -> Character {
        Character::new(CharacterId::new(2), "Orc")
            .with_attributes(8, 2, 6)
            .with_hit_points(hit_points)
    }

    #[test]
    fn weapon_attack_reports_both_sides() {
        let attacker = gimli();
        let mut opponent = orc(100);
        let mut dice = |_: i32| 3;

        let result = weapon_attack(&attacker, &mut opponent, &mut dice).expect("armed");

        assert_eq!(result.attacker, "Gimli");
        assert_eq!(result.attacker_hp, 100);
        assert_eq!(result.opponent, "Orc");
        assert_eq!(result.damage, 25);
        assert_eq!(result.opponent_hp, 75);
        assert_eq!(result.action, "Axe");
        assert_eq!(result.summary(), "Gimli attacks Orc using Axe with 25");
    }

    #[test]
    fn repeated_maximal_hits_never_overflow() {
        let attacker = Character::new(CharacterId::new(1), "Ogre")
            .with_attributes(0, 0, 0)
            .with_weapon(Weapon::new(WeaponId::new(9), "Club", i32::MAX));
        let mut opponent = orc(100).with_attributes(0, 0, 0);
        let mut dice = |_: i32| 0;

        weapon_attack(&attacker, &mut opponent, &mut dice).expect("armed");
        let second = weapon_attack(&attacker, &mut opponent, &mut dice).expect("armed");

        assert_eq!(second.opponent_hp, i32::MIN);
        assert_eq!(second.summary(), "Orc has been defeated!");
    }

    #[test]
    fn weapon_attack_surfaces_defeat() {
        let attacker = gimli();
        let mut opponent = orc(10);
        let mut dice = |_: i32| 0;

        let result = weapon_attack(&attacker, &mut opponent, &mut dice).expect("armed");

        assert!(result.opponent_defeated());
        assert_eq!(result.opponent_hp, -15);
        assert_eq!(result.summary(), "Orc has been defeated!");
    }

    #[test]
    fn skill_attack_uses_the_named_skill() {
        let attacker = gimli();
        let mut opponent = orc(100);
        let mut dice = |_: i32| 1;

        let result =
            skill_attack(&attacker, &mut opponent, SkillId::new(2), &mut dice).expect("known");

        assert_eq!(result.action, "Battle Cry");
        assert_eq!(result.damage, 12);
        assert_eq!(opponent.hit_points, 88);
    }

    #[test]
    fn unknown_skill_changes_nothing() {
        let attacker = gimli();
        let mut opponent = orc(100);
        let mut dice = |_: i32| -> i32 { panic!("no roll for an unknown skill") };

        let err = skill_attack(&attacker, &mut opponent, SkillId::new(99), &mut dice).unwrap_err();

        assert!(err.to_string().contains("doesn't know that skill"));
        assert_eq!(opponent.hit_points, 100);
    }
}
