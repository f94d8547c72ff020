//! Damage resolution shared by every attack type.
//!
//! Weapon: `weapon.damage + roll(strength) - roll(defense)`.
//! Skill:  `skill.damage + roll(intelligence) - roll(defense)`.
//!
//! Each roll is a uniform draw in `[0, stat)`, attacker first. The defender
//! loses hit points only when the result is strictly positive; the signed
//! value is returned either way.

use crate::combat::dice::{uniform, Dice};
use crate::entities::{Character, Skill};
use crate::error::CombatError;

/// Resolve a weapon hit and apply it to `defender`.
pub fn resolve_weapon_damage(
    attacker: &Character,
    defender: &mut Character,
    dice: &mut impl Dice,
) -> Result<i32, CombatError> {
    let weapon = attacker
        .weapon
        .as_ref()
        .ok_or_else(|| CombatError::missing_weapon(attacker.name.clone()))?;

    let damage = roll_damage(weapon.damage, attacker.strength, defender.defense, dice);
    defender.take_damage(damage);
    Ok(damage)
}

/// Resolve a skill hit and apply it to `defender`.
///
/// The caller is responsible for checking that `attacker` knows `skill`.
pub fn resolve_skill_damage(
    attacker: &Character,
    defender: &mut Character,
    skill: &Skill,
    dice: &mut impl Dice,
) -> i32 {
    let damage = roll_damage(skill.damage, attacker.intelligence, defender.defense, dice);
    defender.take_damage(damage);
    damage
}

fn roll_damage(base: i32, attack_stat: i32, defense_stat: i32, dice: &mut impl Dice) -> i32 {
    let bonus = uniform(dice, attack_stat);
    let mitigation = uniform(dice, defense_stat);
    base.saturating_add(bonus).saturating_sub(mitigation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Weapon;
    use crate::ids::{CharacterId, SkillId, WeaponId};

    fn attacker() -> Character {
        Character::new(CharacterId::new(1), "Aragorn")
            .with_attributes(15, 8, 10)
            .with_weapon(Weapon::new(WeaponId::new(1), "Anduril", 20))
    }

    fn defender() -> Character {
        Character::new(CharacterId::new(2), "Lurtz").with_attributes(12, 4, 30)
    }

    /// Dice replaying a fixed script of draws.
    fn scripted(rolls: Vec<i32>) -> impl FnMut(i32) -> i32 {
        let mut rolls = rolls.into_iter();
        move |_| rolls.next().unwrap_or(0)
    }

    #[test]
    fn weapon_damage_adds_strength_and_subtracts_defense() {
        let aragorn = attacker();
        let mut lurtz = defender();
        let mut dice = scripted(vec![7, 4]);

        let damage = resolve_weapon_damage(&aragorn, &mut lurtz, &mut dice).expect("armed");

        assert_eq!(damage, 20 + 7 - 4);
        assert_eq!(lurtz.hit_points, 100 - 23);
    }

    #[test]
    fn skill_damage_uses_intelligence() {
        let aragorn = attacker();
        let mut lurtz = defender();
        let heal_word = Skill::new(SkillId::new(4), "Word of Power", 10);
        let mut seen = Vec::new();
        let mut dice = |upper: i32| {
            seen.push(upper);
            upper - 1
        };

        let damage = resolve_skill_damage(&aragorn, &mut lurtz, &heal_word, &mut dice);

        assert_eq!(seen, vec![8, 30]);
        assert_eq!(damage, 10 + 7 - 29);
        assert_eq!(lurtz.hit_points, 100);
    }

    #[test]
    fn negative_damage_leaves_hit_points_alone() {
        let aragorn = attacker();
        let mut lurtz = defender().with_hit_points(55);
        let mut dice = scripted(vec![0, 29]);

        let damage = resolve_weapon_damage(&aragorn, &mut lurtz, &mut dice).expect("armed");

        assert_eq!(damage, -9);
        assert_eq!(lurtz.hit_points, 55);
    }

    #[test]
    fn zero_stats_do_not_draw() {
        let weakling = Character::new(CharacterId::new(3), "Gollum")
            .with_attributes(0, 0, 0)
            .with_weapon(Weapon::new(WeaponId::new(2), "Teeth", 3));
        let mut target = Character::new(CharacterId::new(4), "Fish").with_attributes(0, 0, 0);
        let mut dice = |_: i32| -> i32 { panic!("no draws for zero stats") };

        let damage = resolve_weapon_damage(&weakling, &mut target, &mut dice).expect("armed");
        assert_eq!(damage, 3);
        assert_eq!(target.hit_points, 97);
    }

    #[test]
    fn unarmed_weapon_attack_is_rejected() {
        let unarmed = Character::new(CharacterId::new(5), "Pippin");
        let mut target = defender();
        let mut dice = scripted(vec![]);

        let err = resolve_weapon_damage(&unarmed, &mut target, &mut dice).unwrap_err();
        assert!(matches!(err, CombatError::MissingWeapon { .. }));
        assert_eq!(target.hit_points, 100);
    }

    #[test]
    fn hit_points_never_rise_for_any_roll() {
        let aragorn = attacker();
        for attack_roll in 0..15 {
            for defense_roll in 0..30 {
                let mut target = defender().with_hit_points(50);
                let mut dice = scripted(vec![attack_roll, defense_roll]);
                let damage =
                    resolve_weapon_damage(&aragorn, &mut target, &mut dice).expect("armed");
                if damage <= 0 {
                    assert_eq!(target.hit_points, 50);
                } else {
                    assert_eq!(target.hit_points, 50 - damage);
                }
            }
        }
    }
}
