//! One-exchange skirmishes that award experience.
//!
//! Unlike waves, a skirmish is a single swing and counter-swing against a
//! fresh monster. Killing it grants its experience through the class-aware
//! progression path. There is no revival here; hit points just bottom out
//! at zero.

use wb_core::Character;

use crate::bestiary::{Bestiary, Monster};
use crate::dice::RandomSource;
use crate::error::MechResult;
use crate::progression::{LevelUp, award_experience};
use crate::rules::EncounterRules;

/// Roll needed on a d20 to land a skirmish blow.
pub const SKIRMISH_TO_HIT: u32 = 10;

/// Result of a skirmish.
#[derive(Debug, Clone, PartialEq)]
pub struct SkirmishOutcome {
    /// The updated character.
    pub character: Character,
    /// The monster after the exchange.
    pub monster: Monster,
    /// Combat log, one line per event.
    pub log: Vec<String>,
    /// Whether the monster died.
    pub victory: bool,
    /// Experience awarded.
    pub xp_gained: u32,
    /// Level-ups triggered by the award.
    pub level_ups: Vec<LevelUp>,
}

/// Fight one exchange with the named skirmish monster.
pub fn resolve_skirmish<D: RandomSource + ?Sized>(
    character: &Character,
    monster_name: &str,
    bestiary: &Bestiary,
    rules: &EncounterRules,
    dice: &mut D,
) -> MechResult<SkirmishOutcome> {
    let template = bestiary.skirmish_template(monster_name)?;
    let mut character = character.clone();
    let mut monster = Monster::from(template);
    let mut log = vec![format!("A {} appears! (HP: {})", monster.name, monster.hp)];

    let to_hit = dice.roll_die(20);
    if to_hit >= SKIRMISH_TO_HIT {
        let bonus = wb_core::ability_modifier(character.attributes.strength);
        let damage = (dice.roll_die(rules.basic_attack_die) as i32 + bonus).max(0);
        monster.take_damage(damage);
        log.push(format!(
            "You hit the {} for {damage} damage. (HP: {})",
            monster.name,
            monster.display_hp()
        ));
    } else {
        log.push(format!("You miss the {}.", monster.name));
    }

    let mut xp_gained = 0;
    let mut level_ups = Vec::new();
    let victory = !monster.is_alive();
    if victory {
        xp_gained = monster.xp;
        log.push(format!("The {} is defeated! You gain {xp_gained} XP.", monster.name));
        level_ups = award_experience(&mut character, xp_gained, rules);
        for up in &level_ups {
            log.push(format!("You reached level {}!", up.new_level));
        }
    } else if dice.roll_die(20) >= SKIRMISH_TO_HIT {
        let damage = monster.damage.roll(dice) as i32;
        character.hp -= damage;
        log.push(format!("The {} hits you for {damage} damage.", monster.name));
    } else {
        log.push(format!("The {} misses you.", monster.name));
    }
    character.clamp_hp();
    tracing::debug!(
        character = %character.id,
        monster = %monster.name,
        victory,
        "skirmish resolved"
    );

    Ok(SkirmishOutcome {
        character,
        monster,
        log,
        victory,
        xp_gained,
        level_ups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;
    use crate::testing::ScriptedDice;
    use wb_core::CharacterClass;

    fn fight(c: &Character, name: &str, rolls: &[u32]) -> MechResult<SkirmishOutcome> {
        let mut dice = ScriptedDice::new().with_rolls(rolls.iter().copied());
        resolve_skirmish(c, name, &Bestiary::standard(), &EncounterRules::default(), &mut dice)
    }

    #[test]
    fn kill_awards_xp() {
        let c = Character::from_class("Brom", CharacterClass::Warrior);
        let out = fight(&c, "goblin", &[15, 5]).unwrap();
        assert!(out.victory);
        assert_eq!(out.monster.hp, 0);
        assert_eq!(out.xp_gained, 50);
        assert_eq!(out.character.experience, 50);
        assert_eq!(out.character.hp, 80);
    }

    #[test]
    fn survivor_counterattacks() {
        let c = Character::from_class("Brom", CharacterClass::Warrior);
        let out = fight(&c, "Orc", &[12, 3, 18, 7]).unwrap();
        assert!(!out.victory);
        assert_eq!(out.monster.hp, 10);
        assert_eq!(out.character.hp, 73);
        assert_eq!(out.character.experience, 0);
    }

    #[test]
    fn misses_both_ways() {
        let c = Character::from_class("Brom", CharacterClass::Warrior);
        let out = fight(&c, "Skeleton", &[2, 9]).unwrap();
        assert_eq!(out.monster.hp, 13);
        assert_eq!(out.character.hp, 80);
        assert_eq!(out.log.len(), 3);
    }

    #[test]
    fn weak_hits_floor_at_zero() {
        let mut c = Character::from_class("Ivy", CharacterClass::Mage);
        c.attributes.strength = 1;
        let out = fight(&c, "Orc", &[20, 1, 1]).unwrap();
        assert_eq!(out.monster.hp, 15);
    }

    #[test]
    fn hp_bottoms_out_at_zero() {
        let mut c = Character::from_class("Ivy", CharacterClass::Mage);
        c.hp = 2;
        let out = fight(&c, "Orc", &[1, 20, 8]).unwrap();
        assert_eq!(out.character.hp, 0);
    }

    #[test]
    fn big_award_levels_up() {
        let mut c = Character::from_class("Brom", CharacterClass::Warrior);
        c.experience = 950;
        let out = fight(&c, "Goblin", &[10, 8]).unwrap();
        assert_eq!(out.level_ups.len(), 1);
        assert_eq!(out.character.level, 2);
        assert!(out.log.iter().any(|l| l == "You reached level 2!"));
    }

    #[test]
    fn unknown_monster() {
        let c = Character::from_class("Brom", CharacterClass::Warrior);
        assert!(matches!(
            fight(&c, "Dragon", &[]),
            Err(MechError::UnknownMonster(_))
        ));
    }
}
