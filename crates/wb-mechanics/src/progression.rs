//! Leveling, experience, resting, and rolled character creation.
//!
//! Two level-up formulas coexist. The flat formula is applied when a wave is
//! cleared; the class-aware formula is applied when experience crosses a
//! threshold. Neither ever lowers level or maximum hit points.

use std::fmt;

use wb_core::{Attributes, Character, CharacterClass};

use crate::dice::{RandomSource, roll_attribute};
use crate::rules::EncounterRules;

/// Before and after values of a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level before.
    pub old_level: u32,
    /// Level after.
    pub new_level: u32,
    /// Max hp before.
    pub old_max_hp: i32,
    /// Max hp after.
    pub new_max_hp: i32,
    /// Strength before.
    pub old_strength: i32,
    /// Strength after.
    pub new_strength: i32,
}

impl fmt::Display for LevelUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Level: {} → {}", self.old_level, self.new_level)?;
        writeln!(f, "Max HP: {} → {}", self.old_max_hp, self.new_max_hp)?;
        write!(f, "Strength: {} → {}", self.old_strength, self.new_strength)
    }
}

fn snapshot(character: &Character) -> LevelUp {
    LevelUp {
        old_level: character.level,
        new_level: character.level,
        old_max_hp: character.max_hp,
        new_max_hp: character.max_hp,
        old_strength: character.attributes.strength,
        new_strength: character.attributes.strength,
    }
}

fn finish(mut report: LevelUp, character: &Character) -> LevelUp {
    report.new_level = character.level;
    report.new_max_hp = character.max_hp;
    report.new_strength = character.attributes.strength;
    report
}

/// Wave-clear level-up: level + 1, max hp from the flat formula (never
/// lowered), full heal, and a strength bonus.
pub fn level_up_flat(character: &mut Character, rules: &EncounterRules) -> LevelUp {
    let report = snapshot(character);
    character.level += 1;
    character.max_hp = character.max_hp.max(rules.flat_max_hp(character.level));
    character.restore_full();
    character.attributes.strength += rules.strength_per_level;
    tracing::debug!(
        character = %character.id,
        level = character.level,
        max_hp = character.max_hp,
        "flat level-up"
    );
    finish(report, character)
}

/// Class-aware level-up: level + 1, max hp grows by the class increment plus
/// the constitution modifier (at least 1), full heal.
pub fn level_up_class_aware(character: &mut Character) -> LevelUp {
    let report = snapshot(character);
    character.level += 1;
    let gain = (character.class.hp_increment() + character.constitution_modifier()).max(1);
    character.max_hp += gain;
    character.restore_full();
    tracing::debug!(
        character = %character.id,
        level = character.level,
        gain,
        "class level-up"
    );
    finish(report, character)
}

/// Add experience and apply every class-aware level-up it unlocks.
///
/// Level `L` is left once experience reaches `L * xp_per_level`, so a large
/// award can jump several levels at once.
pub fn award_experience(character: &mut Character, xp: u32, rules: &EncounterRules) -> Vec<LevelUp> {
    character.experience = character.experience.saturating_add(xp);
    let mut levels = Vec::new();
    if rules.xp_per_level == 0 {
        return levels;
    }
    while character.experience as u64 >= character.level as u64 * rules.xp_per_level as u64 {
        levels.push(level_up_class_aware(character));
    }
    levels
}

/// Roll a new character: attributes are 4d6 drop lowest, hit points are the
/// class increment plus the constitution modifier, and the class template
/// supplies gear, abilities, and starting items.
pub fn roll_character<D: RandomSource + ?Sized>(
    name: impl Into<String>,
    class: CharacterClass,
    dice: &mut D,
) -> Character {
    let attributes = Attributes {
        strength: roll_attribute(dice),
        dexterity: roll_attribute(dice),
        constitution: roll_attribute(dice),
        intelligence: roll_attribute(dice),
        wisdom: roll_attribute(dice),
        charisma: roll_attribute(dice),
    };
    let template = class.template();
    let hp = (class.hp_increment() + wb_core::ability_modifier(attributes.constitution)).max(1);

    let mut character = Character::new(name, class, attributes, hp);
    character.equip(wb_core::EquipmentSlot::Weapon, template.weapon);
    character.equip(wb_core::EquipmentSlot::Armor, template.armor);
    for ability in template.abilities {
        character.grant_ability(*ability);
    }
    for item in template.starting_items {
        character.add_item(*item);
    }
    character
}

/// Short rest. Returns hit points restored.
pub fn rest(character: &mut Character, rules: &EncounterRules) -> i32 {
    let healed = character.heal(rules.rest_heal);
    character.clamp_hp();
    healed
}

/// Full rest: hit points back to maximum. Returns hit points restored.
pub fn full_rest(character: &mut Character) -> i32 {
    let before = character.hp;
    character.clamp_hp();
    character.restore_full();
    character.hp - before
}
