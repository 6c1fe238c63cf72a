//! Character classes and their starting templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::character::Attributes;
use crate::error::CoreError;

/// The fixed set of playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Heavy melee fighter. Also accepted as "fighter".
    Warrior,
    /// Spellcaster. Also accepted as "wizard".
    Mage,
    /// Agile skirmisher.
    Rogue,
}

impl CharacterClass {
    /// All classes in menu order.
    pub const ALL: [CharacterClass; 3] = [Self::Warrior, Self::Mage, Self::Rogue];

    /// Hit points gained per class-aware level, before the constitution modifier.
    pub fn hp_increment(self) -> i32 {
        match self {
            Self::Warrior => 10,
            Self::Mage => 6,
            Self::Rogue => 8,
        }
    }

    /// The starting template for this class.
    pub fn template(self) -> ClassTemplate {
        match self {
            Self::Warrior => ClassTemplate {
                hp: 80,
                attributes: Attributes {
                    strength: 14,
                    dexterity: 12,
                    constitution: 14,
                    intelligence: 8,
                    wisdom: 10,
                    charisma: 10,
                },
                weapon: "Longsword",
                armor: "Chain Mail",
                abilities: &["Cleave", "Second Wind"],
                starting_items: &["Longsword", "Shield", "Chain Mail"],
            },
            Self::Mage => ClassTemplate {
                hp: 60,
                attributes: Attributes {
                    strength: 8,
                    dexterity: 10,
                    constitution: 10,
                    intelligence: 16,
                    wisdom: 14,
                    charisma: 12,
                },
                weapon: "Staff",
                armor: "Robes",
                abilities: &["Fireball", "Divine Shield"],
                starting_items: &["Staff", "Spellbook", "Potion of Mana"],
            },
            Self::Rogue => ClassTemplate {
                hp: 70,
                attributes: Attributes {
                    strength: 10,
                    dexterity: 16,
                    constitution: 12,
                    intelligence: 12,
                    wisdom: 10,
                    charisma: 14,
                },
                weapon: "Dagger",
                armor: "Leather Armor",
                abilities: &["Backstab", "Evasion"],
                starting_items: &["Dagger", "Leather Armor", "Thieves' Tools"],
            },
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warrior => write!(f, "warrior"),
            Self::Mage => write!(f, "mage"),
            Self::Rogue => write!(f, "rogue"),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warrior" | "fighter" => Ok(Self::Warrior),
            "mage" | "wizard" => Ok(Self::Mage),
            "rogue" => Ok(Self::Rogue),
            other => Err(CoreError::UnknownClass(other.to_string())),
        }
    }
}

/// Starting stats, gear, and abilities for a class.
#[derive(Debug, Clone)]
pub struct ClassTemplate {
    /// Starting (and maximum) hit points.
    pub hp: i32,
    /// Starting attribute scores.
    pub attributes: Attributes,
    /// Item equipped in the weapon slot.
    pub weapon: &'static str,
    /// Item equipped in the armor slot.
    pub armor: &'static str,
    /// Abilities known at creation.
    pub abilities: &'static [&'static str],
    /// Inventory handed out to characters with rolled attributes.
    pub starting_items: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("Fighter".parse::<CharacterClass>().unwrap(), CharacterClass::Warrior);
        assert_eq!("wizard".parse::<CharacterClass>().unwrap(), CharacterClass::Mage);
        assert_eq!(" rogue ".parse::<CharacterClass>().unwrap(), CharacterClass::Rogue);
        assert!("bard".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn hp_increments() {
        assert_eq!(CharacterClass::Warrior.hp_increment(), 10);
        assert_eq!(CharacterClass::Mage.hp_increment(), 6);
        assert_eq!(CharacterClass::Rogue.hp_increment(), 8);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for class in CharacterClass::ALL {
            assert_eq!(class.to_string().parse::<CharacterClass>().unwrap(), class);
        }
    }

    #[test]
    fn templates_have_two_abilities() {
        for class in CharacterClass::ALL {
            assert_eq!(class.template().abilities.len(), 2);
        }
    }
}
