//! Character records: identity, attributes, equipment, and inventory.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::class::CharacterClass;
use crate::error::CoreError;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl FromStr for CharacterId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| CoreError::Validation(format!("invalid character id \"{s}\": {e}")))
    }
}

/// Floor-divided modifier for an attribute score: `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// The six attribute scores. Each score is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Melee power; feeds the basic attack bonus.
    pub strength: i32,
    /// Agility.
    pub dexterity: i32,
    /// Toughness; feeds class-aware hit point growth.
    pub constitution: i32,
    /// Reasoning.
    pub intelligence: i32,
    /// Perception.
    pub wisdom: i32,
    /// Presence.
    pub charisma: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl Attributes {
    /// Raise any score below 1 back to 1.
    pub fn clamp(&mut self) {
        for score in [
            &mut self.strength,
            &mut self.dexterity,
            &mut self.constitution,
            &mut self.intelligence,
            &mut self.wisdom,
            &mut self.charisma,
        ] {
            *score = (*score).max(1);
        }
    }
}

/// A slot that can hold one equipped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// The wielded weapon.
    Weapon,
    /// Worn armor.
    Armor,
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
        }
    }
}

/// A player-owned character record.
///
/// The persistence layer owns these; engine operations receive a snapshot
/// and hand back an updated copy. `0 <= hp <= max_hp` holds after every
/// engine operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Stable identity.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Character class.
    pub class: CharacterClass,
    /// Current level (at least 1).
    pub level: u32,
    /// Accumulated experience points.
    pub experience: u32,
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points (always positive).
    pub max_hp: i32,
    /// Attribute scores.
    pub attributes: Attributes,
    /// Gold on hand. Not floored at zero.
    pub gold: i64,
    /// Carried items in acquisition order; duplicates allowed.
    pub inventory: Vec<String>,
    /// Equipped items by slot.
    pub equipment: BTreeMap<EquipmentSlot, String>,
    /// Known abilities in the order they were learned, without duplicates.
    pub abilities: Vec<String>,
}

impl Character {
    /// Create a bare level-1 character with the given attributes and hit points.
    ///
    /// Equipment starts as Fists and Clothes; no abilities or items.
    pub fn new(
        name: impl Into<String>,
        class: CharacterClass,
        attributes: Attributes,
        max_hp: i32,
    ) -> Self {
        let max_hp = max_hp.max(1);
        let mut equipment = BTreeMap::new();
        equipment.insert(EquipmentSlot::Weapon, "Fists".to_string());
        equipment.insert(EquipmentSlot::Armor, "Clothes".to_string());

        let mut attributes = attributes;
        attributes.clamp();

        Self {
            id: CharacterId::new(),
            name: name.into(),
            class,
            level: 1,
            experience: 0,
            hp: max_hp,
            max_hp,
            attributes,
            gold: 0,
            inventory: Vec::new(),
            equipment,
            abilities: Vec::new(),
        }
    }

    /// Create a character from its class template (stats, gear, abilities).
    pub fn from_class(name: impl Into<String>, class: CharacterClass) -> Self {
        let template = class.template();
        let mut character = Self::new(name, class, template.attributes, template.hp);
        character.equip(EquipmentSlot::Weapon, template.weapon);
        character.equip(EquipmentSlot::Armor, template.armor);
        for ability in template.abilities {
            character.grant_ability(*ability);
        }
        character
    }

    /// Re-establish `1 <= max_hp` and `0 <= hp <= max_hp`.
    pub fn clamp_hp(&mut self) {
        self.max_hp = self.max_hp.max(1);
        self.hp = self.hp.clamp(0, self.max_hp);
    }

    /// Heal by `amount`, capped at `max_hp`. Returns the hit points actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
        self.hp - before
    }

    /// Restore hit points to the maximum.
    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    /// Whether the character has been brought to zero hit points or below.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Bonus added to basic attacks: the strength modifier, never negative.
    pub fn strength_bonus(&self) -> i32 {
        ability_modifier(self.attributes.strength).max(0)
    }

    /// The constitution modifier.
    pub fn constitution_modifier(&self) -> i32 {
        ability_modifier(self.attributes.constitution)
    }

    /// Whether the character knows the named ability (exact match).
    pub fn has_ability(&self, name: &str) -> bool {
        self.abilities.iter().any(|a| a == name)
    }

    /// Learn an ability. Returns `false` if it was already known.
    pub fn grant_ability(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_ability(&name) {
            return false;
        }
        self.abilities.push(name);
        true
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Remove the first inventory entry matching `item` (case-insensitive).
    /// Returns the removed name.
    pub fn remove_item(&mut self, item: &str) -> Option<String> {
        let pos = self
            .inventory
            .iter()
            .position(|i| i.eq_ignore_ascii_case(item))?;
        Some(self.inventory.remove(pos))
    }

    /// Put an item in a slot, returning whatever was there before.
    pub fn equip(&mut self, slot: EquipmentSlot, item: impl Into<String>) -> Option<String> {
        self.equipment.insert(slot, item.into())
    }

    /// The item in a slot, if any.
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&str> {
        self.equipment.get(&slot).map(String::as_str)
    }
}
