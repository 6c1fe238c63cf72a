//! The ability catalog.
//!
//! Abilities are static definitions keyed by exact name. A character's
//! ability list names entries here; combat looks them up to decide what an
//! action does.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// What an ability does when used, with its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbilityEffect {
    /// Damage every living monster.
    AttackAll {
        /// Damage dealt to each monster.
        damage: i32,
    },
    /// Damage the chosen target.
    AttackSingle {
        /// Damage dealt.
        damage: i32,
    },
    /// Restore the user's hit points.
    Heal {
        /// Hit points restored, capped at the maximum.
        amount: i32,
    },
    /// Set a damage-absorbing shield pool for this round.
    Shield {
        /// Pool size.
        amount: i32,
    },
    /// Set a dodge chance for this round.
    Dodge {
        /// Probability of avoiding each monster attack.
        chance: f64,
    },
}

impl AbilityEffect {
    /// The effect category.
    pub fn kind(&self) -> AbilityKind {
        match self {
            Self::AttackAll { .. } => AbilityKind::AttackAll,
            Self::AttackSingle { .. } => AbilityKind::AttackSingle,
            Self::Heal { .. } => AbilityKind::Heal,
            Self::Shield { .. } => AbilityKind::Shield,
            Self::Dodge { .. } => AbilityKind::Buff,
        }
    }

    /// Whether using this effect requires a living target.
    pub fn needs_target(&self) -> bool {
        matches!(self, Self::AttackSingle { .. })
    }
}

/// Ability effect categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityKind {
    /// Area attack.
    AttackAll,
    /// Single-target attack.
    AttackSingle,
    /// Self heal.
    Heal,
    /// Damage absorption.
    Shield,
    /// Dodge buff.
    Buff,
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttackAll => write!(f, "attack_all"),
            Self::AttackSingle => write!(f, "attack_single"),
            Self::Heal => write!(f, "heal"),
            Self::Shield => write!(f, "shield"),
            Self::Buff => write!(f, "buff"),
        }
    }
}

/// A named ability definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Ability {
    /// Unique name, matched exactly.
    pub name: &'static str,
    /// What it does.
    pub effect: AbilityEffect,
    /// Flavor text shown in listings.
    pub description: &'static str,
}

/// Read-only registry of abilities.
#[derive(Debug, Clone)]
pub struct AbilityCatalog {
    abilities: Vec<Ability>,
}

impl AbilityCatalog {
    /// The built-in abilities.
    pub fn standard() -> Self {
        Self {
            abilities: vec![
                Ability {
                    name: "Cleave",
                    effect: AbilityEffect::AttackAll { damage: 12 },
                    description: "Strike all enemies",
                },
                Ability {
                    name: "Second Wind",
                    effect: AbilityEffect::Heal { amount: 20 },
                    description: "Recover some HP",
                },
                Ability {
                    name: "Fireball",
                    effect: AbilityEffect::AttackAll { damage: 15 },
                    description: "Deal fire damage to all enemies",
                },
                Ability {
                    name: "Magic Shield",
                    effect: AbilityEffect::Shield { amount: 15 },
                    description: "Absorb incoming damage",
                },
                Ability {
                    name: "Divine Shield",
                    effect: AbilityEffect::Shield { amount: 20 },
                    description: "Holy protection that absorbs damage",
                },
                Ability {
                    name: "Backstab",
                    effect: AbilityEffect::AttackSingle { damage: 20 },
                    description: "High damage to single target",
                },
                Ability {
                    name: "Evasion",
                    effect: AbilityEffect::Dodge { chance: 0.5 },
                    description: "Chance to dodge attacks",
                },
            ],
        }
    }

    /// Build a catalog from explicit definitions.
    pub fn from_abilities(abilities: Vec<Ability>) -> Self {
        Self { abilities }
    }

    /// Look up an ability by exact name.
    pub fn get(&self, name: &str) -> MechResult<&Ability> {
        self.abilities
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| MechError::UnknownAbility(name.to_string()))
    }

    /// Look up an ability ignoring case. For matching typed input.
    pub fn find(&self, name: &str) -> Option<&Ability> {
        let name = name.trim();
        self.abilities
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Whether the catalog defines this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.abilities.iter().any(|a| a.name == name)
    }

    /// All abilities in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

}

impl Default for AbilityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
