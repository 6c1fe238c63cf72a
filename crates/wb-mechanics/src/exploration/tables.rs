//! Exploration discovery tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityCatalog;
use crate::error::{MechError, MechResult};

/// How often a discovery turns up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    /// Weight 0.5.
    Common,
    /// Weight 0.3.
    Uncommon,
    /// Weight 0.2.
    Rare,
}

impl Rarity {
    /// Relative weight.
    pub fn weight(self) -> f64 {
        match self {
            Self::Common => 0.5,
            Self::Uncommon => 0.3,
            Self::Rare => 0.2,
        }
    }

    /// Entries this rarity contributes to the draw pool: `round(weight * 10)`.
    pub fn copies(self) -> usize {
        (self.weight() * 10.0).round() as usize
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Uncommon => write!(f, "uncommon"),
            Self::Rare => write!(f, "rare"),
        }
    }
}

/// A single effect of a discovery, applied in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Effect {
    /// Change current hit points, clamped to `[0, max_hp]`.
    Hp(i32),
    /// Change maximum hit points, kept at least 1.
    MaxHp(i32),
    /// Change strength, kept at least 1.
    Strength(i32),
    /// Change gold. No floor.
    Gold(i64),
    /// Add an item to the inventory.
    Item(String),
    /// Learn an ability if not already known.
    Ability(String),
    /// Open the shop.
    Shop,
}

/// One possible exploration result.
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    /// Narrative text shown first.
    pub text: &'static str,
    /// How often it appears.
    pub rarity: Rarity,
    /// Effects applied in order.
    pub effects: Vec<Effect>,
}

/// The set of discoveries drawn from when exploring.
#[derive(Debug, Clone)]
pub struct ExplorationTable {
    discoveries: Vec<Discovery>,
}

impl ExplorationTable {
    /// The built-in discoveries.
    pub fn standard() -> Self {
        Self {
            discoveries: vec![
                Discovery {
                    text: "You find a hidden treasure chest! Inside you find some gold and a healing potion.",
                    rarity: Rarity::Rare,
                    effects: vec![
                        Effect::Hp(5),
                        Effect::Gold(50),
                        Effect::Item("Healing Potion".into()),
                    ],
                },
                Discovery {
                    text: "You discover an ancient shrine. Praying here restores your health and grants a blessing.",
                    rarity: Rarity::Rare,
                    effects: vec![Effect::Hp(15), Effect::Ability("Divine Shield".into())],
                },
                Discovery {
                    text: "You stumble upon a merchant's abandoned cart. You find some useful items.",
                    rarity: Rarity::Uncommon,
                    effects: vec![Effect::Gold(30), Effect::Item("Magic Scroll".into())],
                },
                Discovery {
                    text: "You find a peaceful grove and take a short rest.",
                    rarity: Rarity::Common,
                    effects: vec![Effect::Hp(10)],
                },
                Discovery {
                    text: "You discover a trap the hard way! You take some damage.",
                    rarity: Rarity::Common,
                    effects: vec![Effect::Hp(-8)],
                },
                Discovery {
                    text: "You find an ancient training dummy and practice your combat skills.",
                    rarity: Rarity::Uncommon,
                    effects: vec![Effect::Strength(1)],
                },
                Discovery {
                    text: "You discover a mystical fountain. Drinking from it enhances your abilities.",
                    rarity: Rarity::Rare,
                    effects: vec![Effect::Hp(5), Effect::MaxHp(5)],
                },
                Discovery {
                    text: "You find a merchant willing to trade.",
                    rarity: Rarity::Uncommon,
                    effects: vec![Effect::Shop],
                },
            ],
        }
    }

    /// Build a table from explicit discoveries.
    pub fn from_discoveries(discoveries: Vec<Discovery>) -> Self {
        Self { discoveries }
    }

    /// All discoveries in definition order.
    pub fn discoveries(&self) -> &[Discovery] {
        &self.discoveries
    }

    /// Indices into [`discoveries`](Self::discoveries), each repeated by
    /// its rarity's copy count. Drawing uniformly from this pool gives the
    /// weighted distribution.
    pub fn pool(&self) -> Vec<usize> {
        self.discoveries
            .iter()
            .enumerate()
            .flat_map(|(i, d)| std::iter::repeat_n(i, d.rarity.copies()))
            .collect()
    }

    /// Check that every granted ability exists in `catalog`.
    pub fn validate(&self, catalog: &AbilityCatalog) -> MechResult<()> {
        for discovery in &self.discoveries {
            let missing = discovery.effects.iter().find_map(|effect| match effect {
                Effect::Ability(name) if !catalog.contains(name) => Some(name),
                _ => None,
            });
            if let Some(name) = missing {
                return Err(MechError::UnknownAbility(name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for ExplorationTable {
    fn default() -> Self {
        Self::standard()
    }
}
