//! Player actions for a combat round.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the player does on their turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Basic weapon attack on one monster.
    Attack {
        /// Roster index of the target.
        target: usize,
    },
    /// Use a known ability.
    Ability {
        /// Exact ability name.
        name: String,
        /// Roster index, required by single-target abilities.
        target: Option<usize>,
    },
}

impl PlayerAction {
    /// A basic attack on `target`.
    pub fn attack(target: usize) -> Self {
        Self::Attack { target }
    }

    /// An ability with no target.
    pub fn ability(name: impl Into<String>) -> Self {
        Self::Ability {
            name: name.into(),
            target: None,
        }
    }

    /// An ability aimed at `target`.
    pub fn ability_at(name: impl Into<String>, target: usize) -> Self {
        Self::Ability {
            name: name.into(),
            target: Some(target),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack { target } => write!(f, "attack #{target}"),
            Self::Ability {
                name,
                target: Some(t),
            } => write!(f, "{name} on #{t}"),
            Self::Ability { name, target: None } => write!(f, "{name}"),
        }
    }
}
