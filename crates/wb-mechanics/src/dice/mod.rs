//! Dice notation and rolling.
//!
//! Damage dice display in `NdS` notation (e.g. `1d6`). All randomness flows
//! through a [`RandomSource`], so a seeded generator or a scripted source
//! can stand in for the thread RNG.

pub mod source;

pub use source::RandomSource;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A damage formula: roll `count` dice with `sides` faces and sum them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageDice {
    /// Number of dice rolled.
    pub count: u32,
    /// Faces per die.
    pub sides: u32,
}

impl DamageDice {
    /// Create a formula for `count` dice of `sides` faces.
    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    /// Roll and sum every die.
    pub fn roll<D: RandomSource + ?Sized>(&self, dice: &mut D) -> u32 {
        (0..self.count).map(|_| dice.roll_die(self.sides)).sum()
    }

    /// Smallest possible total.
    pub fn min(&self) -> u32 {
        self.count
    }

    /// Largest possible total.
    pub fn max(&self) -> u32 {
        self.count * self.sides
    }
}

impl fmt::Display for DamageDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Roll 4d6 and drop the lowest die.
pub fn roll_attribute<D: RandomSource + ?Sized>(dice: &mut D) -> i32 {
    let mut rolls: Vec<u32> = (0..4).map(|_| dice.roll_die(6)).collect();
    rolls.sort_unstable();
    rolls[1..].iter().sum::<u32>() as i32
}
