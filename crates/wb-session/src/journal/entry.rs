//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a character's journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The character was created.
    Created {
        /// Character name.
        name: String,
        /// Class name.
        class: String,
        /// Whether attributes were rolled rather than taken from the template.
        rolled: bool,
        /// When created.
        timestamp: DateTime<Utc>,
    },
    /// An exploration result.
    Exploration {
        /// The narrative shown to the player.
        narrative: String,
        /// When explored.
        timestamp: DateTime<Utc>,
    },
    /// A new wave spawned.
    WaveStarted {
        /// Wave number.
        wave: u32,
        /// Monster names in roster order.
        monsters: Vec<String>,
        /// When it began.
        timestamp: DateTime<Utc>,
    },
    /// A combat round was fought.
    Round {
        /// Wave number.
        wave: u32,
        /// The round narrative.
        narrative: String,
        /// When fought.
        timestamp: DateTime<Utc>,
    },
    /// A wave was cleared and the character leveled up.
    WaveCleared {
        /// The wave that was cleared.
        wave: u32,
        /// Level reached.
        level: u32,
        /// When cleared.
        timestamp: DateTime<Utc>,
    },
    /// The character was defeated and revived.
    Defeated {
        /// The wave where it happened.
        wave: u32,
        /// When defeated.
        timestamp: DateTime<Utc>,
    },
    /// The character fled from a fight.
    Fled {
        /// The wave abandoned.
        wave: u32,
        /// When fled.
        timestamp: DateTime<Utc>,
    },
    /// A one-exchange skirmish.
    Skirmish {
        /// Monster fought.
        monster: String,
        /// Whether it died.
        victory: bool,
        /// Experience gained.
        xp: u32,
        /// When fought.
        timestamp: DateTime<Utc>,
    },
    /// A short rest.
    Rest {
        /// Hit points restored.
        healed: i32,
        /// When rested.
        timestamp: DateTime<Utc>,
    },
    /// An item bought from the merchant.
    Purchase {
        /// Item bought.
        item: String,
        /// Gold left afterwards.
        gold: i64,
        /// When bought.
        timestamp: DateTime<Utc>,
    },
    /// An item was used up.
    ItemUsed {
        /// Item used.
        item: String,
        /// What it did.
        message: String,
        /// When used.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Created { timestamp, .. }
            | Self::Exploration { timestamp, .. }
            | Self::WaveStarted { timestamp, .. }
            | Self::Round { timestamp, .. }
            | Self::WaveCleared { timestamp, .. }
            | Self::Defeated { timestamp, .. }
            | Self::Fled { timestamp, .. }
            | Self::Skirmish { timestamp, .. }
            | Self::Rest { timestamp, .. }
            | Self::Purchase { timestamp, .. }
            | Self::ItemUsed { timestamp, .. } => *timestamp,
        }
    }
}
