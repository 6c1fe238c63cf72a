//! Rules engine for Wavebound.
//!
//! Provides dice and an injectable random source, the ability catalog, the
//! bestiary, character progression, the multi-wave encounter engine, the
//! exploration resolver, a one-exchange skirmish path, and the shop and
//! consumable items. Every operation works on snapshots and returns updated
//! copies; no I/O happens here.

pub mod abilities;
pub mod bestiary;
pub mod dice;
pub mod encounter;
pub mod error;
pub mod exploration;
pub mod market;
pub mod progression;
pub mod rules;
pub mod skirmish;
pub mod testing;

pub use abilities::{Ability, AbilityCatalog, AbilityEffect, AbilityKind};
pub use bestiary::{Bestiary, Monster, MonsterTemplate};
pub use dice::{DamageDice, RandomSource};
pub use encounter::{EncounterEngine, PlayerAction, RoundKind, RoundOutcome, SessionState, WavePhase};
pub use error::{MechError, MechResult};
pub use exploration::{Discovery, Effect, ExplorationOutcome, ExplorationTable, Rarity, resolve_exploration};
pub use market::{ItemEffect, ShopItem};
pub use progression::LevelUp;
pub use rules::EncounterRules;
pub use skirmish::{SkirmishOutcome, resolve_skirmish};
