//! Core types for Wavebound.
//!
//! Provides the character record that the engine reads and the persistence
//! layer stores: identity, class, level, hit points, attributes, gold,
//! inventory, equipment, and known abilities.

pub mod character;
pub mod class;
pub mod error;

pub use character::{Attributes, Character, CharacterId, EquipmentSlot, ability_modifier};
pub use class::{CharacterClass, ClassTemplate};
pub use error::{CoreError, CoreResult};
