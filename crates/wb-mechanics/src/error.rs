//! Error types for the rules engine.

/// Errors that can occur during engine operations.
///
/// Every variant except [`MechError::UnknownAbility`] is user-correctable:
/// the caller can re-prompt with the message. `UnknownAbility` means a
/// character record references an ability the catalog does not define.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MechError {
    /// The action is neither a basic attack nor an ability the character knows.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// The target index is missing, out of range, or names a dead monster.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// A character knows an ability that is missing from the catalog.
    #[error("ability \"{0}\" is not in the catalog")]
    UnknownAbility(String),

    /// A monster name did not match any template.
    #[error("unknown monster: {0}")]
    UnknownMonster(String),

    /// An item is not sold here or not carried.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// An item is carried but has no use effect.
    #[error("{0} cannot be used")]
    UnusableItem(String),

    /// A purchase costs more than the character's gold.
    #[error("{item} costs {cost} gold but you only have {gold}")]
    InsufficientGold {
        /// The item being bought.
        item: String,
        /// Its price.
        cost: i64,
        /// Gold on hand.
        gold: i64,
    },
}

impl MechError {
    /// Whether the player can fix this by choosing differently.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::UnknownAbility(_))
    }
}

/// Convenience result type for engine operations.
pub type MechResult<T> = Result<T, MechError>;
