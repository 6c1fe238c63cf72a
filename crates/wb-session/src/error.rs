//! Error types for game sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a game session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No stored character matches the key.
    #[error("character not found: {0}")]
    CharacterNotFound(String),

    /// The command needs a fight in progress.
    #[error("no active combat (use 'fight' to start one)")]
    NoActiveCombat,

    /// The input did not match any command.
    #[error("unknown command: {input}{}", did_you_mean(.suggestion))]
    UnknownCommand {
        /// What was typed.
        input: String,
        /// Closest known command, if any is close.
        suggestion: Option<String>,
    },

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Rules engine error.
    #[error("{0}")]
    Mech(#[from] wb_mechanics::MechError),

    /// Character model error.
    #[error("{0}")]
    Core(#[from] wb_core::CoreError),

    /// Save file I/O failed.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Save file could not be encoded or decoded.
    #[error("save data error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    /// Whether the player can fix this by typing something else.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Mech(e) => e.is_user_error(),
            Self::Io(_) | Self::Json(_) => false,
            _ => true,
        }
    }
}

pub(crate) fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}
