pub mod abilities;
pub mod delete;
pub mod explore;
pub mod fight;
pub mod journal;
pub mod list;
pub mod new;
pub mod rest;
pub mod shop;
pub mod show;
pub mod skirmish;

use std::path::PathBuf;

use colored::Colorize;
use wb_core::{Character, CharacterId};
use wb_session::{GameSession, JsonStore, SessionConfig};

/// Global options shared by every command.
pub struct Context {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub rest_heal: Option<i32>,
}

impl Context {
    /// Open a session over the save directory.
    pub fn session(&self) -> Result<GameSession<JsonStore>, String> {
        tracing::debug!(dir = %self.data_dir.display(), seed = ?self.seed, "opening session");
        let store = JsonStore::open(&self.data_dir)
            .map_err(|e| format!("cannot open {}: {e}", self.data_dir.display()))?;
        let mut config = SessionConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(amount) = self.rest_heal {
            config = config.with_rest_heal(amount);
        }
        GameSession::new(store, config).map_err(|e| format!("failed to start session: {e}"))
    }

    /// Open a session and resolve a character key in one step.
    pub fn session_for(&self, key: &str) -> Result<(GameSession<JsonStore>, CharacterId), String> {
        let session = self.session()?;
        let id = session.find(key).map_err(|e| e.to_string())?;
        // surface a missing file for a well-formed id here rather than mid-command
        session.character(id).map_err(|e| e.to_string())?;
        Ok((session, id))
    }
}

/// One-line hit point readout, colored by how hurt the character is.
pub fn hp_line(character: &Character) -> String {
    let text = format!("{}/{}", character.hp, character.max_hp);
    let ratio = character.hp as f64 / character.max_hp.max(1) as f64;
    let colored = if ratio > 0.5 {
        text.green()
    } else if ratio > 0.2 {
        text.yellow()
    } else {
        text.red()
    };
    format!("HP {colored}")
}
