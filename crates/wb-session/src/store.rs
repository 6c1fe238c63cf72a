//! Character persistence.
//!
//! A [`SaveRecord`] bundles everything that belongs to one character: the
//! character itself, any combat in progress, whether a merchant is at hand,
//! and the journal. Stores save whole records so a round commits fully or
//! not at all.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wb_core::{Character, CharacterId};
use wb_mechanics::SessionState;

use crate::error::{SessionError, SessionResult};
use crate::journal::Journal;

/// Everything persisted for one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// The character.
    pub character: Character,
    /// Combat state, present from `fight` until the character flees or falls.
    #[serde(default)]
    pub combat: Option<SessionState>,
    /// Whether the last exploration found a merchant.
    #[serde(default)]
    pub shop_open: bool,
    /// The character's journal.
    #[serde(default)]
    pub journal: Journal,
}

impl SaveRecord {
    /// A fresh record with no combat and an empty journal.
    pub fn new(character: Character) -> Self {
        Self {
            character,
            combat: None,
            shop_open: false,
            journal: Journal::new(),
        }
    }

    /// The character's id.
    pub fn id(&self) -> CharacterId {
        self.character.id
    }
}

/// Persistence collaborator for character records.
pub trait GameStore {
    /// Load a record by id.
    fn load(&self, id: CharacterId) -> SessionResult<SaveRecord>;

    /// Insert or replace a record.
    fn save(&mut self, record: &SaveRecord) -> SessionResult<()>;

    /// All stored characters, sorted by name.
    fn list(&self) -> SessionResult<Vec<Character>>;

    /// Remove a record.
    fn delete(&mut self, id: CharacterId) -> SessionResult<()>;

    /// Resolve a user-supplied key: a full id, a short id prefix, or a
    /// name (case-insensitive).
    fn find(&self, key: &str) -> SessionResult<CharacterId> {
        let key = key.trim();
        if let Ok(id) = key.parse::<CharacterId>() {
            return Ok(id);
        }
        let characters = self.list()?;
        let lower = key.to_lowercase();
        characters
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
            .or_else(|| {
                let mut by_prefix = characters
                    .iter()
                    .filter(|c| !key.is_empty() && c.id.0.to_string().starts_with(&lower));
                match (by_prefix.next(), by_prefix.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            })
            .map(|c| c.id)
            .ok_or_else(|| SessionError::CharacterNotFound(key.to_string()))
    }
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<CharacterId, SaveRecord>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, id: CharacterId) -> SessionResult<SaveRecord> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| SessionError::CharacterNotFound(id.to_string()))
    }

    fn save(&mut self, record: &SaveRecord) -> SessionResult<()> {
        self.records.insert(record.id(), record.clone());
        Ok(())
    }

    fn list(&self) -> SessionResult<Vec<Character>> {
        let mut characters: Vec<Character> =
            self.records.values().map(|r| r.character.clone()).collect();
        characters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(characters)
    }

    fn delete(&mut self, id: CharacterId) -> SessionResult<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| SessionError::CharacterNotFound(id.to_string()))
    }
}

/// Directory of JSON save files, one `<uuid>.json` per character.
///
/// Saves go to a temporary file that is then renamed over the old one.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open (and create if needed) a save directory.
    pub fn open(dir: impl Into<PathBuf>) -> SessionResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "opened save directory");
        Ok(Self { dir })
    }

    fn path_for(&self, id: CharacterId) -> PathBuf {
        self.dir.join(format!("{}.json", id.0))
    }
}

impl GameStore for JsonStore {
    fn load(&self, id: CharacterId) -> SessionResult<SaveRecord> {
        let path = self.path_for(id);
        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SessionError::CharacterNotFound(id.to_string()),
            _ => SessionError::Io(e),
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&mut self, record: &SaveRecord) -> SessionResult<()> {
        let path = self.path_for(record.id());
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(character = %record.id(), path = %path.display(), "saved");
        Ok(())
    }

    fn list(&self) -> SessionResult<Vec<Character>> {
        let mut characters = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let text = fs::read_to_string(&path)?;
            match serde_json::from_str::<SaveRecord>(&text) {
                Ok(record) => characters.push(record.character),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable save");
                }
            }
        }
        characters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(characters)
    }

    fn delete(&mut self, id: CharacterId) -> SessionResult<()> {
        fs::remove_file(self.path_for(id)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SessionError::CharacterNotFound(id.to_string()),
            _ => SessionError::Io(e),
        })?;
        tracing::debug!(character = %id, "deleted");
        Ok(())
    }
}
