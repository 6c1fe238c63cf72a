//! Game sessions for Wavebound.
//!
//! Wraps the rules engine with persistence and journaling. A
//! [`GameSession`] loads a character from a [`GameStore`], runs one engine
//! operation, records what happened in the character's journal, and saves
//! the result back in a single write. It also parses typed commands so a
//! front-end can drive a whole game through [`GameSession::process`].

pub mod config;
pub mod error;
pub mod journal;
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use journal::{Journal, JournalEntry};
pub use session::GameSession;
pub use store::{GameStore, JsonStore, MemoryStore, SaveRecord};
