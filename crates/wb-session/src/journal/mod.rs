//! Per-character adventure journal.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
