//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of a character's adventures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The most recent `n` entries.
    pub fn recent(&self, n: usize) -> &[JournalEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self, title: &str) -> String {
        let mut out = format!("# {title}'s Journal\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%Y-%m-%d %H:%M");
            match entry {
                JournalEntry::Created {
                    name, class, rolled, ..
                } => {
                    let how = if *rolled { "rolled" } else { "created" };
                    out.push_str(&format!("*{time}* **{name}** the {class} was {how}.\n\n"));
                }
                JournalEntry::Exploration { narrative, .. } => {
                    out.push_str(&format!("*{time}* **Explore**: {narrative}\n\n"));
                }
                JournalEntry::WaveStarted { wave, monsters, .. } => {
                    out.push_str(&format!("## Wave {wave}\n\n"));
                    out.push_str(&format!("Enemies: {}\n\n", monsters.join(", ")));
                }
                JournalEntry::Round { narrative, .. } => {
                    for line in narrative.lines() {
                        out.push_str(&format!("> {line}\n"));
                    }
                    out.push('\n');
                }
                JournalEntry::WaveCleared { wave, level, .. } => {
                    out.push_str(&format!(
                        "**Wave {wave} cleared!** Reached level {level}.\n\n"
                    ));
                }
                JournalEntry::Defeated { wave, .. } => {
                    out.push_str(&format!("**Defeated** in wave {wave}. Revived at wave 1.\n\n"));
                }
                JournalEntry::Fled { wave, .. } => {
                    out.push_str(&format!("*Fled* from wave {wave}.\n\n"));
                }
                JournalEntry::Skirmish {
                    monster,
                    victory,
                    xp,
                    ..
                } => {
                    let result = if *victory {
                        format!("won, +{xp} XP")
                    } else {
                        "no decision".to_string()
                    };
                    out.push_str(&format!("*{time}* **Skirmish** vs {monster}: {result}\n\n"));
                }
                JournalEntry::Rest { healed, .. } => {
                    out.push_str(&format!("*{time}* Rested, recovered {healed} HP.\n\n"));
                }
                JournalEntry::Purchase { item, gold, .. } => {
                    out.push_str(&format!("*{time}* Bought {item} ({gold} gold left).\n\n"));
                }
                JournalEntry::ItemUsed { message, .. } => {
                    out.push_str(&format!("*{time}* {message}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text, one line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let line = match entry {
                JournalEntry::Created { name, class, .. } => format!("Created {name} the {class}"),
                JournalEntry::Exploration { narrative, .. } => {
                    format!("Explored: {}", narrative.lines().next().unwrap_or(""))
                }
                JournalEntry::WaveStarted { wave, monsters, .. } => {
                    format!("Wave {wave} began: {}", monsters.join(", "))
                }
                JournalEntry::Round { wave, narrative, .. } => {
                    let events: Vec<&str> = narrative
                        .lines()
                        .filter(|l| !l.starts_with("Wave ") && !l.starts_with("Remaining"))
                        .collect();
                    format!("Wave {wave} round: {}", events.join(" / "))
                }
                JournalEntry::WaveCleared { wave, level, .. } => {
                    format!("Wave {wave} cleared, level {level}")
                }
                JournalEntry::Defeated { wave, .. } => format!("Defeated in wave {wave}"),
                JournalEntry::Fled { wave, .. } => format!("Fled from wave {wave}"),
                JournalEntry::Skirmish {
                    monster,
                    victory,
                    xp,
                    ..
                } => {
                    if *victory {
                        format!("Skirmish vs {monster}: won (+{xp} XP)")
                    } else {
                        format!("Skirmish vs {monster}: no decision")
                    }
                }
                JournalEntry::Rest { healed, .. } => format!("Rested (+{healed} HP)"),
                JournalEntry::Purchase { item, gold, .. } => {
                    format!("Bought {item} ({gold} gold left)")
                }
                JournalEntry::ItemUsed { message, .. } => message.clone(),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
