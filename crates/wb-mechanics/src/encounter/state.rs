//! Per-character combat state carried between rounds.

use serde::{Deserialize, Serialize};

use crate::bestiary::Monster;

/// Where a character stands in the wave cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePhase {
    /// No roster yet; the next round spawns one.
    NoWave,
    /// At least one monster is alive.
    Active,
    /// Every monster is dead; the next round advances the wave.
    Cleared,
}

/// Transient combat state: wave number, roster, and this round's buffs.
///
/// The caller stores this value between rounds and hands it back in; the
/// engine never keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current wave, starting at 1.
    pub wave: u32,
    /// Monsters in the current wave. Empty until the wave is generated.
    pub monsters: Vec<Monster>,
    /// Remaining shield pool.
    pub shield: i32,
    /// Chance to dodge each monster attack, in `[0, 1]`.
    pub dodge: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh state at wave 1 with no roster.
    pub fn new() -> Self {
        Self {
            wave: 1,
            monsters: Vec::new(),
            shield: 0,
            dodge: 0.0,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> WavePhase {
        if self.monsters.is_empty() {
            WavePhase::NoWave
        } else if self.monsters.iter().any(Monster::is_alive) {
            WavePhase::Active
        } else {
            WavePhase::Cleared
        }
    }

    /// Roster indices of living monsters.
    pub fn living(&self) -> Vec<usize> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of living monsters.
    pub fn living_count(&self) -> usize {
        self.monsters.iter().filter(|m| m.is_alive()).count()
    }

    /// Drop shield and dodge.
    pub fn reset_buffs(&mut self) {
        self.shield = 0;
        self.dodge = 0.0;
    }

    /// Give up the fight: roster discarded, back to wave 1, buffs cleared.
    pub fn abandon(&mut self) {
        self.monsters.clear();
        self.wave = 1;
        self.reset_buffs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DamageDice;

    fn goblin(hp: i32) -> Monster {
        Monster {
            name: "Goblin".into(),
            hp,
            max_hp: 8,
            damage: DamageDice::new(1, 6),
            xp: 15,
        }
    }

    #[test]
    fn phases() {
        let mut state = SessionState::new();
        assert_eq!(state.phase(), WavePhase::NoWave);
        state.monsters = vec![goblin(0), goblin(3)];
        assert_eq!(state.phase(), WavePhase::Active);
        assert_eq!(state.living(), vec![1]);
        state.monsters[1].hp = -2;
        assert_eq!(state.phase(), WavePhase::Cleared);
        assert_eq!(state.living_count(), 0);
    }

    #[test]
    fn abandon_resets_everything() {
        let mut state = SessionState {
            wave: 5,
            monsters: vec![goblin(4)],
            shield: 10,
            dodge: 0.5,
        };
        state.abandon();
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn serde_round_trip() {
        let state = SessionState {
            wave: 2,
            monsters: vec![goblin(-1)],
            shield: 0,
            dodge: 0.0,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
