//! Deterministic random source for tests and replays.

use std::collections::VecDeque;

use crate::dice::RandomSource;

/// A [`RandomSource`] that replays scripted values.
///
/// Integer rolls, index picks, and chance draws each come from their own
/// queue. Rolls are clamped into the requested range. When a queue runs
/// dry, rolls return the range minimum, picks return 0, and chance draws
/// return `0.99`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    picks: VecDeque<usize>,
    chances: VecDeque<f64>,
}

impl ScriptedDice {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer roll results (dice faces).
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue index picks (template and table selection).
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue `[0, 1)` chance draws (dodge checks).
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = f64>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Whether every queued value has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.rolls.is_empty() && self.picks.is_empty() && self.chances.is_empty()
    }
}

impl RandomSource for ScriptedDice {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        let high = high.max(low);
        self.rolls.pop_front().map_or(low, |v| v.clamp(low, high))
    }

    fn chance(&mut self) -> f64 {
        self.chances.pop_front().map_or(0.99, |c| c.clamp(0.0, 0.999_999))
    }

    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks.pop_front().unwrap_or(0);
        value.min(len.saturating_sub(1))
    }
}
