//! The random source abstraction.

use rand::Rng;

/// A source of uniform random draws.
///
/// Implemented for every [`rand::Rng`]; tests substitute
/// [`ScriptedDice`](crate::testing::ScriptedDice). Draws are consumed in
/// call order, so a fixed seed replays an identical session.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Returns `low` when `high <= low`.
    fn roll_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn chance(&mut self) -> f64;

    /// Roll one die with `sides` faces.
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.roll_range(1, sides)
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.roll_range(0, (len - 1) as u32) as usize
    }
}

impl<R: Rng> RandomSource for R {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }

    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }
}
