//! Configuration for a game session.

use wb_mechanics::EncounterRules;

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible play. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Numeric rules for waves, leveling, and resting.
    pub rules: EncounterRules,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the hit points restored by a short rest (at least 0).
    pub fn with_rest_heal(mut self, amount: i32) -> Self {
        self.rules.rest_heal = amount.max(0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.rules.wave_size, 4);
        assert_eq!(cfg.rules.rest_heal, 15);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default().with_seed(123).with_rest_heal(30);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.rules.rest_heal, 30);
    }

    #[test]
    fn rest_heal_clamped() {
        let cfg = SessionConfig::default().with_rest_heal(-5);
        assert_eq!(cfg.rules.rest_heal, 0);
    }
}
