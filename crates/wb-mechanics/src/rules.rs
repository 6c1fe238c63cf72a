//! Tunable numeric rules for waves, leveling, and resting.

use serde::{Deserialize, Serialize};

/// Constants that drive wave generation and progression.
///
/// Growth values are whole percentages so scaling stays in integer math:
/// wave N monster hp is `base * (100 + (N-1) * monster_hp_growth) / 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterRules {
    /// Monsters per wave.
    pub wave_size: usize,
    /// Monster hp growth per wave, in percent.
    pub monster_hp_growth: u32,
    /// Monster xp growth per wave, in percent.
    pub monster_xp_growth: u32,
    /// Base max hp for the flat level-up formula.
    pub base_hp: i32,
    /// Max hp growth per level on the flat path, in percent.
    pub level_hp_growth: i32,
    /// Strength gained per flat level-up.
    pub strength_per_level: i32,
    /// Faces on the basic attack die.
    pub basic_attack_die: u32,
    /// Experience needed per level: level `L` requires `L * xp_per_level`.
    pub xp_per_level: u32,
    /// Hit points restored by a short rest.
    pub rest_heal: i32,
}

impl Default for EncounterRules {
    fn default() -> Self {
        Self {
            wave_size: 4,
            monster_hp_growth: 50,
            monster_xp_growth: 30,
            base_hp: 70,
            level_hp_growth: 20,
            strength_per_level: 2,
            basic_attack_die: 8,
            xp_per_level: 1000,
            rest_heal: 15,
        }
    }
}

impl EncounterRules {
    /// Scale a base monster hit point value for `wave`.
    pub fn scaled_hp(&self, base: i32, wave: u32) -> i32 {
        let factor = 100 + wave.saturating_sub(1) as i64 * self.monster_hp_growth as i64;
        (base as i64 * factor / 100) as i32
    }

    /// Scale a base monster xp reward for `wave`.
    pub fn scaled_xp(&self, base: u32, wave: u32) -> u32 {
        let factor = 100 + wave.saturating_sub(1) as u64 * self.monster_xp_growth as u64;
        (base as u64 * factor / 100) as u32
    }

    /// Max hp given by the flat formula at `level`.
    pub fn flat_max_hp(&self, level: u32) -> i32 {
        let factor = 100 + level.saturating_sub(1) as i64 * self.level_hp_growth as i64;
        (self.base_hp as i64 * factor / 100) as i32
    }
}
