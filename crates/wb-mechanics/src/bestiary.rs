//! Monster templates and wave-scoped monster instances.

use serde::{Deserialize, Serialize};

use crate::dice::{DamageDice, RandomSource};
use crate::error::{MechError, MechResult};
use crate::rules::EncounterRules;

/// A monster kind with its base statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterTemplate {
    /// Display name.
    pub name: &'static str,
    /// Base hit points.
    pub hp: i32,
    /// Damage rolled when it hits.
    pub damage: DamageDice,
    /// Base experience reward.
    pub xp: u32,
}

/// A live monster in a roster.
///
/// `hp` may drop below zero; anything at or below zero is dead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name.
    pub name: String,
    /// Current hit points.
    pub hp: i32,
    /// Hit points at spawn.
    pub max_hp: i32,
    /// Damage dice for its attacks.
    pub damage: DamageDice,
    /// Experience reward.
    pub xp: u32,
}

impl Monster {
    /// Whether the monster still fights.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Hit points clamped to zero for display.
    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }

    /// Subtract damage. The result may be negative.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }
}

impl From<&MonsterTemplate> for Monster {
    fn from(t: &MonsterTemplate) -> Self {
        Self {
            name: t.name.to_string(),
            hp: t.hp,
            max_hp: t.hp,
            damage: t.damage,
            xp: t.xp,
        }
    }
}

/// Monster templates used for waves and skirmishes.
#[derive(Debug, Clone)]
pub struct Bestiary {
    wave: Vec<MonsterTemplate>,
    skirmish: Vec<MonsterTemplate>,
}

impl Bestiary {
    /// The built-in monster set.
    pub fn standard() -> Self {
        Self {
            wave: vec![
                MonsterTemplate {
                    name: "Goblin",
                    hp: 8,
                    damage: DamageDice::new(1, 6),
                    xp: 15,
                },
                MonsterTemplate {
                    name: "Skeleton",
                    hp: 10,
                    damage: DamageDice::new(1, 6),
                    xp: 25,
                },
                MonsterTemplate {
                    name: "Orc",
                    hp: 12,
                    damage: DamageDice::new(1, 8),
                    xp: 35,
                },
            ],
            skirmish: vec![
                MonsterTemplate {
                    name: "Goblin",
                    hp: 7,
                    damage: DamageDice::new(1, 6),
                    xp: 50,
                },
                MonsterTemplate {
                    name: "Skeleton",
                    hp: 13,
                    damage: DamageDice::new(1, 6),
                    xp: 100,
                },
                MonsterTemplate {
                    name: "Orc",
                    hp: 15,
                    damage: DamageDice::new(1, 8),
                    xp: 150,
                },
            ],
        }
    }

    /// Templates sampled for waves.
    pub fn wave_templates(&self) -> &[MonsterTemplate] {
        &self.wave
    }

    /// Templates for one-off skirmishes.
    pub fn skirmish_templates(&self) -> &[MonsterTemplate] {
        &self.skirmish
    }

    /// Find a skirmish template by name, ignoring case.
    pub fn skirmish_template(&self, name: &str) -> MechResult<&MonsterTemplate> {
        let name = name.trim();
        self.skirmish
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| MechError::UnknownMonster(name.to_string()))
    }

    /// Spawn a full wave roster, sampling templates with replacement and
    /// scaling hp and xp for the wave number.
    pub fn spawn_wave<D: RandomSource + ?Sized>(
        &self,
        wave: u32,
        rules: &EncounterRules,
        dice: &mut D,
    ) -> Vec<Monster> {
        if self.wave.is_empty() {
            return Vec::new();
        }
        (0..rules.wave_size)
            .map(|_| {
                let template = &self.wave[dice.pick(self.wave.len())];
                let hp = rules.scaled_hp(template.hp, wave);
                Monster {
                    name: template.name.to_string(),
                    hp,
                    max_hp: hp,
                    damage: template.damage,
                    xp: rules.scaled_xp(template.xp, wave),
                }
            })
            .collect()
    }
}

impl Default for Bestiary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedDice;
    use proptest::prelude::*;

    #[test]
    fn first_wave_uses_base_stats() {
        let bestiary = Bestiary::standard();
        let mut dice = ScriptedDice::new().with_picks([0, 1, 2, 0]);
        let roster = bestiary.spawn_wave(1, &EncounterRules::default(), &mut dice);
        let names: Vec<&str> = roster.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Goblin", "Skeleton", "Orc", "Goblin"]);
        assert_eq!(roster[2].hp, 12);
        assert_eq!(roster[2].max_hp, 12);
        assert_eq!(roster[2].xp, 35);
        assert_eq!(roster[2].damage, DamageDice::new(1, 8));
    }

    #[test]
    fn skirmish_lookup() {
        let bestiary = Bestiary::standard();
        assert_eq!(bestiary.skirmish_template("orc").unwrap().xp, 150);
        assert!(matches!(
            bestiary.skirmish_template("Dragon"),
            Err(MechError::UnknownMonster(_))
        ));
    }

    #[test]
    fn display_hp_clamps() {
        let mut m = Monster::from(&Bestiary::standard().wave_templates()[0]);
        m.take_damage(11);
        assert_eq!(m.hp, -3);
        assert!(!m.is_alive());
        assert_eq!(m.display_hp(), 0);
    }

    proptest! {
        #[test]
        fn wave_stats_scale(wave in 1u32..30, pick in 0usize..3) {
            let bestiary = Bestiary::standard();
            let rules = EncounterRules::default();
            let mut dice = ScriptedDice::new().with_picks([pick; 4]);
            let roster = bestiary.spawn_wave(wave, &rules, &mut dice);
            let base = &bestiary.wave_templates()[pick];
            prop_assert_eq!(roster.len(), 4);
            for m in &roster {
                let hp = base.hp + base.hp * (wave as i32 - 1) / 2;
                let xp = base.xp + base.xp * 3 * (wave - 1) / 10;
                prop_assert_eq!(m.hp, hp);
                prop_assert_eq!(m.xp, xp);
            }
        }
    }
}
