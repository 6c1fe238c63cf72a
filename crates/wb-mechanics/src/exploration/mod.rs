//! The exploration resolver.
//!
//! Exploring draws one discovery from a rarity-weighted pool and applies
//! its effects in order. The narrative starts with the discovery text and
//! appends a before/after note for each effect.

pub mod tables;

pub use tables::{Discovery, Effect, ExplorationTable, Rarity};

use wb_core::Character;

use crate::dice::RandomSource;
use crate::market::shop_listing;

/// Result of one exploration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationOutcome {
    /// The updated character.
    pub character: Character,
    /// What happened.
    pub narrative: String,
    /// Whether the merchant's shop was opened.
    pub shop: bool,
}

/// Draw a discovery from `table` and apply it to a copy of `character`.
pub fn resolve_exploration<D: RandomSource + ?Sized>(
    character: &Character,
    table: &ExplorationTable,
    dice: &mut D,
) -> ExplorationOutcome {
    let mut character = character.clone();
    character.clamp_hp();

    let pool = table.pool();
    let Some(&index) = pool.get(dice.pick(pool.len())) else {
        return ExplorationOutcome {
            character,
            narrative: "You find nothing of interest.".to_string(),
            shop: false,
        };
    };
    let discovery = &table.discoveries()[index];
    tracing::debug!(character = %character.id, rarity = %discovery.rarity, "exploration draw");

    let mut narrative = discovery.text.to_string();
    let mut shop = false;
    for effect in &discovery.effects {
        match effect {
            Effect::Hp(delta) => {
                let before = character.hp;
                character.hp = (character.hp + delta).clamp(0, character.max_hp);
                narrative.push_str(&format!(" HP: {before} → {}", character.hp));
            }
            Effect::MaxHp(delta) => {
                let before = character.max_hp;
                character.max_hp = (character.max_hp + delta).max(1);
                character.clamp_hp();
                narrative.push_str(&format!(" Max HP: {before} → {}", character.max_hp));
            }
            Effect::Strength(delta) => {
                let before = character.attributes.strength;
                character.attributes.strength = (before + delta).max(1);
                narrative.push_str(&format!(
                    " Strength: {before} → {}",
                    character.attributes.strength
                ));
            }
            Effect::Gold(delta) => {
                let before = character.gold;
                character.gold += delta;
                narrative.push_str(&format!(" Gold: {before} → {}", character.gold));
            }
            Effect::Item(item) => {
                character.add_item(item.clone());
                narrative.push_str(&format!(" Item gained: {item}"));
            }
            Effect::Ability(name) => {
                if character.grant_ability(name.clone()) {
                    narrative.push_str(&format!(" New ability learned: {name}"));
                }
            }
            Effect::Shop => {
                shop = true;
                narrative.push_str("\nAvailable items:\n");
                narrative.push_str(&shop_listing());
            }
        }
    }
    character.clamp_hp();

    ExplorationOutcome {
        character,
        narrative,
        shop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedDice;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wb_core::CharacterClass;

    fn index_of(table: &ExplorationTable, prefix: &str) -> usize {
        let target = table
            .discoveries()
            .iter()
            .position(|d| d.text.starts_with(prefix))
            .unwrap();
        table.pool().iter().position(|&i| i == target).unwrap()
    }

    fn explore(c: &Character, prefix: &str) -> ExplorationOutcome {
        let table = ExplorationTable::standard();
        let mut dice = ScriptedDice::new().with_picks([index_of(&table, prefix)]);
        resolve_exploration(c, &table, &mut dice)
    }

    #[test]
    fn treasure_chest() {
        let mut c = Character::from_class("Sly", CharacterClass::Rogue);
        c.hp = 60;
        let out = explore(&c, "You find a hidden treasure");
        assert_eq!(out.character.hp, 65);
        assert_eq!(out.character.gold, 50);
        assert_eq!(out.character.inventory, vec!["Healing Potion"]);
        assert!(out.narrative.ends_with(" HP: 60 → 65 Gold: 0 → 50 Item gained: Healing Potion"));
        assert!(!out.shop);
    }

    #[test]
    fn gold_loss_reads_before_and_after() {
        let table = ExplorationTable::from_discoveries(vec![Discovery {
            text: "A pickpocket brushes past you.",
            rarity: Rarity::Common,
            effects: vec![Effect::Gold(-30)],
        }]);
        let c = Character::from_class("Sly", CharacterClass::Rogue);
        let out = resolve_exploration(&c, &table, &mut ScriptedDice::new());
        assert_eq!(out.character.gold, -30);
        assert_eq!(out.narrative, "A pickpocket brushes past you. Gold: 0 → -30");
    }

    #[test]
    fn trap_clamps_at_zero() {
        let mut c = Character::from_class("Sly", CharacterClass::Rogue);
        c.hp = 3;
        let out = explore(&c, "You discover a trap");
        assert_eq!(out.character.hp, 0);
        assert!(out.narrative.ends_with(" HP: 3 → 0"));
    }

    #[test]
    fn fountain_heals_before_raising_max() {
        let c = Character::from_class("Sly", CharacterClass::Rogue);
        let out = explore(&c, "You discover a mystical fountain");
        assert_eq!(out.character.max_hp, 75);
        assert_eq!(out.character.hp, 70);
        assert!(out.narrative.ends_with(" HP: 70 → 70 Max HP: 70 → 75"));
    }

    #[test]
    fn shrine_grants_ability_once() {
        let rogue = Character::from_class("Sly", CharacterClass::Rogue);
        let out = explore(&rogue, "You discover an ancient shrine");
        assert!(out.character.has_ability("Divine Shield"));
        assert!(out.narrative.contains("New ability learned: Divine Shield"));

        let mage = Character::from_class("Ivy", CharacterClass::Mage);
        let out = explore(&mage, "You discover an ancient shrine");
        assert_eq!(out.character.abilities.len(), 2);
        assert!(!out.narrative.contains("New ability"));
    }

    #[test]
    fn merchant_opens_shop() {
        let c = Character::from_class("Sly", CharacterClass::Rogue);
        let out = explore(&c, "You find a merchant willing");
        assert!(out.shop);
        assert!(out.narrative.contains("\nAvailable items:\nHealth Potion: 50 gold"));
        assert_eq!(out.character, c);
    }

    #[test]
    fn empty_table_finds_nothing() {
        let c = Character::from_class("Sly", CharacterClass::Rogue);
        let out = resolve_exploration(
            &c,
            &ExplorationTable::from_discoveries(Vec::new()),
            &mut ScriptedDice::new(),
        );
        assert_eq!(out.character, c);
    }

    #[test]
    fn same_seed_same_outcomes() {
        let c = Character::from_class("Sly", CharacterClass::Rogue);
        let table = ExplorationTable::standard();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let x = resolve_exploration(&c, &table, &mut a);
            let y = resolve_exploration(&c, &table, &mut b);
            assert_eq!(x, y);
        }
    }

    proptest! {
        #[test]
        fn hp_invariant_holds(seed in any::<u64>(), hp in 0i32..70, rounds in 1usize..30) {
            let mut c = Character::from_class("Sly", CharacterClass::Rogue);
            c.hp = hp;
            let table = ExplorationTable::standard();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..rounds {
                c = resolve_exploration(&c, &table, &mut rng).character;
                prop_assert!(c.max_hp > 0);
                prop_assert!(c.hp >= 0 && c.hp <= c.max_hp);
            }
        }
    }
}
