//! The merchant's stock and consumable items.

use wb_core::{Character, EquipmentSlot};

use crate::error::{MechError, MechResult};

/// An item the merchant sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    /// Item name.
    pub name: &'static str,
    /// Price in gold.
    pub cost: i64,
    /// Slot it is equipped into on purchase, if it is gear.
    pub slot: Option<EquipmentSlot>,
}

/// The merchant's fixed stock.
pub const SHOP_STOCK: [ShopItem; 3] = [
    ShopItem {
        name: "Health Potion",
        cost: 50,
        slot: None,
    },
    ShopItem {
        name: "Better Weapon",
        cost: 100,
        slot: Some(EquipmentSlot::Weapon),
    },
    ShopItem {
        name: "Better Armor",
        cost: 100,
        slot: Some(EquipmentSlot::Armor),
    },
];

/// The stock as narrative lines, e.g. `Health Potion: 50 gold`.
pub fn shop_listing() -> String {
    SHOP_STOCK
        .iter()
        .map(|item| format!("{}: {} gold", item.name, item.cost))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find a stocked item by name, ignoring case.
pub fn find_stock(name: &str) -> MechResult<&'static ShopItem> {
    let name = name.trim();
    SHOP_STOCK
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| MechError::UnknownItem(name.to_string()))
}

/// Buy an item: gold is deducted, gear goes into its slot and anything else
/// into the inventory. Returns the narrative line.
pub fn purchase(character: &mut Character, name: &str) -> MechResult<String> {
    let item = find_stock(name)?;
    if character.gold < item.cost {
        return Err(MechError::InsufficientGold {
            item: item.name.to_string(),
            cost: item.cost,
            gold: character.gold,
        });
    }
    character.gold -= item.cost;
    let message = match item.slot {
        Some(slot) => {
            let old = character.equip(slot, item.name);
            match old {
                Some(old) => format!("You buy {} and replace your {old}.", item.name),
                None => format!("You buy {}.", item.name),
            }
        }
        None => {
            character.add_item(item.name);
            format!("You buy {}.", item.name)
        }
    };
    tracing::debug!(character = %character.id, item = item.name, gold = character.gold, "purchase");
    Ok(format!("{message} Gold: {}", character.gold))
}

/// What happens when an inventory item is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEffect {
    /// Restore hit points.
    Heal(i32),
    /// Raise maximum hit points by a fraction of the current maximum.
    MaxHpBoost(f64),
    /// Add gold.
    Gold(i64),
    /// Raise strength permanently.
    Strength(i32),
}

/// The use effect of an item, if it has one.
pub fn item_effect(name: &str) -> Option<ItemEffect> {
    match name.trim().to_lowercase().as_str() {
        "healing potion" | "health potion" => Some(ItemEffect::Heal(20)),
        "small shield" => Some(ItemEffect::MaxHpBoost(0.10)),
        "gold amulet" => Some(ItemEffect::Gold(10)),
        "strength potion" => Some(ItemEffect::Strength(2)),
        _ => None,
    }
}

/// Use and consume one carried item. Returns the narrative line.
pub fn use_item(character: &mut Character, name: &str) -> MechResult<String> {
    let carried = character
        .inventory
        .iter()
        .find(|i| i.eq_ignore_ascii_case(name.trim()))
        .cloned()
        .ok_or_else(|| MechError::UnknownItem(name.trim().to_string()))?;
    let effect = item_effect(&carried).ok_or_else(|| MechError::UnusableItem(carried.clone()))?;
    character.remove_item(&carried);

    let message = match effect {
        ItemEffect::Heal(amount) => {
            let before = character.hp;
            character.heal(amount);
            format!("You use {carried}. HP: {before} → {}", character.hp)
        }
        ItemEffect::MaxHpBoost(fraction) => {
            let before = character.max_hp;
            let gain = ((before as f64 * fraction).floor() as i32).max(1);
            character.max_hp += gain;
            format!("You use {carried}. Max HP: {before} → {}", character.max_hp)
        }
        ItemEffect::Gold(amount) => {
            let before = character.gold;
            character.gold += amount;
            format!("You use {carried}. Gold: {before} → {}", character.gold)
        }
        ItemEffect::Strength(amount) => {
            let before = character.attributes.strength;
            character.attributes.strength = (before + amount).max(1);
            format!(
                "You use {carried}. Strength: {before} → {}",
                character.attributes.strength
            )
        }
    };
    character.clamp_hp();
    Ok(message)
}
