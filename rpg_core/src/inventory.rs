//! Inventory - bounded item storage with equipped weapon/armor slots

use crate::item::{Armor, Consumable, Item, Weapon};
use serde::{Deserialize, Serialize};

/// Default number of item slots for a new character
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded item container owned by a single character
///
/// All rejected operations return `false` without mutating anything:
/// adding past capacity, and equipping or using an item that is not held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    max_size: usize,
    items: Vec<Item>,
    equipped_weapon: Option<Weapon>,
    equipped_armor: Option<Armor>,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    /// Create an inventory with a fixed capacity
    pub fn new(max_size: usize) -> Self {
        Inventory {
            max_size,
            items: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
        }
    }

    /// Add an item. Rejected when the inventory is full.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.items.len() >= self.max_size {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the first held item matching `item`.
    ///
    /// Equipped slots are not cleared, even when they refer to the removed
    /// item; re-equipping is the caller's responsibility.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|held| held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Equip a weapon. Rejected unless the weapon is currently held.
    pub fn equip_weapon(&mut self, weapon: &Weapon) -> bool {
        if !self.holds_weapon(weapon) {
            return false;
        }
        self.equipped_weapon = Some(weapon.clone());
        true
    }

    /// Equip an armor piece. Rejected unless the armor is currently held.
    pub fn equip_armor(&mut self, armor: &Armor) -> bool {
        if !self.holds_armor(armor) {
            return false;
        }
        self.equipped_armor = Some(armor.clone());
        true
    }

    /// Consume a held consumable, removing it from the items.
    ///
    /// Applying the consumable's effect is left to the caller.
    pub fn use_consumable(&mut self, consumable: &Consumable) -> bool {
        let position = self
            .items
            .iter()
            .position(|held| held.as_consumable() == Some(consumable));
        match position {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn holds_weapon(&self, weapon: &Weapon) -> bool {
        self.items.iter().any(|held| held.as_weapon() == Some(weapon))
    }

    fn holds_armor(&self, armor: &Armor) -> bool {
        self.items.iter().any(|held| held.as_armor() == Some(armor))
    }

    /// All held items, in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of held items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another `add_item` would be rejected
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Capacity fixed at construction
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.equipped_weapon.as_ref()
    }

    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.equipped_armor.as_ref()
    }
}
