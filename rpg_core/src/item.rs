//! Item and equipment records - inert data held by inventories

use serde::{Deserialize, Serialize};

/// A weapon granting a flat damage bonus while equipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub description: String,
    /// Flat bonus added to the wielder's base damage
    pub damage: i32,
}

impl Weapon {
    /// Create a new weapon
    pub fn new(name: &str, description: &str, damage: i32) -> Self {
        Weapon {
            name: name.to_string(),
            description: description.to_string(),
            damage,
        }
    }
}

/// An armor piece providing flat defense
///
/// Defense is not consumed by the current damage formula; the field is
/// carried for equipping/bookkeeping only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub description: String,
    pub defense: i32,
}

impl Armor {
    /// Create a new armor piece
    pub fn new(name: &str, description: &str, defense: i32) -> Self {
        Armor {
            name: name.to_string(),
            description: description.to_string(),
            defense,
        }
    }
}

/// A single-use item carrying an effect tag and magnitude
///
/// Applying the effect is the caller's job; the inventory only tracks the
/// item and consumes it on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    pub name: String,
    pub description: String,
    pub effect: String,
    pub value: i32,
}

impl Consumable {
    /// Create a new consumable
    pub fn new(name: &str, description: &str, effect: &str, value: i32) -> Self {
        Consumable {
            name: name.to_string(),
            description: description.to_string(),
            effect: effect.to_string(),
            value,
        }
    }
}

/// Any item an inventory can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Weapon(Weapon),
    Armor(Armor),
    Consumable(Consumable),
}

impl Item {
    /// Display name of the underlying item
    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(weapon) => &weapon.name,
            Item::Armor(armor) => &armor.name,
            Item::Consumable(consumable) => &consumable.name,
        }
    }

    /// Description of the underlying item
    pub fn description(&self) -> &str {
        match self {
            Item::Weapon(weapon) => &weapon.description,
            Item::Armor(armor) => &armor.description,
            Item::Consumable(consumable) => &consumable.description,
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&Armor> {
        match self {
            Item::Armor(armor) => Some(armor),
            _ => None,
        }
    }

    pub fn as_consumable(&self) -> Option<&Consumable> {
        match self {
            Item::Consumable(consumable) => Some(consumable),
            _ => None,
        }
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Item::Weapon(weapon)
    }
}

impl From<Armor> for Item {
    fn from(armor: Armor) -> Self {
        Item::Armor(armor)
    }
}

impl From<Consumable> for Item {
    fn from(consumable: Consumable) -> Self {
        Item::Consumable(consumable)
    }
}
