//! Character - health, damage and the experience/leveling state machine

use crate::combat::{resolve_attack, AttackOutcome};
use crate::inventory::Inventory;
use crate::item::Weapon;
use crate::logger::CombatLogger;
use crate::types::Role;
use serde::{Deserialize, Serialize};

/// Experience consumed per level-up iteration
pub const LEVEL_UP_EXP: i32 = 100;
/// Growth factor applied (floored) to health and damage on each level-up
pub const EXP_MULTIPLIER: f64 = 1.2;

/// A combat-capable game character
///
/// Health is private so every change goes through the clamping setter.
/// The `weapon` slot is the character's own single weapon; it is
/// independent of the inventory's equipped weapon, and combat damage reads
/// only this slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    health: i32,
    pub damage: i32,
    pub weapon: Option<Weapon>,
    pub inventory: Inventory,
    pub level: u32,
    pub experience: i32,
    pub role: Role,
}

impl Character {
    /// Create a character at level 1 with no weapon and a default inventory
    pub fn new(name: &str, health: i32, damage: i32) -> Self {
        Character {
            name: name.to_string(),
            health: health.max(0),
            damage,
            weapon: None,
            inventory: Inventory::default(),
            level: 1,
            experience: 0,
            role: Role::default(),
        }
    }

    /// Attach a weapon built from a name and damage bonus
    pub fn with_weapon(mut self, name: &str, damage: i32) -> Self {
        let description = format!("A {} weapon", name);
        self.weapon = Some(Weapon::new(name, &description, damage));
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    /// Replace the inventory with an empty one of the given capacity
    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory = Inventory::new(capacity);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Current health
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Set health, clamped at zero. The only path by which health changes.
    pub fn set_health(&mut self, new_health: i32) {
        self.health = new_health.max(0);
    }

    /// Base damage plus the weapon slot's bonus
    ///
    /// The inventory's equipped weapon is deliberately not consulted.
    pub fn total_damage(&self) -> i32 {
        self.damage + self.weapon.as_ref().map_or(0, |weapon| weapon.damage)
    }

    /// Whether this character is still standing
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Attack another character; see [`resolve_attack`]
    pub fn attack(
        &mut self,
        defender: &mut Character,
        logger: Option<&mut (dyn CombatLogger + '_)>,
    ) -> AttackOutcome {
        resolve_attack(self, defender, logger)
    }

    /// Gain experience, consuming [`LEVEL_UP_EXP`] points per level-up.
    ///
    /// Negative amounts are rejected without touching any state. Each level
    /// gained grows health and damage independently by the floored
    /// [`EXP_MULTIPLIER`], so a 250-point gain from zero leaves two levels
    /// gained and 50 experience remaining. After any call the experience
    /// total sits in `0..LEVEL_UP_EXP`.
    ///
    /// Returns whether at least one level-up occurred.
    pub fn gain_experience(
        &mut self,
        amount: i32,
        mut logger: Option<&mut (dyn CombatLogger + '_)>,
    ) -> bool {
        if amount < 0 {
            if let Some(log) = logger.as_deref_mut() {
                log.log(&format!(
                    "{} attempted to gain negative experience. Ignoring.",
                    self.name
                ));
            }
            return false;
        }

        self.experience += amount;
        let mut leveled_up = false;

        while self.experience >= LEVEL_UP_EXP {
            self.experience -= LEVEL_UP_EXP;
            self.level += 1;
            self.health = (self.health as f64 * EXP_MULTIPLIER) as i32;
            self.damage = (self.damage as f64 * EXP_MULTIPLIER) as i32;
            leveled_up = true;

            if let Some(log) = logger.as_deref_mut() {
                log.log_level_up(self);
                log.log(&format!(
                    "New stats: Health={}, Damage={}",
                    self.health, self.damage
                ));
                log.log(&format!("Remaining experience: {}", self.experience));
            }
        }

        if let Some(log) = logger.as_deref_mut() {
            log.log(&format!(
                "{} gained {} experience points. Total: {}",
                self.name, amount, self.experience
            ));
        }

        leveled_up
    }

    /// Format the archetype ability line, if this character has one
    pub fn ability_line(&self) -> Option<String> {
        self.role.ability_line(&self.name)
    }

    /// Render the character sheet shown between fights
    pub fn sheet(&self) -> String {
        let (weapon_name, weapon_damage) = match &self.weapon {
            Some(weapon) => (weapon.name.as_str(), weapon.damage),
            None => ("No Weapon", 0),
        };
        format!(
            "Name: {}\nHealth: {}\nDamage: {}\nWeapon: {} (+{} Damage)",
            self.name, self.health, self.damage, weapon_name, weapon_damage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_defaults() {
        let hero = Character::new("Hero", 110, 10);
        assert_eq!(hero.health(), 110);
        assert_eq!(hero.damage, 10);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 0);
        assert!(hero.weapon.is_none());
        assert_eq!(hero.inventory.max_size(), 10);
        assert_eq!(hero.role, Role::Adventurer);
    }

    #[test]
    fn test_with_weapon_builds_weapon() {
        let hero = Character::new("Hero", 110, 10).with_weapon("Rock", 2);
        let weapon = hero.weapon.as_ref().unwrap();
        assert_eq!(weapon.name, "Rock");
        assert_eq!(weapon.description, "A Rock weapon");
        assert_eq!(weapon.damage, 2);
        assert_eq!(hero.total_damage(), 12);
    }

    #[test]
    fn test_set_health_clamps_at_zero() {
        let mut hero = Character::new("Hero", 100, 10);
        hero.set_health(-25);
        assert_eq!(hero.health(), 0);
        assert!(!hero.is_alive());

        hero.set_health(30);
        assert_eq!(hero.health(), 30);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_multi_level_compounding() {
        // 250 points: two level-ups consumed, 50 remaining. Health and
        // damage compound independently: floor(floor(100*1.2)*1.2) = 144,
        // floor(floor(10*1.2)*1.2) = 14.
        let mut hero = Character::new("Hero", 100, 10);
        let leveled = hero.gain_experience(250, None);

        assert!(leveled);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, 50);
        assert_eq!(hero.health(), 144);
        assert_eq!(hero.damage, 14);
    }

    #[test]
    fn test_single_level_up() {
        let mut hero = Character::new("Hero", 100, 10);
        assert!(!hero.gain_experience(99, None));
        assert_eq!(hero.level, 1);

        assert!(hero.gain_experience(1, None));
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.health(), 120);
        assert_eq!(hero.damage, 12);
    }

    #[test]
    fn test_negative_experience_rejected() {
        let mut hero = Character::new("Hero", 100, 10).with_experience(40);
        assert!(!hero.gain_experience(-10, None));
        assert_eq!(hero.experience, 40);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.health(), 100);
        assert_eq!(hero.damage, 10);
    }

    #[test]
    fn test_ability_line_delegates_to_role() {
        let boss = Character::new("Goblin King", 50, 8).with_role(Role::boss("Ground Slam"));
        assert_eq!(
            boss.ability_line().as_deref(),
            Some("Goblin King uses Ground Slam!")
        );

        let hero = Character::new("Hero", 110, 10);
        assert_eq!(hero.ability_line(), None);
    }

    #[test]
    fn test_sheet_lists_weapon() {
        let hero = Character::new("Hero", 110, 10).with_weapon("Paper", 3);
        let sheet = hero.sheet();
        assert!(sheet.contains("Name: Hero"));
        assert!(sheet.contains("Health: 110"));
        assert!(sheet.contains("Weapon: Paper (+3 Damage)"));

        let unarmed = Character::new("Hero", 110, 10);
        assert!(unarmed.sheet().contains("Weapon: No Weapon (+0 Damage)"));
    }

    proptest! {
        #[test]
        fn prop_set_health_clamps(new_health in proptest::num::i32::ANY) {
            let mut hero = Character::new("Hero", 10, 1);
            hero.set_health(new_health);
            prop_assert_eq!(hero.health(), new_health.max(0));
        }

        #[test]
        fn prop_experience_stays_bounded(
            amounts in prop::collection::vec(0i32..500, 0..20)
        ) {
            let mut hero = Character::new("Hero", 100, 10);
            for amount in amounts {
                hero.gain_experience(amount, None);
                prop_assert!((0..LEVEL_UP_EXP).contains(&hero.experience));
            }
        }
    }
}
