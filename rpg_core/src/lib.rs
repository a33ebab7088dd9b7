//! rpg_core - Combat and progression engine for a turn-based text adventure
//!
//! This library provides:
//! - Character: health, damage and the experience/leveling state machine
//! - Inventory: bounded item storage with equipped weapon/armor slots
//! - Attack resolution: damage composition, clamped health, kill rewards
//! - CombatLogger: optional side-channel for human-readable event text

pub mod character;
pub mod combat;
pub mod config;
pub mod inventory;
pub mod item;
pub mod logger;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use character::{Character, EXP_MULTIPLIER, LEVEL_UP_EXP};
pub use combat::{resolve_attack, AttackOutcome};
pub use config::{render_message, ConfigError, GameConstants};
pub use inventory::Inventory;
pub use item::{Armor, Consumable, Item, Weapon};
pub use logger::{CombatLogger, GameLogger};
pub use types::Role;
