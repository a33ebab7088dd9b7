//! Prelude module for convenient imports
//!
//! ```rust
//! use rpg_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, EXP_MULTIPLIER, LEVEL_UP_EXP};
pub use crate::types::Role;

// Items and storage
pub use crate::inventory::Inventory;
pub use crate::item::{Armor, Consumable, Item, Weapon};

// Combat
pub use crate::combat::{resolve_attack, AttackOutcome};

// Logging
pub use crate::logger::{CombatLogger, GameLogger};

// Config
pub use crate::config::{render_message, ConfigError, GameConstants};
