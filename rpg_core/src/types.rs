//! Core types specific to rpg_core

use serde::{Deserialize, Serialize};

/// Archetype extra carried by a character
///
/// A single tagged variant replaces one subclass per archetype: each
/// archetype only adds one optional flavor string and a formatted line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Plain character with no archetype extra
    #[default]
    Adventurer,
    Boss {
        special_ability: Option<String>,
    },
    Sidekick {
        support_ability: Option<String>,
    },
    Villain {
        evil_deed: Option<String>,
    },
}

impl Role {
    /// Boss with a special ability
    pub fn boss(special_ability: &str) -> Self {
        Role::Boss {
            special_ability: Some(special_ability.to_string()),
        }
    }

    /// Sidekick with a support ability
    pub fn sidekick(support_ability: &str) -> Self {
        Role::Sidekick {
            support_ability: Some(support_ability.to_string()),
        }
    }

    /// Villain with an evil deed
    pub fn villain(evil_deed: &str) -> Self {
        Role::Villain {
            evil_deed: Some(evil_deed.to_string()),
        }
    }

    /// Format the archetype's ability line for the named character.
    ///
    /// `None` for a plain adventurer; pure, no state change.
    pub fn ability_line(&self, name: &str) -> Option<String> {
        match self {
            Role::Adventurer => None,
            Role::Boss { special_ability } => Some(match special_ability {
                Some(ability) => format!("{} uses {}!", name, ability),
                None => format!("{} has no special ability.", name),
            }),
            Role::Sidekick { support_ability } => Some(match support_ability {
                Some(ability) => format!("{} uses {}!", name, ability),
                None => format!("{} has no support ability.", name),
            }),
            Role::Villain { evil_deed } => Some(match evil_deed {
                Some(deed) => format!("{} commits {}!", name, deed),
                None => format!("{} has no evil deed.", name),
            }),
        }
    }
}
