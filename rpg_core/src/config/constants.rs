//! Game content constants - player, bosses, weapons, story text
//!
//! Everything here is driver content, not engine tuning: the leveling
//! constants live in the `character` module and are not configurable.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable game content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub player: PlayerConstants,
    #[serde(default = "default_bosses")]
    pub bosses: Vec<BossConstants>,
    #[serde(default = "default_weapons")]
    pub weapons: Vec<WeaponConstants>,
    #[serde(default)]
    pub messages: Messages,
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants {
            player: PlayerConstants::default(),
            bosses: default_bosses(),
            weapons: default_weapons(),
            messages: Messages::default(),
        }
    }
}

impl GameConstants {
    /// Load constants from a TOML file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Check the cross-field requirements a TOML file can break
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.health <= 0 {
            return Err(ConfigError::ValidationError(
                "player health must be positive".to_string(),
            ));
        }
        if self.bosses.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one boss is required".to_string(),
            ));
        }
        for weapon in &self.weapons {
            if weapon.damage < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "weapon {} has negative damage",
                    weapon.name
                )));
            }
        }
        Ok(())
    }

    /// Look up a weapon entry by name
    pub fn weapon(&self, name: &str) -> Option<&WeaponConstants> {
        self.weapons.iter().find(|weapon| weapon.name == name)
    }
}

/// Starting stats for the player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConstants {
    #[serde(default = "default_player_health")]
    pub health: i32,
    #[serde(default = "default_player_damage")]
    pub damage: i32,
}

impl Default for PlayerConstants {
    fn default() -> Self {
        PlayerConstants {
            health: 110,
            damage: 10,
        }
    }
}

fn default_player_health() -> i32 {
    110
}
fn default_player_damage() -> i32 {
    10
}

/// One boss encounter, fought in roster order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossConstants {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    #[serde(default)]
    pub special_ability: Option<String>,
    /// Story text shown when the fight begins ({player_name} placeholder)
    #[serde(default)]
    pub intro: String,
}

fn default_bosses() -> Vec<BossConstants> {
    vec![
        BossConstants {
            name: "Goblin King".to_string(),
            health: 50,
            damage: 8,
            special_ability: Some("Ground Slam".to_string()),
            intro: "Level 1: The Goblin King's Lair\n\
                    You step into a dank, torch-lit cavern echoing with guttural laughter.\n\
                    The Goblin King, infamous for his brute strength and savage cunning, awaits.\n\
                    Steel yourself, {player_name}, for this battle will be fierce and unforgiving!"
                .to_string(),
        },
        BossConstants {
            name: "Dark Sorcerer".to_string(),
            health: 60,
            damage: 9,
            special_ability: Some("Forbidden Spell".to_string()),
            intro: "Level 2: The Dark Sorcerer's Tower\n\
                    With the Goblin King fallen, you ascend a spiraling staircase into a chamber pulsing with arcane energy.\n\
                    The Dark Sorcerer, master of forbidden spells and illusions, greets you with a sinister grin.\n\
                    Only true heroes survive his magic. Face your fears, {player_name}, and let your legend grow!"
                .to_string(),
        },
    ]
}

/// One entry in the starting weapon table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponConstants {
    pub name: String,
    pub damage: i32,
}

fn default_weapons() -> Vec<WeaponConstants> {
    vec![
        WeaponConstants {
            name: "Rock".to_string(),
            damage: 2,
        },
        WeaponConstants {
            name: "Paper".to_string(),
            damage: 3,
        },
        WeaponConstants {
            name: "Scissors".to_string(),
            damage: 4,
        },
    ]
}

/// Story and outcome messages with {player_name}/{enemy_name} placeholders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_welcome")]
    pub welcome: String,
    #[serde(default = "default_intro")]
    pub intro: String,
    #[serde(default = "default_victory")]
    pub victory: String,
    #[serde(default = "default_defeat")]
    pub defeat: String,
    #[serde(default = "default_game_win")]
    pub game_win: String,
    #[serde(default = "default_game_over")]
    pub game_over: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            welcome: default_welcome(),
            intro: default_intro(),
            victory: default_victory(),
            defeat: default_defeat(),
            game_win: default_game_win(),
            game_over: default_game_over(),
        }
    }
}

fn default_welcome() -> String {
    "Welcome, brave adventurer, to the RPG Adventure!\n\
     Legends tell of heroes who rise against impossible odds - will you become one?"
        .to_string()
}

fn default_intro() -> String {
    "In a realm shrouded in darkness and peril, you, {player_name}, have been chosen by fate.\n\
     Two formidable bosses threaten the land: the ferocious Goblin King and the enigmatic Dark Sorcerer.\n\
     Your journey will test your courage, wit, and strength. Gather your resolve - the fate of this world rests in your hands."
        .to_string()
}

fn default_victory() -> String {
    "Triumph!\n\
     With a final, decisive blow, you have vanquished {enemy_name}.\n\
     The air crackles with your newfound power as the path ahead becomes clear."
        .to_string()
}

fn default_defeat() -> String {
    "Defeat...\n\
     You fought valiantly, but {enemy_name} has bested you in battle.\n\
     Every setback is a lesson - rise again, stronger than before!"
        .to_string()
}

fn default_game_win() -> String {
    "Heroic Victory!\n\
     All evil has been banished thanks to your bravery, {player_name}.\n\
     The people rejoice, and songs will be sung of your deeds for generations to come!\n\
     You are a true legend of the realm!"
        .to_string()
}

fn default_game_over() -> String {
    "Game Over\n\
     Though darkness prevails this day, the spirit of a true hero never fades.\n\
     Rest and return, {player_name} - the world still needs you. Your next adventure awaits!"
        .to_string()
}

/// Fill the {player_name}/{enemy_name} placeholders in a message template
pub fn render_message(template: &str, player_name: &str, enemy_name: &str) -> String {
    template
        .replace("{player_name}", player_name)
        .replace("{enemy_name}", enemy_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert_eq!(constants.player.health, 110);
        assert_eq!(constants.player.damage, 10);
        assert_eq!(constants.bosses.len(), 2);
        assert_eq!(constants.bosses[0].name, "Goblin King");
        assert_eq!(constants.bosses[1].health, 60);
        assert_eq!(constants.weapons.len(), 3);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_weapon_lookup() {
        let constants = GameConstants::default();
        assert_eq!(constants.weapon("Scissors").map(|w| w.damage), Some(4));
        assert!(constants.weapon("Sword").is_none());
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[player]
health = 90
damage = 12

[[bosses]]
name = "Slime"
health = 20
damage = 3

[[weapons]]
name = "Stick"
damage = 1
"#;

        let constants: GameConstants = super::super::parse_toml(toml).unwrap();
        assert_eq!(constants.player.health, 90);
        assert_eq!(constants.bosses.len(), 1);
        assert_eq!(constants.bosses[0].special_ability, None);
        assert_eq!(constants.weapons[0].name, "Stick");
        // Messages fall back to defaults.
        assert!(constants.messages.welcome.contains("brave adventurer"));
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_roster() {
        let mut constants = GameConstants::default();
        constants.bosses.clear();
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_render_message() {
        let rendered = render_message("{player_name} fells {enemy_name}", "Hero", "Goblin King");
        assert_eq!(rendered, "Hero fells Goblin King");
    }
}
