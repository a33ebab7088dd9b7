//! Logging collaborators - human-readable side-channel, never game state

use crate::character::Character;
use chrono::Local;

/// Sink for human-readable game events.
///
/// Loggers only observe: the presence or absence of a logger must never
/// change a combat or leveling outcome. The two event methods have default
/// formatting and route through [`CombatLogger::log`].
pub trait CombatLogger {
    /// Record one message
    fn log(&mut self, message: &str);

    /// Record a combat event
    fn log_combat(&mut self, attacker: &Character, defender: &Character, damage: i32) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.log(&format!(
            "[{}] COMBAT LOG: {} attacked {} for {} damage",
            timestamp, attacker.name, defender.name, damage
        ));
    }

    /// Record a level-up event
    fn log_level_up(&mut self, character: &Character) {
        let timestamp = Local::now().format("%H:%M:%S");
        self.log(&format!(
            "[{}] LEVEL UP: {} reached level {}!",
            timestamp, character.name, character.level
        ));
    }
}

/// Default logger: records every message and optionally echoes to stdout
#[derive(Debug, Clone)]
pub struct GameLogger {
    log_to_console: bool,
    logs: Vec<String>,
}

impl Default for GameLogger {
    fn default() -> Self {
        GameLogger::new(true)
    }
}

impl GameLogger {
    pub fn new(log_to_console: bool) -> Self {
        GameLogger {
            log_to_console,
            logs: Vec::new(),
        }
    }

    /// Recording-only logger, used by tests and headless drivers
    pub fn silent() -> Self {
        GameLogger::new(false)
    }

    /// All messages recorded so far, in order
    pub fn entries(&self) -> &[String] {
        &self.logs
    }
}

impl CombatLogger for GameLogger {
    fn log(&mut self, message: &str) {
        self.logs.push(message.to_string());
        if self.log_to_console {
            println!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let mut logger = GameLogger::silent();
        logger.log("first");
        logger.log("second");
        assert_eq!(logger.entries(), ["first", "second"]);
    }

    #[test]
    fn test_combat_line_format() {
        let mut logger = GameLogger::silent();
        let attacker = Character::new("Hero", 110, 10);
        let defender = Character::new("Goblin King", 50, 8);

        logger.log_combat(&attacker, &defender, 12);

        let line = &logger.entries()[0];
        assert!(line.contains("COMBAT LOG: Hero attacked Goblin King for 12 damage"));
        // Timestamp prefix like "[12:34:56] ".
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_level_up_line_format() {
        let mut logger = GameLogger::silent();
        let hero = Character::new("Hero", 110, 10).with_level(2);

        logger.log_level_up(&hero);

        assert!(logger.entries()[0].contains("LEVEL UP: Hero reached level 2!"));
    }
}
