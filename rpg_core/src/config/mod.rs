//! Game content configuration loaded from TOML
//!
//! Only driver-facing content lives here: player starting stats, the boss
//! roster, the weapon table and story text. Engine tuning (the leveling
//! constants) is deliberately not configurable.

mod constants;

pub use constants::{
    render_message, BossConstants, GameConstants, Messages, PlayerConstants, WeaponConstants,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error produced while loading or validating game content
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read game content file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("malformed TOML in game content: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid game content: {0}")]
    ValidationError(String),
}

/// Read a game content file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Deserialize game content from an in-memory TOML string
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
