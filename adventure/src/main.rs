//! adventure - A minimal console adventure built on rpg_core
//!
//! Peripheral glue only: story text and starting stats come from
//! `GameConstants` (optionally loaded from a TOML file passed as the first
//! argument), combat events go through `GameLogger`, and all the state
//! transitions live in the engine.

use rpg_core::config::BossConstants;
use rpg_core::prelude::*;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let constants = match load_constants() {
        Ok(constants) => constants,
        Err(err) => {
            eprintln!("failed to load game config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    separator("RPG Adventure");
    println!("{}\n", constants.messages.welcome);

    let player_name = prompt(&mut input, "What is your name, hero? ");
    let player_name = if player_name.is_empty() {
        "Hero".to_string()
    } else {
        player_name
    };

    println!();
    println!(
        "{}\n",
        render_message(&constants.messages.intro, &player_name, "")
    );

    let weapon = choose_weapon(&mut input, &constants);
    let mut player = Character::new(
        &player_name,
        constants.player.health,
        constants.player.damage,
    )
    .with_weapon(&weapon.0, weapon.1);

    let mut logger = GameLogger::default();

    for entry in &constants.bosses {
        separator(&entry.name);
        println!("{}\n", render_message(&entry.intro, &player_name, ""));

        let mut boss = make_boss(entry);
        if let Some(line) = boss.ability_line() {
            println!("{}\n", line);
        }

        if !fight(&mut player, &mut boss, &mut logger) {
            println!(
                "\n{}",
                render_message(&constants.messages.defeat, &player_name, &entry.name)
            );
            println!(
                "\n{}",
                render_message(&constants.messages.game_over, &player_name, &entry.name)
            );
            return ExitCode::SUCCESS;
        }

        println!(
            "\n{}",
            render_message(&constants.messages.victory, &player_name, &entry.name)
        );
        println!("\n{}\n", player.sheet());
    }

    separator("The End");
    println!(
        "{}",
        render_message(&constants.messages.game_win, &player_name, "")
    );
    ExitCode::SUCCESS
}

fn load_constants() -> Result<GameConstants, ConfigError> {
    match env::args().nth(1) {
        Some(path) => GameConstants::load(Path::new(&path)),
        None => Ok(GameConstants::default()),
    }
}

/// Build a boss character from its roster entry
fn make_boss(entry: &BossConstants) -> Character {
    let role = Role::Boss {
        special_ability: entry.special_ability.clone(),
    };
    Character::new(&entry.name, entry.health, entry.damage).with_role(role)
}

/// Fight to the death. The player swings first; the boss counters while
/// alive. Returns whether the player survived.
fn fight(player: &mut Character, boss: &mut Character, logger: &mut GameLogger) -> bool {
    loop {
        let outcome = player.attack(boss, Some(logger));
        if outcome.target_defeated {
            println!("({})", outcome.summary());
            return true;
        }
        let counter = boss.attack(player, Some(logger));
        if counter.target_defeated {
            println!("({})", counter.summary());
            return false;
        }
    }
}

/// Let the player pick a starting weapon from the config table
fn choose_weapon(input: &mut impl BufRead, constants: &GameConstants) -> (String, i32) {
    println!("Choose your starting weapon:");
    for (index, weapon) in constants.weapons.iter().enumerate() {
        println!("  {}) {} (+{} Damage)", index + 1, weapon.name, weapon.damage);
    }

    let answer = prompt(input, "> ");
    let choice = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|&n| n < constants.weapons.len())
        .unwrap_or(0);

    let weapon = &constants.weapons[choice];
    println!("You grip the {} tightly.\n", weapon.name);
    (weapon.name.clone(), weapon.damage)
}

/// Print a prompt and read one trimmed line
fn prompt(input: &mut impl BufRead, text: &str) -> String {
    print!("{}", text);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => line.trim().to_string(),
        Err(_) => String::new(),
    }
}

fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}
