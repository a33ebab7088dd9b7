//! Attack resolution - mutate the defender and reward the attacker

use super::result::AttackOutcome;
use crate::character::{Character, LEVEL_UP_EXP};
use crate::logger::CombatLogger;

/// Resolve a single attack from `attacker` against `defender`.
///
/// This is the main combat resolution function:
/// 1. Total damage is the attacker's base damage plus the weapon slot
///    bonus. The inventory's equipped weapon is not consulted.
/// 2. The defender's health drops through the clamping setter, so it never
///    goes below zero. Negative damage is not validated and heals.
/// 3. Defeat is checked after clamping.
/// 4. A defeat awards the attacker a fixed [`LEVEL_UP_EXP`], regardless of
///    overkill damage or the defender's level.
///
/// Logging is a side channel only: the same state transitions happen with
/// or without a logger.
pub fn resolve_attack(
    attacker: &mut Character,
    defender: &mut Character,
    mut logger: Option<&mut (dyn CombatLogger + '_)>,
) -> AttackOutcome {
    let total_damage = attacker.total_damage();
    let health_before = defender.health();

    defender.set_health(health_before - total_damage);
    let target_defeated = defender.health() <= 0;

    if let Some(log) = logger.as_deref_mut() {
        log.log_combat(attacker, defender, total_damage);
    }

    let mut experience_awarded = 0;
    let mut attacker_leveled_up = false;

    if target_defeated {
        let experience_before = attacker.experience;
        attacker_leveled_up = attacker.gain_experience(LEVEL_UP_EXP, logger.as_deref_mut());
        experience_awarded = LEVEL_UP_EXP;

        if let Some(log) = logger.as_deref_mut() {
            log.log(&format!(
                "{} defeated {} and gained {} experience points!",
                attacker.name, defender.name, LEVEL_UP_EXP
            ));
            log.log(&format!(
                "Total experience: {}",
                experience_before + LEVEL_UP_EXP
            ));
        }
    }

    AttackOutcome {
        damage_dealt: total_damage,
        target_defeated,
        experience_awarded,
        attacker_leveled_up,
        health_before,
        health_after: defender.health(),
    }
}
