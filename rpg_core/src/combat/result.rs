//! AttackOutcome - outcome of a single attack resolution

use serde::{Deserialize, Serialize};

/// Result of one attack call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Total damage dealt (base + weapon bonus); may be zero or negative
    pub damage_dealt: i32,
    /// Whether the defender was reduced to zero health
    pub target_defeated: bool,
    /// Experience awarded to the attacker (fixed amount on a kill, else 0)
    pub experience_awarded: i32,
    /// Whether the kill award pushed the attacker over a level threshold
    pub attacker_leveled_up: bool,
    /// Defender health before the hit
    pub health_before: i32,
    /// Defender health after clamping
    pub health_after: i32,
}

impl AttackOutcome {
    /// The (damage dealt, defender defeated) pair most callers care about
    pub fn as_tuple(&self) -> (i32, bool) {
        (self.damage_dealt, self.target_defeated)
    }

    /// Get a one-line summary
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} damage dealt", self.damage_dealt)];

        if self.target_defeated {
            parts.push("target defeated".to_string());
        }

        if self.experience_awarded > 0 {
            parts.push(format!("{} experience awarded", self.experience_awarded));
        }

        if self.attacker_leveled_up {
            parts.push("level up".to_string());
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_tuple() {
        let outcome = AttackOutcome {
            damage_dealt: 15,
            target_defeated: true,
            ..Default::default()
        };
        assert_eq!(outcome.as_tuple(), (15, true));
    }

    #[test]
    fn test_summary_plain_hit() {
        let outcome = AttackOutcome {
            damage_dealt: 12,
            ..Default::default()
        };
        assert_eq!(outcome.summary(), "12 damage dealt");
    }

    #[test]
    fn test_summary_killing_blow() {
        let outcome = AttackOutcome {
            damage_dealt: 15,
            target_defeated: true,
            experience_awarded: 100,
            attacker_leveled_up: true,
            health_before: 15,
            health_after: 0,
        };
        let summary = outcome.summary();
        assert!(summary.contains("target defeated"));
        assert!(summary.contains("100 experience awarded"));
        assert!(summary.contains("level up"));
    }
}
