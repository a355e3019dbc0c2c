//! Attack roll evaluation.

use crate::config::CombatConfig;

/// Outcome of an attack roll against a fixed armor class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackRoll {
    pub d20: i32,
    pub total: i32,
    pub is_crit: bool,
    pub is_hit: bool,
}

/// Evaluates a natural d20 face against `armor_class`.
///
/// A natural 20 always hits and crits; a natural 1 always misses; anything
/// else hits when `d20 + attack_mod >= armor_class`.
pub fn check_hit(d20: i32, attack_mod: i32, armor_class: i32) -> AttackRoll {
    let total = d20.saturating_add(attack_mod);
    let is_crit = d20 == CombatConfig::CRITICAL_ROLL;
    let is_hit = is_crit || (d20 != CombatConfig::FUMBLE_ROLL && total >= armor_class);

    AttackRoll {
        d20,
        total,
        is_crit,
        is_hit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_one_misses_despite_huge_modifier() {
        let roll = check_hit(1, 50, 2);
        assert_eq!(roll.total, 51);
        assert!(!roll.is_hit);
        assert!(!roll.is_crit);
    }

    #[test]
    fn natural_twenty_hits_unreachable_armor() {
        let roll = check_hit(20, -10, 99);
        assert!(roll.is_hit);
        assert!(roll.is_crit);
    }

    #[test]
    fn extreme_modifier_saturates() {
        let roll = check_hit(10, i32::MAX, 15);
        assert_eq!(roll.total, i32::MAX);
        assert!(roll.is_hit);
    }

    #[test]
    fn meeting_armor_class_exactly_hits() {
        assert!(check_hit(8, 5, 13).is_hit);
        assert!(!check_hit(7, 5, 13).is_hit);
        assert!(!check_hit(19, 5, 13).is_crit);
    }
}
