/// Combat rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Chebyshev reach of a melee attack, in cells.
    pub melee_reach: u32,
}

impl CombatConfig {
    // ===== rule constants =====
    /// Sides on the attack die.
    pub const D20_SIDES: i32 = 20;
    /// Natural roll that always hits and doubles the damage dice.
    pub const CRITICAL_ROLL: i32 = 20;
    /// Natural roll that always misses.
    pub const FUMBLE_ROLL: i32 = 1;
    /// Round counter value of a freshly created battle.
    pub const FIRST_ROUND: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MELEE_REACH: u32 = 1;

    pub fn new() -> Self {
        Self {
            melee_reach: Self::DEFAULT_MELEE_REACH,
        }
    }

    pub fn with_melee_reach(melee_reach: u32) -> Self {
        Self { melee_reach }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_melee_reach_is_adjacent() {
        assert_eq!(CombatConfig::default().melee_reach, 1);
        assert_eq!(CombatConfig::with_melee_reach(3).melee_reach, 3);
    }

    #[test]
    fn crit_and_fumble_are_die_extremes() {
        assert_eq!(CombatConfig::CRITICAL_ROLL, CombatConfig::D20_SIDES);
        assert_eq!(CombatConfig::FUMBLE_ROLL, 1);
    }
}
