use super::{EntityId, Position};

/// Side affiliation used for win/lose evaluation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Player,
    Enemy,
}

/// Combat statistics of a single combatant.
///
/// `hp` only ever moves down, through damage, and is floored at zero; nothing
/// in the engine raises it back toward `max_hp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Threshold an attack total must meet or exceed to hit.
    pub armor_class: i32,
    pub hp: i32,
    pub max_hp: i32,
    /// Movement budget per turn, in cardinal grid steps.
    pub speed: i32,
    pub attack_mod: i32,
    pub damage_mod: i32,
    /// Number of faces on the damage die.
    pub damage_die: i32,
    /// Reach of a ranged attack in cells (Chebyshev).
    pub range: i32,
}

impl Stats {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        armor_class: i32,
        hp: i32,
        max_hp: i32,
        speed: i32,
        attack_mod: i32,
        damage_mod: i32,
        damage_die: i32,
        range: i32,
    ) -> Self {
        Self {
            armor_class,
            hp,
            max_hp,
            speed,
            attack_mod,
            damage_mod,
            damage_die,
            range,
        }
    }
}

/// A participant in the battle.
///
/// Records are never removed from the battle: death flips `is_dead` and drops
/// the combatant from grid occupancy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: EntityId,
    pub name: String,
    pub faction: Faction,
    pub position: Position,
    pub stats: Stats,
    pub is_dead: bool,
}

impl Combatant {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        faction: Faction,
        position: Position,
        stats: Stats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            faction,
            position,
            stats,
            is_dead: false,
        }
    }

    /// Builder-style override of the death flag.
    #[must_use]
    pub fn with_dead(mut self, is_dead: bool) -> Self {
        self.is_dead = is_dead;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    /// Copy of this record standing on `position`.
    pub(crate) fn moved_to(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Copy of this record after losing `amount` hp.
    ///
    /// Stored hp is floored at zero; death is decided on the raw value.
    pub(crate) fn damaged(&self, amount: i32) -> Self {
        let raw = self.stats.hp.saturating_sub(amount);
        Self {
            stats: Stats {
                hp: raw.max(0),
                ..self.stats
            },
            is_dead: raw <= 0,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Combatant {
        Combatant::new(
            EntityId(2),
            "Goblin",
            Faction::Enemy,
            Position::new(2, 1),
            Stats::new(13, 10, 10, 6, 4, 2, 6, 1),
        )
    }

    #[test]
    fn damage_floors_hp_and_kills_at_zero() {
        let exact = goblin().damaged(10);
        assert_eq!(exact.stats.hp, 0);
        assert!(exact.is_dead);

        let overkill = goblin().damaged(15);
        assert_eq!(overkill.stats.hp, 0);
        assert!(overkill.is_dead);

        let scratched = goblin().damaged(6);
        assert_eq!(scratched.stats.hp, 4);
        assert!(scratched.is_alive());
        assert_eq!(scratched.stats.max_hp, 10);
    }

    #[test]
    fn extreme_damage_saturates() {
        let mut frail = goblin();
        frail.stats.hp = i32::MIN + 1;
        let struck = frail.damaged(i32::MAX);
        assert_eq!(struck.stats.hp, 0);
        assert!(struck.is_dead);
    }

    #[test]
    fn faction_display_is_snake_case() {
        assert_eq!(Faction::Player.to_string(), "player");
        assert_eq!("ENEMY".parse::<Faction>().unwrap(), Faction::Enemy);
    }
}
