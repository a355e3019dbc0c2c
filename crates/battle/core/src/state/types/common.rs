use std::fmt;

/// Unique identifier for a combatant.
///
/// Assigned once when the battle is created and stable across every state
/// version. The total ordering is only used for deterministic iteration; turn
/// order comes from the initiative sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, `max(|dx|, |dy|)`. Diagonal neighbours are 1 apart.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// The four cardinal neighbours. No bounds checking.
    ///
    /// Coordinates saturate at the `i32` limits, so an edge cell lists itself
    /// in place of the neighbour that does not exist.
    pub fn cardinal_neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x.saturating_add(1), self.y),
            Position::new(self.x.saturating_sub(1), self.y),
            Position::new(self.x, self.y.saturating_add(1)),
            Position::new(self.x, self.y.saturating_sub(1)),
        ]
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_counts_diagonals_as_one() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.chebyshev_distance(Position::new(3, 3)), 1);
        assert_eq!(origin.chebyshev_distance(Position::new(2, 3)), 1);
        assert_eq!(origin.chebyshev_distance(Position::new(5, 0)), 3);
        assert_eq!(origin.chebyshev_distance(origin), 0);
    }

    #[test]
    fn neighbours_saturate_at_the_edge() {
        let corner = Position::new(i32::MAX, i32::MIN);
        let [east, west, south, north] = corner.cardinal_neighbors();
        assert_eq!(east, corner);
        assert_eq!(west, Position::new(i32::MAX - 1, i32::MIN));
        assert_eq!(south, Position::new(i32::MAX, i32::MIN + 1));
        assert_eq!(north, corner);
    }
}
