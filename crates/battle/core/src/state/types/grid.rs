use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::sync::Arc;

use super::{EntityId, Position};

/// Rectangular battle grid: static blocked cells plus dynamic occupancy.
///
/// Both collections sit behind `Arc` so successive state versions share
/// whatever they did not change. The blocked set is fixed for the lifetime of
/// the battle; occupancy is replaced wholesale by [`Grid::with_moved`] and
/// [`Grid::without_occupant`].
///
/// # Invariants
///
/// - a cell maps to at most one occupant
/// - every living combatant occupies exactly one cell
/// - dead combatants never appear in occupancy
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    blocked: Arc<BTreeSet<Position>>,
    occupancy: Arc<BTreeMap<Position, EntityId>>,
}

impl Grid {
    /// Creates an empty grid with the given blocked cells.
    pub fn new(width: u32, height: u32, blocked: impl IntoIterator<Item = Position>) -> Self {
        Self {
            width,
            height,
            blocked: Arc::new(blocked.into_iter().collect()),
            occupancy: Arc::new(BTreeMap::new()),
        }
    }

    pub(crate) fn with_occupancy(&self, occupancy: BTreeMap<Position, EntityId>) -> Self {
        Self {
            width: self.width,
            height: self.height,
            blocked: Arc::clone(&self.blocked),
            occupancy: Arc::new(occupancy),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn blocked(&self) -> &BTreeSet<Position> {
        &self.blocked
    }

    pub fn occupancy(&self) -> &BTreeMap<Position, EntityId> {
        &self.occupancy
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && i64::from(position.x) < i64::from(self.width)
            && i64::from(position.y) < i64::from(self.height)
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.blocked.contains(&position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupancy.contains_key(&position)
    }

    pub fn occupant(&self, position: Position) -> Option<EntityId> {
        self.occupancy.get(&position).copied()
    }

    /// Shortest cardinal path length from `start` to `goal`, or `None` when
    /// unreachable.
    ///
    /// Breadth-first search over the four cardinal neighbours. A cell is
    /// impassable when it is out of bounds, blocked, or occupied; the goal is
    /// exempt from the occupancy rule so callers validate its vacancy
    /// themselves. There are no diagonal edges, so a diagonal goal costs two
    /// steps and is unreachable when both corner cells are impassable.
    pub fn path_length(&self, start: Position, goal: Position) -> Option<u32> {
        if start == goal {
            return Some(0);
        }

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([(start, 0u32)]);

        while let Some((current, distance)) = queue.pop_front() {
            let next_distance = distance + 1;

            for neighbor in current.cardinal_neighbors() {
                if !self.contains(neighbor) || self.is_blocked(neighbor) {
                    continue;
                }

                if neighbor != goal && self.is_occupied(neighbor) {
                    continue;
                }

                if !visited.insert(neighbor) {
                    continue;
                }

                if neighbor == goal {
                    return Some(next_distance);
                }

                queue.push_back((neighbor, next_distance));
            }
        }

        None
    }

    /// Copy of this grid with `entity` relocated from `from` to `to`.
    pub(crate) fn with_moved(&self, entity: EntityId, from: Position, to: Position) -> Self {
        let mut occupancy = BTreeMap::clone(&self.occupancy);
        occupancy.remove(&from);
        occupancy.insert(to, entity);
        self.with_occupancy(occupancy)
    }

    /// Copy of this grid with the occupant at `position` removed.
    pub(crate) fn without_occupant(&self, position: Position) -> Self {
        let mut occupancy = BTreeMap::clone(&self.occupancy);
        occupancy.remove(&position);
        self.with_occupancy(occupancy)
    }
}
