pub mod combatant;
pub mod common;
pub mod grid;

pub use combatant::{Combatant, Faction, Stats};
pub use common::{EntityId, Position};
pub use grid::Grid;
