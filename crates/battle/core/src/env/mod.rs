//! Collaborators supplied by the host.
//!
//! The only one the engine needs is the randomness capability; everything else
//! (roster, map, initiative rolls) arrives already baked into the
//! [`crate::state::BattleState`].
mod error;
mod rng;

pub use error::RandomError;
pub use rng::{PcgSource, RandomSource, SequenceSource};
