//! Combat math.
//!
//! Pure helpers for the attack pipeline. Nothing here touches a
//! [`crate::state::BattleState`]; the engine feeds in numbers and records the
//! results as events.
//!
//! - `dice`: d20 and N-sided rolls over a [`crate::env::RandomSource`]
//! - `hit`: natural-1 / natural-20 aware hit check
//! - `damage`: damage roll with the critical bonus die

pub mod damage;
pub mod dice;
pub mod hit;

pub use damage::roll_damage;
pub use dice::{DiceError, roll_d20, roll_die};
pub use hit::{AttackRoll, check_hit};
