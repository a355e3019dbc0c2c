//! Damage rolls.

use super::dice::{DiceError, roll_die};
use crate::env::RandomSource;

/// Rolls `d(die) + modifier`, adding one more independent `d(die)` on a crit.
///
/// The modifier is applied once regardless of the crit. Randomness is drawn
/// base die first, then the bonus die.
pub fn roll_damage<R>(rng: &mut R, die: i32, modifier: i32, is_crit: bool) -> Result<i32, DiceError>
where
    R: RandomSource + ?Sized,
{
    let mut total = roll_die(rng, die)?.saturating_add(modifier);
    if is_crit {
        total = total.saturating_add(roll_die(rng, die)?);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceSource;

    #[test]
    fn crit_adds_a_second_die_not_a_second_modifier() {
        let mut rng = SequenceSource::new([5, 6]);
        assert_eq!(roll_damage(&mut rng, 8, 3, true), Ok(14));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn normal_hit_draws_one_die() {
        let mut rng = SequenceSource::new([3, 6]);
        assert_eq!(roll_damage(&mut rng, 8, 3, false), Ok(6));
        assert_eq!(rng.remaining(), 1);
    }
}
