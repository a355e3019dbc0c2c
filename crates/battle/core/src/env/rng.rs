//! Randomness capability consumed by the battle engine.
//!
//! The engine never generates entropy itself. Hosts hand it a [`RandomSource`]
//! and the engine draws from it strictly in call order, so a fixed source and a
//! fixed command sequence always reproduce the same event log.

use std::collections::VecDeque;

use super::RandomError;

/// Uniform integer source over a half-open range.
///
/// Implementations must return `v` with `min_inclusive <= v < max_exclusive`.
/// Returning anything else is a host defect; the engine checks the contract and
/// aborts the resolution when it is broken.
pub trait RandomSource {
    /// Draws the next value in `[min_inclusive, max_exclusive)`.
    fn next_in(&mut self, min_inclusive: i32, max_exclusive: i32) -> Result<i32, RandomError>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in(&mut self, min_inclusive: i32, max_exclusive: i32) -> Result<i32, RandomError> {
        (**self).next_in(min_inclusive, max_exclusive)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in(&mut self, min_inclusive: i32, max_exclusive: i32) -> Result<i32, RandomError> {
        (**self).next_in(min_inclusive, max_exclusive)
    }
}

/// Seeded PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of state, 32 bits of output per step.
/// Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgSource {
    state: u64,
}

impl PcgSource {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        // Standard PCG seeding: advance once, fold the seed in, advance again.
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

impl RandomSource for PcgSource {
    fn next_in(&mut self, min_inclusive: i32, max_exclusive: i32) -> Result<i32, RandomError> {
        if min_inclusive >= max_exclusive {
            return Err(RandomError::EmptyRange {
                min_inclusive,
                max_exclusive,
            });
        }

        let span = (i64::from(max_exclusive) - i64::from(min_inclusive)) as u64;

        // Rejection sampling keeps the distribution uniform for spans that do
        // not divide 2^32.
        let zone = (1u64 << 32) - ((1u64 << 32) % span);
        loop {
            let value = u64::from(self.next_u32());
            if value < zone {
                let offset = (value % span) as i64;
                return Ok((i64::from(min_inclusive) + offset) as i32);
            }
        }
    }
}

/// Deterministic source replaying a fixed sequence of values.
///
/// Fails loudly: an empty queue yields [`RandomError::Exhausted`], and a queued
/// value outside the requested range yields [`RandomError::Unsatisfiable`]
/// without being consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceSource {
    values: VecDeque<i32>,
}

impl SequenceSource {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for SequenceSource {
    fn next_in(&mut self, min_inclusive: i32, max_exclusive: i32) -> Result<i32, RandomError> {
        let value = *self.values.front().ok_or(RandomError::Exhausted)?;
        if value < min_inclusive || value >= max_exclusive {
            return Err(RandomError::Unsatisfiable {
                value,
                min_inclusive,
                max_exclusive,
            });
        }
        self.values.pop_front();
        Ok(value)
    }
}
