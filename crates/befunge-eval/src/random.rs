//! Providers for the `?` opcode.
//!
//! `?` is the only nondeterministic instruction, so the engine takes its
//! randomness through [`DirectionSource`]. Tests substitute
//! [`FixedDirections`]; hosts that want reproducible runs seed
//! [`RandomDirections`].

use befunge_types::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies a heading each time `?` executes.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

impl<T: DirectionSource + ?Sized> DirectionSource for &mut T {
    fn next_direction(&mut self) -> Direction {
        (**self).next_direction()
    }
}

/// Uniform draw from the four headings.
#[derive(Debug, Clone)]
pub struct RandomDirections {
    rng: StdRng,
}

impl RandomDirections {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of headings.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DirectionSource for RandomDirections {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Cycles through a fixed sequence of headings.
///
/// An empty sequence always yields [`Direction::Right`].
#[derive(Debug, Clone)]
pub struct FixedDirections {
    sequence: Vec<Direction>,
    next: usize,
}

impl FixedDirections {
    pub fn new(sequence: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            sequence: sequence.into_iter().collect(),
            next: 0,
        }
    }

    /// Every draw returns `direction`.
    pub fn always(direction: Direction) -> Self {
        Self::new([direction])
    }
}

impl DirectionSource for FixedDirections {
    fn next_direction(&mut self) -> Direction {
        let Some(direction) = self.sequence.get(self.next).copied() else {
            return Direction::Right;
        };
        self.next = (self.next + 1) % self.sequence.len();
        direction
    }
}
