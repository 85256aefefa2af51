//! # Roller
//!
//! Draws dice from a cryptographically secure source. The source is any
//! [`TryCryptoRng`]; production code uses the operating system's
//! [`OsRng`], tests plug in seeded or scripted generators.
//!
//! A failed draw is an error. There is no fallback value.

use log::{debug, warn};
use rand::rngs::OsRng;
use rand::TryCryptoRng;

use crate::core::die::{DICE_COUNT, DIE_SIDES, Die, RollSet};
use crate::core::error::{FateError, FateResult};

/// Largest multiple of [`DIE_SIDES`] that fits in the `u32` draw space.
/// Draws at or above it are rejected so every face is equally likely.
const ACCEPT_ZONE: u64 = (1u64 << 32) - (1u64 << 32) % DIE_SIDES as u64;

pub struct Roller<R> {
    rng: R,
}

impl Roller<OsRng> {
    /// A roller backed by the operating system's entropy source.
    pub fn secure() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: TryCryptoRng> Roller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Rolls `count` dice. `count == 0` yields an empty vector.
    pub fn roll(&mut self, count: usize) -> FateResult<Vec<Die>> {
        let dice = (0..count)
            .map(|_| self.draw().map(Die::from_draw))
            .collect::<FateResult<Vec<_>>>()?;
        debug!("Rolled {} dice: {:?}", count, dice);
        Ok(dice)
    }

    /// Rolls a full set of [`DICE_COUNT`] dice.
    pub fn roll_set(&mut self) -> FateResult<RollSet> {
        let mut dice = [Die::Neutral; DICE_COUNT];
        for slot in dice.iter_mut() {
            *slot = Die::from_draw(self.draw()?);
        }
        Ok(RollSet::new(dice))
    }

    /// Uniform draw in `0..DIE_SIDES`.
    fn draw(&mut self) -> FateResult<u32> {
        loop {
            let raw = self.rng.try_next_u32().map_err(|e| {
                warn!("Random source failed: {}", e);
                FateError::RandomSource(e.to_string())
            })?;
            if u64::from(raw) < ACCEPT_ZONE {
                return Ok(raw % DIE_SIDES);
            }
        }
    }
}

/// Rolls `count` dice from the operating system's entropy source.
pub fn roll(count: usize) -> FateResult<Vec<Die>> {
    Roller::secure().roll(count)
}

/// Rolls a full set from the operating system's entropy source.
pub fn roll_set() -> FateResult<RollSet> {
    Roller::secure().roll_set()
}
