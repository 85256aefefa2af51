//! # Dice
//!
//! A Fate die has six sides: two `+`, two `-`, and two blanks. A roll of
//! four of them is a [`RollSet`], and its value is the sum of the faces.
//!
//! ```text
//! draw 0,1 → Minus   (-1)
//! draw 2,3 → Neutral ( 0)
//! draw 4,5 → Plus    (+1)
//! ```

use std::fmt;

use crate::core::error::FateError;

/// Number of dice rolled for every roll set.
pub const DICE_COUNT: usize = 4;

/// Number of distinct draws a single die maps from.
pub(crate) const DIE_SIDES: u32 = 6;

/// One face of a Fate die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    Plus,
    Minus,
    Neutral,
    /// Produced only by [`Die::from_draw`] for a draw outside `0..6`.
    Invalid,
}

impl Die {
    /// Maps a uniform draw in `0..6` onto a face.
    pub fn from_draw(value: u32) -> Self {
        match value {
            0 | 1 => Die::Minus,
            2 | 3 => Die::Neutral,
            4 | 5 => Die::Plus,
            _ => Die::Invalid,
        }
    }

    /// Contribution of this face to a roll's sum.
    pub fn value(self) -> i32 {
        match self {
            Die::Plus => 1,
            Die::Minus => -1,
            Die::Neutral | Die::Invalid => 0,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Die::Plus => '+',
            Die::Minus => '-',
            Die::Neutral => 'o',
            Die::Invalid => 'x',
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Sum of the faces. Order of the dice does not matter.
pub fn sum(rolls: &[Die]) -> i32 {
    rolls.iter().map(|die| die.value()).sum()
}

/// Exactly [`DICE_COUNT`] dice, in the order they were rolled.
///
/// Renderers only accept a `RollSet`, so the face count is checked once at
/// construction. Arbitrary slices go through `TryFrom` and fail with
/// [`FateError::InvalidRollCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSet([Die; DICE_COUNT]);

impl RollSet {
    pub fn new(dice: [Die; DICE_COUNT]) -> Self {
        Self(dice)
    }

    pub fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.0
    }

    pub fn total(&self) -> i32 {
        sum(&self.0)
    }
}

impl TryFrom<&[Die]> for RollSet {
    type Error = FateError;

    fn try_from(rolls: &[Die]) -> Result<Self, Self::Error> {
        let dice: [Die; DICE_COUNT] =
            rolls.try_into().map_err(|_| FateError::InvalidRollCount {
                expected: DICE_COUNT,
                actual: rolls.len(),
            })?;
        Ok(Self(dice))
    }
}

impl TryFrom<Vec<Die>> for RollSet {
    type Error = FateError;

    fn try_from(rolls: Vec<Die>) -> Result<Self, Self::Error> {
        RollSet::try_from(rolls.as_slice())
    }
}
