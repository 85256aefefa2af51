//! # Core
//!
//! Rolling, scoring and rendering Fate dice. Nothing in here touches the
//! terminal.
//!
//! ```text
//!   Roller ──► RollSet ──► render (DiceLine | Card) ──► String
//!                 │
//!                 └──► sum
//! ```
//!
//! ## Modules
//!
//! - [`die`]: `Die`, `RollSet` and `sum`
//! - [`roller`]: draws dice from a secure random source
//! - [`render`]: the dice-line and card text layouts
//! - [`config`]: command-line switches passed into the entry points
//! - [`error`]: `FateError`

pub mod config;
pub mod die;
pub mod error;
pub mod render;
pub mod roller;

pub use config::Config;
pub use die::{DICE_COUNT, Die, RollSet, sum};
pub use error::{FateError, FateResult};
pub use render::{RenderVariant, render_card, render_dice_line};
pub use roller::{Roller, roll, roll_set};
