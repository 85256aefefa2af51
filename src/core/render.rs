//! # Rendering
//!
//! Turns a [`RollSet`] into text. Two shapes exist:
//!
//! ```text
//! DiceLine:  +1: + o - +
//!
//! Card:      +-----------+
//!            | +      +1 |
//!            | o         |
//!            | -         |
//!            | +         |
//!            |         + |
//!            |         - |
//!            |         o |
//!            | +1      + |
//!            +-----------+
//! ```
//!
//! The sum is always printed with an explicit sign, so an even roll reads `+0`.

use crate::core::die::RollSet;

const CARD_EDGE: &str = "+-----------+";

/// Which shape a roll is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderVariant {
    #[default]
    DiceLine,
    Card,
}

impl RenderVariant {
    pub fn render(self, rolls: &RollSet) -> String {
        match self {
            RenderVariant::DiceLine => render_dice_line(rolls),
            RenderVariant::Card => render_card(rolls),
        }
    }
}

/// `"<signed sum>: <f0> <f1> <f2> <f3>"`
pub fn render_dice_line(rolls: &RollSet) -> String {
    let [a, b, c, d] = rolls.dice();
    format!("{:+}: {} {} {} {}", rolls.total(), a, b, c, d)
}

/// A 13-column card with the faces down the left edge, mirrored on the
/// right, and the sum in the top-right and bottom-left corners.
pub fn render_card(rolls: &RollSet) -> String {
    let value = rolls.total();
    let [a, b, c, d] = rolls.dice();
    [
        CARD_EDGE.to_string(),
        format!("| {}      {:+} |", a, value),
        format!("| {}         |", b),
        format!("| {}         |", c),
        format!("| {}         |", d),
        format!("|         {} |", d),
        format!("|         {} |", c),
        format!("|         {} |", b),
        format!("| {:+}      {} |", value, a),
        CARD_EDGE.to_string(),
    ]
    .join("\n")
}
