//! Roll-stream flattening.
//!
//! Bowling's bonus arithmetic is defined over the flat sequence of rolls,
//! not the frame grouping, so scoring works on the stream this stage
//! produces. Input is assumed validated; nothing is re-checked here.

use crate::frames::{Frame, RollToken, PINS_PER_RACK};

/// Flattens validated frames into pin counts per roll. A spare resolves to
/// the remainder of the rack its first ball left standing. Frame boundaries
/// are not retained; the scorer re-derives them from the stream.
pub fn flatten(frames: &[Frame]) -> Vec<u8> {
    let mut rolls: Vec<u8> = Vec::new();
    for frame in frames {
        for roll in &frame.rolls {
            match &roll.token {
                RollToken::Pins(pins) => rolls.push(*pins as u8),
                RollToken::Strike => rolls.push(PINS_PER_RACK as u8),
                RollToken::Spare => {
                    // Validation guarantees a 0-9 numeric roll precedes a spare.
                    let previous = rolls.last().copied().unwrap_or(0);
                    rolls.push(PINS_PER_RACK as u8 - previous);
                }
                RollToken::Unrecognized(_) => {
                    unreachable!("unrecognized tokens are rejected during validation")
                }
            }
        }
    }
    rolls
}
