//! Game validation - structural and physical legality checks.
//!
//! Rules run fail-fast in a fixed order so error-category expectations stay
//! deterministic when one input breaks several rules: the frame-count rule
//! first, then per frame in ascending order: physics, structure, notation.

use crate::errors::{ErrorReporting, InvalidGameError, RuleKind, SourceContext};
use crate::frames::{Frame, RollToken, FRAMES_PER_GAME, PINS_PER_RACK};

/// Roll cap for frames 1-9.
const MAX_ROLLS_EARLY: usize = 2;
/// Roll cap for the final frame.
const MAX_ROLLS_FINAL: usize = 3;

/// Validation stage context: owns the rendered game line for diagnostics.
pub struct ValidationContext<'a> {
    pub source: &'a SourceContext,
}

impl ErrorReporting for ValidationContext<'_> {
    fn source(&self) -> &SourceContext {
        self.source
    }
}

/// Checks every rule against the frames and returns the first violation.
/// Pure check: on success the caller's frames pass to the parser unchanged.
pub fn validate(frames: &[Frame], source: &SourceContext) -> Result<(), InvalidGameError> {
    let ctx = ValidationContext { source };
    check_frame_count(frames, &ctx)?;
    for (index, frame) in frames.iter().enumerate() {
        check_physics(index, frame, &ctx)?;
        check_structure(index, frame, &ctx)?;
        check_notation(index, frame, &ctx)?;
    }
    Ok(())
}

fn check_frame_count(frames: &[Frame], ctx: &ValidationContext) -> Result<(), InvalidGameError> {
    if frames.len() > FRAMES_PER_GAME {
        let first_excess = &frames[FRAMES_PER_GAME];
        return Err(ctx.report(
            RuleKind::TooManyFrames {
                count: frames.len(),
                max: FRAMES_PER_GAME,
            },
            FRAMES_PER_GAME + 1,
            first_excess.span,
        ));
    }
    Ok(())
}

/// Physics: every numeric roll is 0-10, and numeric neighbours sharing a
/// rack cannot topple more than ten pins between them. Marks re-rack, so
/// in the final frame only numeric-numeric neighbours are constrained.
fn check_physics(
    index: usize,
    frame: &Frame,
    ctx: &ValidationContext,
) -> Result<(), InvalidGameError> {
    let frame_no = index + 1;
    for roll in &frame.rolls {
        if let RollToken::Pins(pins) = roll.token {
            if !(0..=PINS_PER_RACK).contains(&pins) {
                return Err(ctx.report(
                    RuleKind::PinCountOutOfRange { pins },
                    frame_no,
                    roll.span,
                ));
            }
        }
    }
    for pair in rack_sharing_pairs(index, frame) {
        if let (Some(first), Some(second)) = (frame.numeric(pair), frame.numeric(pair + 1)) {
            // A ten is a strike written out in numbers; its placement is a
            // structural question, not a physics one.
            if first == PINS_PER_RACK || second == PINS_PER_RACK {
                continue;
            }
            if first + second > PINS_PER_RACK {
                return Err(ctx.report(
                    RuleKind::FrameExceedsTenPins { first, second },
                    frame_no,
                    frame.span,
                ));
            }
        }
    }
    Ok(())
}

fn check_structure(
    index: usize,
    frame: &Frame,
    ctx: &ValidationContext,
) -> Result<(), InvalidGameError> {
    let frame_no = index + 1;
    if frame.rolls.is_empty() {
        return Err(ctx.report(RuleKind::EmptyFrame, frame_no, frame.span));
    }
    if index < FRAMES_PER_GAME - 1 {
        // Position before length, so "0 X" reports the misplacement rather
        // than the extra roll.
        if let Some(position) = frame.rolls.iter().position(|roll| roll.token.clears_rack()) {
            if position != 0 {
                return Err(ctx.report(
                    RuleKind::StrikeNotFirst,
                    frame_no,
                    frame.rolls[position].span,
                ));
            }
            if frame.rolls.len() != 1 {
                return Err(ctx.report(
                    RuleKind::StrikeWithExtraRolls {
                        extra: frame.rolls.len() - 1,
                    },
                    frame_no,
                    frame.span,
                ));
            }
        }
        if frame.rolls.len() > MAX_ROLLS_EARLY {
            return Err(ctx.report(
                RuleKind::TooManyRolls {
                    rolls: frame.rolls.len(),
                    max: MAX_ROLLS_EARLY,
                },
                frame_no,
                frame.span,
            ));
        }
    } else {
        if frame.rolls.len() > MAX_ROLLS_FINAL {
            return Err(ctx.report(
                RuleKind::TooManyRolls {
                    rolls: frame.rolls.len(),
                    max: MAX_ROLLS_FINAL,
                },
                frame_no,
                frame.span,
            ));
        }
        if frame.rolls.len() == MAX_ROLLS_FINAL && !earns_bonus_roll(frame) {
            return Err(ctx.report(
                RuleKind::UnearnedBonusRoll,
                frame_no,
                frame.rolls[MAX_ROLLS_FINAL - 1].span,
            ));
        }
    }
    Ok(())
}

fn check_notation(
    index: usize,
    frame: &Frame,
    ctx: &ValidationContext,
) -> Result<(), InvalidGameError> {
    let frame_no = index + 1;
    for (position, roll) in frame.rolls.iter().enumerate() {
        match &roll.token {
            RollToken::Spare => {
                if position == 0 {
                    return Err(ctx.report(RuleKind::SpareAsFirstRoll, frame_no, roll.span));
                }
                let previous = &frame.rolls[position - 1];
                if previous.token.clears_rack() || previous.token == RollToken::Spare {
                    return Err(ctx.report(
                        RuleKind::SpareAfterMark {
                            previous: previous.token.to_string(),
                        },
                        frame_no,
                        roll.span,
                    ));
                }
            }
            RollToken::Unrecognized(token) => {
                return Err(ctx.report(
                    RuleKind::UnrecognizedToken {
                        token: token.clone(),
                    },
                    frame_no,
                    roll.span,
                ));
            }
            _ => {}
        }
    }
    // Two numeric rolls that clear the rack must be written as a spare.
    for pair in rack_sharing_pairs(index, frame) {
        if let (Some(first), Some(second)) = (frame.numeric(pair), frame.numeric(pair + 1)) {
            if first != PINS_PER_RACK
                && second != PINS_PER_RACK
                && first + second == PINS_PER_RACK
            {
                return Err(ctx.report(
                    RuleKind::UnmarkedSpare { first, second },
                    frame_no,
                    frame.span,
                ));
            }
        }
    }
    Ok(())
}

/// Start positions of roll pairs that could share a rack: the first two
/// rolls in frames 1-9, every adjacent pair in the final frame.
fn rack_sharing_pairs(index: usize, frame: &Frame) -> std::ops::Range<usize> {
    if index == FRAMES_PER_GAME - 1 {
        0..frame.rolls.len().saturating_sub(1)
    } else if frame.rolls.len() >= 2 {
        0..1
    } else {
        0..0
    }
}

/// The final frame earns its third roll with a strike on the first ball or
/// a spare on the second.
fn earns_bonus_roll(frame: &Frame) -> bool {
    let strike_first = frame
        .rolls
        .first()
        .map_or(false, |roll| roll.token.clears_rack());
    let spare_second = frame
        .rolls
        .get(1)
        .map_or(false, |roll| roll.token == RollToken::Spare);
    strike_first || spare_second
}
