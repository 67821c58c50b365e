//! Frame and roll data model.
//!
//! Input arrives as strings grouped per frame, either from the notation
//! parser or directly from a caller. This module classifies tokens,
//! attaches source spans, and renders structured input to a canonical game
//! line so both entry points get the same span-labeled diagnostics.

use std::fmt;

use miette::SourceSpan;

use crate::errors::SourceContext;

/// Frames in a full game.
pub const FRAMES_PER_GAME: usize = 10;

/// Pins standing on a fresh rack.
pub const PINS_PER_RACK: i32 = 10;

/// A single roll as written on the score sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollToken {
    /// A numeric pin count. Range legality is the validator's business.
    Pins(i32),
    /// `X` or `x`: all ten pins on the first ball of a rack.
    Strike,
    /// `/`: the pins remaining after the first ball of the rack.
    Spare,
    /// Anything else. Kept as data so the validator can reject it in the
    /// fixed rule order rather than construction failing early.
    Unrecognized(String),
}

impl RollToken {
    /// Classifies a raw token. Surrounding whitespace is ignored and the
    /// strike mark is case-insensitive.
    pub fn classify(raw: &str) -> RollToken {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("x") {
            return RollToken::Strike;
        }
        if trimmed == "/" {
            return RollToken::Spare;
        }
        match trimmed.parse::<i32>() {
            Ok(pins) => RollToken::Pins(pins),
            Err(_) => RollToken::Unrecognized(trimmed.to_string()),
        }
    }

    /// True for rolls that leave no pin standing: a strike, or a ten
    /// written out in numbers.
    pub fn clears_rack(&self) -> bool {
        match self {
            RollToken::Strike => true,
            RollToken::Pins(pins) => *pins == PINS_PER_RACK,
            _ => false,
        }
    }
}

impl fmt::Display for RollToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollToken::Pins(pins) => write!(f, "{pins}"),
            RollToken::Strike => f.write_str("X"),
            RollToken::Spare => f.write_str("/"),
            RollToken::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// A classified roll with its location in the game line.
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    pub token: RollToken,
    pub span: SourceSpan,
}

/// One frame of the score sheet: 1-3 rolls for a legal game.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rolls: Vec<Roll>,
    pub span: SourceSpan,
}

impl Frame {
    /// The pin count of the roll at `index`, when that roll is numeric.
    pub fn numeric(&self, index: usize) -> Option<i32> {
        match self.rolls.get(index).map(|roll| &roll.token) {
            Some(RollToken::Pins(pins)) => Some(*pins),
            _ => None,
        }
    }
}

/// A game assembled from caller-supplied tokens, rendered to a canonical
/// line so diagnostics can point at the offending frame.
#[derive(Debug)]
pub struct GameSheet {
    pub frames: Vec<Frame>,
    pub source: SourceContext,
}

impl GameSheet {
    /// Builds a sheet from one token list per frame. Tokens keep their
    /// trimmed spelling in the rendered line; frames are separated by `|`.
    pub fn from_tokens<S: AsRef<str>>(frames: &[Vec<S>]) -> GameSheet {
        let mut rendered = String::new();
        let mut assembled = Vec::with_capacity(frames.len());

        for (index, tokens) in frames.iter().enumerate() {
            if index > 0 {
                rendered.push_str(" | ");
            }
            let frame_start = rendered.len();
            let mut rolls = Vec::with_capacity(tokens.len());
            for (position, raw) in tokens.iter().enumerate() {
                if position > 0 {
                    rendered.push(' ');
                }
                let token = RollToken::classify(raw.as_ref());
                let spelling = raw.as_ref().trim();
                // An all-whitespace token still needs a visible anchor.
                let spelling = if spelling.is_empty() { "?" } else { spelling };
                let start = rendered.len();
                rendered.push_str(spelling);
                rolls.push(Roll {
                    token,
                    span: (start..rendered.len()).into(),
                });
            }
            if tokens.is_empty() {
                rendered.push('_');
            }
            assembled.push(Frame {
                rolls,
                span: (frame_start..rendered.len()).into(),
            });
        }

        GameSheet {
            frames: assembled,
            source: SourceContext::from_line("game", rendered),
        }
    }
}
