//! Frame scoring over the flat roll stream.
//!
//! A cursor walks the stream once per frame, looking ahead for strike and
//! spare bonuses. The moment a frame's bonus rolls are missing, scoring
//! halts: that frame and every later one come back indeterminate, and the
//! cursor never indexes past the end of a partial stream.

use std::fmt;

use serde::Serialize;

use crate::frames::FRAMES_PER_GAME;

/// A frame's resolved contribution, or the marker that its bonus rolls have
/// not been thrown yet. A tagged value rather than a sentinel, so unresolved
/// frames cannot leak into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrameScore {
    Determinate(u32),
    Indeterminate,
}

impl FrameScore {
    /// The resolved score, if the frame has one.
    pub fn resolved(&self) -> Option<u32> {
        match self {
            FrameScore::Determinate(score) => Some(*score),
            FrameScore::Indeterminate => None,
        }
    }

    pub fn is_determinate(&self) -> bool {
        matches!(self, FrameScore::Determinate(_))
    }
}

impl fmt::Display for FrameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameScore::Determinate(score) => write!(f, "{score}"),
            FrameScore::Indeterminate => f.write_str("-"),
        }
    }
}

/// One line of the score report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameEntry {
    /// 1-based frame number.
    pub frame: usize,
    /// The frame's own contribution, bonuses included.
    pub score: FrameScore,
    /// Cumulative total through this frame.
    pub running_total: FrameScore,
}

/// The scored game: one entry per frame slot (always ten; the absent frames
/// of a partial game are indeterminate) and the cumulative total, which
/// stops accumulating at the first indeterminate frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub frames: Vec<FrameEntry>,
    pub total: u32,
}

impl ScoreReport {
    /// Cumulative totals in frame order, `None` where indeterminate.
    pub fn running_totals(&self) -> Vec<Option<u32>> {
        self.frames
            .iter()
            .map(|entry| entry.running_total.resolved())
            .collect()
    }

    /// True once all ten frames have resolved.
    pub fn is_complete(&self) -> bool {
        self.frames.iter().all(|entry| entry.score.is_determinate())
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.frames.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", entry.running_total)?;
        }
        write!(f, " | total {}", self.total)
    }
}

/// Scores the roll stream frame by frame.
pub fn score(rolls: &[u8]) -> ScoreReport {
    let mut frames = Vec::with_capacity(FRAMES_PER_GAME);
    let mut total: u32 = 0;
    let mut cursor = 0usize;
    let mut halted = false;

    for number in 1..=FRAMES_PER_GAME {
        let frame_score = if halted {
            None
        } else {
            let (resolved, stop) = score_frame_at(rolls, &mut cursor);
            halted = stop;
            resolved
        };
        match frame_score {
            Some(scored) => {
                total += scored;
                frames.push(FrameEntry {
                    frame: number,
                    score: FrameScore::Determinate(scored),
                    running_total: FrameScore::Determinate(total),
                });
            }
            None => frames.push(FrameEntry {
                frame: number,
                score: FrameScore::Indeterminate,
                running_total: FrameScore::Indeterminate,
            }),
        }
    }

    ScoreReport { frames, total }
}

/// Resolves one frame starting at the cursor. Returns the frame's score
/// (None when its rolls or bonuses are missing) and whether scoring must
/// halt. The final frame needs no special case: its bonus rolls sit inline
/// in the stream, so the same walk yields the sum of its own rolls.
fn score_frame_at(rolls: &[u8], cursor: &mut usize) -> (Option<u32>, bool) {
    let at = *cursor;
    if at >= rolls.len() {
        return (None, true);
    }
    if rolls[at] == 10 {
        // Strike: the frame owns its roll plus the next two.
        if at + 2 >= rolls.len() {
            return (None, true);
        }
        *cursor += 1;
        return (
            Some(10 + u32::from(rolls[at + 1]) + u32::from(rolls[at + 2])),
            false,
        );
    }
    if at + 1 >= rolls.len() {
        // Waiting on the second ball of the rack.
        return (None, true);
    }
    let first = u32::from(rolls[at]);
    let second = u32::from(rolls[at + 1]);
    if first + second == 10 {
        // Spare: needs one bonus ball.
        if at + 2 >= rolls.len() {
            return (None, true);
        }
        *cursor += 2;
        return (Some(10 + u32::from(rolls[at + 2])), false);
    }
    *cursor += 2;
    (Some(first + second), false)
}
