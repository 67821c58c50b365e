//! The scoring pipeline: validate, flatten, score.
//!
//! Validation failures short-circuit before any parsing or scoring: an
//! invalid game is categorically different from an incomplete-but-legal
//! one, so rule violations are never downgraded to partial scores.

use crate::errors::{InvalidGameError, SourceContext};
use crate::frames::{Frame, GameSheet};
use crate::notation;
use crate::parse;
use crate::score::{self, ScoreReport};
use crate::validate;

/// Scores a game supplied as one token list per frame.
///
/// ```
/// let report = kingpin::score_game(&[vec!["8", "/"], vec!["5", "4"]]).unwrap();
/// assert_eq!(report.running_totals()[..2], [Some(15), Some(24)]);
/// ```
pub fn score_game<S: AsRef<str>>(frames: &[Vec<S>]) -> Result<ScoreReport, InvalidGameError> {
    let sheet = GameSheet::from_tokens(frames);
    score_frames(&sheet.frames, &sheet.source)
}

/// Scores a game written on a single line of notation.
///
/// ```
/// let report = kingpin::score_line("X X X X X X X X X XXX").unwrap();
/// assert_eq!(report.total, 300);
/// ```
pub fn score_line(line: &str) -> Result<ScoreReport, InvalidGameError> {
    let source = SourceContext::from_line("game", line);
    let frames = notation::parse_line(line, &source)?;
    score_frames(&frames, &source)
}

/// Validates a game line without scoring it.
pub fn validate_line(line: &str) -> Result<(), InvalidGameError> {
    let source = SourceContext::from_line("game", line);
    let frames = notation::parse_line(line, &source)?;
    validate::validate(&frames, &source)
}

/// The three-stage pipeline over already-assembled frames.
pub fn score_frames(
    frames: &[Frame],
    source: &SourceContext,
) -> Result<ScoreReport, InvalidGameError> {
    validate::validate(frames, source)?;
    let rolls = parse::flatten(frames);
    Ok(score::score(&rolls))
}
