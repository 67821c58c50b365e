//! Shared helpers for the integration suites.

// Each test binary compiles its own copy and uses a subset of the helpers.
#![allow(dead_code)]

use kingpin::{RuleCategory, ScoreReport, FRAMES_PER_GAME};

/// One frame's tokens, owned.
pub fn frame(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

/// The same frame repeated, as at the start of many drill games.
pub fn repeat(tokens: &[&str], count: usize) -> Vec<Vec<String>> {
    (0..count).map(|_| frame(tokens)).collect()
}

/// Expected running totals for a complete game.
pub fn complete(values: [u32; FRAMES_PER_GAME]) -> Vec<Option<u32>> {
    values.iter().copied().map(Some).collect()
}

/// Expected running totals for a partial game: the resolved prefix followed
/// by indeterminate frames out to ten.
pub fn partial(values: &[u32]) -> Vec<Option<u32>> {
    values
        .iter()
        .copied()
        .map(Some)
        .chain(std::iter::repeat(None))
        .take(FRAMES_PER_GAME)
        .collect()
}

/// Scores the game and asserts its running totals.
pub fn verify_score(name: &str, game: &[Vec<String>], expected: &[Option<u32>]) -> ScoreReport {
    let report = kingpin::score_game(game)
        .unwrap_or_else(|error| panic!("scenario '{name}' rejected: {error}"));
    assert_eq!(report.running_totals(), expected, "scenario '{name}'");
    report
}

/// Asserts the game is rejected with the expected category, frame index,
/// and message fragment.
pub fn verify_rejection(
    name: &str,
    game: &[Vec<String>],
    category: RuleCategory,
    frame_index: usize,
    fragment: &str,
) {
    let error = kingpin::score_game(game)
        .err()
        .unwrap_or_else(|| panic!("scenario '{name}' was accepted"));
    assert_eq!(error.category(), category, "scenario '{name}'");
    assert_eq!(error.frame_index(), frame_index, "scenario '{name}'");
    let message = error.to_string();
    assert!(
        message.contains(fragment),
        "scenario '{name}': message '{message}' does not mention '{fragment}'"
    );
}
