//! Game-line notation parser.
//!
//! Converts a whole game written on one line ("8/ 54 90 X X 5/ 53 63 9/
//! 9/X") into spanned frames. Purely syntactic: a six-roll frame parses
//! here and is rejected by the validator, which keeps the rule taxonomy in
//! one place.

use miette::SourceSpan;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

use crate::errors::{ErrorReporting, InvalidGameError, RuleKind, SourceContext};
use crate::frames::{Frame, Roll, RollToken};

#[derive(Parser)]
#[grammar = "notation/grammar.pest"]
struct NotationParser;

/// Notation stage context for error reporting.
struct NotationContext<'a> {
    source: &'a SourceContext,
}

impl ErrorReporting for NotationContext<'_> {
    fn source(&self) -> &SourceContext {
        self.source
    }
}

/// Parse a game line into frames with source spans.
pub fn parse_line(line: &str, source: &SourceContext) -> Result<Vec<Frame>, InvalidGameError> {
    let ctx = NotationContext { source };
    let mut pairs = NotationParser::parse(Rule::game, line)
        .map_err(|error| convert_parse_error(&error, line, &ctx))?;
    let game = pairs.next().unwrap(); // pest guarantees the game rule exists

    Ok(game
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(build_frame)
        .collect())
}

fn build_frame(pair: Pair<Rule>) -> Frame {
    let span = to_source_span(&pair);
    let rolls = pair
        .into_inner()
        .map(|roll| {
            let roll_span = to_source_span(&roll);
            let token = match roll.as_rule() {
                Rule::strike => RollToken::Strike,
                Rule::spare => RollToken::Spare,
                // The grammar guarantees a single ASCII digit here.
                Rule::pins => RollToken::Pins(roll.as_str().parse().unwrap_or(0)),
                _ => RollToken::Unrecognized(roll.as_str().to_string()),
            };
            Roll {
                token,
                span: roll_span,
            }
        })
        .collect();
    Frame { rolls, span }
}

fn to_source_span(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start()..span.end()).into()
}

/// Maps a pest error to a notation violation at the failing position.
fn convert_parse_error(
    error: &pest::error::Error<Rule>,
    line: &str,
    ctx: &NotationContext,
) -> InvalidGameError {
    let offset = match &error.location {
        pest::error::InputLocation::Pos(pos) => *pos,
        pest::error::InputLocation::Span((start, _)) => *start,
    };
    let offset = offset.min(line.len());
    let token = line[offset..]
        .chars()
        .next()
        .map(|c| c.to_string())
        .unwrap_or_default();
    let end = (offset + token.len()).min(line.len());
    ctx.report(
        RuleKind::UnrecognizedToken { token },
        frame_at_offset(line, offset),
        (offset..end).into(),
    )
}

/// 1-based frame number containing the byte offset: frames are the
/// whitespace-separated fields of the line, and an offset inside a field
/// belongs to that field.
fn frame_at_offset(line: &str, offset: usize) -> usize {
    let before = &line[..offset.min(line.len())];
    let complete = before.split_whitespace().count();
    if before.is_empty() || before.ends_with(char::is_whitespace) {
        complete + 1
    } else {
        complete.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_whitespace_separated_runs() {
        let source = SourceContext::from_line("game", "8/ 54 X");
        let frames = parse_line("8/ 54 X", &source).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].rolls[0].token, RollToken::Pins(8));
        assert_eq!(frames[0].rolls[1].token, RollToken::Spare);
        assert_eq!(frames[1].span, (3..5).into());
        assert_eq!(frames[2].rolls[0].token, RollToken::Strike);
    }

    #[test]
    fn a_bad_symbol_is_located_by_frame() {
        let source = SourceContext::from_line("game", "8/ 5A");
        let error = parse_line("8/ 5A", &source).unwrap_err();
        assert_eq!(error.frame_index(), 2);
        assert_eq!(error.source_info.primary_span, (4..5).into());
    }

    #[test]
    fn an_empty_line_is_an_empty_game() {
        let source = SourceContext::from_line("game", "");
        assert!(parse_line("", &source).unwrap().is_empty());
    }
}
