//! Kingpin error handling - unified diagnostics for every pipeline stage.
//!
//! A single error type carries the violated rule, the offending frame, and
//! enough source context for miette to render a labeled report. Indeterminate
//! frames are never errors; only rule violations are.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// The game line an error points into: either the text the caller supplied
/// or the canonical rendering of structured input.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from a real game line.
    pub fn from_line(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a fallback when no game line is available.
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("// {context}"),
        }
    }

    /// Convert to a NamedSource for miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// RULE TAXONOMY
// ============================================================================

/// The violated rule, with rule-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleKind {
    #[error("game cannot have more than {max} frames, got {count}")]
    TooManyFrames { count: usize, max: usize },
    #[error("invalid pin count: {pins}")]
    PinCountOutOfRange { pins: i32 },
    #[error("rolls {first} and {second} total {sum} pins on a single rack", sum = .first + .second)]
    FrameExceedsTenPins { first: i32, second: i32 },
    #[error("rolls {first} and {second} clear the rack and must be marked with '/'")]
    UnmarkedSpare { first: i32, second: i32 },
    #[error("a strike must be the first roll of its frame")]
    StrikeNotFirst,
    #[error("frame is a strike but has {extra} extra roll(s)")]
    StrikeWithExtraRolls { extra: usize },
    #[error("frame has too many rolls ({rolls}), max is {max}")]
    TooManyRolls { rolls: usize, max: usize },
    #[error("frame has no rolls")]
    EmptyFrame,
    #[error("an extra roll is only allowed after a strike or spare")]
    UnearnedBonusRoll,
    #[error("a spare cannot be the first roll of a frame")]
    SpareAsFirstRoll,
    #[error("a spare cannot follow '{previous}'")]
    SpareAfterMark { previous: String },
    #[error("invalid symbol '{token}'; valid rolls are '0'-'10', 'X', 'x', and '/'")]
    UnrecognizedToken { token: String },
}

impl RuleKind {
    /// The category callers assert on when a game is rejected.
    pub fn category(&self) -> RuleCategory {
        match self {
            Self::TooManyFrames { .. } => RuleCategory::Count,
            Self::PinCountOutOfRange { .. } | Self::FrameExceedsTenPins { .. } => {
                RuleCategory::Physics
            }
            Self::StrikeNotFirst
            | Self::StrikeWithExtraRolls { .. }
            | Self::TooManyRolls { .. }
            | Self::EmptyFrame
            | Self::UnearnedBonusRoll => RuleCategory::Structural,
            Self::UnmarkedSpare { .. }
            | Self::SpareAsFirstRoll
            | Self::SpareAfterMark { .. }
            | Self::UnrecognizedToken { .. } => RuleCategory::Notation,
        }
    }

    /// Error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::TooManyFrames { .. } => "too_many_frames",
            Self::PinCountOutOfRange { .. } => "pin_count_out_of_range",
            Self::FrameExceedsTenPins { .. } => "frame_exceeds_ten_pins",
            Self::UnmarkedSpare { .. } => "unmarked_spare",
            Self::StrikeNotFirst => "strike_not_first",
            Self::StrikeWithExtraRolls { .. } => "strike_with_extra_rolls",
            Self::TooManyRolls { .. } => "too_many_rolls",
            Self::EmptyFrame => "empty_frame",
            Self::UnearnedBonusRoll => "unearned_bonus_roll",
            Self::SpareAsFirstRoll => "spare_as_first_roll",
            Self::SpareAfterMark { .. } => "spare_after_mark",
            Self::UnrecognizedToken { .. } => "unrecognized_token",
        }
    }

    fn help(&self) -> Option<String> {
        let text = match self {
            Self::TooManyFrames { .. } => "a game is ten frames",
            Self::PinCountOutOfRange { .. } => "a single roll can topple between 0 and 10 pins",
            Self::FrameExceedsTenPins { .. } => {
                "only ten pins stand on a rack; check the frame's rolls"
            }
            Self::UnmarkedSpare { .. } => "write the second roll as '/'",
            Self::UnearnedBonusRoll => {
                "the fill ball of the final frame must be earned with a strike or spare"
            }
            Self::SpareAsFirstRoll => {
                "'/' records the remainder of a rack, so it needs a first roll before it"
            }
            _ => return None,
        };
        Some(text.to_string())
    }

    fn label(&self) -> String {
        match self {
            Self::TooManyFrames { .. } => "first frame past the limit",
            Self::PinCountOutOfRange { .. } => "impossible pin count",
            Self::FrameExceedsTenPins { .. } => "exceeds the rack",
            Self::UnmarkedSpare { .. } => "write this as a spare",
            Self::StrikeNotFirst => "strike out of position",
            Self::StrikeWithExtraRolls { .. } => "extra rolls after a strike",
            Self::TooManyRolls { .. } => "too many rolls",
            Self::EmptyFrame => "empty frame",
            Self::UnearnedBonusRoll => "unearned fill ball",
            Self::SpareAsFirstRoll => "spare with no first roll",
            Self::SpareAfterMark { .. } => "spare on a cleared rack",
            Self::UnrecognizedToken { .. } => "not a roll",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Count,
    Physics,
    Structural,
    Notation,
}

impl RuleCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Count => "count",
            RuleCategory::Physics => "physics",
            RuleCategory::Structural => "structural",
            RuleCategory::Notation => "notation",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// THE ERROR TYPE
// ============================================================================

/// Context-specific source information.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// The single error type for rejected games.
#[derive(Debug)]
pub struct InvalidGameError {
    /// What rule was broken.
    pub kind: RuleKind,
    /// 1-based index of the offending frame.
    pub frame: usize,
    /// Where it happened in the game line.
    pub source_info: SourceInfo,
    /// How to help.
    pub diagnostic_info: DiagnosticInfo,
}

impl InvalidGameError {
    /// Builds a fully-contextualized error for the given rule.
    pub fn new(kind: RuleKind, frame: usize, source: &SourceContext, span: SourceSpan) -> Self {
        let error_code = format!(
            "kingpin::{}::{}",
            kind.category().as_str(),
            kind.code_suffix()
        );
        let help = kind.help();
        Self {
            source_info: SourceInfo {
                source: source.to_named_source(),
                primary_span: span,
            },
            diagnostic_info: DiagnosticInfo { help, error_code },
            kind,
            frame,
        }
    }

    /// The category of the violated rule.
    pub fn category(&self) -> RuleCategory {
        self.kind.category()
    }

    /// 1-based index of the offending frame.
    pub fn frame_index(&self) -> usize {
        self.frame
    }
}

impl std::error::Error for InvalidGameError {}

impl fmt::Display for InvalidGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            RuleCategory::Count => write!(f, "count violation: {}", self.kind),
            category => write!(f, "{} violation in frame {}: {}", category, self.frame, self.kind),
        }
    }
}

impl Diagnostic for InvalidGameError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.kind.label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

// ============================================================================
// ERROR REPORTING CONTEXTS
// ============================================================================

/// Context-aware error creation - each pipeline stage knows which game line
/// the rules it enforces point into.
pub trait ErrorReporting {
    /// The game line errors point into.
    fn source(&self) -> &SourceContext;

    /// Create an error for the given rule at the given frame and span.
    fn report(&self, kind: RuleKind, frame: usize, span: SourceSpan) -> InvalidGameError {
        InvalidGameError::new(kind, frame, self.source(), span)
    }
}

/// Placeholder span for errors not tied to a location in the game line.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

#[cfg(test)]
mod tests {
    use miette::Report;

    use super::*;

    #[test]
    fn errors_render_as_miette_reports() {
        let source = SourceContext::from_line("game", "8 / | 5 6");
        let error = InvalidGameError::new(
            RuleKind::FrameExceedsTenPins { first: 5, second: 6 },
            2,
            &source,
            (6..9).into(),
        );
        assert_eq!(error.category(), RuleCategory::Physics);
        assert_eq!(error.frame_index(), 2);
        assert_eq!(
            error.diagnostic_info.error_code,
            "kingpin::physics::frame_exceeds_ten_pins"
        );

        let report = Report::new(error);
        let output = format!("{report:?}");
        assert!(output.contains("11 pins"));
    }

    #[test]
    fn display_names_the_category_and_frame() {
        let source = SourceContext::fallback("display test");
        let error = InvalidGameError::new(
            RuleKind::SpareAsFirstRoll,
            1,
            &source,
            unspanned(),
        );
        assert_eq!(
            error.to_string(),
            "notation violation in frame 1: a spare cannot be the first roll of a frame"
        );

        let count = InvalidGameError::new(
            RuleKind::TooManyFrames { count: 11, max: 10 },
            11,
            &source,
            unspanned(),
        );
        assert_eq!(
            count.to_string(),
            "count violation: game cannot have more than 10 frames, got 11"
        );
    }
}
