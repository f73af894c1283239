//! Failure taxonomy
//!
//! Every way a block (or a whole submission) can fail to normalize, carried
//! as data back to the caller. Block-level reasons are recovered locally by
//! the aggregator; submission-level reasons (`MalformedStructuredInput`,
//! `InputTooLarge`) abort the whole parse since there are no block
//! boundaries to fall back on.

use serde::Serialize;
use std::fmt;

/// Which field of a draft violated a length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Stem,
    /// 0-based index of the offending option.
    Option(usize),
    Explanation,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Stem => write!(f, "question"),
            FieldKind::Option(idx) => write!(f, "option {}", idx + 1),
            FieldKind::Explanation => write!(f, "explanation"),
        }
    }
}

/// Why a block or submission could not be normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParseFailure {
    /// No recognizable question header or stem field was found.
    MissingStem,
    /// Fewer than the minimum number of options were recognized.
    InsufficientOptions { found: usize },
    /// More than the maximum number of options were recognized.
    TooManyOptions { found: usize },
    /// An option was declared but its text is empty.
    EmptyOption { index: usize },
    /// No correct-answer marker, or its letter/ordinal/text does not map to
    /// a captured option.
    UnresolvedAnswer,
    /// A field exceeds its maximum length (in Unicode chars).
    FieldTooLong {
        field: FieldKind,
        limit: usize,
        length: usize,
    },
    /// The engine was configured to require explanations and none was given.
    MissingExplanation,
    /// Object-notation text failed to parse as a mapping at all.
    /// Submission-level: aborts the whole parse.
    MalformedStructuredInput(String),
    /// The submission exceeds the configured size bound.
    /// Submission-level: aborts the whole parse.
    InputTooLarge { limit: usize, length: usize },
}

impl ParseFailure {
    /// Whether this reason aborts the whole submission rather than one block.
    pub fn is_submission_level(&self) -> bool {
        matches!(
            self,
            ParseFailure::MalformedStructuredInput(_) | ParseFailure::InputTooLarge { .. }
        )
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::MissingStem => write!(f, "no question text found"),
            ParseFailure::InsufficientOptions { found } => {
                write!(f, "only {} option(s) found, at least 2 required", found)
            }
            ParseFailure::TooManyOptions { found } => {
                write!(f, "{} options found, at most 10 allowed", found)
            }
            ParseFailure::EmptyOption { index } => {
                write!(f, "option {} has no text", index + 1)
            }
            ParseFailure::UnresolvedAnswer => {
                write!(f, "no correct answer found, or it names no listed option")
            }
            ParseFailure::FieldTooLong {
                field,
                limit,
                length,
            } => write!(
                f,
                "{} is {} characters long, at most {} allowed",
                field, length, limit
            ),
            ParseFailure::MissingExplanation => write!(f, "an explanation is required"),
            ParseFailure::MalformedStructuredInput(msg) => {
                write!(f, "structured input is not a valid mapping: {}", msg)
            }
            ParseFailure::InputTooLarge { limit, length } => write!(
                f,
                "submission is {} characters long, at most {} accepted",
                length, limit
            ),
        }
    }
}

impl std::error::Error for ParseFailure {}

/// A failure tied to the block it occurred in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockFailure {
    /// 0-based position of the block within the submission.
    pub block: usize,
    pub reason: ParseFailure,
}

impl fmt::Display for BlockFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question {}: {}", self.block + 1, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_field() {
        let failure = ParseFailure::FieldTooLong {
            field: FieldKind::Option(2),
            limit: 100,
            length: 140,
        };
        assert_eq!(
            failure.to_string(),
            "option 3 is 140 characters long, at most 100 allowed"
        );
    }

    #[test]
    fn submission_level_reasons() {
        assert!(ParseFailure::MalformedStructuredInput("bad".into()).is_submission_level());
        assert!(ParseFailure::InputTooLarge { limit: 1, length: 2 }.is_submission_level());
        assert!(!ParseFailure::UnresolvedAnswer.is_submission_level());
    }
}
