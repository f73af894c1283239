//! Grammar strategies
//!
//! Each textual convention the engine recognizes is one [`Grammar`]
//! implementation, selected once per submission by the [`classifier`].
//! Strategies are completely independent of each other: adding a grammar
//! means adding a module here and a classifier signal, nothing else.

pub mod classifier;
pub mod delimited;
pub mod inline_options;
pub mod multiline;
pub mod numbered;
pub mod singleline;
pub mod structured;

pub use classifier::classify;

use crate::mcq::ast::{NormalizedQuestion, QuestionDraft};
use crate::mcq::lexing::normalize_lines;
use crate::mcq::parsing::ParseFailure;
use std::borrow::Cow;

/// The textual convention a submission is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    /// JSON-ish object notation: `{"question": ..., "options": {...}, ...}`
    Structured,
    /// `|`-separated `key: value` fields on one line.
    Delimited,
    /// `Question:` line plus `1.`/`2.`/... option lines.
    Numbered,
    /// `Question:` / `Options: x, y, z` / `Answer: y` lines.
    InlineCommaOptions,
    /// All fields on one line, separated by the `a)`-style markers.
    SingleLineLabeled,
    /// One field per line with `a)`-style option labels; the default, and
    /// the only grammar allowing several questions per submission.
    MultiLineLabeled,
}

/// Input handed to a grammar strategy.
///
/// Line-oriented grammars receive normalized lines (one block's worth for
/// the multi-line grammar); whole-text grammars receive the raw submission.
#[derive(Debug, Clone)]
pub enum GrammarInput<'a> {
    Lines(&'a [String]),
    Raw(&'a str),
}

impl<'a> GrammarInput<'a> {
    /// View the input as normalized lines.
    pub fn lines(&self) -> Cow<'a, [String]> {
        match self {
            GrammarInput::Lines(lines) => Cow::Borrowed(*lines),
            GrammarInput::Raw(raw) => Cow::Owned(normalize_lines(raw)),
        }
    }

    /// View the input as one flat text.
    pub fn text(&self) -> Cow<'a, str> {
        match self {
            GrammarInput::Raw(raw) => Cow::Borrowed(*raw),
            GrammarInput::Lines(lines) => Cow::Owned(lines.join("\n")),
        }
    }
}

/// A field-extraction strategy for one grammar.
pub trait Grammar: Send + Sync {
    /// The name of this grammar (e.g. "multiline-labeled").
    fn name(&self) -> &'static str;

    /// Extract a draft record from one block (or the whole submission).
    ///
    /// Extraction is tolerant: unrecognized content is skipped, and missing
    /// fields are left unset for the validator to reject. Only grammars
    /// with no block structure to fall back on (object notation) return
    /// submission-level errors here.
    fn extract(&self, input: GrammarInput<'_>) -> Result<QuestionDraft, ParseFailure>;

    /// Render a validated question back into this grammar's canonical text.
    ///
    /// Re-parsing the rendered text yields the identical question.
    fn render(&self, question: &NormalizedQuestion) -> String;
}

/// Look up the strategy for a classified grammar.
pub fn grammar_for(kind: GrammarKind) -> &'static dyn Grammar {
    match kind {
        GrammarKind::Structured => &structured::Structured,
        GrammarKind::Delimited => &delimited::Delimited,
        GrammarKind::Numbered => &numbered::Numbered,
        GrammarKind::InlineCommaOptions => &inline_options::InlineCommaOptions,
        GrammarKind::SingleLineLabeled => &singleline::SingleLineLabeled,
        GrammarKind::MultiLineLabeled => &multiline::MultiLineLabeled,
    }
}
