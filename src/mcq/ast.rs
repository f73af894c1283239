//! Data model for the mcq engine
//!
//! [`QuestionDraft`] is what extraction produces: fields as found in the
//! text, unchecked. [`NormalizedQuestion`] is what validation produces and
//! is never constructed with a violated constraint.

use serde::Serialize;

/// Maximum length of a question stem, in Unicode scalar values.
pub const MAX_STEM_CHARS: usize = 300;
/// Maximum length of one option text.
pub const MAX_OPTION_CHARS: usize = 100;
/// Maximum length of an explanation.
pub const MAX_EXPLANATION_CHARS: usize = 200;
/// Minimum number of options a question must declare.
pub const MIN_OPTIONS: usize = 2;
/// Maximum number of options a question may declare.
pub const MAX_OPTIONS: usize = 10;

/// Letters usable as option labels, in index order.
///
/// Label resolution goes through this table rather than character
/// arithmetic, so any letter outside the table is rejected instead of
/// producing an out-of-range index.
const OPTION_LETTERS: [char; MAX_OPTIONS] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// The label a source text used to declare an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLabel {
    /// A letter `a`..`j` (stored lowercased).
    Letter(char),
    /// A 1-based ordinal, as in numbered-option grammars.
    Ordinal(u32),
}

impl OptionLabel {
    /// Build a letter label, lowercasing and bounds-checking against `a`..`j`.
    pub fn from_letter(letter: char) -> Option<Self> {
        let lower = letter.to_ascii_lowercase();
        if OPTION_LETTERS.contains(&lower) {
            Some(OptionLabel::Letter(lower))
        } else {
            None
        }
    }

    /// Resolve a letter to its 0-based option index via the bounded table.
    pub fn letter_index(letter: char) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        OPTION_LETTERS.iter().position(|&c| c == lower)
    }

    /// The letter for a 0-based index, if the index is addressable.
    pub fn letter_for_index(index: usize) -> Option<char> {
        OPTION_LETTERS.get(index).copied()
    }
}

/// One extracted option: the label as declared plus its trimmed text.
///
/// Entries are kept in appearance order; whether the label or the position
/// decides the answer index depends on the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    pub label: OptionLabel,
    pub text: String,
}

impl OptionEntry {
    pub fn new(label: OptionLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// How a source text designated the correct option.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerRef {
    /// A letter label; resolved through the bounded letter table.
    Letter(char),
    /// A 1-based ordinal, as in `Answer: 3`.
    Ordinal(u32),
    /// The literal option text, matched by exact equality after trimming.
    Literal(String),
}

/// An extracted-but-unvalidated question record.
///
/// Extraction fills in whatever it recognizes and leaves the rest `None`;
/// only the validator decides whether the draft is usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionDraft {
    pub stem: Option<String>,
    pub options: Vec<OptionEntry>,
    pub answer: Option<AnswerRef>,
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Set the stem from a raw capture, trimming; empty text stays `None`.
    pub fn set_stem(&mut self, text: &str) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.stem = Some(trimmed.to_string());
        }
    }

    /// Set the explanation from a raw capture, trimming; empty stays `None`.
    pub fn set_explanation(&mut self, text: &str) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.explanation = Some(trimmed.to_string());
        }
    }

    /// Append an option, trimming its text.
    pub fn push_option(&mut self, label: OptionLabel, text: &str) {
        self.options.push(OptionEntry::new(label, text.trim()));
    }
}

/// A validated, immutable question ready to be rendered as a quiz.
///
/// Invariants (enforced by the validator, all lengths in Unicode chars):
/// - `stem` is non-empty and at most 300 chars
/// - `options` holds 2..=10 entries, each non-empty and at most 100 chars
/// - `correct_index < options.len()`
/// - `explanation`, when present, is at most 200 chars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedQuestion {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl NormalizedQuestion {
    /// The text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}
