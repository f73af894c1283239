//! Format Classifier
//!
//! Decides which grammar a submission uses from lightweight structural
//! signals, checked in a fixed priority order (important for correctness,
//! since signals overlap: an object-notation submission with embedded
//! quotes could spuriously match the delimiter signal):
//! 1. Object notation: trimmed text is `{` .. `}`
//! 2. Delimited: a `|` separator together with a `Q:`/`Question:` marker
//! 3. Numbered options: some line starts `<integer>.<space>`
//! 4. Inline comma options: an `Options:` line
//! 5. Default: labeled grammar, single-line when the submission has no
//!    line break but carries `a)`-style markers, multi-line otherwise
//!
//! Classification never fails; step 5 always applies.

use crate::mcq::formats::GrammarKind;
use once_cell::sync::Lazy;
use regex::Regex;

static QUESTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:question|q)[ \t]*\d*[ \t]*:").unwrap());

static NUMBERED_OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]").unwrap());

static OPTIONS_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*Options[ \t]*:").unwrap());

static LABELED_OPTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[a-j]\)").unwrap());

/// Classify a raw (non-normalized) submission.
pub fn classify(raw: &str) -> GrammarKind {
    let trimmed = raw.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return GrammarKind::Structured;
    }
    if trimmed.contains('|') && QUESTION_MARKER.is_match(trimmed) {
        return GrammarKind::Delimited;
    }
    if NUMBERED_OPTION_LINE.is_match(trimmed) {
        return GrammarKind::Numbered;
    }
    if OPTIONS_LINE.is_match(trimmed) {
        return GrammarKind::InlineCommaOptions;
    }
    if !trimmed.contains('\n') && LABELED_OPTION_MARKER.is_match(trimmed) {
        return GrammarKind::SingleLineLabeled;
    }
    GrammarKind::MultiLineLabeled
}
