//! Single-line labeled grammar
//!
//! The same fields as the multi-line grammar, run together on one line:
//!
//! ```text
//! Question: Pick one a) first b) second Correct Answer: b Explanation: why
//! ```
//!
//! There are no line boundaries to cut on, so extraction scans for the
//! known markers (`a)`..`j)`, `Correct Answer:`, `Explanation:`) and takes
//! each field's text as the span up to the next marker.

use crate::mcq::ast::{AnswerRef, NormalizedQuestion, OptionLabel, QuestionDraft};
use crate::mcq::formats::{Grammar, GrammarInput};
use crate::mcq::parsing::ParseFailure;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// All field markers, scanned left to right.
static MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\b(?P<opt>[a-j])\)|(?P<ans>correct\s*answer\s*:)|(?P<exp>explanation\s*:))",
    )
    .unwrap()
});

/// Question header anchored at the start of the submission.
static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:question|q)[ \t]*(?:no\.?|#)?[ \t]*\d*[ \t]*:").unwrap());

/// `Correct Answer: b) ...`: strip the paren so the answer letter is not
/// itself scanned as an option marker.
static ANSWER_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(correct\s*answer\s*:\s*[a-j])\)").unwrap());

/// First letter token of an answer segment.
static ANSWER_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*([a-j])\b").unwrap());

#[derive(Debug, Clone, Copy)]
enum Marker {
    Option(char),
    Answer,
    Explanation,
}

pub struct SingleLineLabeled;

impl Grammar for SingleLineLabeled {
    fn name(&self) -> &'static str {
        "singleline-labeled"
    }

    fn extract(&self, input: GrammarInput<'_>) -> Result<QuestionDraft, ParseFailure> {
        let text = input.text();
        let text: Cow<'_, str> = ANSWER_PAREN.replace_all(text.trim(), "${1}");
        let text = text.as_ref();
        let mut draft = QuestionDraft::default();

        // (start, end, kind) of every marker, in order of appearance
        let markers: Vec<(usize, usize, Marker)> = MARKERS
            .captures_iter(text)
            .map(|caps| {
                let whole = caps.get(0).expect("match always has group 0");
                let kind = if let Some(opt) = caps.name("opt") {
                    Marker::Option(opt.as_str().chars().next().unwrap_or('?'))
                } else if caps.name("ans").is_some() {
                    Marker::Answer
                } else {
                    Marker::Explanation
                };
                (whole.start(), whole.end(), kind)
            })
            .collect();

        if let Some(header) = HEADER.find(text) {
            let stem_end = markers
                .first()
                .map(|&(start, _, _)| start)
                .unwrap_or(text.len());
            if stem_end > header.end() {
                draft.set_stem(&text[header.end()..stem_end]);
            }
        }

        for (idx, &(_, end, kind)) in markers.iter().enumerate() {
            let segment_end = markers
                .get(idx + 1)
                .map(|&(next_start, _, _)| next_start)
                .unwrap_or(text.len());
            let segment = &text[end..segment_end];
            match kind {
                Marker::Option(letter) => {
                    if let Some(label) = OptionLabel::from_letter(letter) {
                        draft.push_option(label, segment);
                    }
                }
                Marker::Answer => {
                    if let Some(caps) = ANSWER_LETTER.captures(segment) {
                        let letter = caps[1].chars().next().unwrap_or('?');
                        draft.answer = Some(AnswerRef::Letter(letter));
                    }
                }
                Marker::Explanation => draft.set_explanation(segment),
            }
        }

        Ok(draft)
    }

    fn render(&self, question: &NormalizedQuestion) -> String {
        let mut out = format!("Question: {}", question.stem);
        for (idx, option) in question.options.iter().enumerate() {
            let letter = OptionLabel::letter_for_index(idx).unwrap_or('?');
            out.push_str(&format!(" {}) {}", letter, option));
        }
        let answer = OptionLabel::letter_for_index(question.correct_index).unwrap_or('?');
        out.push_str(&format!(" Correct Answer: {}", answer));
        if let Some(explanation) = &question.explanation {
            out.push_str(&format!(" Explanation: {}", explanation));
        }
        out
    }
}
