//! Multi-line labeled grammar (the default)
//!
//! One field per line:
//!
//! ```text
//! Question: What is the capital of France?
//! a) Berlin
//! b) Paris
//! Correct Answer: b
//! Explanation: Paris has been the capital since 987.
//! ```
//!
//! Unrecognized lines are skipped, deliberate tolerance for stray text.
//! Line recognizers are kept as a data table of (pattern, handler) rules so
//! new line kinds can be added without touching the match loop.

use crate::mcq::ast::{AnswerRef, NormalizedQuestion, OptionLabel, QuestionDraft};
use crate::mcq::formats::{Grammar, GrammarInput};
use crate::mcq::lexing::question_header_rest;
use crate::mcq::parsing::ParseFailure;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `a) option text`: a single letter label, close paren, then the text.
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([a-j])\)\s*(.*)$").unwrap());

/// `Correct Answer: b`. Tolerates a trailing `)` and echoed option text
/// after the letter (`Correct Answer: b) Paris`), both discarded.
static ANSWER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^correct\s*answer\s*:\s*([a-j])\b\)?").unwrap());

/// `Explanation: free text`
static EXPLANATION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^explanation\s*:\s*(.*)$").unwrap());

type LineRule = (&'static Lazy<Regex>, fn(&Captures<'_>, &mut QuestionDraft));

/// Ordered line recognizers; the first matching rule consumes the line.
static LINE_RULES: &[LineRule] = &[
    (&ANSWER_LINE, handle_answer),
    (&OPTION_LINE, handle_option),
    (&EXPLANATION_LINE, handle_explanation),
];

fn handle_answer(caps: &Captures<'_>, draft: &mut QuestionDraft) {
    let letter = caps[1].chars().next().unwrap_or('?');
    draft.answer = Some(AnswerRef::Letter(letter));
}

fn handle_option(caps: &Captures<'_>, draft: &mut QuestionDraft) {
    let letter = caps[1].chars().next().unwrap_or('?');
    if let Some(label) = OptionLabel::from_letter(letter) {
        let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        draft.push_option(label, text);
    }
}

fn handle_explanation(caps: &Captures<'_>, draft: &mut QuestionDraft) {
    draft.set_explanation(&caps[1]);
}

pub struct MultiLineLabeled;

impl Grammar for MultiLineLabeled {
    fn name(&self) -> &'static str {
        "multiline-labeled"
    }

    fn extract(&self, input: GrammarInput<'_>) -> Result<QuestionDraft, ParseFailure> {
        let lines = input.lines();
        let mut draft = QuestionDraft::default();

        for line in lines.iter() {
            if let Some(rest) = question_header_rest(line) {
                draft.set_stem(rest);
                continue;
            }
            for (pattern, handler) in LINE_RULES {
                if let Some(caps) = pattern.captures(line) {
                    handler(&caps, &mut draft);
                    break;
                }
            }
        }

        Ok(draft)
    }

    fn render(&self, question: &NormalizedQuestion) -> String {
        let mut out = format!("Question: {}\n", question.stem);
        for (idx, option) in question.options.iter().enumerate() {
            // indices above 'j' cannot occur in a validated question
            let letter = OptionLabel::letter_for_index(idx).unwrap_or('?');
            out.push_str(&format!("{}) {}\n", letter, option));
        }
        let answer = OptionLabel::letter_for_index(question.correct_index).unwrap_or('?');
        out.push_str(&format!("Correct Answer: {}\n", answer));
        if let Some(explanation) = &question.explanation {
            out.push_str(&format!("Explanation: {}\n", explanation));
        }
        out
    }
}
