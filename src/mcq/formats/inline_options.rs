//! Inline comma-options grammar
//!
//! ```text
//! Question: Pick one
//! Options: first, second, third
//! Answer: second
//! ```
//!
//! The answer names an option by its exact text (case-sensitive after
//! trimming); no match is a failure, not a guess.

use crate::mcq::ast::{AnswerRef, NormalizedQuestion, OptionLabel, QuestionDraft};
use crate::mcq::formats::{Grammar, GrammarInput};
use crate::mcq::lexing::question_header_rest;
use crate::mcq::parsing::ParseFailure;
use once_cell::sync::Lazy;
use regex::Regex;

/// `Options: x, y, z`: the literal marker the classifier keys on.
static OPTIONS_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Options\s*:\s*(.*)$").unwrap());

/// `Answer: option text`
static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^answer\s*:\s*(.*)$").unwrap());

/// `Explanation: free text`
static EXPLANATION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^explanation\s*:\s*(.*)$").unwrap());

pub struct InlineCommaOptions;

impl Grammar for InlineCommaOptions {
    fn name(&self) -> &'static str {
        "inline-comma-options"
    }

    fn extract(&self, input: GrammarInput<'_>) -> Result<QuestionDraft, ParseFailure> {
        let lines = input.lines();
        let mut draft = QuestionDraft::default();

        for line in lines.iter() {
            if let Some(rest) = question_header_rest(line) {
                draft.set_stem(rest);
            } else if let Some(caps) = OPTIONS_LINE.captures(line) {
                for (idx, text) in caps[1].split(',').enumerate() {
                    let label = OptionLabel::letter_for_index(idx)
                        .map(OptionLabel::Letter)
                        .unwrap_or(OptionLabel::Ordinal(idx as u32 + 1));
                    draft.push_option(label, text);
                }
            } else if let Some(caps) = ANSWER_LINE.captures(line) {
                let value = caps[1].trim();
                if !value.is_empty() {
                    draft.answer = Some(AnswerRef::Literal(value.to_string()));
                }
            } else if let Some(caps) = EXPLANATION_LINE.captures(line) {
                draft.set_explanation(&caps[1]);
            }
        }

        Ok(draft)
    }

    fn render(&self, question: &NormalizedQuestion) -> String {
        let mut out = format!("Question: {}\n", question.stem);
        out.push_str(&format!("Options: {}\n", question.options.join(", ")));
        out.push_str(&format!("Answer: {}\n", question.correct_option()));
        if let Some(explanation) = &question.explanation {
            out.push_str(&format!("Explanation: {}\n", explanation));
        }
        out
    }
}
