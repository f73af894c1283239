//! Numbered-options grammar
//!
//! ```text
//! Question: Pick one
//! 1. first
//! 2. second
//! Answer: 2
//! ```
//!
//! Options are collected in order of appearance, not by their literal
//! numeral, to tolerate mis-numbered lists; `Answer:` is a 1-based ordinal
//! into that order.

use crate::mcq::ast::{AnswerRef, NormalizedQuestion, OptionLabel, QuestionDraft};
use crate::mcq::formats::{Grammar, GrammarInput};
use crate::mcq::lexing::question_header_rest;
use crate::mcq::parsing::ParseFailure;
use once_cell::sync::Lazy;
use regex::Regex;

/// `3. option text`
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").unwrap());

/// `Answer: 2`
static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^answer\s*:\s*(\d+)").unwrap());

/// `Explanation: free text`
static EXPLANATION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^explanation\s*:\s*(.*)$").unwrap());

pub struct Numbered;

impl Grammar for Numbered {
    fn name(&self) -> &'static str {
        "numbered"
    }

    fn extract(&self, input: GrammarInput<'_>) -> Result<QuestionDraft, ParseFailure> {
        let lines = input.lines();
        let mut draft = QuestionDraft::default();

        for line in lines.iter() {
            if let Some(rest) = question_header_rest(line) {
                draft.set_stem(rest);
            } else if let Some(caps) = ANSWER_LINE.captures(line) {
                if let Ok(ordinal) = caps[1].parse::<u32>() {
                    draft.answer = Some(AnswerRef::Ordinal(ordinal));
                }
            } else if let Some(caps) = EXPLANATION_LINE.captures(line) {
                draft.set_explanation(&caps[1]);
            } else if let Some(caps) = OPTION_LINE.captures(line) {
                let declared = caps[1].parse::<u32>().unwrap_or(0);
                draft.push_option(OptionLabel::Ordinal(declared), &caps[2]);
            }
            // anything else is stray text, skipped
        }

        Ok(draft)
    }

    fn render(&self, question: &NormalizedQuestion) -> String {
        let mut out = format!("Question: {}\n", question.stem);
        for (idx, option) in question.options.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, option));
        }
        out.push_str(&format!("Answer: {}\n", question.correct_index + 1));
        if let Some(explanation) = &question.explanation {
            out.push_str(&format!("Explanation: {}\n", explanation));
        }
        out
    }
}
