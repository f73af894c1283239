//! Structured (object notation) grammar
//!
//! ```text
//! {"question": "Pick one", "options": {"A": "x", "B": "y"}, "answer": "B", "explanation": "why"}
//! ```
//!
//! The one grammar with no block structure to fall back on: text that does
//! not parse as a mapping is a submission-level hard failure, never a
//! silently skipped block. Option keys are single letters and are iterated
//! in letter order (A, B, C, ...) to form the option sequence.

use crate::mcq::ast::{AnswerRef, NormalizedQuestion, OptionLabel, QuestionDraft};
use crate::mcq::formats::{Grammar, GrammarInput};
use crate::mcq::parsing::ParseFailure;
use serde_json::{Map, Value};

pub struct Structured;

impl Grammar for Structured {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn extract(&self, input: GrammarInput<'_>) -> Result<QuestionDraft, ParseFailure> {
        let text = input.text();
        let value: Value = serde_json::from_str(text.trim())
            .map_err(|err| ParseFailure::MalformedStructuredInput(err.to_string()))?;
        let object = value.as_object().ok_or_else(|| {
            ParseFailure::MalformedStructuredInput("top-level value is not a mapping".to_string())
        })?;

        let mut draft = QuestionDraft::default();
        if let Some(question) = object.get("question").and_then(Value::as_str) {
            draft.set_stem(question);
        }
        if let Some(options) = object.get("options") {
            extract_options(options, &mut draft)?;
        }
        if let Some(answer) = object.get("answer").and_then(Value::as_str) {
            if let Some(letter) = answer.trim().chars().next() {
                draft.answer = Some(AnswerRef::Letter(letter));
            }
        }
        if let Some(explanation) = object.get("explanation").and_then(Value::as_str) {
            draft.set_explanation(explanation);
        }

        Ok(draft)
    }

    fn render(&self, question: &NormalizedQuestion) -> String {
        let mut object = Map::new();
        object.insert("question".to_string(), Value::String(question.stem.clone()));

        let mut options = Map::new();
        for (idx, option) in question.options.iter().enumerate() {
            let letter = OptionLabel::letter_for_index(idx).unwrap_or('?');
            options.insert(
                letter.to_ascii_uppercase().to_string(),
                Value::String(option.clone()),
            );
        }
        object.insert("options".to_string(), Value::Object(options));

        let answer = OptionLabel::letter_for_index(question.correct_index).unwrap_or('?');
        object.insert(
            "answer".to_string(),
            Value::String(answer.to_ascii_uppercase().to_string()),
        );
        if let Some(explanation) = &question.explanation {
            object.insert(
                "explanation".to_string(),
                Value::String(explanation.clone()),
            );
        }

        Value::Object(object).to_string()
    }
}

/// Pull the `options` mapping into the draft, in letter order.
fn extract_options(options: &Value, draft: &mut QuestionDraft) -> Result<(), ParseFailure> {
    let mapping = options.as_object().ok_or_else(|| {
        ParseFailure::MalformedStructuredInput("options is not a mapping".to_string())
    })?;

    let mut entries: Vec<(char, &str)> = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let mut chars = key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                return Err(ParseFailure::MalformedStructuredInput(format!(
                    "option key '{}' is not a single letter",
                    key
                )))
            }
        };
        let lower = letter.to_ascii_lowercase();
        if OptionLabel::letter_index(lower).is_none() {
            return Err(ParseFailure::MalformedStructuredInput(format!(
                "option key '{}' is outside a..j",
                key
            )));
        }
        let text = value.as_str().ok_or_else(|| {
            ParseFailure::MalformedStructuredInput(format!("option '{}' is not a string", key))
        })?;
        entries.push((lower, text));
    }

    entries.sort_by_key(|&(letter, _)| letter);
    for (letter, text) in entries {
        draft.push_option(OptionLabel::Letter(letter), text);
    }
    Ok(())
}
