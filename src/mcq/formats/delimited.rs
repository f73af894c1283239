//! Delimited single-line grammar
//!
//! `|`-separated `key: value` fields:
//!
//! ```text
//! Q: Pick one | a: first | b: second | answer: b | explanation: why
//! ```
//!
//! Accepted keys are `q`/`question`, the option keys `a`..`d`, `answer`,
//! and `explanation`. Options present are appended in `a,b,c,d` key order,
//! whatever order the segments arrive in; absent keys are skipped. The
//! answer value is a letter, optionally followed by `)`.

use crate::mcq::ast::{AnswerRef, NormalizedQuestion, OptionLabel, QuestionDraft};
use crate::mcq::formats::{Grammar, GrammarInput};
use crate::mcq::parsing::ParseFailure;
use once_cell::sync::Lazy;
use regex::Regex;

/// Option keys, in append order.
const OPTION_KEYS: [&str; 4] = ["a", "b", "c", "d"];

/// Answer value: a letter with an optional trailing `)`.
static ANSWER_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([a-j])\)?$").unwrap());

pub struct Delimited;

impl Grammar for Delimited {
    fn name(&self) -> &'static str {
        "delimited"
    }

    fn extract(&self, input: GrammarInput<'_>) -> Result<QuestionDraft, ParseFailure> {
        let text = input.text();
        let mut draft = QuestionDraft::default();
        let mut option_values: [Option<String>; 4] = [None, None, None, None];

        for segment in text.split('|') {
            let Some((key, value)) = segment.split_once(':') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim();
            match key.as_str() {
                "q" | "question" => draft.set_stem(value),
                "answer" => {
                    if let Some(caps) = ANSWER_VALUE.captures(value) {
                        let letter = caps[1].chars().next().unwrap_or('?');
                        draft.answer = Some(AnswerRef::Letter(letter));
                    }
                }
                "explanation" => draft.set_explanation(value),
                _ => {
                    if let Some(slot) = OPTION_KEYS.iter().position(|&k| k == key) {
                        option_values[slot] = Some(value.to_string());
                    }
                    // unknown keys are skipped
                }
            }
        }

        for (slot, value) in option_values.into_iter().enumerate() {
            if let Some(value) = value {
                let letter = OPTION_KEYS[slot].chars().next().unwrap_or('?');
                if let Some(label) = OptionLabel::from_letter(letter) {
                    draft.push_option(label, &value);
                }
            }
        }

        Ok(draft)
    }

    fn render(&self, question: &NormalizedQuestion) -> String {
        // canonical form only addresses options a..d
        let mut fields = vec![format!("Q: {}", question.stem)];
        for (idx, option) in question.options.iter().enumerate().take(OPTION_KEYS.len()) {
            fields.push(format!("{}: {}", OPTION_KEYS[idx], option));
        }
        let answer = OptionLabel::letter_for_index(question.correct_index).unwrap_or('?');
        fields.push(format!("answer: {}", answer));
        if let Some(explanation) = &question.explanation {
            fields.push(format!("explanation: {}", explanation));
        }
        fields.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> QuestionDraft {
        Delimited.extract(GrammarInput::Raw(text)).unwrap()
    }

    #[test]
    fn extracts_all_fields() {
        let draft = extract("Q: Pick one | a: first | b: second | answer: b | explanation: why");
        assert_eq!(draft.stem.as_deref(), Some("Pick one"));
        assert_eq!(draft.options.len(), 2);
        assert_eq!(draft.options[1].text, "second");
        assert_eq!(draft.answer, Some(AnswerRef::Letter('b')));
        assert_eq!(draft.explanation.as_deref(), Some("why"));
    }

    #[test]
    fn options_are_ordered_by_key_not_position() {
        let draft = extract("question: s | c: third | a: first | b: second | answer: a");
        let texts: Vec<&str> = draft.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn absent_option_keys_are_skipped() {
        let draft = extract("q: s | a: first | d: fourth | answer: a");
        assert_eq!(draft.options.len(), 2);
        assert_eq!(draft.options[1].label, OptionLabel::Letter('d'));
    }

    #[test]
    fn answer_tolerates_trailing_paren() {
        let draft = extract("q: s | a: x | b: y | answer: B)");
        assert_eq!(draft.answer, Some(AnswerRef::Letter('B')));
    }

    #[test]
    fn malformed_segments_are_skipped() {
        let draft = extract("q: s | no colon here | a: x | b: y | answer: a");
        assert_eq!(draft.options.len(), 2);
        assert_eq!(draft.stem.as_deref(), Some("s"));
    }

    #[test]
    fn non_letter_answer_is_left_unset() {
        let draft = extract("q: s | a: x | b: y | answer: first one");
        assert_eq!(draft.answer, None);
    }
}
