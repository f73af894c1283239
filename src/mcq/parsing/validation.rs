//! Validator
//!
//! Turns a draft into an immutable `NormalizedQuestion`, or rejects the
//! whole block. Checks run in a fixed order against the same draft, so the
//! reported reason is deterministic and specific:
//! 1. stem present and within length
//! 2. option count within bounds
//! 3. every option text non-empty and within length
//! 4. answer present and resolving to an in-range index
//! 5. explanation within length (and present, when required)

use crate::mcq::ast::{
    AnswerRef, NormalizedQuestion, OptionLabel, QuestionDraft, MAX_EXPLANATION_CHARS,
    MAX_OPTIONS, MAX_OPTION_CHARS, MAX_STEM_CHARS, MIN_OPTIONS,
};
use crate::mcq::parsing::common::{FieldKind, ParseFailure};

/// Validate a draft into a `NormalizedQuestion`.
///
/// `require_explanation` is the engine-level flag for sources that treat a
/// missing explanation as a hard failure.
pub fn validate(
    draft: QuestionDraft,
    require_explanation: bool,
) -> Result<NormalizedQuestion, ParseFailure> {
    let stem = match &draft.stem {
        Some(stem) if !stem.is_empty() => stem.clone(),
        _ => return Err(ParseFailure::MissingStem),
    };
    let stem_len = stem.chars().count();
    if stem_len > MAX_STEM_CHARS {
        return Err(ParseFailure::FieldTooLong {
            field: FieldKind::Stem,
            limit: MAX_STEM_CHARS,
            length: stem_len,
        });
    }

    let count = draft.options.len();
    if count < MIN_OPTIONS {
        return Err(ParseFailure::InsufficientOptions { found: count });
    }
    if count > MAX_OPTIONS {
        return Err(ParseFailure::TooManyOptions { found: count });
    }

    for (idx, option) in draft.options.iter().enumerate() {
        if option.text.is_empty() {
            return Err(ParseFailure::EmptyOption { index: idx });
        }
        let len = option.text.chars().count();
        if len > MAX_OPTION_CHARS {
            return Err(ParseFailure::FieldTooLong {
                field: FieldKind::Option(idx),
                limit: MAX_OPTION_CHARS,
                length: len,
            });
        }
    }

    let correct_index = resolve_answer(&draft)?;

    let explanation = draft.explanation.clone().filter(|e| !e.is_empty());
    if let Some(explanation) = &explanation {
        let len = explanation.chars().count();
        if len > MAX_EXPLANATION_CHARS {
            return Err(ParseFailure::FieldTooLong {
                field: FieldKind::Explanation,
                limit: MAX_EXPLANATION_CHARS,
                length: len,
            });
        }
    }
    if require_explanation && explanation.is_none() {
        return Err(ParseFailure::MissingExplanation);
    }

    Ok(NormalizedQuestion {
        stem,
        options: draft.options.into_iter().map(|o| o.text).collect(),
        correct_index,
        explanation,
    })
}

/// Resolve the draft's answer reference to a 0-based in-range index.
fn resolve_answer(draft: &QuestionDraft) -> Result<usize, ParseFailure> {
    let answer = draft.answer.as_ref().ok_or(ParseFailure::UnresolvedAnswer)?;
    let index = match answer {
        AnswerRef::Letter(letter) => {
            OptionLabel::letter_index(*letter).ok_or(ParseFailure::UnresolvedAnswer)?
        }
        AnswerRef::Ordinal(ordinal) => {
            if *ordinal == 0 {
                return Err(ParseFailure::UnresolvedAnswer);
            }
            (*ordinal - 1) as usize
        }
        AnswerRef::Literal(text) => draft
            .options
            .iter()
            .position(|option| option.text == text.trim())
            .ok_or(ParseFailure::UnresolvedAnswer)?,
    };
    if index >= draft.options.len() {
        return Err(ParseFailure::UnresolvedAnswer);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(options: &[&str], answer: AnswerRef) -> QuestionDraft {
        let mut draft = QuestionDraft {
            stem: Some("What?".to_string()),
            answer: Some(answer),
            ..Default::default()
        };
        for (idx, text) in options.iter().enumerate() {
            let label = OptionLabel::letter_for_index(idx)
                .map(OptionLabel::Letter)
                .unwrap_or(OptionLabel::Ordinal(idx as u32 + 1));
            draft.push_option(label, text);
        }
        draft
    }

    #[test]
    fn accepts_a_minimal_draft() {
        let question = validate(draft(&["x", "y"], AnswerRef::Letter('b')), false).unwrap();
        assert_eq!(question.correct_index, 1);
        assert_eq!(question.correct_option(), "y");
        assert_eq!(question.explanation, None);
    }

    #[test]
    fn rejects_missing_stem() {
        let mut d = draft(&["x", "y"], AnswerRef::Letter('a'));
        d.stem = None;
        assert_eq!(validate(d, false), Err(ParseFailure::MissingStem));
    }

    #[test]
    fn stem_boundary_is_exact() {
        let mut d = draft(&["x", "y"], AnswerRef::Letter('a'));
        d.stem = Some("s".repeat(300));
        assert!(validate(d.clone(), false).is_ok());
        d.stem = Some("s".repeat(301));
        assert_eq!(
            validate(d, false),
            Err(ParseFailure::FieldTooLong {
                field: FieldKind::Stem,
                limit: 300,
                length: 301,
            })
        );
    }

    #[test]
    fn option_count_bounds() {
        let d = draft(&["x"], AnswerRef::Letter('a'));
        assert_eq!(
            validate(d, false),
            Err(ParseFailure::InsufficientOptions { found: 1 })
        );

        let texts: Vec<String> = (0..11).map(|i| format!("opt {}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let d = draft(&refs, AnswerRef::Letter('a'));
        assert_eq!(
            validate(d, false),
            Err(ParseFailure::TooManyOptions { found: 11 })
        );
    }

    #[test]
    fn rejects_an_empty_option_by_position() {
        let d = draft(&["x", "", "z"], AnswerRef::Letter('a'));
        assert_eq!(validate(d, false), Err(ParseFailure::EmptyOption { index: 1 }));
    }

    #[test]
    fn answer_letter_out_of_range_is_unresolved() {
        let d = draft(&["x", "y"], AnswerRef::Letter('e'));
        assert_eq!(validate(d, false), Err(ParseFailure::UnresolvedAnswer));
        let d = draft(&["x", "y"], AnswerRef::Letter('z'));
        assert_eq!(validate(d, false), Err(ParseFailure::UnresolvedAnswer));
    }

    #[test]
    fn ordinal_answers_are_one_based() {
        let d = draft(&["x", "y", "z"], AnswerRef::Ordinal(3));
        assert_eq!(validate(d, false).unwrap().correct_index, 2);
        let d = draft(&["x", "y"], AnswerRef::Ordinal(0));
        assert_eq!(validate(d, false), Err(ParseFailure::UnresolvedAnswer));
    }

    #[test]
    fn literal_answers_match_exactly() {
        let d = draft(&["Paris", "Berlin"], AnswerRef::Literal("Berlin".into()));
        assert_eq!(validate(d, false).unwrap().correct_index, 1);
        // case-sensitive
        let d = draft(&["Paris", "Berlin"], AnswerRef::Literal("berlin".into()));
        assert_eq!(validate(d, false), Err(ParseFailure::UnresolvedAnswer));
    }

    #[test]
    fn explanation_length_is_checked() {
        let mut d = draft(&["x", "y"], AnswerRef::Letter('a'));
        d.explanation = Some("e".repeat(201));
        assert_eq!(
            validate(d, false),
            Err(ParseFailure::FieldTooLong {
                field: FieldKind::Explanation,
                limit: 200,
                length: 201,
            })
        );
    }

    #[test]
    fn explanation_requirement_is_opt_in() {
        let d = draft(&["x", "y"], AnswerRef::Letter('a'));
        assert!(validate(d.clone(), false).is_ok());
        assert_eq!(validate(d, true), Err(ParseFailure::MissingExplanation));
    }
}
