//! Canonical-form round-trip tests
//!
//! Rendering a validated question back into a grammar's canonical text and
//! re-parsing it must yield the identical question. Option and stem texts
//! are kept free of marker characters; the canonical forms make no attempt
//! to escape text that imitates their own markers.

use mcq::mcq::formats::{grammar_for, GrammarKind};
use mcq::{parse, NormalizedQuestion};
use proptest::prelude::*;
use rstest::rstest;

fn sample(option_count: usize, correct_index: usize, explanation: bool) -> NormalizedQuestion {
    NormalizedQuestion {
        stem: "Which of these is a prime number".to_string(),
        options: (0..option_count).map(|i| format!("value {}", i * 2 + 1)).collect(),
        correct_index,
        explanation: explanation.then(|| "only one of them divides cleanly".to_string()),
    }
}

fn roundtrip(kind: GrammarKind, question: &NormalizedQuestion) -> NormalizedQuestion {
    let rendered = grammar_for(kind).render(question);
    let outcome = parse(&rendered);
    assert!(
        outcome.failures.is_empty(),
        "{:?} render failed to re-parse: {:?}\n{}",
        kind,
        outcome.failures,
        rendered
    );
    assert_eq!(outcome.questions.len(), 1);
    outcome.questions.into_iter().next().unwrap()
}

#[rstest]
#[case(GrammarKind::MultiLineLabeled)]
#[case(GrammarKind::SingleLineLabeled)]
#[case(GrammarKind::Numbered)]
#[case(GrammarKind::InlineCommaOptions)]
#[case(GrammarKind::Structured)]
fn roundtrip_with_explanation(#[case] kind: GrammarKind) {
    let question = sample(4, 2, true);
    assert_eq!(roundtrip(kind, &question), question);
}

#[rstest]
#[case(GrammarKind::MultiLineLabeled)]
#[case(GrammarKind::SingleLineLabeled)]
#[case(GrammarKind::Numbered)]
#[case(GrammarKind::InlineCommaOptions)]
#[case(GrammarKind::Structured)]
fn roundtrip_without_explanation(#[case] kind: GrammarKind) {
    let question = sample(2, 0, false);
    assert_eq!(roundtrip(kind, &question), question);
}

#[test]
fn delimited_roundtrip_up_to_four_options() {
    // the delimited grammar only addresses option keys a..d
    for count in 2..=4 {
        let question = sample(count, count - 1, true);
        assert_eq!(roundtrip(GrammarKind::Delimited, &question), question);
    }
}

#[test]
fn ten_option_roundtrip() {
    let question = sample(10, 9, false);
    assert_eq!(roundtrip(GrammarKind::MultiLineLabeled, &question), question);
}

prop_compose! {
    /// Marker-free word: no colons, parens, commas, pipes, braces, digits.
    fn word()(text in "[a-z]{1,12}") -> String {
        text
    }
}

prop_compose! {
    fn question_strategy()
        (options in prop::collection::hash_set("[a-z]{3,20}", 2..=10),
         stem_words in prop::collection::vec(word(), 1..6),
         correct in any::<prop::sample::Index>(),
         explanation in proptest::option::of(word()))
        -> NormalizedQuestion
    {
        let options: Vec<String> = options.into_iter().collect();
        let correct_index = correct.index(options.len());
        NormalizedQuestion {
            stem: stem_words.join(" "),
            options,
            correct_index,
            explanation,
        }
    }
}

proptest! {
    #[test]
    fn multiline_roundtrip_holds(question in question_strategy()) {
        let reparsed = roundtrip(GrammarKind::MultiLineLabeled, &question);
        prop_assert_eq!(reparsed, question);
    }

    #[test]
    fn inline_comma_roundtrip_holds(question in question_strategy()) {
        let reparsed = roundtrip(GrammarKind::InlineCommaOptions, &question);
        prop_assert_eq!(reparsed, question);
    }

    #[test]
    fn structured_roundtrip_holds(question in question_strategy()) {
        let reparsed = roundtrip(GrammarKind::Structured, &question);
        prop_assert_eq!(reparsed, question);
    }
}
