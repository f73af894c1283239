//! Pipeline orchestration
//!
//! Runs a submission end-to-end: size guard, classification, normalization
//! and segmentation where the grammar allows several questions, then
//! extraction and validation per block, aggregating successes and failures
//! independently. One bad question never hides its neighbors.

use crate::mcq::ast::NormalizedQuestion;
use crate::mcq::formats::{classify, grammar_for, GrammarInput, GrammarKind};
use crate::mcq::lexing::{normalize_lines, segment_blocks};
use crate::mcq::parsing::{validate, BlockFailure, ParseFailure};
use serde::Serialize;

/// Engine-level knobs.
///
/// The defaults mirror the most permissive source behavior: explanations
/// are optional and no size bound is enforced.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Reject questions that carry no explanation.
    pub require_explanation: bool,
    /// Reject submissions longer than this many Unicode chars, before any
    /// pattern matching runs.
    pub max_input_chars: Option<usize>,
}

/// Everything a parse produced: questions in submission order, plus one
/// failure entry per block that could not be normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub questions: Vec<NormalizedQuestion>,
    pub failures: Vec<BlockFailure>,
}

impl ParseOutcome {
    /// No valid question at all, as distinct from partial success, so callers
    /// can show generic format instructions only in this case.
    pub fn recognized_none(&self) -> bool {
        self.questions.is_empty()
    }

    fn submission_failure(reason: ParseFailure) -> Self {
        ParseOutcome {
            questions: Vec::new(),
            failures: vec![BlockFailure { block: 0, reason }],
        }
    }
}

/// The parsing engine. Stateless and cheap to share; one instance can
/// serve concurrent submissions.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Parse one raw submission into questions and per-block failures.
    pub fn parse(&self, raw: &str) -> ParseOutcome {
        if let Some(limit) = self.config.max_input_chars {
            let length = raw.chars().count();
            if length > limit {
                return ParseOutcome::submission_failure(ParseFailure::InputTooLarge {
                    limit,
                    length,
                });
            }
        }

        let kind = classify(raw);
        let grammar = grammar_for(kind);

        let mut outcome = ParseOutcome::default();
        match kind {
            GrammarKind::MultiLineLabeled => {
                let lines = normalize_lines(raw);
                for block in segment_blocks(&lines) {
                    let result = grammar
                        .extract(GrammarInput::Lines(&block.lines))
                        .and_then(|draft| validate(draft, self.config.require_explanation));
                    match result {
                        Ok(question) => outcome.questions.push(question),
                        Err(reason) => outcome.failures.push(BlockFailure {
                            block: block.index,
                            reason,
                        }),
                    }
                }
            }
            GrammarKind::Numbered | GrammarKind::InlineCommaOptions => {
                let lines = normalize_lines(raw);
                self.run_single_block(grammar.extract(GrammarInput::Lines(&lines)), &mut outcome);
            }
            GrammarKind::Structured | GrammarKind::Delimited | GrammarKind::SingleLineLabeled => {
                self.run_single_block(grammar.extract(GrammarInput::Raw(raw)), &mut outcome);
            }
        }
        outcome
    }

    /// Validate the single implicit block of a non-multi-question grammar.
    fn run_single_block(
        &self,
        extracted: Result<crate::mcq::ast::QuestionDraft, ParseFailure>,
        outcome: &mut ParseOutcome,
    ) {
        let result =
            extracted.and_then(|draft| validate(draft, self.config.require_explanation));
        match result {
            Ok(question) => outcome.questions.push(question),
            Err(reason) => outcome.failures.push(BlockFailure { block: 0, reason }),
        }
    }
}

/// Parse with the default configuration.
pub fn parse(raw: &str) -> ParseOutcome {
    Engine::new().parse(raw)
}
