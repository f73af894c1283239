//! # mcq
//!
//! A tolerant parser for free-form multiple-choice questions.
//!
//! Users author MCQs in half a dozen loosely-specified textual conventions
//! (multi-line labeled options, single-line run-ons, `|`-delimited fields,
//! numbered options, JSON-ish object notation, inline comma-separated
//! options). This crate recognizes which convention a submission uses,
//! splits multi-question submissions into blocks, extracts the stem, the
//! options, the correct option, and an optional explanation, and validates
//! the result into an immutable [`NormalizedQuestion`].
//!
//! The engine is pure: one string in, questions and failures out. No I/O,
//! no shared state, no panics on malformed input.
//!
//! ```text
//! Question: What is the capital of France?
//! a) Berlin
//! b) Paris
//! c) Madrid
//! Correct Answer: b
//! Explanation: Paris has been the capital since 987.
//! ```

pub mod mcq;

pub use crate::mcq::ast::{NormalizedQuestion, OptionLabel};
pub use crate::mcq::parsing::{BlockFailure, FieldKind, ParseFailure};
pub use crate::mcq::pipeline::{parse, Engine, EngineConfig, ParseOutcome};
