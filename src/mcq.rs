//! Main module for the mcq engine
//!
//! Processing runs as a one-way pipeline:
//! 1. **Lexing**: line normalization and block segmentation
//! 2. **Classification**: picking the grammar a submission is written in
//! 3. **Extraction**: grammar-specific field extraction into a draft
//! 4. **Validation**: constraint checks producing a `NormalizedQuestion`
//!
//! The [`pipeline`] module owns the orchestration; everything below it is a
//! pure function over its inputs.

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
