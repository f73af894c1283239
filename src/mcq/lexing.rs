//! Line-level passes over a raw submission
//!
//! Two stages run before any grammar-specific extraction:
//! 1. **Normalization**: repair glued-on question headers, then trim-split
//!    the text into non-empty logical lines.
//! 2. **Segmentation**: partition the lines into one block per question
//!    header (multi-line labeled grammar only).

pub mod normalization;
pub mod segmentation;

pub use normalization::normalize_lines;
pub use segmentation::{question_header_rest, segment_blocks, QuestionBlock};
