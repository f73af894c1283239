//! Validation and failure reporting
//!
//! Extraction produces drafts; this module decides whether a draft becomes
//! a [`NormalizedQuestion`](crate::mcq::ast::NormalizedQuestion) and, when
//! it does not, says precisely why.

pub mod common;
pub mod validation;

pub use common::{BlockFailure, FieldKind, ParseFailure};
pub use validation::validate;
