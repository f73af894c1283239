//! Line Normalizer
//!
//! Turns a raw submission into trimmed, non-empty logical lines. A pre-pass
//! splices a line break in front of any question header glued onto the end
//! of preceding text (several sources run headers together with the prior
//! sentence, e.g. `...edema.Question: ...`); without the repair the
//! segmenter undercounts blocks.

use once_cell::sync::Lazy;
use regex::Regex;

/// A question header stuck to preceding non-whitespace on the same line.
///
/// The gap between the preceding character and the header is restricted to
/// spaces and tabs so a header that already starts its own line (possibly
/// indented) is never touched, keeping the splice idempotent.
static GLUED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([^\s])[ \t]*\b(q(?:uestion)?[ \t]*(?:no\.?|#)?[ \t]*\d*[ \t]*:)")
        .unwrap()
});

/// Insert a line break before every glued-on question header.
fn splice_headers(raw: &str) -> String {
    GLUED_HEADER.replace_all(raw, "${1}\n${2}").into_owned()
}

/// Normalize a raw submission into trimmed, non-empty lines.
pub fn normalize_lines(raw: &str) -> Vec<String> {
    splice_headers(raw)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
