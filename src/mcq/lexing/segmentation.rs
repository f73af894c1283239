//! Block Segmenter
//!
//! Partitions normalized lines into one contiguous block per question
//! header. Only the multi-line labeled grammar allows several questions in
//! one submission; the other grammars treat the whole submission as a
//! single implicit block.

use once_cell::sync::Lazy;
use regex::Regex;

/// A question header at the start of a (already trimmed) line: `Question`
/// or bare `Q`, an optional `No.`/`#` and ordinal, then a colon. The rest
/// of the line is the stem.
static QUESTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:question|q)[ \t]*(?:no\.?|#)?[ \t]*\d*[ \t]*:[ \t]*(.*)$").unwrap()
});

/// A contiguous run of normalized lines believed to hold one question.
///
/// Blocks have no identity beyond their position in the submission; `index`
/// is 0-based submission order and is what failure entries report.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBlock {
    pub index: usize,
    pub lines: Vec<String>,
}

/// Whether a normalized line opens a new question.
pub fn is_question_header(line: &str) -> bool {
    QUESTION_HEADER.is_match(line.trim_start())
}

/// The stem text following a question header, if the line is one.
pub fn question_header_rest(line: &str) -> Option<&str> {
    QUESTION_HEADER
        .captures(line.trim_start())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split normalized lines into per-question blocks.
///
/// Every header after the first flushes the accumulated lines into a
/// completed block; the header line itself belongs to the new block. Input
/// with no header at all yields a single whole-text block, leaving validity
/// to the extractor.
pub fn segment_blocks(lines: &[String]) -> Vec<QuestionBlock> {
    let mut blocks: Vec<QuestionBlock> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut seen_header = false;

    for line in lines {
        if is_question_header(line) {
            // only the first header keeps the lines accumulated so far:
            // stray preamble belongs to the first question's block
            if seen_header {
                blocks.push(QuestionBlock {
                    index: blocks.len(),
                    lines: std::mem::take(&mut current),
                });
            }
            seen_header = true;
        }
        current.push(line.clone());
    }
    if !current.is_empty() {
        blocks.push(QuestionBlock {
            index: blocks.len(),
            lines: current,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn recognizes_header_variants() {
        assert!(is_question_header("Question: stem"));
        assert!(is_question_header("question 2: stem"));
        assert!(is_question_header("Q: stem"));
        assert!(is_question_header("Q3: stem"));
        assert!(is_question_header("Question No. 4: stem"));
        assert!(is_question_header("Question #5: stem"));
        assert!(!is_question_header("a) option"));
        assert!(!is_question_header("Quality: high"));
        assert!(!is_question_header("stem without header"));
    }

    #[test]
    fn header_rest_is_the_stem() {
        assert_eq!(question_header_rest("Question: What is it?"), Some("What is it?"));
        assert_eq!(question_header_rest("Q7:"), Some(""));
        assert_eq!(question_header_rest("b) Paris"), None);
    }

    #[test]
    fn single_block_without_header() {
        let blocks = segment_blocks(&lines(&["just text", "more text"]));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].index, 0);
        assert_eq!(blocks[0].lines.len(), 2);
    }

    #[test]
    fn two_headers_make_two_blocks() {
        let blocks = segment_blocks(&lines(&[
            "Question: one",
            "a) x",
            "b) y",
            "Question 2: two",
            "a) p",
            "b) q",
        ]));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines[0], "Question: one");
        assert_eq!(blocks[1].index, 1);
        assert_eq!(blocks[1].lines[0], "Question 2: two");
        assert_eq!(blocks[1].lines.len(), 3);
    }

    #[test]
    fn header_line_belongs_to_the_new_block() {
        let blocks = segment_blocks(&lines(&["Question: only header"]));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, lines(&["Question: only header"]));
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(segment_blocks(&[]).is_empty());
    }

    #[test]
    fn preamble_joins_the_first_block() {
        let blocks = segment_blocks(&lines(&[
            "forwarded from somewhere",
            "Question: one",
            "a) x",
            "Question 2: two",
        ]));
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0].lines,
            lines(&["forwarded from somewhere", "Question: one", "a) x"])
        );
        assert_eq!(blocks[1].lines, lines(&["Question 2: two"]));
    }
}
