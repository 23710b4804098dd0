//! Regular expressions shared by the extraction strategies.
//!
//! Answer markers are `Answer`, `Ans`, or `A` followed by a word boundary, so prose that
//! merely starts with the letter "a" is not mistaken for a marker.

use std::sync::LazyLock;

use regex::Regex;

/// Question span followed by an answer marker. The answer text starts at the match end.
pub(crate) static BLOCK_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)(?:^[ \t]*(?:[0-9]+\s*[).:\-–]\s*|Q(?:uestion)?\b\s*[:.\-]?\s*))?(?P<question>[^\n]{5,}?[?:])\s*(?:Answer|Ans|A)\b[ \t]*[:.\-]?[ \t]*",
    )
    .expect("block question pattern")
});

/// Start of the next ordinal, `Q:`, `Ans:`, or `A:` line, or of a line opening another
/// question-plus-marker span; the block answer stops before it.
pub(crate) static BLOCK_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\n\s*(?:[0-9]+\s*[).:\-–](?:\s|$)|Q(?:uestion)?\b\s*[:.\-]|(?:Answer|Ans|A)\b\s*[:.\-]|[^\n]{5,}?[?:]\s*(?:Answer|Ans|A)\b)",
    )
    .expect("block terminator pattern")
});

/// `<question ending in ? or :><marker><answer>` on a single line.
pub(crate) static SAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<question>.+?[?:])\s*(?:Answer|Ans|A)\b\s*[:.\-]?\s*(?P<answer>.+)$")
        .expect("same line pattern")
});

/// A line ending in `?` or `:`, optionally ordinal- or Q-prefixed.
pub(crate) static QUESTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9]+\s*[).:\-–]\s*)?(?:Q(?:uestion)?\b\s*[:.\-]?\s*)?(?P<question>.+?[?:])$",
    )
    .expect("question header pattern")
});

/// A line opening with an answer marker.
pub(crate) static ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Answer|Ans|A)\b\s*[:.\-]?\s*(?P<answer>.+)$").expect("answer line pattern")
});

/// A line that starts a new ordinal item, question, or answer.
pub(crate) static LINE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9]+\s*[).:\-–](?:\s|$)|Q(?:uestion)?\b\s*[:.\-]?|(?:Answer|Ans|A)\b\s*[:.\-])",
    )
    .expect("line boundary pattern")
});

/// `Ans`/`Answer` line used by emergency pairing; the marker punctuation is consumed.
pub(crate) static RESCUE_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Ans(?:wer)?\s*[:.\-]?\s*(?P<answer>.*)$").expect("rescue answer pattern")
});

pub(crate) fn ends_like_question(line: &str) -> bool {
    line.ends_with('?') || line.ends_with(':')
}

pub(crate) fn is_line_boundary(line: &str) -> bool {
    LINE_BOUNDARY.is_match(line) || ends_like_question(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_line_markers() {
        for line in ["Ans: 4", "Answer: 4", "A: 4", "A. 4", "ans - 4", "ANSWER 4"] {
            let caps = ANSWER_LINE.captures(line).expect(line);
            assert_eq!(&caps["answer"], "4", "line: {}", line);
        }
    }

    #[test]
    fn test_answer_line_ignores_prose() {
        assert!(!ANSWER_LINE.is_match("Apples are red"));
        assert!(!ANSWER_LINE.is_match("Another idea"));
    }

    #[test]
    fn test_question_header_strips_prefixes() {
        let caps = QUESTION_HEADER.captures("Q: What is 2+2?").unwrap();
        assert_eq!(&caps["question"], "What is 2+2?");

        let caps = QUESTION_HEADER.captures("3) Name the planet:").unwrap();
        assert_eq!(&caps["question"], "Name the planet:");
    }

    #[test]
    fn test_question_header_requires_terminal_mark() {
        assert!(!QUESTION_HEADER.is_match("Just a statement."));
    }

    #[test]
    fn test_same_line() {
        let caps = SAME_LINE.captures("What is 2+2? Ans: 4").unwrap();
        assert_eq!(&caps["question"], "What is 2+2?");
        assert_eq!(&caps["answer"], "4");
    }

    #[test]
    fn test_line_boundary() {
        assert!(is_line_boundary("Q: next"));
        assert!(is_line_boundary("Answer: more"));
        assert!(is_line_boundary("2) second"));
        assert!(is_line_boundary("Is this a question?"));
        assert!(!is_line_boundary("3.14 is pi"));
        assert!(!is_line_boundary("A cat sat"));
        assert!(!is_line_boundary("plain continuation"));
    }

    #[test]
    fn test_block_terminator() {
        let text = "first\nsecond\nQ: next";
        let m = BLOCK_TERMINATOR.find(text).unwrap();
        assert_eq!(m.start(), "first\nsecond".len());
        assert!(BLOCK_TERMINATOR.find("first\nA cat\n3.14").is_none());

        let m = BLOCK_TERMINATOR
            .find("4\nWhat is the capital?\nAnswer: Paris")
            .unwrap();
        assert_eq!(m.start(), 1);
    }

    #[test]
    fn test_rescue_answer_consumes_marker() {
        let caps = RESCUE_ANSWER.captures("Ans: 4").unwrap();
        assert_eq!(&caps["answer"], "4");

        let caps = RESCUE_ANSWER.captures("answer - Paris").unwrap();
        assert_eq!(&caps["answer"], "Paris");
    }
}
