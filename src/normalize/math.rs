//! Plain-text cleanup for generated math explanations and practice problems.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\frac\s*\{\s*([+-]?[0-9]+(?:\.[0-9]+)?)\s*\}\s*\{\s*([+-]?[0-9]+(?:\.[0-9]+)?)\s*\}",
    )
    .expect("fraction pattern")
});

static ENVIRONMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\begin\{[^}\n]*\}.*?\\end\{[^}\n]*\}").expect("environment pattern")
});

static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\(|\\\)|\\\[|\\\]|\\\$|\$\$").expect("delimiter pattern"));

static BACKSLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\+").expect("backslash pattern"));

static INLINE_DOLLARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\s*(.*?)\s*\$").expect("inline math pattern"));

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank line pattern"));

static BLANK_LINE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line split pattern"));

static SOLUTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Solution|Answer|Ans|Explanation)\b").expect("solution marker pattern")
});

fn render_fraction(caps: &Captures<'_>) -> String {
    let (num_text, den_text) = (&caps[1], &caps[2]);
    match (num_text.parse::<f64>(), den_text.parse::<f64>()) {
        (Ok(num), Ok(den)) if den != 0.0 && num.is_finite() && den.is_finite() => {
            format!("{}/{} ({})", num_text, den_text, format_decimal(num / den))
        }
        _ => format!("{}/{}", num_text, den_text),
    }
}

fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value);
    }
    let fixed = format!("{:.6}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Turns LaTeX-flavoured model output into readable plain text.
///
/// Numeric `\frac{a}{b}` becomes `a/b (decimal)`, `\begin{..}..\end{..}` environments are
/// dropped, and math delimiters and stray backslashes are removed.
///
/// ```
/// use recite::normalize::clean_math_output;
///
/// assert_eq!(clean_math_output(r"Step 1: \(\frac{15}{4}\)"), "Step 1: 15/4 (3.75)");
/// ```
pub fn clean_math_output(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let t = FRACTION.replace_all(text, render_fraction);
    let t = ENVIRONMENT.replace_all(&t, "");
    let t = DELIMITER.replace_all(&t, "");
    let t = BACKSLASHES.replace_all(&t, "");
    let t = INLINE_DOLLARS.replace_all(&t, "$1");
    BLANK_LINE_RUN.replace_all(&t, "\n\n").trim().to_string()
}

/// Strips worked solutions from generated practice problems.
///
/// The text is split into blank-line separated blocks. Each block is cut at its first
/// `Solution`, `Answer`, `Ans`, or `Explanation` word (any case) and trimmed; blocks
/// with nothing left before the marker are dropped. Survivors are rejoined with a
/// blank line.
///
/// ```
/// use recite::normalize::sanitize_similar_text;
///
/// let text = "1. Solve 2x = 6.\nSolution: x = 3\n\n2. Solve x + 1 = 4.";
/// assert_eq!(sanitize_similar_text(text), "1. Solve 2x = 6.\n\n2. Solve x + 1 = 4.");
/// ```
pub fn sanitize_similar_text(raw: &str) -> String {
    BLANK_LINE_SPLIT
        .split(raw)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| match SOLUTION_MARKER.find(block) {
            Some(marker) => block[..marker.start()].trim(),
            None => block,
        })
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_with_terminating_decimal() {
        assert_eq!(clean_math_output(r"\frac{15}{4}"), "15/4 (3.75)");
    }

    #[test]
    fn test_fraction_with_whole_result() {
        assert_eq!(clean_math_output(r"\frac{8}{2}"), "8/2 (4)");
    }

    #[test]
    fn test_fraction_rounded_to_six_places() {
        assert_eq!(clean_math_output(r"\frac{1}{3}"), "1/3 (0.333333)");
    }

    #[test]
    fn test_fraction_with_zero_denominator() {
        assert_eq!(clean_math_output(r"\frac{1}{0}"), "1/0");
    }

    #[test]
    fn test_removes_environments() {
        let text = "Before\n\\begin{align}x &= 1\\\\y &= 2\\end{align}\nAfter";
        assert_eq!(clean_math_output(text), "Before\n\nAfter");
    }

    #[test]
    fn test_removes_delimiters_and_backslashes() {
        assert_eq!(clean_math_output(r"\[ x + 1 \] and $$y$$"), "x + 1  and y");
    }

    #[test]
    fn test_unwraps_inline_dollars() {
        assert_eq!(clean_math_output("Area is $ 12 $ units"), "Area is 12 units");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(
            clean_math_output("Step 1\n\n\n\nFinal Answer: 3"),
            "Step 1\n\nFinal Answer: 3"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_math_output(""), "");
    }

    #[test]
    fn test_similar_text_cuts_worked_solution() {
        assert_eq!(
            sanitize_similar_text("Find x if 2x = 6.\nSolution: divide both sides by 2, x = 3"),
            "Find x if 2x = 6."
        );
    }

    #[test]
    fn test_similar_text_drops_answer_only_block() {
        let text = "Problem one: add 2 and 3.\n\nAnswer: 5\n\nProblem two: add 4 and 3.";
        assert_eq!(
            sanitize_similar_text(text),
            "Problem one: add 2 and 3.\n\nProblem two: add 4 and 3."
        );
    }

    #[test]
    fn test_similar_text_marker_is_case_insensitive() {
        assert_eq!(
            sanitize_similar_text("What is 7 x 8? ANS 56\n  \nHalve 18. explanation: 9"),
            "What is 7 x 8?\n\nHalve 18."
        );
    }

    #[test]
    fn test_similar_text_keeps_words_containing_markers() {
        let text = "How many answers can a transport puzzle have?";
        assert_eq!(sanitize_similar_text(text), text);
    }

    #[test]
    fn test_similar_text_empty_input() {
        assert_eq!(sanitize_similar_text(""), "");
        assert_eq!(sanitize_similar_text("\n\n  \n"), "");
    }
}
