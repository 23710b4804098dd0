//! Text normalization for pasted and OCR-extracted input.
//!
//! [`clean_line`] and [`clean_block`] are projections: applying them twice yields the
//! same string as applying them once. Entity decoding and tag stripping are repeated
//! until the text stops changing, so `&amp;lt;b&amp;gt;` ends up fully removed rather
//! than surviving as a literal `<b>` after one round.

mod math;

#[cfg(test)]
mod tests;

pub use math::{clean_math_output, sanitize_similar_text};

use std::sync::LazyLock;

use regex::Regex;

static ENTITIES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)&nbsp;", " "),
        (r"(?i)&amp;", "&"),
        (r"(?i)&lt;", "<"),
        (r"(?i)&gt;", ">"),
        (r"(?i)&quot;", "\""),
        (r"&#39;", "'"),
    ]
    .into_iter()
    .map(|(pattern, literal)| (Regex::new(pattern).expect("entity pattern"), literal))
    .collect()
});

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>\n]+>").expect("tag pattern"));

static LEADING_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[>›]+\s*)+").expect("quote pattern"));

static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*\-•–—]\s+").expect("bullet pattern"));

static LEADING_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\s*[).:\-–]\s+").expect("ordinal pattern"));

static SPACE_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("space pattern"));

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("space run pattern"));

static TRAILING_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[>:\-–—\s]+$").expect("trailing pattern"));

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank line pattern"));

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern"));

/// Replaces `&nbsp; &amp; &lt; &gt; &quot; &#39;` with their literal characters.
///
/// Entity names are matched case-insensitively. Replacements run in the order listed,
/// so `&amp;lt;` becomes `<`.
pub fn decode_entities(s: &str) -> String {
    ENTITIES
        .iter()
        .fold(s.to_string(), |acc, (pattern, literal)| {
            pattern.replace_all(&acc, *literal).into_owned()
        })
}

/// Removes `<...>` tag-like spans that do not cross a line break.
pub fn strip_html(s: &str) -> String {
    HTML_TAG.replace_all(s, "").into_owned()
}

/// Strips tags and decodes entities until neither changes the text.
fn strip_markup(s: &str) -> String {
    let mut current = s.to_string();
    loop {
        let next = decode_entities(&strip_html(&current));
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_line_once(s: &str) -> String {
    let decoded = strip_markup(s).replace('\r', "");
    let t = decoded.trim();
    let t = LEADING_QUOTES.replace(t, "");
    let t = LEADING_BULLET.replace(&t, "");
    let t = LEADING_ORDINAL.replace(&t, "");
    let t = SPACE_BEFORE_NEWLINE.replace_all(&t, "\n");
    let t = SPACE_RUN.replace_all(&t, " ");
    let t = TRAILING_NOISE.replace(&t, "");
    t.trim().to_string()
}

/// Cleans a single line of pasted or OCR text.
///
/// Removes markup, quote markers (`>`, `›`), one bullet (`*`, `-`, `•`, en/em dash), an
/// ordinal marker such as `3)` or `12.`, run-on spaces, and trailing `>`/`:`/dash noise.
///
/// ```
/// use recite::normalize::clean_line;
///
/// assert_eq!(clean_line("> 1. What is <b>2+2</b>?  "), "What is 2+2?");
/// assert_eq!(clean_line("- Tom &amp; Jerry:"), "Tom & Jerry");
/// ```
pub fn clean_line(s: &str) -> String {
    let mut current = clean_line_once(s);
    loop {
        let next = clean_line_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Cleans a multi-line block: every line goes through [`clean_line`], runs of three or
/// more newlines collapse to a single blank line, and the result is trimmed.
pub fn clean_block(s: &str) -> String {
    let block = strip_markup(s).replace("\r\n", "\n");
    let joined = block.split('\n').map(clean_line).collect::<Vec<_>>().join("\n");
    BLANK_LINE_RUN
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

/// Lowercased, dash-separated ASCII identifier (`"Daily Routine!"` -> `"daily-routine"`).
pub fn slug(s: &str) -> String {
    let lowered = s.to_lowercase();
    NON_SLUG
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
