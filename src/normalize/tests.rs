use super::*;

const IDEMPOTENCE_FIXTURES: &[&str] = &[
    "",
    "   ",
    "plain text",
    "> 1. What is 2+2?\nAns: 4",
    "1. - nested markers",
    "- 1) - deeper nesting :",
    "&amp;lt;b&amp;gt;escaped twice&amp;lt;/b&amp;gt;",
    "&lt;i&gt;x&lt;/i&gt;",
    "a\r\n\r\n\r\n\r\n\r\nb",
    "   • bullet\t\twith   runs   \n\n\n>> quoted —",
    "Q: Question?\n\n\nA: Answer -- >",
    "12) first\n13) second\n\n\n\n14) third:",
    "trailing spaces   \n   leading spaces",
    "›› ›  curly quotes",
    "&AMP;nbsp;",
    "1.  \n2.  \n",
];

#[test]
fn test_decode_entities_all_supported() {
    assert_eq!(
        decode_entities("&nbsp;a&amp;b&lt;c&gt;&quot;d&#39;"),
        " a&b<c>\"d'"
    );
}

#[test]
fn test_decode_entities_case_insensitive_names() {
    assert_eq!(decode_entities("&AMP; &Lt; &GT; &QUOT; &NbSp;"), "& < > \"  ");
}

#[test]
fn test_decode_entities_runs_in_order() {
    assert_eq!(decode_entities("&amp;lt;"), "<");
}

#[test]
fn test_decode_entities_leaves_unknown() {
    assert_eq!(decode_entities("&copy; &#40;"), "&copy; &#40;");
}

#[test]
fn test_strip_html_removes_tags() {
    assert_eq!(strip_html("a <b>bold</b> c"), "a bold c");
    assert_eq!(strip_html("<p class=\"x\">para</p>"), "para");
}

#[test]
fn test_strip_html_does_not_cross_lines() {
    assert_eq!(strip_html("a <b\n> c"), "a <b\n> c");
}

#[test]
fn test_clean_line_strips_quote_markers() {
    assert_eq!(clean_line(">> › hello"), "hello");
}

#[test]
fn test_clean_line_strips_bullets() {
    assert_eq!(clean_line("• item"), "item");
    assert_eq!(clean_line("* item"), "item");
    assert_eq!(clean_line("— item"), "item");
    assert_eq!(clean_line("– item"), "item");
}

#[test]
fn test_clean_line_keeps_signed_numbers() {
    assert_eq!(clean_line("-5 degrees"), "-5 degrees");
}

#[test]
fn test_clean_line_strips_ordinals() {
    assert_eq!(clean_line("12) Answer here"), "Answer here");
    assert_eq!(clean_line("3. Third"), "Third");
    assert_eq!(clean_line("4: Fourth"), "Fourth");
    assert_eq!(clean_line("5 - Fifth"), "Fifth");
}

#[test]
fn test_clean_line_keeps_decimals() {
    assert_eq!(clean_line("3.14 is pi"), "3.14 is pi");
}

#[test]
fn test_clean_line_strips_trailing_noise() {
    assert_eq!(clean_line("Question :-- >"), "Question");
    assert_eq!(clean_line("Name —"), "Name");
}

#[test]
fn test_clean_line_keeps_question_mark() {
    assert_eq!(clean_line("What is 2+2?"), "What is 2+2?");
}

#[test]
fn test_clean_line_collapses_run_on_whitespace() {
    assert_eq!(clean_line("a    b\t\tc"), "a b c");
}

#[test]
fn test_clean_line_removes_carriage_returns() {
    assert_eq!(clean_line("hello\r"), "hello");
}

#[test]
fn test_clean_line_nested_markers_fully_removed() {
    assert_eq!(clean_line("1. - foo"), "foo");
}

#[test]
fn test_clean_line_escaped_markup_removed() {
    assert_eq!(clean_line("&lt;i&gt;x&lt;/i&gt;"), "x");
}

#[test]
fn test_clean_line_only_noise_becomes_empty() {
    assert_eq!(clean_line(" >> -- : "), "");
}

#[test]
fn test_clean_block_collapses_blank_lines() {
    assert_eq!(
        clean_block("Line one  \r\n\r\n\r\n\r\n- Line two:"),
        "Line one\n\nLine two"
    );
}

#[test]
fn test_clean_block_cleans_each_line() {
    assert_eq!(
        clean_block("1. What is <b>H2O</b>?\n  Ans: water  "),
        "What is H2O?\nAns: water"
    );
}

#[test]
fn test_clean_block_empty_input() {
    assert_eq!(clean_block(""), "");
    assert_eq!(clean_block("\n\n\n"), "");
}

#[test]
fn test_clean_block_is_idempotent() {
    for fixture in IDEMPOTENCE_FIXTURES {
        let once = clean_block(fixture);
        assert_eq!(clean_block(&once), once, "fixture: {:?}", fixture);
    }
}

#[test]
fn test_clean_line_is_idempotent() {
    for fixture in IDEMPOTENCE_FIXTURES {
        let once = clean_line(fixture);
        assert_eq!(clean_line(&once), once, "fixture: {:?}", fixture);
    }
}

#[test]
fn test_slug() {
    assert_eq!(slug("Daily Routine!"), "daily-routine");
    assert_eq!(slug("  --Hello__World--  "), "hello-world");
    assert_eq!(slug("***"), "");
}
