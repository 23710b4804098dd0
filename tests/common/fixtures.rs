//! Test fixtures for integration tests.

use recite::extract::QaPair;

pub const SAMPLE_PAIRS: [(&str, &str); 3] = [
    ("What is the capital of France?", "Paris"),
    ("Who wrote Hamlet?", "William Shakespeare"),
    ("What gas do plants absorb?", "Carbon dioxide"),
];

pub const REFERENCE_SENTENCE: &str = "The mitochondria is the powerhouse of the cell";

/// How a fixture document marks its answers.
#[derive(Debug, Clone, Copy, Default)]
pub enum MarkerStyle {
    /// Question line, then `Ans: ...`.
    #[default]
    Ans,
    /// `Q: ...` line, then `A: ...`.
    QandA,
    /// `question? Answer: ...` on one line.
    SameLine,
}

#[derive(Default)]
pub struct QaDocumentBuilder {
    pairs: Vec<(String, String)>,
    style: MarkerStyle,
    numbered: bool,
    html: bool,
    blank_lines: bool,
}

impl QaDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample() -> Self {
        SAMPLE_PAIRS
            .iter()
            .fold(Self::new(), |builder, (q, a)| builder.pair(q, a))
    }

    pub fn pair(mut self, question: &str, answer: &str) -> Self {
        self.pairs.push((question.to_string(), answer.to_string()));
        self
    }

    pub fn style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Wraps every line in `<p>` tags.
    pub fn html(mut self) -> Self {
        self.html = true;
        self
    }

    pub fn blank_lines(mut self) -> Self {
        self.blank_lines = true;
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();

        for (i, (question, answer)) in self.pairs.iter().enumerate() {
            let question = if self.numbered {
                format!("{}. {}", i + 1, question)
            } else {
                question.clone()
            };

            match self.style {
                MarkerStyle::Ans => {
                    lines.push(question);
                    lines.push(format!("Ans: {}", answer));
                }
                MarkerStyle::QandA => {
                    lines.push(format!("Q: {}", question));
                    lines.push(format!("A: {}", answer));
                }
                MarkerStyle::SameLine => {
                    lines.push(format!("{} Answer: {}", question, answer));
                }
            }

            if self.blank_lines {
                lines.push(String::new());
            }
        }

        if self.html {
            lines = lines
                .into_iter()
                .map(|line| format!("<p>{}</p>", line))
                .collect();
        }

        lines.join("\n")
    }

    /// Pairs the extractor should return for [`Self::build`].
    pub fn expected_pairs(&self) -> Vec<QaPair> {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, (q, a))| QaPair::new(i + 1, q.as_str(), a.as_str()))
            .collect()
    }
}
