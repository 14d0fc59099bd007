use super::Highlighter;
use colored::Colorize;
use regex::{Captures, Regex};

/// Highlights XML-like spans in cyan with a deliberately greedy match:
/// everything from the first `<` to the last `>` on the line becomes one
/// span. Tag names, nesting, and malformed tags are not tracked.
pub struct XmlHighlighter {
    re: Regex,
}

impl XmlHighlighter {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"(?i)<.*>").unwrap(),
        }
    }
}

impl Highlighter for XmlHighlighter {
    fn highlight(&self, text: &str) -> String {
        self.re
            .replace_all(text, |caps: &Captures| caps[0].cyan().to_string())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "xml"
    }
}
