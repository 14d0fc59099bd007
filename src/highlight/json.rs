use super::Highlighter;
use colored::Colorize;
use regex::{Captures, Regex};

/// Highlights JSON-like spans in blue with a deliberately greedy match:
/// everything from the first `{` to the last `}` on the line becomes one
/// span, regardless of nesting or multiple independent objects. Not a
/// balanced-brace parser.
pub struct JsonHighlighter {
    re: Regex,
}

impl JsonHighlighter {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"(?i)\{.*\}").unwrap(),
        }
    }
}

impl Highlighter for JsonHighlighter {
    fn highlight(&self, text: &str) -> String {
        self.re
            .replace_all(text, |caps: &Captures| caps[0].blue().to_string())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
