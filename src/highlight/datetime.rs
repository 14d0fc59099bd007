use super::Highlighter;
use colored::Colorize;
use regex::{Captures, Regex};

/// Highlights timestamps of the shape `YYYY-MM-DD HH:MM:SS,mmm` in
/// yellow. Purely syntactic: there is no calendar validation, so a
/// month of 13 still matches.
pub struct DateTimeHighlighter {
    re: Regex,
}

impl DateTimeHighlighter {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"(?i)\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}").unwrap(),
        }
    }
}

impl Highlighter for DateTimeHighlighter {
    fn highlight(&self, text: &str) -> String {
        self.re
            .replace_all(text, |caps: &Captures| caps[0].yellow().to_string())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "datetime"
    }
}
