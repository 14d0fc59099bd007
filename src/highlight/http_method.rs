use super::Highlighter;
use colored::Colorize;
use regex::{Captures, Regex};

/// Highlights HTTP verbs that sit between single literal spaces. The
/// replacement keeps one space on each side and wraps only the verb in
/// underline + bold, so punctuation-adjacent occurrences (`.GET.`,
/// `(POST)`) and verbs embedded in longer words (`GETTING`) never match.
pub struct HttpMethodHighlighter {
    re: Regex,
}

impl HttpMethodHighlighter {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r" (GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS) ").unwrap(),
        }
    }
}

impl Highlighter for HttpMethodHighlighter {
    fn highlight(&self, text: &str) -> String {
        self.re
            .replace_all(text, |caps: &Captures| {
                format!(" {} ", caps[1].underline().bold())
            })
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "http_method"
    }
}
