use super::Highlighter;
use colored::{Color, Colorize};

/// Level keyword, including its bounding spaces, paired with its color.
const LEVELS: [(&str, Color); 4] = [
    (" INFO ", Color::Green),
    (" DEBUG ", Color::BrightBlack),
    (" ERROR ", Color::Red),
    (" FATAL ", Color::BrightRed),
];

/// Highlights space-delimited uppercase log level keywords. The bounding
/// spaces are part of the styled span. The four substitutions are applied
/// independently; the keywords are mutually exclusive literals, so the
/// order does not affect the result.
pub struct LogLevelHighlighter;

impl LogLevelHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Highlighter for LogLevelHighlighter {
    fn highlight(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (token, color) in LEVELS {
            out = out.replace(token, &token.color(color).to_string());
        }
        out
    }

    fn name(&self) -> &'static str {
        "log_level"
    }
}
