//! Line highlighting pipeline
//!
//! A set of independent pattern-based highlighters composed in a fixed
//! order over each line of output. Every transform is pure and total:
//! when nothing matches, the input comes back unchanged. Later stages see
//! the escape sequences emitted by earlier stages as ordinary characters,
//! so re-running a greedy stage over already-styled text may re-wrap it.

pub mod datetime;
pub mod http_method;
pub mod json;
pub mod log_level;
pub mod path;
pub mod sql;
pub mod url;
pub mod uuid;
pub mod xml;

pub use datetime::DateTimeHighlighter;
pub use http_method::HttpMethodHighlighter;
pub use json::JsonHighlighter;
pub use log_level::LogLevelHighlighter;
pub use path::PathDetector;
pub use sql::SqlHighlighter;
pub use url::UrlHighlighter;
pub use uuid::UuidDetector;
pub use xml::XmlHighlighter;

use colored::Colorize;

pub trait Highlighter {
    /// Rewrites matching substrings of `text` with a style marker.
    /// Returns the input unchanged when nothing matches.
    fn highlight(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Best-effort check whether byte offset `pos` sits inside an open style
/// span: the nearest escape introducer before `pos` is something other
/// than a reset. Approximate by design.
pub(crate) fn inside_styled_span(text: &str, pos: usize) -> bool {
    let head = &text[..pos];
    match head.rfind('\u{1b}') {
        Some(idx) => !head[idx..].starts_with("\u{1b}[0m"),
        None => false,
    }
}

/// Applies the highlighters to each line in a fixed order:
/// whole-line path/UUID checks, the optional SQL stage, then
/// URL, XML, JSON, timestamp, log level, and HTTP method.
pub struct HighlightPipeline {
    path: PathDetector,
    uuid: UuidDetector,
    sql: Option<SqlHighlighter>,
    url: UrlHighlighter,
    xml: XmlHighlighter,
    json: JsonHighlighter,
    datetime: DateTimeHighlighter,
    log_level: LogLevelHighlighter,
    http_method: HttpMethodHighlighter,
}

impl HighlightPipeline {
    pub fn new() -> Self {
        Self::with_sql(false)
    }

    pub fn with_sql(enable_sql: bool) -> Self {
        Self {
            path: PathDetector::new(),
            uuid: UuidDetector::new(),
            sql: if enable_sql {
                Some(SqlHighlighter::new())
            } else {
                None
            },
            url: UrlHighlighter::new(),
            xml: XmlHighlighter::new(),
            json: JsonHighlighter::new(),
            datetime: DateTimeHighlighter::new(),
            log_level: LogLevelHighlighter::new(),
            http_method: HttpMethodHighlighter::new(),
        }
    }

    /// Highlights one complete line. Exactly one output line is produced
    /// per input line, of equal or greater length.
    pub fn highlight_line(&self, line: &str) -> String {
        // Whole-line checks run ahead of the substring stages.
        if self.path.is_path(line) {
            return line.magenta().to_string();
        }
        if self.uuid.is_uuid(line) {
            return line.bright_magenta().to_string();
        }

        let mut text = line.to_string();

        if let Some(ref sql) = self.sql {
            let replaced = sql.highlight(&text);
            if replaced != text {
                // The SQL stage claimed the statement. Only the payload
                // stages still run, picking up the embedded XML/JSON
                // arguments the SQL stage deliberately left alone.
                text = self.xml.highlight(&replaced);
                text = self.json.highlight(&text);
                return text;
            }
        }

        let stages: [&dyn Highlighter; 6] = [
            &self.url,
            &self.xml,
            &self.json,
            &self.datetime,
            &self.log_level,
            &self.http_method,
        ];
        for stage in stages {
            text = stage.highlight(&text);
        }
        text
    }
}

impl Default for HighlightPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_passes_through() {
        let pipeline = HighlightPipeline::new();
        let line = "nothing interesting happens on this line";
        assert_eq!(pipeline.highlight_line(line), line);
    }

    #[test]
    fn test_whole_line_path_styled() {
        colored::control::set_override(true);
        let pipeline = HighlightPipeline::new();
        let line = "/var/log/syslog";
        assert_eq!(pipeline.highlight_line(line), line.magenta().to_string());
    }

    #[test]
    fn test_whole_line_uuid_styled() {
        colored::control::set_override(true);
        let pipeline = HighlightPipeline::new();
        let line = "abcdef01-2345-6789-abcd-ef0123456789";
        assert_eq!(
            pipeline.highlight_line(line),
            line.bright_magenta().to_string()
        );
    }

    #[test]
    fn test_path_check_wins_over_url_stage() {
        colored::control::set_override(true);
        let pipeline = HighlightPipeline::new();
        // A line that is exactly an /api/ path is an absolute path first.
        assert_eq!(
            pipeline.highlight_line("/api/users"),
            "/api/users".magenta().to_string()
        );
    }

    #[test]
    fn test_log_level_through_pipeline() {
        colored::control::set_override(true);
        let pipeline = HighlightPipeline::new();
        let expected = format!("An{}occurred.", " ERROR ".red());
        assert_eq!(pipeline.highlight_line("An ERROR occurred."), expected);
    }

    #[test]
    fn test_json_merge_through_pipeline() {
        colored::control::set_override(true);
        let pipeline = HighlightPipeline::new();
        let expected = format!("Obj1: {}", r#"{"a": 1} Obj2: {"b": 2}"#.blue());
        assert_eq!(
            pipeline.highlight_line(r#"Obj1: {"a": 1} Obj2: {"b": 2}"#),
            expected
        );
    }

    #[test]
    fn test_sql_stage_off_by_default() {
        let pipeline = HighlightPipeline::new();
        let line = "SELECT nothing FROM nowhere;";
        // Without the SQL stage the generic stages find nothing here.
        assert_eq!(pipeline.highlight_line(line), line);
    }

    #[test]
    fn test_sql_stage_claims_statement() {
        colored::control::set_override(true);
        let pipeline = HighlightPipeline::with_sql(true);
        let line = "DELETE FROM users;";
        let out = pipeline.highlight_line(line);
        assert_ne!(out, line);
        assert!(out.contains("users;"));
    }

    #[test]
    fn test_inside_styled_span() {
        let text = "a \u{1b}[31mred\u{1b}[0m b";
        let open = text.find("red").unwrap();
        let after = text.find(" b").unwrap();
        assert!(inside_styled_span(text, open));
        assert!(!inside_styled_span(text, after));
        assert!(!inside_styled_span("no escapes here", 5));
    }
}
