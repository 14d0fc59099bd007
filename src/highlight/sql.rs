use super::{inside_styled_span, Highlighter, PathDetector};
use colored::Colorize;
use regex::{Captures, Regex};

/// Statements longer than this are very unlikely to be SQL worth
/// tokenizing (dumped blobs, minified payloads).
const MAX_SQL_LEN: usize = 2048;

/// Reserved words styled by the keyword pass.
const KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "FROM", "WHERE", "JOIN",
    "INNER", "LEFT", "RIGHT", "OUTER", "ON", "AND", "OR", "NOT", "NULL", "AS", "DISTINCT",
    "GROUP", "BY", "HAVING", "ORDER", "ASC", "DESC", "DECLARE", "EXECUTE", "EXEC", "CREATE",
    "ALTER", "DROP", "TRUNCATE", "MERGE", "WITH", "COUNT", "LIKE", "IN", "BETWEEN", "CASE",
    "WHEN", "THEN", "ELSE", "END", "UNION", "ALL", "TOP",
];

/// A line has to open with one of these to be treated as a statement.
const STATEMENT_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "EXECUTE", "EXEC", "DECLARE", "SET", "CREATE",
    "ALTER", "DROP", "TRUNCATE", "MERGE", "WITH",
];

/// Statement-aware heuristic highlighter for SQL-like text. Tokenizes
/// EXEC-style invocations, keywords, string literals, and comments; on
/// anything that does not look like SQL the input comes back unchanged.
///
/// The "don't re-color already-colored spans" checks scan for escape
/// sequences emitted by earlier passes. That is an approximation, not a
/// guarantee: collisions at the margins are accepted.
pub struct SqlHighlighter {
    statement_re: Regex,
    exec_re: Regex,
    param_re: Regex,
    keyword_re: Regex,
    literal_re: Regex,
    line_comment_re: Regex,
    block_comment_re: Regex,
    path: PathDetector,
}

impl SqlHighlighter {
    pub fn new() -> Self {
        // Longer alternatives first so EXECUTE is not eaten by EXEC.
        let mut keywords = KEYWORDS.to_vec();
        keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));
        let mut statements = STATEMENT_KEYWORDS.to_vec();
        statements.sort_by_key(|k| std::cmp::Reverse(k.len()));

        Self {
            statement_re: Regex::new(&format!(r"(?i)^(?:{})\b", statements.join("|"))).unwrap(),
            exec_re: Regex::new(r"(?i)\b(EXEC|EXECUTE)(\s+)([A-Za-z_\[\]][A-Za-z0-9_.\[\]$]*)")
                .unwrap(),
            param_re: Regex::new(r"(@[A-Za-z0-9_]+)(\s*=\s*)('[^']*'|[^\s,;]+)").unwrap(),
            keyword_re: Regex::new(&format!(r"(?i)\b({})\b", keywords.join("|"))).unwrap(),
            literal_re: Regex::new(r"'[^']*'").unwrap(),
            line_comment_re: Regex::new(r"--.*$").unwrap(),
            block_comment_re: Regex::new(r"/\*.*?\*/").unwrap(),
            path: PathDetector::new(),
        }
    }

    fn looks_like_sql(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_SQL_LEN {
            return false;
        }
        if self.path.is_path(trimmed) {
            return false;
        }
        self.statement_re.is_match(trimmed)
    }
}

impl Highlighter for SqlHighlighter {
    fn highlight(&self, text: &str) -> String {
        if !self.looks_like_sql(text) {
            return text.to_string();
        }

        // (a) stored procedure names in EXEC-style invocations
        let mut out = self
            .exec_re
            .replace_all(text, |caps: &Captures| {
                format!("{}{}{}", &caps[1], &caps[2], caps[3].magenta())
            })
            .into_owned();

        // (b) parameter names and their literal arguments. Values that
        // look like embedded XML or JSON stay plain; the payload stages
        // downstream pick those up.
        out = self
            .param_re
            .replace_all(&out, |caps: &Captures| {
                let value = &caps[3];
                let styled_value = if looks_like_markup(value) {
                    value.to_string()
                } else {
                    value.green().to_string()
                };
                format!("{}{}{}", caps[1].yellow(), &caps[2], styled_value)
            })
            .into_owned();

        // (c) keywords, skipping candidates inside spans styled by (a)/(b)
        let snapshot = out.clone();
        out = self
            .keyword_re
            .replace_all(&snapshot, |caps: &Captures| {
                let m = caps.get(0).unwrap();
                if inside_styled_span(&snapshot, m.start()) {
                    m.as_str().to_string()
                } else {
                    m.as_str().blue().bold().to_string()
                }
            })
            .into_owned();

        // (d) remaining quoted literals
        let snapshot = out.clone();
        out = self
            .literal_re
            .replace_all(&snapshot, |caps: &Captures| {
                let m = caps.get(0).unwrap();
                if inside_styled_span(&snapshot, m.start())
                    || m.as_str().contains('\u{1b}')
                    || looks_like_markup(m.as_str())
                {
                    m.as_str().to_string()
                } else {
                    m.as_str().green().to_string()
                }
            })
            .into_owned();

        // (e) comments
        let snapshot = out.clone();
        out = self
            .line_comment_re
            .replace_all(&snapshot, |caps: &Captures| {
                let m = caps.get(0).unwrap();
                if inside_styled_span(&snapshot, m.start()) {
                    m.as_str().to_string()
                } else {
                    m.as_str().bright_black().to_string()
                }
            })
            .into_owned();
        let snapshot = out.clone();
        out = self
            .block_comment_re
            .replace_all(&snapshot, |caps: &Captures| {
                let m = caps.get(0).unwrap();
                if inside_styled_span(&snapshot, m.start()) {
                    m.as_str().to_string()
                } else {
                    m.as_str().bright_black().to_string()
                }
            })
            .into_owned();

        out
    }

    fn name(&self) -> &'static str {
        "sql"
    }
}

/// A quoted argument value counts as markup when it carries both halves
/// of an XML tag or a JSON object.
fn looks_like_markup(value: &str) -> bool {
    let inner = value.trim_matches('\'');
    (inner.contains('<') && inner.contains('>')) || (inner.contains('{') && inner.contains('}'))
}
