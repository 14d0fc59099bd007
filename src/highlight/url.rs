use super::Highlighter;
use colored::Colorize;
use regex::{Captures, Regex};

/// Highlights `/api/...` request paths and their query strings. The path
/// and `?` are cyan; each `key=value` parameter renders the key yellow,
/// the `=` cyan, and a non-empty value green, with parameters rejoined by
/// a cyan `&`. A query that does not decompose into `key=value` pairs
/// (bare flags, trailing `&`) stays plain after the styled `?` — an
/// accepted limitation of the heuristic.
pub struct UrlHighlighter {
    re: Regex,
    param: Regex,
}

impl UrlHighlighter {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"(/api/[A-Za-z0-9/_-]+)(?:\?([^\s.,!?;:]*))?").unwrap(),
            param: Regex::new(r"^([^=&\s]+)=([^&\s]*)$").unwrap(),
        }
    }

    /// Renders an already-extracted query string. Returns the query
    /// verbatim when any segment fails the `key=value` shape.
    fn render_query(&self, query: &str) -> String {
        if query.is_empty() {
            return String::new();
        }

        let mut rendered = Vec::new();
        for pair in query.split('&') {
            match self.param.captures(pair) {
                Some(caps) => {
                    let mut part = format!("{}{}", caps[1].yellow(), "=".cyan());
                    if !caps[2].is_empty() {
                        part.push_str(&caps[2].green().to_string());
                    }
                    rendered.push(part);
                }
                None => return query.to_string(),
            }
        }
        rendered.join(&"&".cyan().to_string())
    }
}

impl Highlighter for UrlHighlighter {
    fn highlight(&self, text: &str) -> String {
        self.re
            .replace_all(text, |caps: &Captures| {
                let mut out = caps[1].cyan().to_string();
                if let Some(query) = caps.get(2) {
                    out.push_str(&"?".cyan().to_string());
                    out.push_str(&self.render_query(query.as_str()));
                }
                out
            })
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "url"
    }
}
