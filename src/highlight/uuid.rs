use once_cell::sync::Lazy;
use regex::Regex;

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

/// Detects canonical UUIDs: exactly 36 characters in the grouped
/// hexadecimal 8-4-4-4-12 form, case-insensitive.
pub struct UuidDetector;

impl UuidDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn is_uuid(&self, text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.len() == 36 && UUID_RE.is_match(trimmed)
    }
}
