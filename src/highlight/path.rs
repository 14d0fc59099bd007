use once_cell::sync::Lazy;
use regex::Regex;

static DRIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]:[\\/]").unwrap());
static UNC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\\\[^\\/\s]+\\[^\\/\s]+").unwrap());

/// Detects absolute filesystem paths: Windows drive-absolute paths,
/// Windows UNC paths with both a server and a share component, and
/// Unix absolute paths. Relative paths and bare filenames do not count.
pub struct PathDetector;

impl PathDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn is_path(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        // Windows drive-absolute, e.g. C:\Users\name or D:/folder
        if DRIVE_RE.is_match(trimmed) {
            return true;
        }

        // Windows UNC, e.g. \\server\share\folder. The share component
        // must be terminated by a separator or the end of the string,
        // never by whitespace.
        if let Some(m) = UNC_RE.find(trimmed) {
            return match trimmed[m.end()..].chars().next() {
                None => true,
                Some(c) => c == '\\' || c == '/',
            };
        }

        // Unix absolute. A second leading '/' would be a UNC in disguise,
        // but the one-character root "/" is fine.
        if trimmed.starts_with('/') {
            return trimmed.len() == 1 || !trimmed[1..].starts_with('/');
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_drive_paths() {
        let detector = PathDetector::new();
        assert!(detector.is_path("C:\\Users\\name"));
        assert!(detector.is_path("D:/folder/file.txt"));
        assert!(detector.is_path("c:\\lowercase"));
        assert!(detector.is_path("C:/"));
        assert!(!detector.is_path("C:no-separator"));
        assert!(!detector.is_path("CD:\\two-letters"));
    }

    #[test]
    fn test_unc_paths() {
        let detector = PathDetector::new();
        assert!(detector.is_path("\\\\server\\share"));
        assert!(detector.is_path("\\\\server\\share\\folder\\file.txt"));
        assert!(detector.is_path("\\\\localhost\\c$"));
        assert!(!detector.is_path("\\\\server"));
        assert!(!detector.is_path("\\\\server\\"));
        assert!(!detector.is_path("\\\\server\\share name with spaces"));
        assert!(!detector.is_path("\\\\ \\share"));
    }

    #[test]
    fn test_unix_paths() {
        let detector = PathDetector::new();
        assert!(detector.is_path("/"));
        assert!(detector.is_path("/home/user"));
        assert!(detector.is_path("/var/log/sys.log"));
        assert!(!detector.is_path("//server/share"));
    }

    #[test]
    fn test_non_paths() {
        let detector = PathDetector::new();
        assert!(!detector.is_path("relative/path"));
        assert!(!detector.is_path("file.txt"));
        assert!(!detector.is_path(""));
        assert!(!detector.is_path("   "));
        assert!(!detector.is_path("just some words"));
    }

    #[test]
    fn test_trims_whitespace() {
        let detector = PathDetector::new();
        assert!(detector.is_path("  /var/log  "));
        assert!(detector.is_path("\tC:\\Windows\t"));
    }
}
