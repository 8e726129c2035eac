//! Document model and line classification
//!
//! A [`Document`] owns the lines of a compose file plus whether the original
//! text ended with a newline, so rendering round-trips untouched content
//! exactly.

use crate::error::{Result, TowerupError};

/// How a single line relates to the block structure of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only line
    Blank,
    /// Zero-indentation `name:` line opening a block
    TopLevelKey(String),
    /// Line indented under the preceding top-level key
    Indented,
    /// Zero-indentation line that is not a key (comments, directives)
    Plain,
}

/// Classify one line, failing when indentation cannot be compared.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn classify(line: &str, line_no: usize) -> Result<LineKind> {
    if line.trim().is_empty() {
        return Ok(LineKind::Blank);
    }

    let leading = &line[..line.len() - line.trim_start().len()];
    if leading.contains('\t') {
        return Err(TowerupError::MalformedDocument {
            line: line_no,
            content: line.to_string(),
        });
    }

    if !leading.is_empty() {
        return Ok(LineKind::Indented);
    }

    match top_level_key(line) {
        Some(key) => Ok(LineKind::TopLevelKey(key.to_string())),
        None => Ok(LineKind::Plain),
    }
}

/// Extract the key name from a `name:` line at zero indentation.
///
/// Keys start with an ASCII letter or `_`, continue with letters, digits,
/// `_` and `-`, and are immediately followed by a colon. Anything after the
/// colon (an inline value, a comment) does not affect classification.
fn top_level_key(line: &str) -> Option<&str> {
    let colon = line.find(':')?;
    let name = &line[..colon];
    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if first_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        Some(name)
    } else {
        None
    }
}

/// An in-memory compose document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Document {
    /// Build a document from raw file text.
    pub fn parse(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if trailing_newline {
            lines.pop();
        }
        if lines == [String::new()] {
            lines.clear();
        }
        Self {
            lines,
            trailing_newline,
        }
    }

    /// Build a document directly from owned lines.
    pub fn from_lines(lines: Vec<String>, trailing_newline: bool) -> Self {
        Self {
            lines,
            trailing_newline,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Render back to file text.
    pub fn to_text(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }

    /// All top-level keys, in document order.
    pub fn top_level_keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if let LineKind::TopLevelKey(key) = classify(line, idx + 1)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// Whether a top-level key with this exact name exists.
    pub fn contains_key(&self, name: &str) -> Result<bool> {
        Ok(self.top_level_keys()?.iter().any(|k| k == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_top_level_key() {
        assert_eq!(
            classify("watchtower:", 1).unwrap(),
            LineKind::TopLevelKey("watchtower".to_string())
        );
        assert_eq!(
            classify("version: \"3.8\"", 1).unwrap(),
            LineKind::TopLevelKey("version".to_string())
        );
        assert_eq!(
            classify("my-service:", 1).unwrap(),
            LineKind::TopLevelKey("my-service".to_string())
        );
        assert_eq!(
            classify("db_data:", 1).unwrap(),
            LineKind::TopLevelKey("db_data".to_string())
        );
        assert_eq!(
            classify("n8n:", 1).unwrap(),
            LineKind::TopLevelKey("n8n".to_string())
        );
    }

    #[test]
    fn test_classify_non_keys() {
        assert_eq!(classify("", 1).unwrap(), LineKind::Blank);
        assert_eq!(classify("   ", 1).unwrap(), LineKind::Blank);
        assert_eq!(classify("  image: n8n", 1).unwrap(), LineKind::Indented);
        assert_eq!(classify("# a comment", 1).unwrap(), LineKind::Plain);
        assert_eq!(classify("---", 1).unwrap(), LineKind::Plain);
        // Keys cannot start with a digit
        assert_eq!(classify("8080:", 1).unwrap(), LineKind::Plain);
    }

    #[test]
    fn test_classify_rejects_tab_indentation() {
        let err = classify("\timage: n8n", 7).unwrap_err();
        match err {
            TowerupError::MalformedDocument { line, .. } => assert_eq!(line, 7),
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_rejects_mixed_tab_space() {
        assert!(classify("  \t  ports:", 3).is_err());
    }

    #[test]
    fn test_parse_round_trip() {
        let text = "a:\n  x: 1\n\nb:\n  y: 2\n";
        let doc = Document::parse(text);
        assert_eq!(doc.lines().len(), 5);
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn test_parse_round_trip_no_trailing_newline() {
        let text = "a:\n  x: 1";
        let doc = Document::parse(text);
        assert!(!doc.trailing_newline());
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn test_parse_empty() {
        let doc = Document::parse("");
        assert!(doc.lines().is_empty());
        assert_eq!(doc.to_text(), "");
    }

    #[test]
    fn test_top_level_keys_in_order() {
        let doc = Document::parse("n8n:\n  image: n8n\nwatchtower:\n  image: wt\nvolumes:\n");
        assert_eq!(
            doc.top_level_keys().unwrap(),
            vec!["n8n", "watchtower", "volumes"]
        );
        assert!(doc.contains_key("watchtower").unwrap());
        assert!(!doc.contains_key("redis").unwrap());
    }
}
